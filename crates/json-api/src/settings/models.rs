//! Settings Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use forecourt::settings::{
    ContactInfo, ContactInfoPatch, Hero, HeroPatch, SettingsPatch, Stat, Testimonial,
    WebsiteSettings,
};

/// Site-wide content shown on the public pages.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SettingsResponse {
    pub hero: HeroBody,
    pub stats: Vec<StatBody>,
    pub testimonials: Vec<TestimonialBody>,
    pub contact: ContactInfoBody,

    /// Markdown
    pub terms_and_conditions: String,

    pub maintenance_mode: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HeroBody {
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct StatBody {
    /// e.g. "250+"
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct TestimonialBody {
    pub name: String,
    pub location: String,
    pub quote: String,

    /// 1 to 5
    pub rating: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContactInfoBody {
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub address: String,
    pub opening_hours: String,
}

impl From<WebsiteSettings> for SettingsResponse {
    fn from(settings: WebsiteSettings) -> Self {
        let Hero {
            title,
            subtitle,
            cta_label,
            image,
        } = settings.hero;

        let ContactInfo {
            email,
            phone,
            whatsapp,
            address,
            opening_hours,
        } = settings.contact;

        SettingsResponse {
            hero: HeroBody {
                title,
                subtitle,
                cta_label,
                image,
            },
            stats: settings.stats.into_iter().map(Into::into).collect(),
            testimonials: settings.testimonials.into_iter().map(Into::into).collect(),
            contact: ContactInfoBody {
                email,
                phone,
                whatsapp,
                address,
                opening_hours,
            },
            terms_and_conditions: settings.terms_and_conditions,
            maintenance_mode: settings.maintenance_mode,
        }
    }
}

impl From<Stat> for StatBody {
    fn from(stat: Stat) -> Self {
        StatBody {
            value: stat.value,
            label: stat.label,
        }
    }
}

impl From<StatBody> for Stat {
    fn from(body: StatBody) -> Self {
        Stat {
            value: body.value,
            label: body.label,
        }
    }
}

impl From<Testimonial> for TestimonialBody {
    fn from(testimonial: Testimonial) -> Self {
        TestimonialBody {
            name: testimonial.name,
            location: testimonial.location,
            quote: testimonial.quote,
            rating: testimonial.rating,
        }
    }
}

impl From<TestimonialBody> for Testimonial {
    fn from(body: TestimonialBody) -> Self {
        Testimonial {
            name: body.name,
            location: body.location,
            quote: body.quote,
            rating: body.rating,
        }
    }
}

/// Partial settings update. Omitted fields keep their stored values; lists are replaced
/// wholesale.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct SettingsPatchRequest {
    pub hero: Option<HeroPatchBody>,
    pub stats: Option<Vec<StatBody>>,
    pub testimonials: Option<Vec<TestimonialBody>>,
    pub contact: Option<ContactInfoPatchBody>,
    pub terms_and_conditions: Option<String>,
    pub maintenance_mode: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct HeroPatchBody {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cta_label: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ContactInfoPatchBody {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub address: Option<String>,
    pub opening_hours: Option<String>,
}

impl From<SettingsPatchRequest> for SettingsPatch {
    fn from(request: SettingsPatchRequest) -> Self {
        SettingsPatch {
            hero: request.hero.map(|hero| HeroPatch {
                title: hero.title,
                subtitle: hero.subtitle,
                cta_label: hero.cta_label,
                image: hero.image,
            }),
            stats: request
                .stats
                .map(|stats| stats.into_iter().map(Into::into).collect()),
            testimonials: request
                .testimonials
                .map(|testimonials| testimonials.into_iter().map(Into::into).collect()),
            contact: request.contact.map(|contact| ContactInfoPatch {
                email: contact.email,
                phone: contact.phone,
                whatsapp: contact.whatsapp,
                address: contact.address,
                opening_hours: contact.opening_hours,
            }),
            terms_and_conditions: request.terms_and_conditions,
            maintenance_mode: request.maintenance_mode,
        }
    }
}
