//! Contact Fields

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use forecourt::contact::Contact;

/// Requester contact details, shared by inquiry and booking payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ContactBody {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl From<ContactBody> for Contact {
    fn from(body: ContactBody) -> Self {
        Contact {
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            phone: body.phone,
        }
    }
}

impl From<Contact> for ContactBody {
    fn from(contact: Contact) -> Self {
        ContactBody {
            first_name: contact.first_name,
            last_name: contact.last_name,
            email: contact.email,
            phone: contact.phone,
        }
    }
}
