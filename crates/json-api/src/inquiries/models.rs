//! Inquiry Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use forecourt::inquiries::{Inquiry, InquiryKind, NewInquiry};

use crate::contact::ContactBody;

/// Inquiry as submitted by the public contact, car and concierge forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InquiryRequest {
    #[serde(flatten)]
    pub contact: ContactBody,

    /// Car the inquiry is about
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_id: Option<String>,

    /// Car name; "Concierge Sourcing Request" marks a concierge request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<InquiryRequest> for NewInquiry {
    fn from(request: InquiryRequest) -> Self {
        NewInquiry {
            contact: request.contact.into(),
            car_id: request.car_id,
            car_name: request.car_name,
            message: request.message,
        }
    }
}

impl From<NewInquiry> for InquiryRequest {
    fn from(inquiry: NewInquiry) -> Self {
        InquiryRequest {
            contact: inquiry.contact.into(),
            car_id: inquiry.car_id,
            car_name: inquiry.car_name,
            message: inquiry.message,
        }
    }
}

/// A stored inquiry.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InquiryResponse {
    pub id: String,

    #[serde(flatten)]
    pub request: InquiryRequest,

    /// `car`, `general` or `concierge`
    pub kind: String,

    /// `pending`, `contacted`, `fulfilled` or `cancelled`
    pub status: String,

    pub created_at: String,
}

impl From<Inquiry> for InquiryResponse {
    fn from(inquiry: Inquiry) -> Self {
        let kind = match inquiry.kind() {
            InquiryKind::Car => "car",
            InquiryKind::General => "general",
            InquiryKind::Concierge => "concierge",
        };

        InquiryResponse {
            id: inquiry.id,
            kind: kind.to_string(),
            status: inquiry.status.to_string(),
            created_at: inquiry.created_at.to_string(),
            request: inquiry.request.into(),
        }
    }
}

/// New workflow status.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct InquiryStatusRequest {
    /// `pending`, `contacted`, `fulfilled` or `cancelled`
    pub status: String,
}
