//! Inquiries service.

use std::{cmp::Reverse, sync::Arc};

use async_trait::async_trait;
use forecourt::inquiries::{Inquiry, InquiryStatus, NewInquiry};
use jiff::Timestamp;
use mockall::automock;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::{
    domain::{inquiries::errors::InquiriesServiceError, records::RecordRepository},
    store::{Collection, DocumentStore, soft_read},
};

#[derive(Clone)]
pub struct StoreInquiriesService {
    records: RecordRepository<Inquiry>,
}

impl StoreInquiriesService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            records: RecordRepository::new(store, Collection::Inquiries),
        }
    }
}

#[async_trait]
impl InquiriesService for StoreInquiriesService {
    async fn create_inquiry(&self, inquiry: NewInquiry) -> Result<Inquiry, InquiriesServiceError> {
        inquiry.validate()?;

        let inquiry = Inquiry::new(Uuid::now_v7().to_string(), inquiry, Timestamp::now());

        self.records.insert(&inquiry.id, &inquiry).await?;

        info!(inquiry.id = %inquiry.id, kind = ?inquiry.kind(), "inquiry created");

        Ok(inquiry)
    }

    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, InquiriesServiceError> {
        let mut inquiries = soft_read(self.records.list().await, self.records.collection())?;

        inquiries.sort_by_key(|inquiry| Reverse(inquiry.created_at));

        Ok(inquiries)
    }

    async fn get_inquiry(&self, id: &str) -> Result<Inquiry, InquiriesServiceError> {
        soft_read(self.records.find(id).await, self.records.collection())?
            .map(|(_, inquiry)| inquiry)
            .ok_or(InquiriesServiceError::NotFound)
    }

    async fn update_inquiry_status(
        &self,
        id: &str,
        status: InquiryStatus,
    ) -> Result<Inquiry, InquiriesServiceError> {
        let (key, _) = self
            .records
            .find(id)
            .await?
            .ok_or(InquiriesServiceError::NotFound)?;

        let inquiry = self.records.merge(&key, json!({ "status": status })).await?;

        info!(inquiry.id = %id, %status, "inquiry status updated");

        Ok(inquiry)
    }

    async fn delete_inquiry(&self, id: &str) -> Result<(), InquiriesServiceError> {
        if !self.records.delete(id).await? {
            return Err(InquiriesServiceError::NotFound);
        }

        info!(inquiry.id = %id, "inquiry deleted");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait InquiriesService: Send + Sync {
    /// Validates and stores a new pending inquiry.
    async fn create_inquiry(&self, inquiry: NewInquiry) -> Result<Inquiry, InquiriesServiceError>;

    /// Every inquiry, newest first. Empty when the store is offline.
    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, InquiriesServiceError>;

    /// A single inquiry by id.
    async fn get_inquiry(&self, id: &str) -> Result<Inquiry, InquiriesServiceError>;

    /// Sets an inquiry's status; any status may follow any other.
    async fn update_inquiry_status(
        &self,
        id: &str,
        status: InquiryStatus,
    ) -> Result<Inquiry, InquiriesServiceError>;

    /// Permanently removes an inquiry.
    async fn delete_inquiry(&self, id: &str) -> Result<(), InquiriesServiceError>;
}

#[cfg(test)]
mod tests {
    use forecourt::contact::Contact;
    use serde_json::json;
    use testresult::TestResult;

    use crate::store::{MemoryDocumentStore, MockDocumentStore, StoreError};

    use super::*;

    fn new_inquiry(first_name: &str) -> NewInquiry {
        NewInquiry {
            contact: Contact {
                first_name: first_name.to_string(),
                last_name: "Tanaka".to_string(),
                email: "buyer@example.com".to_string(),
                phone: "+44 7700 900456".to_string(),
            },
            car_id: Some("car-1".to_string()),
            car_name: Some("Toyota Supra".to_string()),
            message: Some("Is it still available?".to_string()),
        }
    }

    fn service() -> (Arc<MemoryDocumentStore>, StoreInquiriesService) {
        let store = Arc::new(MemoryDocumentStore::new());

        (store.clone(), StoreInquiriesService::new(store))
    }

    #[tokio::test]
    async fn create_inquiry_is_pending() -> TestResult {
        let (_, service) = service();

        let inquiry = service.create_inquiry(new_inquiry("Ken")).await?;

        assert_eq!(inquiry.status, InquiryStatus::Pending);
        assert_eq!(service.get_inquiry(&inquiry.id).await?, inquiry);

        Ok(())
    }

    #[tokio::test]
    async fn create_inquiry_validates_contact_fields() {
        let (_, service) = service();

        let result = service.create_inquiry(NewInquiry::default()).await;

        assert!(matches!(result, Err(InquiriesServiceError::Invalid(errors)) if errors.fields().len() == 4));
    }

    #[tokio::test]
    async fn list_inquiries_is_newest_first() -> TestResult {
        let (store, service) = service();

        for (id, created_at) in [
            ("old", "2026-01-01T09:00:00Z"),
            ("new", "2026-03-01T09:00:00Z"),
            ("mid", "2026-02-01T09:00:00Z"),
        ] {
            store
                .set(
                    Collection::Inquiries,
                    id,
                    json!({
                        "id": id,
                        "firstName": "Ken",
                        "lastName": "Tanaka",
                        "email": "ken@example.com",
                        "phone": "1",
                        "status": "pending",
                        "createdAt": created_at,
                    }),
                )
                .await?;
        }

        let ids: Vec<String> = service
            .list_inquiries()
            .await?
            .into_iter()
            .map(|inquiry| inquiry.id)
            .collect();

        assert_eq!(ids, vec!["new", "mid", "old"]);

        Ok(())
    }

    #[tokio::test]
    async fn status_transitions_are_unrestricted() -> TestResult {
        let (_, service) = service();

        let inquiry = service.create_inquiry(new_inquiry("Ken")).await?;

        for status in [
            InquiryStatus::Cancelled,
            InquiryStatus::Pending,
            InquiryStatus::Fulfilled,
            InquiryStatus::Contacted,
        ] {
            let updated = service.update_inquiry_status(&inquiry.id, status).await?;

            assert_eq!(updated.status, status);
            assert_eq!(updated.request, inquiry.request);
        }

        Ok(())
    }

    #[tokio::test]
    async fn delete_inquiry_has_no_key_fallback() -> TestResult {
        let (store, service) = service();

        store
            .set(
                Collection::Inquiries,
                "doc-key",
                json!({ "id": "logical", "createdAt": "2026-01-01T00:00:00Z" }),
            )
            .await?;

        assert!(matches!(
            service.delete_inquiry("doc-key").await,
            Err(InquiriesServiceError::NotFound)
        ));

        service.delete_inquiry("logical").await?;

        assert!(store.list(Collection::Inquiries).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn list_is_empty_and_create_is_offline_when_store_unreachable() -> TestResult {
        let mut store = MockDocumentStore::new();

        store
            .expect_list()
            .once()
            .returning(|_| Err(StoreError::Unavailable(sqlx::Error::PoolClosed)));
        store
            .expect_insert()
            .once()
            .returning(|_, _, _| Err(StoreError::Unavailable(sqlx::Error::PoolClosed)));

        let service = StoreInquiriesService::new(Arc::new(store));

        assert!(service.list_inquiries().await?.is_empty());
        assert!(matches!(
            service.create_inquiry(new_inquiry("Ken")).await,
            Err(InquiriesServiceError::Offline)
        ));

        Ok(())
    }
}
