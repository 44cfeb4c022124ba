//! Notification dispatcher.

use std::sync::Arc;

use async_trait::async_trait;
use forecourt::{bookings::NewBooking, inquiries::NewInquiry};
use jiff::Timestamp;
use mockall::automock;
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    notifications::{DeviceToken, DeviceTokenStore, Mailer, Notification, PushGateway},
    store::StoreError,
};

/// Result of one delivery channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Delivery {
    Sent,
    Skipped,
    Failed,
}

impl Delivery {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        }
    }
}

/// Per-channel outcome of a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    pub email: Delivery,
    pub push: Delivery,
}

/// Sends admin notifications over whichever channels are configured.
///
/// Every channel is attempted independently and failures are logged rather than
/// returned, so a dispatch always completes.
#[derive(Clone)]
pub struct NotificationDispatcher {
    mailer: Option<Arc<dyn Mailer>>,
    admin_email: Option<String>,
    push: Option<Arc<dyn PushGateway>>,
    tokens: DeviceTokenStore,
}

impl NotificationDispatcher {
    /// A dispatcher with no channels configured; only token registration works.
    #[must_use]
    pub fn new(tokens: DeviceTokenStore) -> Self {
        Self {
            mailer: None,
            admin_email: None,
            push: None,
            tokens,
        }
    }

    #[must_use]
    pub fn with_mailer(mut self, mailer: Arc<dyn Mailer>, admin_email: Option<String>) -> Self {
        self.mailer = Some(mailer);
        self.admin_email = admin_email.filter(|email| !email.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_push(mut self, push: Arc<dyn PushGateway>) -> Self {
        self.push = Some(push);
        self
    }

    async fn dispatch(&self, notification: &Notification) -> DispatchReport {
        let report = DispatchReport {
            email: self.send_email(notification).await,
            push: self.send_push(notification).await,
        };

        info!(
            subject = %notification.subject,
            email = ?report.email,
            push = ?report.push,
            "notification dispatched"
        );

        report
    }

    async fn send_email(&self, notification: &Notification) -> Delivery {
        let (Some(mailer), Some(to)) = (&self.mailer, &self.admin_email) else {
            return Delivery::Skipped;
        };

        match mailer.send(to, notification).await {
            Ok(()) => Delivery::Sent,
            Err(error) => {
                warn!(%error, "failed to send notification email");
                Delivery::Failed
            }
        }
    }

    async fn send_push(&self, notification: &Notification) -> Delivery {
        let Some(push) = &self.push else {
            return Delivery::Skipped;
        };

        let tokens: Vec<String> = match self.tokens.list_active(Timestamp::now()).await {
            Ok(devices) => devices.into_iter().map(|device| device.token).collect(),
            Err(error) => {
                warn!(%error, "failed to load device tokens");
                return Delivery::Failed;
            }
        };

        if tokens.is_empty() {
            return Delivery::Skipped;
        }

        let outcome = match push.send(&tokens, notification).await {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(%error, "failed to send push notification");
                return Delivery::Failed;
            }
        };

        for token in &outcome.stale {
            if let Err(error) = self.tokens.remove(token).await {
                warn!(%error, "failed to remove stale device token");
            }
        }

        if outcome.delivered > 0 {
            Delivery::Sent
        } else {
            Delivery::Failed
        }
    }
}

#[async_trait]
impl Notifier for NotificationDispatcher {
    async fn notify_inquiry(&self, inquiry: &NewInquiry) -> DispatchReport {
        self.dispatch(&Notification::for_inquiry(inquiry)).await
    }

    async fn notify_booking(&self, booking: &NewBooking) -> DispatchReport {
        self.dispatch(&Notification::for_booking(booking)).await
    }

    async fn broadcast(&self, notification: &Notification) -> DispatchReport {
        let report = DispatchReport {
            email: Delivery::Skipped,
            push: self.send_push(notification).await,
        };

        info!(subject = %notification.subject, push = ?report.push, "broadcast sent");

        report
    }

    async fn register_token(&self, token: &str) -> Result<DeviceToken, StoreError> {
        let device = self.tokens.register(token, Timestamp::now()).await?;

        info!("device token registered");

        Ok(device)
    }

    async fn list_tokens(&self) -> Result<Vec<DeviceToken>, StoreError> {
        self.tokens.list_active(Timestamp::now()).await
    }
}

#[automock]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Alert the admin about a submitted inquiry.
    async fn notify_inquiry(&self, inquiry: &NewInquiry) -> DispatchReport;

    /// Alert the admin about a submitted booking.
    async fn notify_booking(&self, booking: &NewBooking) -> DispatchReport;

    /// Push an arbitrary message to every registered device.
    async fn broadcast(&self, notification: &Notification) -> DispatchReport;

    /// Register a device for push notifications.
    async fn register_token(&self, token: &str) -> Result<DeviceToken, StoreError>;

    /// Devices currently registered.
    async fn list_tokens(&self) -> Result<Vec<DeviceToken>, StoreError>;
}

#[cfg(test)]
mod tests {
    use forecourt::contact::Contact;
    use testresult::TestResult;

    use crate::{
        notifications::{DEFAULT_TOKEN_TTL, MailerError, MockMailer, MockPushGateway, PushOutcome},
        store::MemoryDocumentStore,
    };

    use super::*;

    fn tokens() -> DeviceTokenStore {
        DeviceTokenStore::new(Arc::new(MemoryDocumentStore::new()), DEFAULT_TOKEN_TTL)
    }

    fn inquiry() -> NewInquiry {
        NewInquiry {
            contact: Contact {
                first_name: "Sam".to_string(),
                last_name: "Lee".to_string(),
                email: "sam@example.com".to_string(),
                phone: "1".to_string(),
            },
            ..NewInquiry::default()
        }
    }

    #[tokio::test]
    async fn unconfigured_channels_are_skipped() {
        let dispatcher = NotificationDispatcher::new(tokens());

        let report = dispatcher.notify_inquiry(&inquiry()).await;

        assert_eq!(
            report,
            DispatchReport {
                email: Delivery::Skipped,
                push: Delivery::Skipped,
            }
        );
    }

    #[tokio::test]
    async fn missing_admin_email_skips_mail() {
        let mut mailer = MockMailer::new();
        mailer.expect_send().never();

        let dispatcher =
            NotificationDispatcher::new(tokens()).with_mailer(Arc::new(mailer), Some(" ".to_string()));

        assert_eq!(dispatcher.notify_inquiry(&inquiry()).await.email, Delivery::Skipped);
    }

    #[tokio::test]
    async fn email_failure_does_not_stop_push() -> TestResult {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .once()
            .returning(|_, _| Err(MailerError::Address(lettre::address::AddressError::MissingParts)));

        let mut push = MockPushGateway::new();
        push.expect_send()
            .once()
            .withf(|tokens, _| tokens == ["device-1"])
            .returning(|_, _| {
                Ok(PushOutcome {
                    delivered: 1,
                    ..PushOutcome::default()
                })
            });

        let dispatcher = NotificationDispatcher::new(tokens())
            .with_mailer(Arc::new(mailer), Some("admin@example.com".to_string()))
            .with_push(Arc::new(push));

        dispatcher.register_token("device-1").await?;

        let report = dispatcher.notify_inquiry(&inquiry()).await;

        assert_eq!(report.email, Delivery::Failed);
        assert_eq!(report.push, Delivery::Sent);

        Ok(())
    }

    #[tokio::test]
    async fn stale_tokens_are_removed_after_push() -> TestResult {
        let mut push = MockPushGateway::new();
        push.expect_send().once().returning(|_, _| {
            Ok(PushOutcome {
                delivered: 1,
                failed: 1,
                stale: vec!["gone".to_string()],
            })
        });

        let dispatcher = NotificationDispatcher::new(tokens()).with_push(Arc::new(push));

        dispatcher.register_token("gone").await?;
        dispatcher.register_token("kept").await?;

        let report = dispatcher.broadcast(&Notification::new("Hello", "World")).await;
        let remaining: Vec<String> = dispatcher
            .list_tokens()
            .await?
            .into_iter()
            .map(|device| device.token)
            .collect();

        assert_eq!(report.push, Delivery::Sent);
        assert_eq!(remaining, vec!["kept".to_string()]);

        Ok(())
    }

    #[tokio::test]
    async fn mail_goes_to_the_admin_address() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|to, _| to == "admin@example.com")
            .once()
            .returning(|_, _| Ok(()));

        let dispatcher = NotificationDispatcher::new(tokens())
            .with_mailer(Arc::new(mailer), Some("admin@example.com".to_string()));

        assert_eq!(dispatcher.notify_inquiry(&inquiry()).await.email, Delivery::Sent);
    }
}
