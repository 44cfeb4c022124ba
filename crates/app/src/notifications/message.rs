//! Notification content.

use forecourt::{
    bookings::NewBooking,
    inquiries::{InquiryKind, NewInquiry},
};

/// A rendered notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Email subject and push title.
    pub subject: String,

    /// Plain-text body.
    pub body: String,
}

impl Notification {
    #[must_use]
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Alert for a submitted inquiry.
    #[must_use]
    pub fn for_inquiry(inquiry: &NewInquiry) -> Self {
        let name = inquiry.contact.full_name();

        let subject = match inquiry.kind() {
            InquiryKind::Car => format!(
                "New inquiry: {}",
                inquiry.car_name.as_deref().unwrap_or("car")
            ),
            InquiryKind::Concierge => format!("New concierge request from {name}"),
            InquiryKind::General => format!("New inquiry from {name}"),
        };

        let mut lines = vec![
            format!("Name: {name}"),
            format!("Email: {}", inquiry.contact.email),
            format!("Phone: {}", inquiry.contact.phone),
        ];

        if let Some(car) = &inquiry.car_name {
            lines.push(format!("Car: {car}"));
        }

        if let Some(message) = inquiry.message.as_deref().filter(|m| !m.trim().is_empty()) {
            lines.push(String::new());
            lines.push(message.to_string());
        }

        Self::new(subject, lines.join("\n"))
    }

    /// Alert for a submitted booking.
    #[must_use]
    pub fn for_booking(booking: &NewBooking) -> Self {
        let name = booking.contact.full_name();
        let time = booking.time.strftime("%H:%M");

        let mut lines = vec![
            format!("Name: {name}"),
            format!("Email: {}", booking.contact.email),
            format!("Phone: {}", booking.contact.phone),
            format!("Car: {}", booking.car_name),
            format!("When: {} at {time}", booking.date),
        ];

        if let Some(notes) = booking.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            lines.push(String::new());
            lines.push(notes.to_string());
        }

        Self::new(
            format!("New viewing booking: {} on {}", booking.car_name, booking.date),
            lines.join("\n"),
        )
    }

    /// The body as HTML: markup characters escaped, newlines as `<br>`.
    #[must_use]
    pub fn html_body(&self) -> String {
        let mut html = String::with_capacity(self.body.len());

        for ch in self.body.chars() {
            match ch {
                '&' => html.push_str("&amp;"),
                '<' => html.push_str("&lt;"),
                '>' => html.push_str("&gt;"),
                '"' => html.push_str("&quot;"),
                '\'' => html.push_str("&#39;"),
                '\n' => html.push_str("<br>"),
                '\r' => {}
                _ => html.push(ch),
            }
        }

        html
    }
}

#[cfg(test)]
mod tests {
    use forecourt::{contact::Contact, inquiries::CONCIERGE_CAR_NAME};
    use jiff::civil::{date, time};

    use super::*;

    fn contact() -> Contact {
        Contact {
            first_name: "Aiko".to_string(),
            last_name: "Mori".to_string(),
            email: "aiko@example.com".to_string(),
            phone: "07700 900123".to_string(),
        }
    }

    #[test]
    fn html_body_escapes_and_breaks_lines() {
        let notification = Notification::new("s", "<b>Hi</b> & \"you\"\r\nbye");

        assert_eq!(
            notification.html_body(),
            "&lt;b&gt;Hi&lt;/b&gt; &amp; &quot;you&quot;<br>bye"
        );
    }

    #[test]
    fn inquiry_subject_follows_kind() {
        let mut inquiry = NewInquiry {
            contact: contact(),
            car_id: Some("car-1".to_string()),
            car_name: Some("Honda NSX".to_string()),
            message: Some("Still available?".to_string()),
        };

        let car = Notification::for_inquiry(&inquiry);

        assert_eq!(car.subject, "New inquiry: Honda NSX");
        assert!(car.body.contains("Car: Honda NSX"));
        assert!(car.body.ends_with("\n\nStill available?"));

        inquiry.car_id = None;
        inquiry.car_name = Some(CONCIERGE_CAR_NAME.to_string());

        assert_eq!(
            Notification::for_inquiry(&inquiry).subject,
            "New concierge request from Aiko Mori"
        );

        inquiry.car_name = None;

        assert_eq!(
            Notification::for_inquiry(&inquiry).subject,
            "New inquiry from Aiko Mori"
        );
    }

    #[test]
    fn booking_mentions_date_and_time() {
        let booking = NewBooking {
            contact: contact(),
            car_id: "car-1".to_string(),
            car_name: "Toyota Supra".to_string(),
            date: date(2026, 11, 14),
            time: time(9, 30, 0, 0),
            notes: None,
        };

        let notification = Notification::for_booking(&booking);

        assert_eq!(
            notification.subject,
            "New viewing booking: Toyota Supra on 2026-11-14"
        );
        assert!(notification.body.contains("When: 2026-11-14 at 09:30"));
    }
}
