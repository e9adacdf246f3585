//! ContactMessage, the payload posted to the contact endpoint.

use crate::form::ValidContact;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// A validated contact message, stamped at submission time.
///
/// Serializes to exactly four string keys: `name`, `email`, `message` and
/// `timestamp`. Only a [`ValidContact`] can be turned into one.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,

    /// ISO-8601 UTC with millisecond precision, e.g. `2026-10-18T09:30:00.000Z`
    timestamp: String,
}

impl ContactMessage {
    /// Stamp a validated contact with the current time.
    pub fn new(contact: ValidContact) -> Self {
        Self::at(contact, Utc::now())
    }

    /// Stamp a validated contact with a given instant.
    pub fn at(contact: ValidContact, now: DateTime<Utc>) -> Self {
        Self {
            name: contact.name.into_inner(),
            email: contact.email.into_inner(),
            message: contact.message.into_inner(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{validate, FormInput};
    use chrono::TimeZone;

    fn valid() -> ValidContact {
        validate(&FormInput::new(" Ana ", "ana@example.com", "Hello ")).unwrap()
    }

    #[test]
    fn test_timestamp_format() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 5).unwrap();
        let message = ContactMessage::at(valid(), now);
        assert_eq!(message.timestamp(), "2026-10-18T09:30:05.000Z");
    }

    #[test]
    fn test_new_uses_current_time() {
        let before = Utc::now();
        let message = ContactMessage::new(valid());
        let stamped = DateTime::parse_from_rfc3339(message.timestamp()).unwrap();
        assert!(stamped.with_timezone(&Utc) >= before - chrono::Duration::milliseconds(1));
        assert!(message.timestamp().ends_with('Z'));
    }

    #[test]
    fn test_serializes_exactly_four_keys() {
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let message = ContactMessage::at(valid(), now);
        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ana",
                "email": "ana@example.com",
                "message": "Hello",
                "timestamp": "2026-01-02T03:04:05.000Z",
            })
        );
        assert_eq!(value.as_object().unwrap().len(), 4);
    }
}
