use chrono::{DateTime, SecondsFormat, Utc};

/// Separator between the timestamp and the email in a stored line.
pub const LINE_SEPARATOR: &str = " - ";

/// # Registry Entry
///
/// One accepted submission. Its on-disk form is a single line:
///
/// ```text
/// 2024-05-01T12:30:45.123Z - user@example.com
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub email: String,
    pub registered_at: DateTime<Utc>,
}

impl Entry {
    /// Stamps `email` with the current time.
    pub fn new(email: impl Into<String>) -> Self {
        Self::at(email, Utc::now())
    }

    pub fn at(email: impl Into<String>, registered_at: DateTime<Utc>) -> Self {
        Self {
            email: email.into(),
            registered_at,
        }
    }

    /// Millisecond precision with a `Z` suffix.
    pub fn timestamp(&self) -> String {
        self.registered_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Line as appended to the registry, newline included.
    pub fn to_line(&self) -> String {
        format!("{}{}{}\n", self.timestamp(), LINE_SEPARATOR, self.email)
    }
}
