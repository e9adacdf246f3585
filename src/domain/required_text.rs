//! RequiredText value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text that is non-empty after trimming.
///
/// Used for the name and message fields. The stored value is the trimmed one.
///
/// # Example
///
/// ```
/// use contact_form_client::domain::RequiredText;
///
/// let name = RequiredText::new("  Ana ").unwrap();
/// assert_eq!(name.as_str(), "Ana");
/// assert!(RequiredText::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequiredText(String);

impl RequiredText {
    /// Trim the input and reject it if nothing is left.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Empty` for empty or whitespace-only input.
    pub fn new(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        let text = super::trim_input(text.as_ref());
        if text.is_empty() {
            return Err(ValidationError::Empty);
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for RequiredText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RequiredText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RequiredText::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for RequiredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
