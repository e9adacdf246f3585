//! Domain value objects and types.
//!
//! Type-safe wrappers for the values a contact form carries. They validate at
//! construction time so an invalid name, email or message body cannot be
//! represented once it leaves the validation pass.

pub mod email;
pub mod errors;
pub mod required_text;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use required_text::RequiredText;

/// Trim form input the way browsers trim field values.
///
/// `str::trim` keeps U+FEFF, which browsers treat as whitespace.
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}
