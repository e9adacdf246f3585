//! The page-facing side of the contact form.
//!
//! A host (browser bridge, terminal, test double) implements [`FormFields`]
//! and [`Notifier`]; the handler only ever talks to these traits.

pub mod validation;

pub use validation::{validate, FormInput, ValidContact};

use std::fmt;

/// The three input fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Stable element identifier of the field.
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Access to the form's input fields.
pub trait FormFields: Send + Sync {
    /// Current raw (untrimmed) value of a field.
    fn value(&self, field: Field) -> String;

    /// Clear every field back to empty.
    fn reset(&self);
}

/// Blocking, synchronous user notification.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}
