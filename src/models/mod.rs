//! Data models sent over the wire.

pub mod contact_message;

pub use contact_message::ContactMessage;
