//! Terminal host for the contact form.
//!
//! Implements the page-facing traits on top of stdin/stdout so the handler can
//! run outside a browser. Alerts go to stderr.

use crate::confirmation::{ConfirmationView, Presentation};
use crate::form::{Field, FormFields, Notifier};
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::sync::Mutex;

/// Text printed when the confirmation is shown.
pub const CONFIRMATION_TEXT: &str = "Thank you! Your message has been sent.";

/// Form whose fields are filled from a line-oriented reader.
#[derive(Debug, Default)]
pub struct ConsoleForm {
    values: Mutex<HashMap<Field, String>>,
}

impl ConsoleForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prompt for every field in order, one line each.
    ///
    /// End of input leaves the remaining fields empty.
    pub fn fill_from<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> io::Result<()> {
        for field in Field::ALL {
            write!(writer, "{}: ", label(field))?;
            writer.flush()?;

            let mut line = String::new();
            reader.read_line(&mut line)?;
            self.set(field, line.trim_end_matches(['\r', '\n']));
        }
        Ok(())
    }

    /// Like [`ConsoleForm::fill_from`], but logs a read failure instead of
    /// returning it. Returns whether every prompt was answered.
    pub fn prompt<R: BufRead, W: Write>(&self, reader: R, writer: W) -> bool {
        match self.fill_from(reader, writer) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to read the contact form: {}", e);
                false
            }
        }
    }

    pub fn set(&self, field: Field, value: impl Into<String>) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(field, value.into());
        }
    }
}

fn label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Email => "Email",
        Field::Message => "Message",
    }
}

impl FormFields for ConsoleForm {
    fn value(&self, field: Field) -> String {
        self.values
            .lock()
            .ok()
            .and_then(|values| values.get(&field).cloned())
            .unwrap_or_default()
    }

    fn reset(&self) {
        if let Ok(mut values) = self.values.lock() {
            values.clear();
        }
    }
}

/// Prints the confirmation text to stdout when shown.
#[derive(Debug, Default)]
pub struct ConsoleConfirmation;

impl ConfirmationView for ConsoleConfirmation {
    fn present(&self, presentation: Presentation) {
        match presentation {
            Presentation::Shown => println!("{}", CONFIRMATION_TEXT),
            Presentation::Hidden => tracing::debug!("Confirmation hidden"),
        }
    }
}

/// Writes alerts to stderr.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}
