use contact_form_client::{ConfirmationView, Field, FormFields, Notifier, Presentation};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock form with in-memory field values.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockForm {
    values: Arc<Mutex<HashMap<Field, String>>>,
    resets: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockForm {
    pub fn with(name: &str, email: &str, message: &str) -> Self {
        let form = Self::default();
        form.fill(name, email, message);
        form
    }

    pub fn fill(&self, name: &str, email: &str, message: &str) {
        let mut values = self.values.lock().unwrap();
        values.insert(Field::Name, name.to_string());
        values.insert(Field::Email, email.to_string());
        values.insert(Field::Message, message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.value(*f).is_empty())
    }

    pub fn reset_count(&self) -> usize {
        *self.resets.lock().unwrap()
    }
}

impl FormFields for MockForm {
    fn value(&self, field: Field) -> String {
        self.values
            .lock()
            .unwrap()
            .get(&field)
            .cloned()
            .unwrap_or_default()
    }

    fn reset(&self) {
        self.values.lock().unwrap().clear();
        *self.resets.lock().unwrap() += 1;
    }
}

/// Records every presentation change.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockConfirmationView {
    seen: Arc<Mutex<Vec<Presentation>>>,
}

#[allow(dead_code)]
impl MockConfirmationView {
    pub fn seen(&self) -> Vec<Presentation> {
        self.seen.lock().unwrap().clone()
    }

    pub fn current(&self) -> Option<Presentation> {
        self.seen.lock().unwrap().last().copied()
    }
}

impl ConfirmationView for MockConfirmationView {
    fn present(&self, presentation: Presentation) {
        self.seen.lock().unwrap().push(presentation);
    }
}

/// Records every alert.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockNotifier {
    alerts: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for MockNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
