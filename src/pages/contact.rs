use crate::views::contact::render_contact;
use crate::views::{FormError, FormField, FormState};
use chrono::{DateTime, Utc};
use tracing::info;

/// Static contact page. Messages are acknowledged locally, not delivered.
#[derive(Debug, Clone, Default)]
pub struct ContactPage {
    pub form: FormState,
}

impl ContactPage {
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<(), FormError> {
        self.form.validate()?;
        info!("Contact message from {} acknowledged", self.form.email.trim());
        self.form.mark_submitted(now);
        Ok(())
    }

    pub fn render(&self, now: DateTime<Utc>) -> String {
        render_contact(&self.form, now)
    }
}
