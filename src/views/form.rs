use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::str::FromStr;

/// How long the "message sent" banner stays up
pub const CONFIRMATION_SECS: i64 = 5;

/// Fields shared by the inquiry and contact forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Email => "Email Address",
            FormField::Phone => "Phone Number",
            FormField::Message => "Message",
        }
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "phone" => Ok(FormField::Phone),
            "message" | "msg" => Ok(FormField::Message),
            other => Err(format!("unknown form field '{}'", other)),
        }
    }
}

/// Why a form refused to submit
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Missing(FormField),
    #[error("please enter a valid email address")]
    InvalidEmail,
}

/// Local state of a contact-style form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// A submission is in flight
    pub submitting: bool,
    submitted_at: Option<DateTime<Utc>>,
    /// Blocking alert shown after a failed submission
    pub alert: Option<String>,
}

impl FormState {
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Message => &self.message,
        }
    }

    /// Required-field and email-shape checks, nothing more
    pub fn validate(&self) -> Result<(), FormError> {
        if let Some(field) = FormField::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
        {
            return Err(FormError::Missing(field));
        }

        match self.email.trim().split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(FormError::InvalidEmail),
        }
    }

    /// Successful submission: clear the fields and raise the banner
    pub fn mark_submitted(&mut self, now: DateTime<Utc>) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.message.clear();
        self.alert = None;
        self.submitted_at = Some(now);
    }

    /// Failed submission: keep the fields for another try
    pub fn mark_failed(&mut self, alert: impl Into<String>) {
        self.alert = Some(alert.into());
        self.submitted_at = None;
    }

    pub fn confirmation_visible(&self, now: DateTime<Utc>) -> bool {
        self.submitted_at
            .map(|at| now - at < Duration::seconds(CONFIRMATION_SECS))
            .unwrap_or(false)
    }

    /// Render the form body with its current values
    pub fn render(&self, now: DateTime<Utc>, confirmation: &str) -> String {
        FormView {
            form: self,
            now,
            confirmation,
        }
        .to_string()
    }
}

/// A form as seen at one instant, with the banner text to show if it was just sent
pub struct FormView<'a> {
    pub form: &'a FormState,
    pub now: DateTime<Utc>,
    pub confirmation: &'a str,
}

impl fmt::Display for FormView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.form.confirmation_visible(self.now) {
            writeln!(f, "  ✓ {}", self.confirmation)?;
        }
        if let Some(alert) = &self.form.alert {
            writeln!(f, "  ! {}", alert)?;
        }

        for field in FormField::ALL {
            let value = self.form.get(field);
            let shown = if value.is_empty() { "—" } else { value };
            writeln!(f, "  {:<14} {}", field.label(), shown)?;
        }

        let button = if self.form.submitting {
            "Sending..."
        } else {
            "Send Message"
        };
        writeln!(f, "  [{}]", button)
    }
}
