use crate::views::form::{FormState, FormView};
use crate::views::layout::{EMAIL, PHONE};
use chrono::{DateTime, Utc};
use std::fmt;

const CONTACT_INFO: [(&str, &str); 4] = [
    ("Phone", PHONE),
    ("Email", EMAIL),
    ("Address", "123 Real Estate Ave, Suite 100, New York, NY 10001"),
    ("Business Hours", "Monday - Friday: 9:00 AM - 6:00 PM"),
];

pub const CONTACT_CONFIRMATION: &str =
    "Thank you for your message! We'll get back to you soon.";

/// Contact page body: office details and the message form
pub struct ContactView<'a> {
    pub form: &'a FormState,
    pub now: DateTime<Utc>,
}

impl fmt::Display for ContactView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Get in Touch")?;
        writeln!(
            f,
            "Have questions? We're here to help you find your perfect property."
        )?;
        writeln!(f)?;

        writeln!(f, "Contact Information")?;
        for (title, details) in CONTACT_INFO {
            writeln!(f, "  {:<15} {}", title, details)?;
        }
        writeln!(f)?;

        writeln!(f, "Send us a Message")?;
        write!(
            f,
            "{}",
            FormView {
                form: self.form,
                now: self.now,
                confirmation: CONTACT_CONFIRMATION,
            }
        )
    }
}

pub fn render_contact(form: &FormState, now: DateTime<Utc>) -> String {
    ContactView { form, now }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_lists_office_details() {
        let text = render_contact(&FormState::default(), Utc::now());
        assert!(text.contains("Business Hours"));
        assert!(text.contains(EMAIL));
        assert!(text.contains("Send us a Message"));
    }
}
