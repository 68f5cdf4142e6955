//! Contact form state.

use aihero_contact::{ContactRequest, SubmissionStatus};

/// Shown when a submission did not reach the chat.
pub const ERROR_MESSAGE: &str =
    "Xatolik yuz berdi. Iltimos, keyinroq qayta urinib ko'ring yoki telefon orqali bog'laning.";

/// Inputs of the contact form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    School,
    Phone,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::School,
        FormField::Phone,
        FormField::Email,
        FormField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Ismingiz",
            FormField::School => "Maktab",
            FormField::Phone => "Telefon",
            FormField::Email => "Email",
            FormField::Message => "Xabar",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Azizov Aziz",
            FormField::School => "12-sonli maktab",
            FormField::Phone => "+998 90 123 45 67",
            FormField::Email => "example@mail.uz",
            FormField::Message => "Savollaringiz yoki takliflaringiz...",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, FormField::Name | FormField::School | FormField::Phone)
    }

    /// Map a key reported by [`ContactRequest::missing_required`].
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(FormField::Name),
            "school" => Some(FormField::School),
            "phone" => Some(FormField::Phone),
            "email" => Some(FormField::Email),
            "message" => Some(FormField::Message),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            FormField::Name => 0,
            FormField::School => 1,
            FormField::Phone => 2,
            FormField::Email => 3,
            FormField::Message => 4,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Values, focus and outcome of the contact form.
#[derive(Debug, Default)]
pub struct ContactForm {
    request: ContactRequest,
    focus: Option<FormField>,
    error: Option<String>,
    submitted: bool,
}

impl ContactForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.request.name,
            FormField::School => &self.request.school,
            FormField::Phone => &self.request.phone,
            FormField::Email => &self.request.email,
            FormField::Message => &self.request.message,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.request.name,
            FormField::School => &mut self.request.school,
            FormField::Phone => &mut self.request.phone,
            FormField::Email => &mut self.request.email,
            FormField::Message => &mut self.request.message,
        }
    }

    pub fn focused(&self) -> Option<FormField> {
        self.focus
    }

    /// Whether keystrokes currently go to an input.
    pub fn is_editing(&self) -> bool {
        self.focus.is_some() && !self.submitted
    }

    pub fn focus(&mut self, field: FormField) {
        if !self.submitted {
            self.focus = Some(field);
        }
    }

    pub fn focus_first(&mut self) {
        self.focus(FormField::Name);
    }

    pub fn blur(&mut self) {
        self.focus = None;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.map(FormField::next);
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.map(FormField::prev);
    }

    /// Type into the focused input. Only the message accepts line breaks.
    pub fn insert(&mut self, c: char) {
        let Some(field) = self.focus else {
            return;
        };
        if c == '\n' && field != FormField::Message {
            return;
        }
        if c.is_control() && c != '\n' {
            return;
        }
        self.value_mut(field).push(c);
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focus {
            self.value_mut(field).pop();
        }
    }

    /// Check required inputs and hand back the request to send.
    ///
    /// On missing inputs the first one gets focus and an error names them all.
    pub fn validate(&mut self) -> Option<ContactRequest> {
        let missing: Vec<FormField> = self
            .request
            .missing_required()
            .into_iter()
            .filter_map(FormField::from_key)
            .collect();

        if let Some(&first) = missing.first() {
            let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
            self.error = Some(format!(
                "Iltimos, majburiy maydonlarni to'ldiring: {}",
                labels.join(", ")
            ));
            self.focus = Some(first);
            return None;
        }

        self.error = None;
        Some(self.request.clone())
    }

    /// Apply a finished submission. Returns `true` if the outcome was consumed.
    pub fn apply(&mut self, status: SubmissionStatus) -> bool {
        match status {
            SubmissionStatus::Sent => {
                self.request = ContactRequest::default();
                self.error = None;
                self.focus = None;
                self.submitted = true;
                true
            }
            SubmissionStatus::Failed => {
                self.error = Some(ERROR_MESSAGE.to_string());
                true
            }
            SubmissionStatus::Idle | SubmissionStatus::Sending => false,
        }
    }

    /// Leave the success panel for a fresh, empty form.
    pub fn send_again(&mut self) {
        self.submitted = false;
        self.error = None;
        self.focus = Some(FormField::Name);
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(form: &mut ContactForm, field: FormField, text: &str) {
        form.focus(field);
        text.chars().for_each(|c| form.insert(c));
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        type_into(&mut form, FormField::Name, "Aziz");
        type_into(&mut form, FormField::School, "12-maktab");
        type_into(&mut form, FormField::Phone, "+998901234567");
        form
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(FormField::Message.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Message);

        let mut form = ContactForm::default();
        assert!(!form.is_editing());
        form.focus_next();
        assert_eq!(form.focused(), None);
        form.focus_first();
        form.focus_next();
        assert_eq!(form.focused(), Some(FormField::School));
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut form = ContactForm::default();
        type_into(&mut form, FormField::Name, "Azizx");
        form.backspace();
        assert_eq!(form.value(FormField::Name), "Aziz");

        // Line breaks only land in the message.
        form.insert('\n');
        assert_eq!(form.value(FormField::Name), "Aziz");
        type_into(&mut form, FormField::Message, "a\nb");
        assert_eq!(form.value(FormField::Message), "a\nb");
    }

    #[test]
    fn test_validate_missing() {
        let mut form = ContactForm::default();
        type_into(&mut form, FormField::School, "12-maktab");
        assert!(form.validate().is_none());

        let error = form.error().unwrap();
        assert!(error.contains("Ismingiz"));
        assert!(error.contains("Telefon"));
        assert!(!error.contains("Maktab"));
        assert_eq!(form.focused(), Some(FormField::Name));
    }

    #[test]
    fn test_validate_ok() {
        let mut form = filled();
        let request = form.validate().unwrap();
        assert_eq!(request.name, "Aziz");
        assert_eq!(request.email, "");
        assert!(form.error().is_none());
    }

    #[test]
    fn test_sent_resets_form() {
        let mut form = filled();
        assert!(form.apply(SubmissionStatus::Sent));
        assert!(form.is_submitted());
        assert!(!form.is_editing());
        for field in FormField::ALL {
            assert_eq!(form.value(field), "");
        }

        form.send_again();
        assert!(!form.is_submitted());
        assert_eq!(form.focused(), Some(FormField::Name));
    }

    #[test]
    fn test_failure_keeps_values() {
        let mut form = filled();
        assert!(form.apply(SubmissionStatus::Failed));
        assert_eq!(form.error(), Some(ERROR_MESSAGE));
        assert_eq!(form.value(FormField::Name), "Aziz");
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_pending_status_not_consumed() {
        let mut form = filled();
        assert!(!form.apply(SubmissionStatus::Sending));
        assert!(!form.apply(SubmissionStatus::Idle));
    }
}
