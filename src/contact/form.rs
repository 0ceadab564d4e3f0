//! Contact form fields
//!
//! Three required text fields. Required-ness is checked by the input layer
//! before it asks the modal to submit, the same way a browser's native
//! `required` attribute blocks a form.

/// One of the form's text inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "Your email",
            Field::Message => "Tell me about your project",
        }
    }
}

/// The values typed into the contact modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Replace a field's value
    pub fn set(&mut self, field: Field, value: &str) {
        *self.slot(field) = value.to_string();
    }

    pub fn push(&mut self, field: Field, ch: char) {
        self.slot(field).push(ch);
    }

    /// Remove the last character; returns false when already empty
    pub fn pop(&mut self, field: Field) -> bool {
        self.slot(field).pop().is_some()
    }

    /// First empty field in tab order
    ///
    /// Email is trimmed first, the way an email input sanitizes its value;
    /// whitespace is a real value in the other two.
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| match f {
            Field::Email => self.email.trim().is_empty(),
            _ => self.get(*f).is_empty(),
        })
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_missing_follows_tab_order() {
        let mut form = ContactForm::default();
        assert_eq!(form.first_missing(), Some(Field::Name));
        form.set(Field::Name, "A");
        assert_eq!(form.first_missing(), Some(Field::Email));
        form.set(Field::Message, "hi");
        assert_eq!(form.first_missing(), Some(Field::Email));
        form.set(Field::Email, "a@b.com");
        assert!(form.is_complete());
    }

    #[test]
    fn whitespace_is_a_value_except_in_email() {
        let mut form = ContactForm::default();
        form.set(Field::Name, " ");
        form.set(Field::Email, "a@b.com");
        form.set(Field::Message, "\n");
        assert!(form.is_complete());

        form.set(Field::Email, "   ");
        assert_eq!(form.first_missing(), Some(Field::Email));
    }

    #[test]
    fn long_values_are_kept_whole() {
        let mut form = ContactForm::default();
        let long = "x".repeat(5000);
        form.set(Field::Message, &long);
        form.push(Field::Message, 'y');
        assert_eq!(form.message.chars().count(), 5001);
        assert!(form.pop(Field::Message));
        assert_eq!(form.message, long);
    }

    #[test]
    fn pop_on_empty_is_noop() {
        let mut form = ContactForm::default();
        assert!(!form.pop(Field::Message));
        assert!(form.is_blank());
    }

    #[test]
    fn clear_resets_everything() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "A");
        form.set(Field::Email, "a@b.com");
        form.set(Field::Message, "hi");
        form.clear();
        assert_eq!(form, ContactForm::default());
    }
}
