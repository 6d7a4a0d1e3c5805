//! Order form fields and validation
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minimum digits a phone number must contain once punctuation is stripped.
pub const PHONE_MIN_DIGITS: usize = 9;
/// Maximum digits a phone number may contain once punctuation is stripped.
pub const PHONE_MAX_DIGITS: usize = 15;

// ASCII word characters only; a single host label before the top-level label.
// Unicode mode is off so case folding cannot map `k` or `s` onto non-ASCII letters.
static EMAIL_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?i-u)^[A-Za-z0-9_.\-]+@[A-Za-z0-9_\-]+\.[a-z]{2,}$").ok());

/// The four contact fields collected before ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Address,
}

impl FormField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Phone, Self::Address];

    /// Value of the input's `name` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Address => "Delivery Address",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Free-text contact details, overwritten field by field on every keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl OrderForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite a field. No validation happens here.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Address => &self.address,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Address => &mut self.address,
        }
    }

    /// True when every field is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// Why a single field was rejected. The display text is shown inline under the field.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Phone is required")]
    PhoneRequired,
    #[error("Invalid phone number")]
    InvalidPhone,
    #[error("Address is required")]
    AddressRequired,
}

/// Sparse map of field errors, rebuilt from scratch on every validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors(BTreeMap<FormField, FieldError>);

impl FormErrors {
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Display message for a field, if it failed.
    #[must_use]
    pub fn message(&self, field: FormField) -> Option<String> {
        self.get(field).map(|err| err.to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, FieldError)> + '_ {
        self.0.iter().map(|(field, err)| (*field, *err))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, field: FormField, err: FieldError) {
        self.0.insert(field, err);
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, err) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {err}")?;
            first = false;
        }
        Ok(())
    }
}

/// Check an email against the storefront's address pattern.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

/// Check that a phone number holds between 9 and 15 digits once everything else is stripped.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
}

/// Validate every field independently and collect all failures.
#[must_use]
pub fn validate_form(form: &OrderForm) -> FormErrors {
    let mut errors = FormErrors::default();

    if form.name.trim().is_empty() {
        errors.insert(FormField::Name, FieldError::NameRequired);
    }

    if form.email.trim().is_empty() {
        errors.insert(FormField::Email, FieldError::EmailRequired);
    } else if !is_valid_email(&form.email) {
        errors.insert(FormField::Email, FieldError::InvalidEmail);
    }

    if form.phone.trim().is_empty() {
        errors.insert(FormField::Phone, FieldError::PhoneRequired);
    } else if !is_valid_phone(&form.phone) {
        errors.insert(FormField::Phone, FieldError::InvalidPhone);
    }

    if form.address.trim().is_empty() {
        errors.insert(FormField::Address, FieldError::AddressRequired);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> OrderForm {
        OrderForm {
            name: "Wanjiru Kamau".to_string(),
            email: "wanjiru@example.com".to_string(),
            phone: "0712 345 678".to_string(),
            address: "Moi Avenue, Nairobi".to_string(),
        }
    }

    #[test]
    fn email_pattern_matches_examples() {
        assert!(!is_valid_email("a@b.c"));
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("First.Last-1@Mail.COM"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("a@b.c0"));
        assert!(!is_valid_email(" a@b.co"));
        assert!(!is_valid_email("jos\u{e9}@b.co"));
        assert!(!is_valid_email("\u{212a}@b.co"));
        assert!(!is_valid_email("a@b.\u{17f}\u{17f}"));
    }

    #[test]
    fn email_host_is_a_single_label() {
        assert!(!is_valid_email("orders@mail.example.com"));
    }

    #[test]
    fn phone_counts_digits_only() {
        assert!(is_valid_phone("123456789"));
        assert!(!is_valid_phone("12345678"));
        assert!(is_valid_phone("+1 (234) 567-8901"));
        assert!(is_valid_phone("123456789012345"));
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone("phone"));
    }

    #[test]
    fn blank_form_fails_every_field() {
        let errors = validate_form(&OrderForm::new());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(FormField::Name), Some(FieldError::NameRequired));
        assert_eq!(errors.get(FormField::Email), Some(FieldError::EmailRequired));
        assert_eq!(errors.get(FormField::Phone), Some(FieldError::PhoneRequired));
        assert_eq!(
            errors.get(FormField::Address),
            Some(FieldError::AddressRequired)
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = filled();
        form.name = "   ".to_string();
        form.address = "\t\n".to_string();
        let errors = validate_form(&form);
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.message(FormField::Name).as_deref(),
            Some("Name is required")
        );
    }

    #[test]
    fn format_errors_are_distinct_from_missing() {
        let mut form = filled();
        form.email = "a@b.c".to_string();
        form.phone = "12-34".to_string();
        let errors = validate_form(&form);
        assert_eq!(errors.get(FormField::Email), Some(FieldError::InvalidEmail));
        assert_eq!(errors.get(FormField::Phone), Some(FieldError::InvalidPhone));
        assert_eq!(
            errors.to_string(),
            "email: Invalid email; phone: Invalid phone number"
        );
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate_form(&filled()).is_empty());
    }

    #[test]
    fn fields_parse_from_input_names() {
        assert_eq!("phone".parse::<FormField>(), Ok(FormField::Phone));
        assert_eq!(
            "zip".parse::<FormField>(),
            Err(UnknownField("zip".to_string()))
        );

        let mut form = OrderForm::new();
        assert!(form.is_blank());
        form.set(FormField::Address, "Kisumu");
        assert_eq!(form.get(FormField::Address), "Kisumu");
        assert!(!form.is_blank());
    }
}
