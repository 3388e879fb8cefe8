use std::{borrow::Cow, collections::BTreeMap, sync::LazyLock};

use nutype::nutype;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub static FULL_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());
pub static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new("^[0-9]+$").unwrap());
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

pub const FULL_NAME_MIN_LENGTH: usize = 3;
pub const PHONE_LENGTH: usize = 10;
pub const NOTE_MIN_LENGTH: usize = 5;

/// One error message per invalid field, ordered like [`ContactField::ALL`].
pub type FieldErrors = BTreeMap<ContactField, Cow<'static, str>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    FullName,
    Phone,
    Email,
    Note,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::FullName, Self::Phone, Self::Email, Self::Note];

    /// The name of the field on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Note => "note",
        }
    }

    /// The ordered validation rules of this field.
    pub fn rules(self) -> &'static [Rule] {
        match self {
            Self::FullName => FULL_NAME_RULES,
            Self::Phone => PHONE_RULES,
            Self::Email => EMAIL_RULES,
            Self::Note => NOTE_RULES,
        }
    }

    /// Checks `value` against the rules of this field and returns the message
    /// of the first rule that fails.
    pub fn check(self, value: &str) -> Result<(), &'static str> {
        match self.rules().iter().find(|rule| !(rule.check)(value)) {
            Some(rule) => Err(rule.message),
            None => Ok(()),
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy)]
pub struct Rule {
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

const FULL_NAME_RULES: &[Rule] = &[
    Rule {
        check: is_filled,
        message: "Please fill your full name.",
    },
    Rule {
        check: is_full_name,
        message: "Full name should contain only letters.",
    },
    Rule {
        check: has_min_length::<FULL_NAME_MIN_LENGTH>,
        message: "Full name must be at least 3 characters long.",
    },
];

const PHONE_RULES: &[Rule] = &[
    Rule {
        check: is_filled,
        message: "Please fill your phone number.",
    },
    Rule {
        check: is_phone,
        message: "Phone number must contain only digits.",
    },
    Rule {
        check: has_length::<PHONE_LENGTH>,
        message: "Phone number must be exactly 10 digits.",
    },
];

const EMAIL_RULES: &[Rule] = &[
    Rule {
        check: is_filled,
        message: "Please fill your email address.",
    },
    Rule {
        check: is_email,
        message: "Please enter a valid email address.",
    },
];

const NOTE_RULES: &[Rule] = &[
    Rule {
        check: is_filled,
        message: "Please fill your message or note.",
    },
    Rule {
        check: has_min_length::<NOTE_MIN_LENGTH>,
        message: "Note must be at least 5 characters long.",
    },
];

fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

fn is_full_name(value: &str) -> bool {
    FULL_NAME_REGEX.is_match(value)
}

fn is_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Length in UTF-16 code units, as a browser's `String.length` reports it.
fn length(value: &str) -> usize {
    value.encode_utf16().count()
}

fn has_min_length<const N: usize>(value: &str) -> bool {
    length(value) >= N
}

fn has_length<const N: usize>(value: &str) -> bool {
    length(value) == N
}

/// The raw, unvalidated contact record as it is exchanged on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub note: String,
}

impl ContactRecord {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FullName => &self.full_name,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
            ContactField::Note => &self.note,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::FullName => &mut self.full_name,
            ContactField::Phone => &mut self.phone,
            ContactField::Email => &mut self.email,
            ContactField::Note => &mut self.note,
        };
        *slot = value.into();
    }

    /// Returns the fields that are empty.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|&field| self.get(field).is_empty())
            .collect()
    }

    /// Runs the rules of every field. The result is empty iff the record is
    /// valid.
    pub fn validate(&self) -> FieldErrors {
        ContactField::ALL
            .into_iter()
            .filter_map(|field| {
                field
                    .check(self.get(field))
                    .err()
                    .map(|message| (field, message.into()))
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub full_name: ContactName,
    pub phone: ContactPhone,
    pub email: ContactEmail,
    pub note: ContactNote,
}

#[nutype(
    validate(predicate = |name| ContactField::FullName.check(name).is_ok()),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactName(String);

#[nutype(
    validate(predicate = |phone| ContactField::Phone.check(phone).is_ok()),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactPhone(String);

#[nutype(
    validate(predicate = |email| ContactField::Email.check(email).is_ok()),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactEmail(String);

#[nutype(
    validate(predicate = |note| ContactField::Note.check(note).is_ok()),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactNote(String);

impl TryFrom<ContactRecord> for ContactMessage {
    type Error = FieldErrors;

    fn try_from(record: ContactRecord) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::new();
        let mut take = |field: ContactField, value: String| match field.check(&value) {
            Ok(()) => Some(value),
            Err(message) => {
                errors.insert(field, message.into());
                None
            }
        };

        let full_name = take(ContactField::FullName, record.full_name)
            .and_then(|x| ContactName::try_new(x).ok());
        let phone =
            take(ContactField::Phone, record.phone).and_then(|x| ContactPhone::try_new(x).ok());
        let email =
            take(ContactField::Email, record.email).and_then(|x| ContactEmail::try_new(x).ok());
        let note =
            take(ContactField::Note, record.note).and_then(|x| ContactNote::try_new(x).ok());

        match (full_name, phone, email, note) {
            (Some(full_name), Some(phone), Some(email), Some(note)) => Ok(Self {
                full_name,
                phone,
                email,
                note,
            }),
            _ => Err(errors),
        }
    }
}

impl From<ContactMessage> for ContactRecord {
    fn from(value: ContactMessage) -> Self {
        Self {
            full_name: value.full_name.into_inner(),
            phone: value.phone.into_inner(),
            email: value.email.into_inner(),
            note: value.note.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid() -> ContactRecord {
        ContactRecord {
            full_name: "John Smith".into(),
            phone: "9876543210".into(),
            email: "a@b.co".into(),
            note: "Looking forward to hearing from you".into(),
        }
    }

    fn error_for(field: ContactField, value: &str) -> Option<&'static str> {
        field.check(value).err()
    }

    #[test]
    fn valid_record() {
        assert_eq!(valid().validate(), FieldErrors::new());
    }

    #[test]
    fn empty_and_blank_fields() {
        for field in ContactField::ALL {
            for value in ["", "   ", "\t\n"] {
                let mut record = valid();
                record.set(field, value);

                let errors = record.validate();

                assert_eq!(errors.len(), 1);
                assert!(errors[&field].starts_with("Please fill your"));
            }
        }
    }

    #[test]
    fn full_name() {
        assert_eq!(
            error_for(ContactField::FullName, "John123"),
            Some("Full name should contain only letters.")
        );
        assert_eq!(
            error_for(ContactField::FullName, "Jo"),
            Some("Full name must be at least 3 characters long.")
        );
        assert_eq!(error_for(ContactField::FullName, "John Smith"), None);
    }

    #[test]
    fn phone() {
        assert_eq!(
            error_for(ContactField::Phone, "12345"),
            Some("Phone number must be exactly 10 digits.")
        );
        assert_eq!(
            error_for(ContactField::Phone, "12345abcde"),
            Some("Phone number must contain only digits.")
        );
        assert_eq!(
            error_for(ContactField::Phone, "١٢٣٤٥٦٧٨٩٠"),
            Some("Phone number must contain only digits.")
        );
        assert_eq!(error_for(ContactField::Phone, "9876543210"), None);
    }

    #[test]
    fn email() {
        assert_eq!(
            error_for(ContactField::Email, "not-an-email"),
            Some("Please enter a valid email address.")
        );
        assert_eq!(
            error_for(ContactField::Email, "a b@c.de"),
            Some("Please enter a valid email address.")
        );
        assert_eq!(error_for(ContactField::Email, "a@b.co"), None);
    }

    #[test]
    fn note() {
        assert_eq!(
            error_for(ContactField::Note, ""),
            Some("Please fill your message or note.")
        );
        assert_eq!(
            error_for(ContactField::Note, "Hi"),
            Some("Note must be at least 5 characters long.")
        );
        assert_eq!(
            error_for(ContactField::Note, "Looking forward to hearing from you"),
            None
        );
    }

    #[test]
    fn length_counts_utf16_units() {
        // three emoji are six UTF-16 units
        assert_eq!(error_for(ContactField::Note, "🙂🙂🙂"), None);
        assert_eq!(
            error_for(ContactField::Note, "🙂 "),
            Some("Note must be at least 5 characters long.")
        );
        assert_eq!(error_for(ContactField::Note, "héllo"), None);
    }

    #[test]
    fn one_message_per_field() {
        let record = ContactRecord {
            full_name: "J1".into(),
            phone: "12a".into(),
            email: "".into(),
            note: "Hi".into(),
        };

        let errors = record.validate();

        assert_eq!(
            errors,
            FieldErrors::from([
                (
                    ContactField::FullName,
                    "Full name should contain only letters.".into()
                ),
                (
                    ContactField::Phone,
                    "Phone number must contain only digits.".into()
                ),
                (ContactField::Email, "Please fill your email address.".into()),
                (
                    ContactField::Note,
                    "Note must be at least 5 characters long.".into()
                ),
            ])
        );
    }

    #[test]
    fn missing_fields() {
        let record = ContactRecord {
            full_name: "A".into(),
            phone: "".into(),
            email: "x@y.com".into(),
            note: "hi there".into(),
        };

        assert_eq!(record.missing_fields(), [ContactField::Phone]);
        assert_eq!(valid().missing_fields(), []);
    }

    #[test]
    fn message_from_record() {
        let message = ContactMessage::try_from(valid()).unwrap();

        assert_eq!(*message.full_name, "John Smith");
        assert_eq!(ContactRecord::from(message), valid());
    }

    #[test]
    fn message_from_invalid_record() {
        let mut record = valid();
        record.set(ContactField::Note, "Hi");

        let errors = ContactMessage::try_from(record).unwrap_err();

        assert_eq!(
            errors,
            FieldErrors::from([(
                ContactField::Note,
                "Note must be at least 5 characters long.".into()
            )])
        );
    }

    #[test]
    fn wire_format() {
        let json = serde_json::to_value(valid()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "fullName": "John Smith",
                "phone": "9876543210",
                "email": "a@b.co",
                "note": "Looking forward to hearing from you",
            })
        );
        assert_eq!(
            serde_json::to_value(ContactField::FullName).unwrap(),
            ContactField::FullName.name()
        );
    }
}
