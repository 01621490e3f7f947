use serde::{Deserialize, Serialize};

use super::package;

/// A field of the lead capture form, keyed by the `name` attribute of its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
    Package,
}

impl LeadField {
    pub const REQUIRED: [LeadField; 2] = [LeadField::FirstName, LeadField::Email];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadField::FirstName => "firstName",
            LeadField::LastName => "lastName",
            LeadField::Email => "email",
            LeadField::Phone => "phone",
            LeadField::Message => "message",
            LeadField::Package => "package",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "firstName" => Some(LeadField::FirstName),
            "lastName" => Some(LeadField::LastName),
            "email" => Some(LeadField::Email),
            "phone" => Some(LeadField::Phone),
            "message" => Some(LeadField::Message),
            "package" => Some(LeadField::Package),
            _ => None,
        }
    }

    pub fn all() -> [LeadField; 6] {
        [
            LeadField::FirstName,
            LeadField::LastName,
            LeadField::Email,
            LeadField::Phone,
            LeadField::Message,
            LeadField::Package,
        ]
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

/// Everything a visitor typed into the contact form.
///
/// Serializes with the same camelCase keys the form inputs use, so the record
/// can be handed to a submission sink verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub package: String,
}

impl LeadForm {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::FirstName => &self.first_name,
            LeadField::LastName => &self.last_name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::Message => &self.message,
            LeadField::Package => &self.package,
        }
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let slot = match field {
            LeadField::FirstName => &mut self.first_name,
            LeadField::LastName => &mut self.last_name,
            LeadField::Email => &mut self.email,
            LeadField::Phone => &mut self.phone,
            LeadField::Message => &mut self.message,
            LeadField::Package => &mut self.package,
        };
        *slot = value.into();
    }

    /// Replace the field named `name`. Unknown names are a caller bug: they
    /// trip a debug assertion and are ignored in release builds.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) {
        match LeadField::from_name(name) {
            Some(field) => self.set(field, value),
            None => debug_assert!(false, "unknown lead form field `{name}`"),
        }
    }

    pub fn is_empty(&self) -> bool {
        LeadField::all().iter().all(|f| self.get(*f).is_empty())
    }

    /// Required fields that are still blank, in form order
    pub fn missing_required(&self) -> Vec<LeadField> {
        LeadField::REQUIRED
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    /// The package is either unset or one of the catalog names
    pub fn has_known_package(&self) -> bool {
        self.package.is_empty() || package::find(&self.package).is_some()
    }

    pub fn clear(&mut self) {
        *self = LeadForm::default();
    }
}
