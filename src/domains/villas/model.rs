//! Villa record and its field-level validation rules.

use serde::{Deserialize, Serialize};

use super::error::{FieldErrors, VillaError};

/// Maximum length of a villa name, in characters.
pub const NAME_MAX_LEN: usize = 30;

/// A single villa record, as stored and as exchanged over HTTP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Villa {
    /// Store-assigned identifier. Zero on create requests.
    #[serde(default)]
    pub id: i64,

    /// Display name, unique ignoring case at creation time.
    #[serde(default)]
    pub name: String,

    /// Number of guests the villa accommodates.
    #[serde(default)]
    pub occupancy: i32,

    /// Floor area in square feet.
    #[serde(default)]
    pub sqft: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenity: Option<String>,
}

impl Villa {
    /// Create a villa with the core fields set and no descriptive text.
    pub fn new(id: i64, name: impl Into<String>, occupancy: i32, sqft: i32) -> Self {
        Self {
            id,
            name: name.into(),
            occupancy,
            sqft,
            ..Default::default()
        }
    }

    /// Case-insensitive name comparison used for the uniqueness check.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Run field-level validation, collecting every failure.
    pub fn validate(&self) -> Result<(), VillaError> {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors
                .entry("name".to_string())
                .or_default()
                .push("The name field is required.".to_string());
        }

        if self.name.chars().count() > NAME_MAX_LEN {
            errors.entry("name".to_string()).or_default().push(format!(
                "The name field must be at most {} characters.",
                NAME_MAX_LEN
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(VillaError::Validation(errors))
        }
    }

    /// Copy the fields a full replace is allowed to change.
    pub fn replace_from(&mut self, other: &Villa) {
        self.name = other.name.clone();
        self.occupancy = other.occupancy;
        self.sqft = other.sqft;
    }
}
