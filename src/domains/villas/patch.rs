//! JSON Patch (RFC 6902) application for a single villa.

use json_patch::Patch;
use serde_json::Value;
use tracing::warn;

use super::error::VillaError;
use super::model::Villa;

/// Optional fields that are omitted from responses when unset.
const OPTIONAL_FIELDS: [&str; 3] = ["details", "imageUrl", "amenity"];

/// Apply `patch` to a copy of `villa` and return the validated result.
///
/// The input record is never modified; callers commit the returned copy.
pub fn apply_patch(villa: &Villa, patch: &Patch) -> Result<Villa, VillaError> {
    let mut document =
        serde_json::to_value(villa).map_err(|e| VillaError::patch(e.to_string()))?;

    // Unset optional fields are addressable as null.
    if let Value::Object(fields) = &mut document {
        for key in OPTIONAL_FIELDS {
            fields.entry(key).or_insert(Value::Null);
        }
    }

    json_patch::patch(&mut document, &patch.0).map_err(|e| {
        warn!("Patch for villa {} could not be applied: {}", villa.id, e);
        VillaError::patch(e.to_string())
    })?;

    let patched: Villa = serde_json::from_value(document).map_err(|e| {
        warn!("Patched villa {} has invalid shape: {}", villa.id, e);
        VillaError::patch(e.to_string())
    })?;

    if patched.id != villa.id {
        return Err(VillaError::field("id", "The id field cannot be changed."));
    }

    patched.validate()?;

    Ok(patched)
}
