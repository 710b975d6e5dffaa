//! # Identifier Validation
//!
//! Path identifiers must be in canonical hyphenated form
//! (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`). Validation and parsing are
//! separate steps; both surface failures as [`ExerciseError::InvalidId`].

use uuid::Uuid;

use super::errors::{ExerciseError, ExerciseResult};

/// Length of the canonical hyphenated form
pub const CANONICAL_LEN: usize = 36;

/// Byte offsets of the four hyphens
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// Check that `raw` is a canonical hyphenated uuid string
pub fn validate(raw: &str) -> ExerciseResult<()> {
    let bytes = raw.as_bytes();
    if bytes.len() != CANONICAL_LEN {
        return Err(ExerciseError::InvalidId(format!(
            "invalid length {} for '{}'",
            bytes.len(),
            raw
        )));
    }

    for (i, b) in bytes.iter().enumerate() {
        let ok = if HYPHENS.contains(&i) {
            *b == b'-'
        } else {
            b.is_ascii_hexdigit()
        };
        if !ok {
            return Err(ExerciseError::InvalidId(format!(
                "unexpected character at offset {} in '{}'",
                i, raw
            )));
        }
    }

    Ok(())
}

/// Parse `raw` into a [`Uuid`]
pub fn parse(raw: &str) -> ExerciseResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| ExerciseError::InvalidId(format!("{}: {}", raw, e)))
}

/// Generate a fresh identifier for a new record
pub fn generate() -> Uuid {
    Uuid::new_v4()
}
