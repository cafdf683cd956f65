use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::person::Person;

/// Tax-declaration bucket assigned from the last two digits of an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum DeclarationGroup {
    A,
    B,
    C,
}

impl DeclarationGroup {
    /// All groups, in the fixed order statistics iterate them.
    pub const ALL: [DeclarationGroup; 3] =
        [DeclarationGroup::A, DeclarationGroup::B, DeclarationGroup::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationGroup::A => "A",
            DeclarationGroup::B => "B",
            DeclarationGroup::C => "C",
        }
    }
}

impl fmt::Display for DeclarationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an identifier by its last two digits: 00-39 → A, 40-79 → B,
/// 80-99 → C. Ids shorter than two characters, or with a non-numeric
/// suffix, are invalid.
pub fn classify_id(id: &str) -> Result<DeclarationGroup> {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() < 2 {
        return Err(Error::InvalidId(format!(
            "id '{id}' must have at least 2 digits"
        )));
    }

    let suffix: String = chars[chars.len() - 2..].iter().collect();
    let value: u32 = suffix
        .parse()
        .map_err(|_| Error::InvalidId(format!("id '{id}' does not end in two digits")))?;

    Ok(match value {
        0..=39 => DeclarationGroup::A,
        40..=79 => DeclarationGroup::B,
        _ => DeclarationGroup::C,
    })
}

/// Check that a person's stored group matches the rule applied to their id.
///
/// A malformed id counts as a failed verification rather than an error, so
/// bulk audits keep going past bad records.
pub fn verify_group(person: &Person) -> bool {
    match classify_id(&person.id) {
        Ok(group) => group == person.declaration_group,
        Err(err) => {
            warn!(id = %person.id, %err, "group verification failed");
            false
        }
    }
}
