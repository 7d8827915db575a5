//! The `Identifier` value type and the template it is rendered from.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

/// Template filled in by the entropy-mix generator.
pub const TEMPLATE: &str = "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";

/// Rendered length of every identifier.
pub const LENGTH: usize = 36;

/// Number of `x`/`y` placeholders in [`TEMPLATE`]; one random draw each.
pub const PLACEHOLDER_COUNT: usize = 31;

/// Byte offsets of the four hyphens.
pub const HYPHENS: [usize; 4] = [8, 13, 18, 23];

const VERSION_OFFSET: usize = 14;
const VARIANT_OFFSET: usize = 19;

/// A template character that gets replaced with a hex digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `x`: any hex digit.
    Any,
    /// `y`: digit constrained to the RFC 4122 variant range `8..=b`.
    Variant,
}

impl Placeholder {
    /// Classifies a template character, or `None` for pass-through characters.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'x' => Some(Self::Any),
            'y' => Some(Self::Variant),
            _ => None,
        }
    }

    /// Maps a raw nibble onto the value this placeholder allows.
    #[must_use]
    pub fn constrain(self, nibble: u8) -> u8 {
        match self {
            Self::Any => nibble & 0xf,
            Self::Variant => (nibble & 0x3) | 0x8,
        }
    }
}

/// A 36-character, lowercase, hyphenated v4-style identifier.
///
/// Only generators inside this crate can construct one, so every value
/// observed by callers already has the 8-4-4-4-12 shape with version `4`
/// and a variant digit in `{8, 9, a, b}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub(crate) fn from_rendered(rendered: String) -> Self {
        debug_assert!(matches_v4_shape(&rendered), "malformed identifier: {rendered}");
        Self(rendered)
    }

    pub(crate) fn from_uuid(uuid: Uuid) -> Self {
        Self::from_rendered(uuid.hyphenated().to_string())
    }

    /// Borrows the rendered identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning the rendered string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

/// Returns `true` if `s` has the shape of a rendered identifier.
///
/// Equivalent to `^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$`.
#[must_use]
pub fn matches_v4_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != LENGTH {
        return false;
    }
    bytes.iter().enumerate().all(|(i, &b)| {
        if HYPHENS.contains(&i) {
            b == b'-'
        } else if i == VERSION_OFFSET {
            b == b'4'
        } else if i == VARIANT_OFFSET {
            matches!(b, b'8' | b'9' | b'a' | b'b')
        } else {
            matches!(b, b'0'..=b'9' | b'a'..=b'f')
        }
    })
}
