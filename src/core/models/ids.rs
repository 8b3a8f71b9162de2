use super::sse::SseType;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdParseError {
    #[error("secondary structure id '{0}' is too short; expected e.g. 'B2E'")]
    TooShort(String),

    #[error("secondary structure id '{0}' must start with an uppercase layer letter")]
    InvalidLayer(String),

    #[error("secondary structure id '{0}' needs a 1-based column index")]
    InvalidColumn(String),

    #[error("secondary structure id '{0}' ends with an unknown type letter")]
    InvalidType(String),
}

/// Identifier of a secondary structure element within an architecture.
///
/// The canonical text form is layer letter + 1-based column index + type
/// letter, e.g. `B2E` for the second strand of the second layer. Identifiers
/// are unique within an [`Architecture`](super::architecture::Architecture).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SseId {
    /// 0-based layer index, rendered as `A`, `B`, `C`...
    pub layer: usize,
    /// 1-based column index within the layer.
    pub column: usize,
    /// Secondary structure type of the element.
    pub sse_type: SseType,
}

impl SseId {
    pub fn new(layer: usize, column: usize, sse_type: SseType) -> Self {
        Self {
            layer,
            column,
            sse_type,
        }
    }

    /// The layer rendered as its letter (`0 -> 'A'`).
    pub fn layer_letter(&self) -> char {
        (b'A' + (self.layer as u8 % 26)) as char
    }
}

impl fmt::Display for SseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.layer_letter(),
            self.column,
            self.sse_type.code()
        )
    }
}

impl FromStr for SseId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() < 3 {
            return Err(IdParseError::TooShort(s.to_string()));
        }

        let layer_char = s
            .chars()
            .next()
            .ok_or_else(|| IdParseError::TooShort(s.to_string()))?;
        if !layer_char.is_ascii_uppercase() {
            return Err(IdParseError::InvalidLayer(s.to_string()));
        }

        let type_char = s
            .chars()
            .next_back()
            .ok_or_else(|| IdParseError::TooShort(s.to_string()))?;
        let sse_type = SseType::from_code(type_char)
            .ok_or_else(|| IdParseError::InvalidType(s.to_string()))?;

        let digits = &s[1..s.len() - 1];
        let column: usize = digits
            .parse()
            .map_err(|_| IdParseError::InvalidColumn(s.to_string()))?;
        if column == 0 {
            return Err(IdParseError::InvalidColumn(s.to_string()));
        }

        Ok(Self {
            layer: (layer_char as u8 - b'A') as usize,
            column,
            sse_type,
        })
    }
}

impl Serialize for SseId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_canonical_ids() {
        for raw in ["A1H", "B2E", "C10G", "D3I"] {
            let id: SseId = raw.parse().unwrap();
            assert_eq!(id.to_string(), raw);
        }
    }

    #[test]
    fn parses_fields() {
        let id: SseId = "B2E".parse().unwrap();
        assert_eq!(id.layer, 1);
        assert_eq!(id.column, 2);
        assert_eq!(id.sse_type, SseType::Strand);
        assert_eq!(id.layer_letter(), 'B');
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(matches!(
            "B2".parse::<SseId>(),
            Err(IdParseError::TooShort(_))
        ));
        assert!(matches!(
            "b2E".parse::<SseId>(),
            Err(IdParseError::InvalidLayer(_))
        ));
        assert!(matches!(
            "BxE".parse::<SseId>(),
            Err(IdParseError::InvalidColumn(_))
        ));
        assert!(matches!(
            "B0E".parse::<SseId>(),
            Err(IdParseError::InvalidColumn(_))
        ));
        assert!(matches!(
            "B2Z".parse::<SseId>(),
            Err(IdParseError::InvalidType(_))
        ));
    }
}
