//! Station code and record types.

use std::fmt;

use serde::{Serialize, Serializer};

/// Longest station code in the reference data ("PUNE", "SGUJ", ...).
const MAX_CODE_LEN: usize = 5;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A valid station code: 1 to 5 uppercase ASCII letters.
///
/// This type guarantees that any `StationCode` value is valid by
/// construction.
///
/// # Examples
///
/// ```
/// use station_server::domain::StationCode;
///
/// let ndls = StationCode::parse("NDLS").unwrap();
/// assert_eq!(ndls.as_str(), "NDLS");
///
/// // Single-letter codes exist (Raipur Junction is "R")
/// assert!(StationCode::parse("R").is_ok());
///
/// // Lowercase is rejected unless normalized first
/// assert!(StationCode::parse("ndls").is_err());
/// assert!(StationCode::parse_normalized(" ndls ").is_ok());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationCode {
    bytes: [u8; MAX_CODE_LEN],
    len: u8,
}

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// The input must be 1 to 5 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let input = s.as_bytes();

        if input.is_empty() || input.len() > MAX_CODE_LEN {
            return Err(InvalidStationCode {
                reason: "must be between 1 and 5 characters",
            });
        }

        if !input.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidStationCode {
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        let mut bytes = [0u8; MAX_CODE_LEN];
        bytes[..input.len()].copy_from_slice(input);
        Ok(Self {
            bytes,
            len: input.len() as u8,
        })
    }

    /// Parse user input: surrounding whitespace is trimmed and letters are
    /// upper-cased before validation.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StationCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One entry of the station reference set.
///
/// Records are immutable once built; the display label is what users see
/// in suggestion lists and what the matcher tests against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationRecord {
    code: StationCode,
    name: String,
    display_label: String,
}

impl StationRecord {
    /// Create a record with an explicit display label.
    pub fn new(
        code: StationCode,
        name: impl Into<String>,
        display_label: impl Into<String>,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            display_label: display_label.into(),
        }
    }

    /// Create a record whose label is derived as `"{name} ({code})"`.
    pub fn with_derived_label(code: StationCode, name: impl Into<String>) -> Self {
        let name = name.into();
        let display_label = format!("{name} ({code})");
        Self::new(code, name, display_label)
    }

    pub fn code(&self) -> StationCode {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_label(&self) -> &str {
        &self.display_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(StationCode::parse("R").is_ok());
        assert!(StationCode::parse("JP").is_ok());
        assert!(StationCode::parse("BCT").is_ok());
        assert!(StationCode::parse("NDLS").is_ok());
        assert!(StationCode::parse("APDJ").is_ok());
        assert!(StationCode::parse("ZZZZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(StationCode::parse("ndls").is_err());
        assert!(StationCode::parse("Ndls").is_err());
        assert!(StationCode::parse("NDLs").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(StationCode::parse("").is_err());
        assert!(StationCode::parse("ABCDEF").is_err());
        assert!(StationCode::parse("NEWDELHI").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(StationCode::parse("N1LS").is_err());
        assert!(StationCode::parse("N-LS").is_err());
        assert!(StationCode::parse("N LS").is_err());
        assert!(StationCode::parse("NÖLS").is_err());
    }

    #[test]
    fn parse_normalized_trims_and_uppercases() {
        let code = StationCode::parse_normalized("  bct\t").unwrap();
        assert_eq!(code.as_str(), "BCT");
        assert!(StationCode::parse_normalized("   ").is_err());
    }

    #[test]
    fn display_and_debug() {
        let code = StationCode::parse("MAS").unwrap();
        assert_eq!(format!("{}", code), "MAS");
        assert_eq!(format!("{:?}", code), "StationCode(MAS)");
    }

    #[test]
    fn codes_of_different_length_differ() {
        let a = StationCode::parse("JP").unwrap();
        let b = StationCode::parse("JPE").unwrap();
        assert_ne!(a, b);
        assert_eq!(a, StationCode::parse("JP").unwrap());
    }

    #[test]
    fn serializes_as_plain_string() {
        let code = StationCode::parse("HWH").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"HWH\"");
    }

    #[test]
    fn derived_label_combines_name_and_code() {
        let record =
            StationRecord::with_derived_label(StationCode::parse("LKO").unwrap(), "Lucknow");
        assert_eq!(record.name(), "Lucknow");
        assert_eq!(record.display_label(), "Lucknow (LKO)");
    }

    #[test]
    fn explicit_label_is_kept() {
        let record = StationRecord::new(
            StationCode::parse("NDLS").unwrap(),
            "New Delhi",
            "New Delhi Railway Station (NDLS)",
        );
        assert_eq!(record.code().as_str(), "NDLS");
        assert_eq!(record.display_label(), "New Delhi Railway Station (NDLS)");
    }
}
