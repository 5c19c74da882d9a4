//! The immutable station reference set.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{StationCode, StationRecord};

use super::error::StationError;

/// Station data compiled into the binary, used when no catalog file is
/// configured.
const BUILTIN_CATALOG: &str = include_str!("../../data/stations.json");

/// Catalog document: `{"stations": [...]}`.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    stations: Vec<StationDto>,
}

/// One station as written in a catalog file.
#[derive(Debug, Clone, Deserialize)]
struct StationDto {
    code: String,
    name: String,
    /// Full display label; derived from name and code when absent.
    #[serde(default)]
    label: Option<String>,
}

/// Validated, read-only station reference set.
///
/// Built once at startup and shared (behind an `Arc`) by everything that
/// needs to match or resolve stations. Record order is the order of the
/// source document and is what the matcher preserves.
#[derive(Debug, Clone)]
pub struct StationCatalog {
    records: Vec<StationRecord>,
    by_code: HashMap<StationCode, usize>,
}

impl StationCatalog {
    /// Build a catalog from records, rejecting duplicate codes and blank
    /// names or labels.
    pub fn from_records(records: Vec<StationRecord>) -> Result<Self, StationError> {
        if records.is_empty() {
            return Err(StationError::Empty);
        }

        let mut by_code = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            if record.name().trim().is_empty() || record.display_label().trim().is_empty() {
                return Err(StationError::EmptyLabel {
                    code: record.code(),
                });
            }
            if by_code.insert(record.code(), idx).is_some() {
                return Err(StationError::DuplicateCode(record.code()));
            }
        }

        Ok(Self { records, by_code })
    }

    /// Parse a catalog from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, StationError> {
        let doc: CatalogDocument = serde_json::from_str(json).map_err(|e| StationError::Json {
            message: e.to_string(),
        })?;

        let records = doc
            .stations
            .into_iter()
            .map(to_record)
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_records(records)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, StationError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// All records, in reference order.
    pub fn records(&self) -> &[StationRecord] {
        &self.records
    }

    /// Look up a station by code.
    pub fn get(&self, code: &StationCode) -> Option<&StationRecord> {
        self.by_code.get(code).map(|&idx| &self.records[idx])
    }

    /// Resolve free text typed into a station field.
    ///
    /// An exact display label wins; otherwise the text is tried as a code.
    /// Both comparisons ignore case and surrounding whitespace.
    pub fn resolve(&self, text: &str) -> Option<&StationRecord> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.records
            .iter()
            .find(|r| r.display_label().eq_ignore_ascii_case(text))
            .or_else(|| {
                StationCode::parse_normalized(text)
                    .ok()
                    .and_then(|code| self.get(&code))
            })
    }

    /// Get the number of stations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty. Always false for a built catalog.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Validate a catalog file entry.
fn to_record(dto: StationDto) -> Result<StationRecord, StationError> {
    // Catalog files are hand-edited; accept lowercase codes
    let code =
        StationCode::parse_normalized(&dto.code).map_err(|e| StationError::InvalidCode {
            code: dto.code.clone(),
            reason: e.to_string(),
        })?;

    let record = match dto.label {
        Some(label) => StationRecord::new(code, dto.name, label),
        None => StationRecord::with_derived_label(code, dto.name),
    };
    Ok(record)
}
