use super::errors::SourceError;
use crate::table::{RawTable, Table};

/// Split object or list of records.
pub fn parse_json(content: &str) -> Result<Table, SourceError> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| SourceError::ParseError(format!("invalid json: {}", e)))?;
    Ok(Table::from_json(&value)?)
}

pub fn parse_yaml(content: &str) -> Result<Table, SourceError> {
    let raw: RawTable = serde_yaml::from_str(content)
        .map_err(|e| SourceError::ParseError(format!("invalid yaml table: {}", e)))?;
    Ok(Table::try_from(raw)?)
}

/// TOML documents are tables at the root, so only the split layout applies.
pub fn parse_toml(content: &str) -> Result<Table, SourceError> {
    let raw: RawTable = toml::from_str(content)
        .map_err(|e| SourceError::ParseError(format!("invalid toml table: {}", e)))?;
    Ok(Table::try_from(raw)?)
}
