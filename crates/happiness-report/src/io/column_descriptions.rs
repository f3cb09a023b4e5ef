//! Reader for the `column;description` lookup table.
use std::path::Path;

use crate::data_handling::ColumnDescriptions;
use crate::error::ReportError;

/// Read a semicolon-separated, header-less table mapping metric column to description.
pub fn read_column_descriptions<P: AsRef<Path>>(path: P) -> Result<ColumnDescriptions, ReportError> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| ReportError::DataLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let mut entries = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| ReportError::DataLoad {
            path: path.to_path_buf(),
            reason: format!("failed to read row {}: {}", row_idx + 1, e),
        })?;
        if record.len() != 2 {
            return Err(ReportError::DataLoad {
                path: path.to_path_buf(),
                reason: format!(
                    "row {} has {} fields, expected 'column;description'",
                    row_idx + 1,
                    record.len()
                ),
            });
        }
        let column = record[0].trim().to_string();
        if column.is_empty() {
            return Err(ReportError::DataLoad {
                path: path.to_path_buf(),
                reason: format!("row {} has an empty column name", row_idx + 1),
            });
        }
        entries.push((column, record[1].trim().to_string()));
    }

    if entries.is_empty() {
        return Err(ReportError::DataLoad {
            path: path.to_path_buf(),
            reason: "no column descriptions found".to_string(),
        });
    }

    log::debug!("Loaded {} column descriptions from {}", entries.len(), path.display());
    Ok(ColumnDescriptions::new(entries))
}
