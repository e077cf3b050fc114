use std::path::{Path, PathBuf};

use csv::StringRecord;
use thiserror::Error;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// The dataset could not be loaded. Every view depends on it, so this is
/// fatal at startup.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot open dataset {}: {source}", .path.display())]
    Open { path: PathBuf, source: csv::Error },

    #[error("dataset {} is empty (no header row)", .path.display())]
    Empty { path: PathBuf },

    #[error("cannot read header row of dataset {}: {source}", .path.display())]
    Headers { path: PathBuf, source: csv::Error },

    #[error("cannot read row {row} of dataset {}: {source}", .path.display())]
    Record {
        path: PathBuf,
        row: usize,
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the cleaned dataset from a CSV file with a header row.
///
/// Rows must all have the header's width; a ragged file is rejected rather
/// than previewed half-parsed.
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let headers = reader
        .headers()
        .map_err(|source| DatasetError::Headers {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    if headers.is_empty() {
        return Err(DatasetError::Empty {
            path: path.to_path_buf(),
        });
    }

    let rows = reader
        .records()
        .enumerate()
        .map(|(row, result)| {
            result.map_err(|source| DatasetError::Record {
                path: path.to_path_buf(),
                row,
                source,
            })
        })
        .collect::<Result<Vec<StringRecord>, _>>()?;

    let dataset = Dataset::new(headers, rows);
    log::info!(
        "Loaded dataset {} ({} rows, {} columns)",
        path.display(),
        dataset.len(),
        dataset.headers.len()
    );
    if dataset.is_empty() {
        log::warn!("Dataset {} has a header row but no data", path.display());
    }

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_headers_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaned.csv");
        std::fs::write(
            &path,
            "year,state,district,count\n2017,Maharashtra,Pune,12\n2018,Odisha,Cuttack,40\n",
        )
        .unwrap();

        let ds = load_dataset(&path).unwrap();
        assert_eq!(
            ds.headers.iter().collect::<Vec<_>>(),
            ["year", "state", "district", "count"]
        );
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows[1].get(2), Some("Cuttack"));
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data/cleaned/cleaned_missing_data.csv");

        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Open { .. }));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn zero_byte_file_is_rejected_with_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaned_missing_data.csv");
        std::fs::write(&path, "").unwrap();

        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Empty { .. }));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn header_only_file_loads_with_no_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("header_only.csv");
        std::fs::write(&path, "year,state\n").unwrap();

        let ds = load_dataset(&path).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.headers.len(), 2);
    }

    #[test]
    fn ragged_row_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        std::fs::write(&path, "a,b\n1,2\n3\n").unwrap();

        match load_dataset(&path) {
            Err(DatasetError::Record { row, .. }) => assert_eq!(row, 1),
            other => panic!("expected a record error, got {other:?}"),
        }
    }
}
