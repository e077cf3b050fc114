use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::data::model::Dataset;
use crate::page::{Download, DownloadSource};

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("cannot encode {file_name}: {source}")]
    Encode {
        file_name: &'static str,
        source: csv::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The bytes a download delivers. The dataset is re-encoded on every call.
pub fn payload(download: &Download, dataset: &Dataset) -> Result<Vec<u8>, DownloadError> {
    match &download.source {
        DownloadSource::DatasetCsv => {
            dataset
                .to_csv_bytes()
                .map_err(|source| DownloadError::Encode {
                    file_name: download.file_name,
                    source,
                })
        }
        DownloadSource::Bytes(bytes) => Ok(bytes.to_vec()),
    }
}

/// Write a download to `path`.
pub fn write_to(download: &Download, dataset: &Dataset, path: &Path) -> Result<(), DownloadError> {
    let bytes = payload(download, dataset)?;
    std::fs::write(path, &bytes).map_err(|source| DownloadError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Saved {} ({}, {} bytes) to {}",
        download.file_name,
        download.mime,
        bytes.len(),
        path.display()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Save dialog
// ---------------------------------------------------------------------------

/// Ask where to save, then write. `Ok(None)` means the dialog was cancelled.
pub fn save_with_dialog(
    download: &Download,
    dataset: &Dataset,
) -> Result<Option<PathBuf>, DownloadError> {
    let mut dialog = rfd::FileDialog::new()
        .set_title(download.label)
        .set_file_name(download.file_name);
    if let Some(ext) = Path::new(download.file_name).extension().and_then(|e| e.to_str()) {
        dialog = dialog.add_filter(ext.to_ascii_uppercase(), &[ext]);
    }

    let Some(path) = dialog.save_file() else {
        return Ok(None);
    };
    write_to(download, dataset, &path)?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::home;
    use csv::StringRecord;

    fn dataset() -> Dataset {
        Dataset::new(
            StringRecord::from(vec!["year", "state", "district", "gender", "count"]),
            vec![
                StringRecord::from(vec!["2017", "Maharashtra", "Pune", "Female", "120"]),
                StringRecord::from(vec!["2019", "Odisha", "Cuttack", "Male", "98"]),
                StringRecord::from(vec!["2022", "Delhi", "New Delhi, Central", "Female", ""]),
            ],
        )
    }

    fn csv_download() -> Download {
        Download {
            label: "Download Dataset",
            file_name: home::DATASET_FILE_NAME,
            mime: home::DATASET_MIME,
            source: DownloadSource::DatasetCsv,
        }
    }

    #[test]
    fn saved_csv_parses_back_to_the_loaded_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.csv");
        std::fs::write(&source, dataset().to_csv_bytes().unwrap()).unwrap();
        let loaded = crate::data::loader::load_dataset(&source).unwrap();

        let target = dir.path().join("cleaned_missing_data.csv");
        write_to(&csv_download(), &loaded, &target).unwrap();

        let reloaded = crate::data::loader::load_dataset(&target).unwrap();
        assert_eq!(reloaded, loaded);
        assert_eq!(reloaded, dataset());
    }

    #[test]
    fn csv_is_re_encoded_from_current_table() {
        let mut ds = dataset();
        let before = payload(&csv_download(), &ds).unwrap();
        ds.rows.truncate(1);
        let after = payload(&csv_download(), &ds).unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn bytes_pass_through() {
        let download = Download {
            label: "pbix",
            file_name: "powerbi.pbix",
            mime: "application/octet-stream",
            source: DownloadSource::Bytes(vec![0u8, 159, 146, 150].into()),
        };
        assert_eq!(payload(&download, &dataset()).unwrap(), [0u8, 159, 146, 150]);
    }

    #[test]
    fn unwritable_target_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing-dir/out.csv");
        let err = write_to(&csv_download(), &dataset(), &target).unwrap_err();
        assert!(matches!(err, DownloadError::Write { .. }));
        assert!(err.to_string().contains("out.csv"));
    }
}
