use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

// ---------------------------------------------------------------------------
// Artifact names
// ---------------------------------------------------------------------------

/// Dataset location, relative to the layout root.
pub const DATASET_PATH: &str = "data/cleaned/cleaned_missing_data.csv";

/// Shared visual-assets directory (EDA charts and the heatmap).
pub const VISUAL_DIR: &str = "visual";

/// Dashboard-assets directory. Separate namespace from [`VISUAL_DIR`].
pub const DASHBOARD_DIR: &str = "streamlit";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read artifact {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
}

impl ArtifactError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ArtifactError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ArtifactError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// ArtifactRef – one resolved file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Image,
    Html,
    Binary,
}

/// A resolved path to a precomputed artifact.
///
/// Nothing is checked when the reference is built; views check existence
/// or read the file when they render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRef {
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

impl ArtifactRef {
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the artifact as UTF-8 text.
    pub fn read_text(&self) -> Result<String, ArtifactError> {
        std::fs::read_to_string(&self.path).map_err(|e| ArtifactError::from_io(&self.path, e))
    }

    /// Read the artifact as raw bytes.
    pub fn read_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        std::fs::read(&self.path).map_err(|e| ArtifactError::from_io(&self.path, e))
    }
}

// ---------------------------------------------------------------------------
// AssetLayout – where everything lives
// ---------------------------------------------------------------------------

/// Artifact locations under one root directory.
#[derive(Debug, Clone)]
pub struct AssetLayout {
    root: PathBuf,
}

impl AssetLayout {
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        AssetLayout {
            root: normalize(root.as_ref()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.root.join(DATASET_PATH)
    }

    /// An artifact in the shared visual-assets directory.
    pub fn visual(&self, kind: ArtifactKind, name: &str) -> ArtifactRef {
        ArtifactRef {
            kind,
            path: normalize(&self.root.join(VISUAL_DIR).join(name)),
        }
    }

    /// An artifact in the dashboard-assets directory.
    pub fn dashboard(&self, kind: ArtifactKind, name: &str) -> ArtifactRef {
        ArtifactRef {
            kind,
            path: normalize(&self.root.join(DASHBOARD_DIR).join(name)),
        }
    }
}

/// Lexically resolve `.` and `..` without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespaces_are_separate() {
        let layout = AssetLayout::from_root("/srv/app");
        let chart = layout.visual(ArtifactKind::Image, "top_states.png");
        let page = layout.dashboard(ArtifactKind::Image, "page1.png");

        assert_eq!(chart.path, Path::new("/srv/app/visual/top_states.png"));
        assert_eq!(page.path, Path::new("/srv/app/streamlit/page1.png"));
        assert_eq!(
            layout.dataset_path(),
            Path::new("/srv/app/data/cleaned/cleaned_missing_data.csv")
        );
    }

    #[test]
    fn root_is_normalized() {
        let layout = AssetLayout::from_root("/srv/app/streamlit/../.");
        assert_eq!(layout.root(), Path::new("/srv/app"));
    }

    #[test]
    fn missing_file_maps_to_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let layout = AssetLayout::from_root(dir.path());
        let pbix = layout.dashboard(ArtifactKind::Binary, "powerbi.pbix");

        assert!(!pbix.exists());
        assert!(matches!(
            pbix.read_bytes(),
            Err(ArtifactError::NotFound { path }) if path == pbix.path
        ));
    }

    #[test]
    fn reads_text_and_bytes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(VISUAL_DIR)).unwrap();
        std::fs::write(dir.path().join("visual/missing_heatmap.html"), "<div>map</div>").unwrap();

        let layout = AssetLayout::from_root(dir.path());
        let heatmap = layout.visual(ArtifactKind::Html, "missing_heatmap.html");
        assert!(heatmap.exists());
        assert_eq!(heatmap.read_text().unwrap(), "<div>map</div>");
        assert_eq!(heatmap.read_bytes().unwrap(), b"<div>map</div>");
    }
}
