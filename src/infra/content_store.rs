use std::{
    fs,
    io::ErrorKind,
    path::{Component, Path, PathBuf},
};

use crate::{domain::content::ContentRetrievalFailure, usecases::load_content::ContentSource};

/// Reads topic text files from a base directory.
#[derive(Debug, Clone)]
pub struct FsContentStore {
    base_dir: PathBuf,
}

impl FsContentStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl ContentSource for FsContentStore {
    fn read(&self, asset: &str) -> Result<String, ContentRetrievalFailure> {
        validate_asset_name(asset)?;

        let path = self.base_dir.join(asset);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ContentRetrievalFailure::NotFound {
                name: asset.to_owned(),
            },
            _ => ContentRetrievalFailure::Io {
                name: asset.to_owned(),
                source,
            },
        })
    }
}

/// Accepts only a single plain file name: no separators, no `.`/`..`, no control characters.
fn validate_asset_name(name: &str) -> Result<(), ContentRetrievalFailure> {
    let invalid = || ContentRetrievalFailure::InvalidAssetName {
        name: name.to_owned(),
    };

    if name.trim().is_empty() || name.contains('\\') || name.chars().any(char::is_control) {
        return Err(invalid());
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid()),
    }
}
