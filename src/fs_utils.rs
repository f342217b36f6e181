use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::constants::OUTPUT_DIR_NAME;
use crate::error::{HeroImageError, Result};
use crate::models::ImageSpec;

/// `public/assets` next to this crate's manifest.
pub fn default_output_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(OUTPUT_DIR_NAME)
}

pub async fn ensure_output_dir(path: &Path) -> Result<PathBuf> {
    fs::create_dir_all(path)
        .await
        .map_err(|source| HeroImageError::OutputDir {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(path.to_path_buf())
}

pub fn output_path(dir: &Path, filename: &str) -> PathBuf {
    dir.join(filename)
}

/// Accepts only plain file names that stay inside the directory they are
/// joined onto.
pub fn sanitize_file_name(file_name: &str) -> Option<String> {
    let trimmed = file_name.trim();
    if trimmed.is_empty()
        || trimmed.contains(['/', '\\'])
        || trimmed.contains("..")
        || trimmed.contains('\0')
    {
        return None;
    }

    Some(trimmed.to_string())
}

/// Filenames that appear more than once, in first-repeat order.
pub fn duplicate_file_names(specs: &[ImageSpec]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for spec in specs {
        if !seen.insert(spec.filename.as_str()) && !duplicates.contains(&spec.filename) {
            duplicates.push(spec.filename.clone());
        }
    }
    duplicates
}
