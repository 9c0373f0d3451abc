use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::FilterSet;

const FILTERS_FILE: &str = "filters.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("filter store io: {0}")]
    Io(#[from] std::io::Error),
    #[error("filter store encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}

pub fn filters_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config").join(FILTERS_FILE)
}

/// Restore the last-saved filter selections. A missing, unreadable, or
/// malformed store reads as "no saved filters".
pub fn load_filters(path: &Path) -> Option<FilterSet> {
    if !path.exists() {
        return None;
    }
    match read_filters(path) {
        Ok(filters) => Some(filters),
        Err(e) => {
            log::warn!("ignoring saved filters at {}: {}", path.display(), e);
            None
        }
    }
}

fn read_filters(path: &Path) -> Result<FilterSet, StorageError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Persist the current filter selections. Write failures are logged and
/// dropped; the in-memory state stays authoritative for this session.
pub fn save_filters(path: &Path, filters: &FilterSet) {
    if let Err(e) = write_filters(path, filters) {
        log::warn!("failed to save filters to {}: {}", path.display(), e);
    }
}

fn write_filters(path: &Path, filters: &FilterSet) -> Result<(), StorageError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, serde_json::to_string_pretty(filters)?)?;
    Ok(())
}

/// Forget the saved selections entirely.
pub fn clear_filters(path: &Path) {
    if !path.exists() {
        return;
    }
    if let Err(e) = fs::remove_file(path) {
        log::warn!("failed to clear saved filters at {}: {}", path.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("seegp-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn round_trips_saved_filters() {
        let dir = scratch_dir("roundtrip");
        let path = filters_path(&dir);

        let mut filters = FilterSet::new();
        filters.toggle_busy();
        filters.toggle_amenity("Parking");

        save_filters(&path, &filters);
        assert_eq!(load_filters(&path), Some(filters));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_store_reads_as_none() {
        let dir = scratch_dir("missing");
        assert_eq!(load_filters(&filters_path(&dir)), None);
    }

    #[test]
    fn malformed_store_reads_as_none() {
        let dir = scratch_dir("malformed");
        let path = filters_path(&dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        assert_eq!(load_filters(&path), None);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn clear_removes_the_store() {
        let dir = scratch_dir("clear");
        let path = filters_path(&dir);

        save_filters(&path, &FilterSet::new());
        assert!(path.exists());
        clear_filters(&path);
        assert!(!path.exists());
        // Clearing an absent store is a no-op.
        clear_filters(&path);

        let _ = fs::remove_dir_all(&dir);
    }
}
