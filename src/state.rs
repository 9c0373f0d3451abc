use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::models::{Clinic, FilterSet};

/// Application state managed by the Tauri runtime. The clinic records are
/// loaded once and never mutated; the filter set is the only mutable piece
/// and is only touched by sequential command handlers.
pub struct AppState {
    pub clinics: Vec<Clinic>,
    pub filters: Mutex<FilterSet>,
    pub filters_path: PathBuf,
}

/// Deserialize the bundled clinic dataset.
pub fn load_clinics() -> Result<Vec<Clinic>> {
    let clinics: Vec<Clinic> = serde_json::from_str(include_str!("../data/clinics.json"))
        .context("bundled clinic dataset is malformed")?;
    Ok(clinics)
}
