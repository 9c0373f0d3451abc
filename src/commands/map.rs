use serde::{Deserialize, Serialize};
use tauri::State;

use crate::services::geo;
use crate::state::AppState;

/// Camera region contract shared with the map collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

/// Startup camera: the fixed town-centre reference point.
#[tauri::command]
pub async fn get_initial_region() -> Result<MapRegion, String> {
    Ok(MapRegion {
        latitude: geo::REFERENCE_LAT,
        longitude: geo::REFERENCE_LNG,
        latitude_delta: 0.1,
        longitude_delta: 0.1,
    })
}

/// Camera target when a marker is tapped, nudged south so the detail sheet
/// does not cover the marker.
#[tauri::command]
pub async fn focus_clinic(state: State<'_, AppState>, id: String) -> Result<MapRegion, String> {
    let clinic = state
        .clinics
        .iter()
        .find(|clinic| clinic.id == id)
        .ok_or_else(|| format!("unknown clinic: {}", id))?;

    Ok(MapRegion {
        latitude: clinic.latitude - 0.0075,
        longitude: clinic.longitude,
        latitude_delta: 0.05,
        longitude_delta: 0.05,
    })
}
