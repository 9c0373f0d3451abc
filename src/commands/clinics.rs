use chrono::Local;
use serde::{Deserialize, Serialize};
use tauri::State;

use crate::models::{Clinic, DAY_ORDER};
use crate::services::{filter_engine, hours};
use crate::state::AppState;

fn find_clinic<'a>(state: &'a AppState, id: &str) -> Result<&'a Clinic, String> {
    state
        .clinics
        .iter()
        .find(|clinic| clinic.id == id)
        .ok_or_else(|| format!("unknown clinic: {}", id))
}

/// The filtered clinic subset for the map, re-derived in full from the
/// current filter selections.
#[tauri::command]
pub async fn get_clinics(state: State<'_, AppState>) -> Result<Vec<Clinic>, String> {
    let filters = state.filters.lock().map_err(|e| e.to_string())?.clone();
    let criteria = filter_engine::FilterCriteria::decode(&filters);
    Ok(filter_engine::apply_filters(
        &state.clinics,
        &criteria,
        Local::now().naive_local(),
    ))
}

#[tauri::command]
pub async fn get_clinic(state: State<'_, AppState>, id: String) -> Result<Clinic, String> {
    find_clinic(&state, &id).cloned()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursRow {
    pub day: String,
    pub hours: String,
}

/// Day-ordered hours listing for the detail sheet. Days the dataset does not
/// mention are shown as Closed.
#[tauri::command]
pub async fn get_clinic_hours(
    state: State<'_, AppState>,
    id: String,
) -> Result<Vec<HoursRow>, String> {
    let clinic = find_clinic(&state, &id)?;
    let table = match &clinic.hours {
        Some(table) => table,
        None => return Ok(vec![]),
    };

    Ok(DAY_ORDER
        .iter()
        .map(|day| HoursRow {
            day: day.to_string(),
            hours: table
                .for_day(day)
                .map(|entry| entry.display())
                .unwrap_or_else(|| "Closed".to_string()),
        })
        .collect())
}

/// Open/closed badge for the detail sheet. Spans that wrap past midnight
/// read as closed once the clock passes the closing time.
#[tauri::command]
pub async fn get_clinic_open_now(state: State<'_, AppState>, id: String) -> Result<bool, String> {
    let clinic = find_clinic(&state, &id)?;
    Ok(clinic
        .hours
        .as_ref()
        .map(|table| hours::is_open_at(table, Local::now().naive_local()))
        .unwrap_or(false))
}

/// Open indicator for map markers; unlike the detail badge this honours
/// spans that wrap past midnight.
#[tauri::command]
pub async fn is_clinic_open(state: State<'_, AppState>, id: String) -> Result<bool, String> {
    let clinic = find_clinic(&state, &id)?;
    Ok(clinic
        .hours
        .as_ref()
        .map(|table| hours::is_open_at_overnight(table, Local::now().naive_local()))
        .unwrap_or(false))
}
