use std::collections::BTreeMap;

use tauri::State;

use crate::models::{
    hours_option_window, is_distance_option, Amenity, FilterKind, FilterSet, HOURS_OPTIONS,
};
use crate::state::AppState;
use crate::storage;

/// Run a mutation against the shared filter set, then persist the result.
/// Persistence failures are swallowed inside the storage layer.
fn mutate(state: &AppState, apply: impl FnOnce(&mut FilterSet)) -> Result<FilterSet, String> {
    let updated = {
        let mut filters = state.filters.lock().map_err(|e| e.to_string())?;
        apply(&mut filters);
        filters.clone()
    };
    storage::save_filters(&state.filters_path, &updated);
    Ok(updated)
}

#[tauri::command]
pub async fn get_filters(state: State<'_, AppState>) -> Result<FilterSet, String> {
    Ok(state.filters.lock().map_err(|e| e.to_string())?.clone())
}

/// Badge number for the filter button.
#[tauri::command]
pub async fn get_active_filter_count(state: State<'_, AppState>) -> Result<usize, String> {
    Ok(state
        .filters
        .lock()
        .map_err(|e| e.to_string())?
        .active_count())
}

/// Merge a partial update from the filter sheet. Keys mapped to empty value
/// sequences are removed.
#[tauri::command]
pub async fn update_filters(
    state: State<'_, AppState>,
    patch: BTreeMap<FilterKind, Vec<String>>,
) -> Result<FilterSet, String> {
    mutate(&state, |filters| filters.merge(patch))
}

/// Reset to no filters and forget the saved selections.
#[tauri::command]
pub async fn reset_filters(state: State<'_, AppState>) -> Result<FilterSet, String> {
    let updated = {
        let mut filters = state.filters.lock().map_err(|e| e.to_string())?;
        filters.clear();
        filters.clone()
    };
    storage::clear_filters(&state.filters_path);
    Ok(updated)
}

#[tauri::command]
pub async fn toggle_busy_filter(state: State<'_, AppState>) -> Result<FilterSet, String> {
    mutate(&state, FilterSet::toggle_busy)
}

#[tauri::command]
pub async fn toggle_open_now_filter(state: State<'_, AppState>) -> Result<FilterSet, String> {
    mutate(&state, FilterSet::toggle_open_now)
}

#[tauri::command]
pub async fn toggle_amenity_filter(
    state: State<'_, AppState>,
    amenity: String,
) -> Result<FilterSet, String> {
    if !Amenity::ALL.iter().any(|a| a.label() == amenity) {
        return Err(format!("unknown amenity: {}", amenity));
    }
    mutate(&state, |filters| filters.toggle_amenity(&amenity))
}

#[tauri::command]
pub async fn set_distance_filter(
    state: State<'_, AppState>,
    km: u32,
) -> Result<FilterSet, String> {
    if !is_distance_option(km) {
        return Err(format!("unsupported distance ceiling: {} km", km));
    }
    mutate(&state, |filters| filters.set_distance(km))
}

/// Select one of the preset hour windows; the label is split into the two
/// window endpoints stored on the criteria set.
#[tauri::command]
pub async fn set_hours_filter(
    state: State<'_, AppState>,
    option: String,
) -> Result<FilterSet, String> {
    let (start, end) =
        hours_option_window(&option).ok_or_else(|| format!("unknown hours option: {}", option))?;
    mutate(&state, |filters| filters.set_hours_window(&start, &end))
}

#[tauri::command]
pub async fn get_amenity_options() -> Result<Vec<String>, String> {
    Ok(Amenity::ALL.iter().map(|a| a.label().to_string()).collect())
}

#[tauri::command]
pub async fn get_hours_options() -> Result<Vec<String>, String> {
    Ok(HOURS_OPTIONS.iter().map(|s| s.to_string()).collect())
}
