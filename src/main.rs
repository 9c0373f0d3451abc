// Prevents additional console window on Windows (silent launch).
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod commands;
mod models;
mod services;
mod state;
mod storage;

use std::sync::Mutex;
use tauri::Manager;

fn main() {
    env_logger::init();

    tauri::Builder::default()
        .setup(|app| {
            let app_handle = app.handle();
            let data_dir = app_handle
                .path()
                .app_data_dir()
                .expect("Failed to get app data dir");
            std::fs::create_dir_all(&data_dir).expect("Failed to create data directory");

            let clinics = state::load_clinics().expect("Failed to load bundled clinic dataset");
            log::info!("loaded {} clinics from the bundled dataset", clinics.len());

            // Restore the user's last filter selections; a failed read just
            // means starting unfiltered.
            let filters_path = storage::filters_path(&data_dir);
            let filters = storage::load_filters(&filters_path).unwrap_or_default();
            if !filters.is_empty() {
                log::info!("restored {} saved filter values", filters.active_count());
            }

            app.manage(state::AppState {
                clinics,
                filters: Mutex::new(filters),
                filters_path,
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Clinic commands
            commands::clinics::get_clinics,
            commands::clinics::get_clinic,
            commands::clinics::get_clinic_hours,
            commands::clinics::get_clinic_open_now,
            commands::clinics::is_clinic_open,
            // Filter commands
            commands::filters::get_filters,
            commands::filters::get_active_filter_count,
            commands::filters::update_filters,
            commands::filters::reset_filters,
            commands::filters::toggle_busy_filter,
            commands::filters::toggle_open_now_filter,
            commands::filters::toggle_amenity_filter,
            commands::filters::set_distance_filter,
            commands::filters::set_hours_filter,
            commands::filters::get_amenity_options,
            commands::filters::get_hours_options,
            // Map commands
            commands::map::get_initial_region,
            commands::map::focus_clinic,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
