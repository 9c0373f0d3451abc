use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::clinic::DISTANCE_OPTIONS_KM;

/// Busy ceiling applied by the "Hide Busy GPs" toggle.
pub const DEFAULT_BUSY_CEILING: u32 = 4;

/// The five filter criteria. Serde names double as the keys of the persisted
/// JSON mapping, so stored preferences from earlier releases stay readable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FilterKind {
    #[serde(rename = "busy")]
    Busy,
    #[serde(rename = "distance")]
    Distance,
    #[serde(rename = "amenities")]
    Amenities,
    #[serde(rename = "hours")]
    Hours,
    #[serde(rename = "openNow")]
    OpenNow,
}

/// The user's active filter selections, in wire form: each present criterion
/// maps to a non-empty sequence of string-encoded values.
///
/// Every mutation below maintains the pruning invariant: a criterion whose
/// value sequence would become empty is removed from the map instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet(BTreeMap<FilterKind, Vec<String>>);

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self, kind: FilterKind) -> Option<&[String]> {
        self.0.get(&kind).map(Vec::as_slice)
    }

    /// Badge number shown on the filter button: total selected values across
    /// all criteria.
    pub fn active_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Apply a partial update from the filter sheet. Keys with empty value
    /// sequences are deletions.
    pub fn merge(&mut self, patch: BTreeMap<FilterKind, Vec<String>>) {
        for (kind, values) in patch {
            if values.is_empty() {
                self.0.remove(&kind);
            } else {
                self.0.insert(kind, values);
            }
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Two-state toggle for the "Hide Busy GPs" row.
    pub fn toggle_busy(&mut self) {
        if self.0.remove(&FilterKind::Busy).is_none() {
            self.0
                .insert(FilterKind::Busy, vec![DEFAULT_BUSY_CEILING.to_string()]);
        }
    }

    /// Two-state toggle for the "Is Open" row.
    pub fn toggle_open_now(&mut self) {
        if self.0.remove(&FilterKind::OpenNow).is_none() {
            self.0.insert(FilterKind::OpenNow, vec!["true".to_string()]);
        }
    }

    /// Set-toggle: re-selecting a required amenity removes it, selecting a
    /// new one appends it.
    pub fn toggle_amenity(&mut self, name: &str) {
        let mut values = self.0.remove(&FilterKind::Amenities).unwrap_or_default();
        if let Some(pos) = values.iter().position(|v| v == name) {
            values.remove(pos);
        } else {
            values.push(name.to_string());
        }
        if !values.is_empty() {
            self.0.insert(FilterKind::Amenities, values);
        }
    }

    /// Exclusive choice: a new distance ceiling replaces the previous one.
    pub fn set_distance(&mut self, km: u32) {
        self.0.insert(FilterKind::Distance, vec![km.to_string()]);
    }

    /// Exclusive choice: a new window replaces the previous one. The two
    /// values are the window's start and end clock times.
    pub fn set_hours_window(&mut self, start: &str, end: &str) {
        self.0
            .insert(FilterKind::Hours, vec![start.to_string(), end.to_string()]);
    }

    /// True if any stored value sequence is empty; used by tests to assert
    /// the pruning invariant.
    #[cfg(test)]
    fn has_empty_values(&self) -> bool {
        self.0.values().any(Vec::is_empty)
    }
}

/// Validate a distance ceiling against the offered presets.
pub fn is_distance_option(km: u32) -> bool {
    DISTANCE_OPTIONS_KM.contains(&km)
}
