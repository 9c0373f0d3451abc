use chrono::{Datelike, NaiveDateTime, NaiveTime};

use super::{geo, hours};
use crate::models::{Clinic, FilterKind, FilterSet};

/// Strongly-typed view of a [`FilterSet`], decoded once per evaluation so
/// string parsing never leaks into the per-clinic predicate.
///
/// A zero ceiling means the criterion is off; unparsable values degrade the
/// criterion to off rather than erroring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub busy_ceiling: u32,
    pub distance_ceiling_km: u32,
    pub required_amenities: Vec<String>,
    pub open_window: Option<(NaiveTime, NaiveTime)>,
    pub open_now: bool,
}

impl FilterCriteria {
    pub fn decode(set: &FilterSet) -> Self {
        let first_u32 = |kind: FilterKind| -> u32 {
            set.values(kind)
                .and_then(|values| values.first())
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(0)
        };

        let required_amenities = set
            .values(FilterKind::Amenities)
            .map(<[String]>::to_vec)
            .unwrap_or_default();

        let open_window = match set.values(FilterKind::Hours) {
            Some([start, end]) => match (hours::parse_clock(start), hours::parse_clock(end)) {
                (Some(start), Some(end)) => Some((start, end)),
                _ => None,
            },
            _ => None,
        };

        let open_now = set
            .values(FilterKind::OpenNow)
            .and_then(|values| values.first())
            .map(|value| value == "true")
            .unwrap_or(false);

        FilterCriteria {
            busy_ceiling: first_u32(FilterKind::Busy),
            distance_ceiling_km: first_u32(FilterKind::Distance),
            required_amenities,
            open_window,
            open_now,
        }
    }
}

/// Evaluate the criteria against every clinic, preserving dataset order.
/// Pure: re-derived in full on each call, never mutating its inputs.
pub fn apply_filters(
    clinics: &[Clinic],
    criteria: &FilterCriteria,
    now: NaiveDateTime,
) -> Vec<Clinic> {
    clinics
        .iter()
        .filter(|clinic| passes(clinic, criteria, now))
        .cloned()
        .collect()
}

fn passes(clinic: &Clinic, criteria: &FilterCriteria, now: NaiveDateTime) -> bool {
    // Busy ceiling: clinics at or above the ceiling are hidden.
    if criteria.busy_ceiling > 0 && clinic.busyness() >= criteria.busy_ceiling {
        return false;
    }

    // Distance is measured from the fixed town-centre reference point.
    if criteria.distance_ceiling_km > 0 {
        let dist = geo::distance_from_reference_km(clinic.latitude, clinic.longitude);
        if dist > criteria.distance_ceiling_km as f64 {
            return false;
        }
    }

    if !criteria.required_amenities.is_empty()
        && !criteria
            .required_amenities
            .iter()
            .all(|required| clinic.amenities.iter().any(|have| have == required))
    {
        return false;
    }

    if let Some((start, end)) = criteria.open_window {
        let overlaps = clinic
            .hours
            .as_ref()
            .map(|hours| hours::is_open_in_window(hours, now.weekday(), start, end))
            .unwrap_or(false);
        if !overlaps {
            return false;
        }
    }

    if criteria.open_now {
        let open = clinic
            .hours
            .as_ref()
            .map(|hours| hours::is_open_at(hours, now))
            .unwrap_or(false);
        if !open {
            return false;
        }
    }

    true
}
