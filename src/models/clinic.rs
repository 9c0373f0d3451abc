use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Weekday order used by the detail sheet's hours table.
pub const DAY_ORDER: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One weekday's entry in a clinic's hours table: either an opening/closing
/// span or the bare "Closed" sentinel carried through from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayHours {
    Span { opening: String, closing: String },
    Closed(String),
}

impl DayHours {
    pub fn is_closed(&self) -> bool {
        matches!(self, DayHours::Closed(_))
    }

    /// Display text for the hours table row.
    pub fn display(&self) -> String {
        match self {
            DayHours::Span { opening, closing } => format!("{} - {}", opening, closing),
            DayHours::Closed(_) => "Closed".to_string(),
        }
    }
}

/// Weekly hours table keyed by weekday name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hours(pub HashMap<String, DayHours>);

impl Hours {
    /// Weekday lookup, tolerant of key casing in the dataset.
    pub fn for_day(&self, day: &str) -> Option<&DayHours> {
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(day))
            .map(|(_, entry)| entry)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clinic {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub busy: Option<u32>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub hours: Option<Hours>,
}

impl Clinic {
    /// Busyness score; clinics without one count as not busy.
    pub fn busyness(&self) -> u32 {
        self.busy.unwrap_or(0)
    }
}

/// Closed vocabulary of clinic amenities, in the order the filter sheet
/// lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amenity {
    Hours24,
    AccAccredited,
    AccProvider,
    Accessible,
    AccidentInjuryTreatment,
    Appointment,
    AppointmentOnly,
    Dental,
    FemaleDoctor,
    FluVaccine,
    GpServices,
    OpenWeekends,
    Parking,
    Pharmacy,
    Physio,
    UrgentCare,
    WalkIn,
    Xray,
}

impl Amenity {
    pub const ALL: [Amenity; 18] = [
        Amenity::Hours24,
        Amenity::AccAccredited,
        Amenity::AccProvider,
        Amenity::Accessible,
        Amenity::AccidentInjuryTreatment,
        Amenity::Appointment,
        Amenity::AppointmentOnly,
        Amenity::Dental,
        Amenity::FemaleDoctor,
        Amenity::FluVaccine,
        Amenity::GpServices,
        Amenity::OpenWeekends,
        Amenity::Parking,
        Amenity::Pharmacy,
        Amenity::Physio,
        Amenity::UrgentCare,
        Amenity::WalkIn,
        Amenity::Xray,
    ];

    /// The exact string used in clinic records and filter values.
    pub fn label(self) -> &'static str {
        match self {
            Amenity::Hours24 => "24 Hours",
            Amenity::AccAccredited => "ACC Accredited",
            Amenity::AccProvider => "ACC Provider",
            Amenity::Accessible => "Accessible",
            Amenity::AccidentInjuryTreatment => "Accident and injury treatment",
            Amenity::Appointment => "Appointment",
            Amenity::AppointmentOnly => "Appointment Only",
            Amenity::Dental => "Dental",
            Amenity::FemaleDoctor => "Female Doctor",
            Amenity::FluVaccine => "Flu Vaccine",
            Amenity::GpServices => "GP Services",
            Amenity::OpenWeekends => "Open Weekends",
            Amenity::Parking => "Parking",
            Amenity::Pharmacy => "Pharmacy",
            Amenity::Physio => "Physio",
            Amenity::UrgentCare => "Urgent care",
            Amenity::WalkIn => "Walk In",
            Amenity::Xray => "X-ray",
        }
    }
}

/// Preset time windows offered by the hours filter.
pub const HOURS_OPTIONS: [&str; 13] = [
    "Open 24 hours",
    "8:00am - 11:00pm",
    "8:00am - 2:00pm",
    "8:00am - 5:00pm",
    "8:00am - 6:00pm",
    "8:00am - 8:00pm",
    "8:30am - 5:00pm",
    "8:30am - 5:30pm",
    "8:30am - 6:00pm",
    "8:30am - 7:00pm",
    "9:00am - 1:00pm",
    "9:00am - 4:00pm",
    "9:00am - 5:00pm",
];

/// Distance ceilings offered by the distance filter, in kilometres.
pub const DISTANCE_OPTIONS_KM: [u32; 3] = [1, 5, 10];

/// Split a preset label into its two window endpoints. "Open 24 hours"
/// expands to a window covering the whole day.
pub fn hours_option_window(label: &str) -> Option<(String, String)> {
    if label.trim().eq_ignore_ascii_case("Open 24 hours") {
        return Some(("12:00am".to_string(), "11:59pm".to_string()));
    }
    let (start, end) = label.split_once(" - ")?;
    Some((start.trim().to_string(), end.trim().to_string()))
}
