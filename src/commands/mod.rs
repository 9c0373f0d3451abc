pub mod clinics;
pub mod filters;
pub mod map;
