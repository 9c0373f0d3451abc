pub mod filter_engine;
pub mod geo;
pub mod hours;
