pub mod fractions;
pub mod params;
pub mod reading;
