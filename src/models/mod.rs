//! Data models for lifeline.

mod emergency;
mod place;

pub use emergency::EmergencyEntry;
pub use place::{CategoryFilter, GeoPoint, InvalidCoordinate, NearbyPlace, PlaceCategory, PlaceRecord};
