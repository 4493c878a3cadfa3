//! Query-time services sitting between the stores and the presentation layer.

pub mod guidance;
pub mod proximity;

pub use guidance::{EmergencyCatalog, Guidance, GuidanceResolver, GuidanceSource};
pub use proximity::{by_city, nearest, PlaceFinder, PlaceLookup, PlaceResults, DEFAULT_NEAREST_LIMIT};
