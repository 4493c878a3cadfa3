//! Emergency service locations and coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of emergency service a place offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    Hospital,
    PoliceStation,
    FireStation,
}

impl PlaceCategory {
    pub const ALL: [PlaceCategory; 3] = [Self::Hospital, Self::PoliceStation, Self::FireStation];

    /// Label stored in the database and shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hospital => "Hospital",
            Self::PoliceStation => "Police Station",
            Self::FireStation => "Fire Station",
        }
    }

    /// Parse a stored label or a CLI-style name (`police-station`, `fire_station`).
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "hospital" => Some(Self::Hospital),
            "policestation" | "police" => Some(Self::PoliceStation),
            "firestation" | "fire" => Some(Self::FireStation),
            _ => None,
        }
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allow-list of categories; the default allows every category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    only: Option<Vec<PlaceCategory>>,
}

impl CategoryFilter {
    /// Allow every category.
    pub fn all() -> Self {
        Self::default()
    }

    /// Allow only the given categories. An empty list means "no restriction".
    pub fn only(categories: impl IntoIterator<Item = PlaceCategory>) -> Self {
        let mut list: Vec<PlaceCategory> = Vec::new();
        for category in categories {
            if !list.contains(&category) {
                list.push(category);
            }
        }
        if list.is_empty() {
            Self::all()
        } else {
            Self { only: Some(list) }
        }
    }

    pub fn allows(&self, category: PlaceCategory) -> bool {
        match &self.only {
            None => true,
            Some(list) => list.contains(&category),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.only.is_none()
    }

    /// The allowed categories, in the order they were given.
    pub fn categories(&self) -> Vec<PlaceCategory> {
        match &self.only {
            None => PlaceCategory::ALL.to_vec(),
            Some(list) => list.clone(),
        }
    }
}

/// Error for a user-supplied point outside the valid latitude/longitude range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid coordinate ({latitude}, {longitude}): latitude must be within [-90, 90] and longitude within [-180, 180]")]
pub struct InvalidCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Build a point, rejecting out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if valid {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(InvalidCoordinate {
                latitude,
                longitude,
            })
        }
    }

    /// Build a point without range checks.
    pub const fn unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// An emergency service location from the place directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub city: String,
    pub name: String,
    pub category: PlaceCategory,
    pub address: String,
    pub phone: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl PlaceRecord {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::unchecked(self.latitude, self.longitude)
    }

    /// Case-insensitive (ASCII) comparison against a city name.
    pub fn is_in_city(&self, city: &str) -> bool {
        self.city.eq_ignore_ascii_case(city)
    }
}

/// A place annotated with its distance from a query point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyPlace {
    pub place: PlaceRecord,
    pub distance_km: f64,
}
