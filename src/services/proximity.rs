//! Nearest-place ranking and city lookups over the place directory.

use tracing::debug;

use crate::geo::distance_km;
use crate::models::{CategoryFilter, GeoPoint, NearbyPlace, PlaceRecord};
use crate::repository::{PlaceRepository, StoreError};

/// Number of places returned by a coordinate search unless told otherwise.
pub const DEFAULT_NEAREST_LIMIT: usize = 10;

/// The `k` places closest to `point`, nearest first.
///
/// Equal distances keep catalog order.
pub fn nearest(point: GeoPoint, places: &[PlaceRecord], k: usize) -> Vec<NearbyPlace> {
    let mut ranked: Vec<NearbyPlace> = places
        .iter()
        .map(|place| NearbyPlace {
            distance_km: distance_km(point, place.location()),
            place: place.clone(),
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked.truncate(k);
    ranked
}

/// Places whose city equals `city` (ASCII case-insensitive), in catalog order.
pub fn by_city(city: &str, places: &[PlaceRecord], filter: &CategoryFilter) -> Vec<PlaceRecord> {
    places
        .iter()
        .filter(|place| place.is_in_city(city) && filter.allows(place.category))
        .cloned()
        .collect()
}

/// Where the user says they are.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceLookup {
    Coordinates(GeoPoint),
    City(String),
    Nowhere,
}

impl PlaceLookup {
    /// Coordinates take precedence over a city; a blank city counts as absent.
    pub fn from_inputs(point: Option<GeoPoint>, city: Option<&str>) -> Self {
        match (point, city.map(str::trim)) {
            (Some(point), _) => Self::Coordinates(point),
            (None, Some(city)) if !city.is_empty() => Self::City(city.to_string()),
            _ => Self::Nowhere,
        }
    }
}

/// Outcome of a place lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceResults {
    /// Ranked by distance from the given coordinates.
    Nearest(Vec<NearbyPlace>),
    /// All matches for a city, in catalog order.
    InCity(Vec<PlaceRecord>),
    /// Neither coordinates nor a city were given.
    NoLocation,
}

impl PlaceResults {
    pub fn len(&self) -> usize {
        match self {
            Self::Nearest(list) => list.len(),
            Self::InCity(list) => list.len(),
            Self::NoLocation => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolves a [`PlaceLookup`] against the place directory store.
#[derive(Debug, Clone)]
pub struct PlaceFinder {
    places: PlaceRepository,
}

impl PlaceFinder {
    pub fn new(places: PlaceRepository) -> Self {
        Self { places }
    }

    pub async fn find(
        &self,
        lookup: &PlaceLookup,
        filter: &CategoryFilter,
        limit: usize,
    ) -> Result<PlaceResults, StoreError> {
        match lookup {
            PlaceLookup::Coordinates(point) => {
                let candidates = self.places.list(filter).await?;
                debug!("Ranking {} places around {}", candidates.len(), point);
                Ok(PlaceResults::Nearest(nearest(*point, &candidates, limit)))
            }
            PlaceLookup::City(city) => {
                let found = self.places.in_city(city, filter).await?;
                debug!("{} places in {}", found.len(), city);
                Ok(PlaceResults::InCity(found))
            }
            PlaceLookup::Nowhere => Ok(PlaceResults::NoLocation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlaceCategory;
    use crate::repository::{seed, AsyncSqlitePool, Provisioner};
    use tempfile::tempdir;

    fn place(city: &str, name: &str, category: PlaceCategory, lat: f64, lon: f64) -> PlaceRecord {
        PlaceRecord {
            city: city.to_string(),
            name: name.to_string(),
            category,
            address: "Main Rd".to_string(),
            phone: "1122".to_string(),
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn test_nearest_orders_and_limits() {
        let origin = GeoPoint::unchecked(31.5204, 74.3587);
        let places = vec![
            place("Karachi", "Far", PlaceCategory::Hospital, 24.86, 67.03),
            place("Lahore", "Near", PlaceCategory::Hospital, 31.52, 74.36),
            place("Lahore", "Middle", PlaceCategory::FireStation, 31.60, 74.30),
        ];

        let result = nearest(origin, &places, 2);
        let names: Vec<&str> = result.iter().map(|p| p.place.name.as_str()).collect();
        assert_eq!(names, vec!["Near", "Middle"]);
        assert!(result[0].distance_km <= result[1].distance_km);

        assert_eq!(nearest(origin, &places, 10).len(), 3);
        assert!(nearest(origin, &[], 10).is_empty());
        assert!(nearest(origin, &places, 0).is_empty());
    }

    #[test]
    fn test_nearest_is_sorted_subset_for_seed_catalog() {
        let places = seed::places();
        for origin in [
            GeoPoint::unchecked(31.5204, 74.3587),
            GeoPoint::unchecked(24.8607, 67.0011),
            GeoPoint::unchecked(-33.86, 151.21),
        ] {
            for k in [0, 1, 5, 10, 100] {
                let result = nearest(origin, &places, k);
                assert!(result.len() <= k);
                assert_eq!(result.len(), k.min(places.len()));
                assert!(result
                    .windows(2)
                    .all(|w| w[0].distance_km <= w[1].distance_km));
                assert!(result.iter().all(|r| places.contains(&r.place)));
            }
        }
    }

    #[test]
    fn test_nearest_ties_keep_catalog_order() {
        let origin = GeoPoint::unchecked(0.0, 0.0);
        let places = vec![
            place("A", "first", PlaceCategory::Hospital, 1.0, 0.0),
            place("B", "second", PlaceCategory::Hospital, -1.0, 0.0),
            place("C", "third", PlaceCategory::Hospital, 1.0, 0.0),
        ];
        let names: Vec<String> = nearest(origin, &places, 3)
            .into_iter()
            .map(|p| p.place.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_by_city() {
        let places = seed::places();

        let karachi = by_city("karachi", &places, &CategoryFilter::all());
        assert!(!karachi.is_empty());
        assert!(karachi.iter().all(|p| p.city == "Karachi"));

        assert!(by_city("Nowhere", &places, &CategoryFilter::all()).is_empty());

        let hospitals = by_city(
            "Lahore",
            &places,
            &CategoryFilter::only([PlaceCategory::Hospital]),
        );
        assert_eq!(hospitals.len(), 1);
        assert_eq!(hospitals[0].name, "Mayo Hospital");
    }

    #[test]
    fn test_lookup_from_inputs() {
        let point = GeoPoint::unchecked(31.5, 74.3);
        assert_eq!(
            PlaceLookup::from_inputs(Some(point), Some("Lahore")),
            PlaceLookup::Coordinates(point)
        );
        assert_eq!(
            PlaceLookup::from_inputs(None, Some(" Lahore ")),
            PlaceLookup::City("Lahore".to_string())
        );
        assert_eq!(PlaceLookup::from_inputs(None, Some("   ")), PlaceLookup::Nowhere);
        assert_eq!(PlaceLookup::from_inputs(None, None), PlaceLookup::Nowhere);
    }

    #[tokio::test]
    async fn test_finder_matches_pure_functions() {
        let dir = tempdir().unwrap();
        let pool = AsyncSqlitePool::from_path(&dir.path().join("test.db"));
        Provisioner::new(pool.clone()).provision().await.unwrap();
        let finder = PlaceFinder::new(PlaceRepository::new(pool));
        let places = seed::places();
        let all = CategoryFilter::all();

        let origin = GeoPoint::unchecked(33.6844, 73.0479);
        let found = finder
            .find(&PlaceLookup::Coordinates(origin), &all, 3)
            .await
            .unwrap();
        assert_eq!(found, PlaceResults::Nearest(nearest(origin, &places, 3)));

        let found = finder
            .find(&PlaceLookup::City("KARACHI".to_string()), &all, 3)
            .await
            .unwrap();
        assert_eq!(found, PlaceResults::InCity(by_city("karachi", &places, &all)));

        let found = finder.find(&PlaceLookup::Nowhere, &all, 3).await.unwrap();
        assert_eq!(found, PlaceResults::NoLocation);
        assert!(found.is_empty());
    }
}
