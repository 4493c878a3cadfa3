//! Diesel row types for the catalog tables.

use diesel::prelude::*;

use super::StoreError;
use crate::models::{EmergencyEntry, PlaceCategory, PlaceRecord};
use crate::schema;

/// Emergency row from the database.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::emergencies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EmergencyRecord {
    pub id: i32,
    pub name: String,
    pub steps: String,
}

/// New emergency for insertion.
#[derive(Insertable, Debug)]
#[diesel(table_name = schema::emergencies)]
pub struct NewEmergency<'a> {
    pub name: &'a str,
    pub steps: &'a str,
}

/// Place row from the database.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::places)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PlaceRecordRow {
    pub id: i32,
    pub city: String,
    pub name: String,
    pub category: String,
    pub address: String,
    pub phone: String,
    pub lat: f64,
    pub lon: f64,
}

/// New place for insertion.
#[derive(Insertable, Debug)]
#[diesel(table_name = schema::places)]
pub struct NewPlace<'a> {
    pub city: &'a str,
    pub name: &'a str,
    pub category: &'a str,
    pub address: &'a str,
    pub phone: &'a str,
    pub lat: f64,
    pub lon: f64,
}

impl From<EmergencyRecord> for EmergencyEntry {
    fn from(record: EmergencyRecord) -> Self {
        EmergencyEntry {
            name: record.name,
            steps: record.steps,
        }
    }
}

impl TryFrom<PlaceRecordRow> for PlaceRecord {
    type Error = StoreError;

    fn try_from(row: PlaceRecordRow) -> Result<Self, Self::Error> {
        let category = PlaceCategory::from_str(&row.category)
            .ok_or_else(|| StoreError::InvalidCategory(row.category.clone()))?;
        Ok(PlaceRecord {
            city: row.city,
            name: row.name,
            category,
            address: row.address,
            phone: row.phone,
            latitude: row.lat,
            longitude: row.lon,
        })
    }
}

impl<'a> From<&'a PlaceRecord> for NewPlace<'a> {
    fn from(place: &'a PlaceRecord) -> Self {
        NewPlace {
            city: &place.city,
            name: &place.name,
            category: place.category.as_str(),
            address: &place.address,
            phone: &place.phone,
            lat: place.latitude,
            lon: place.longitude,
        }
    }
}

impl<'a> From<&'a EmergencyEntry> for NewEmergency<'a> {
    fn from(entry: &'a EmergencyEntry) -> Self {
        NewEmergency {
            name: &entry.name,
            steps: &entry.steps,
        }
    }
}
