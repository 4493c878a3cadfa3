//! Catalog provisioning: drop-and-recreate with the fixed seed data.

use diesel_async::{AsyncConnection, RunQueryDsl, SimpleAsyncConnection};
use tracing::{debug, info};

use super::models::{NewEmergency, NewPlace};
use super::pool::{AsyncSqlitePool, DieselError};
use super::{seed, StoreError};
use crate::models::{EmergencyEntry, PlaceRecord};
use crate::schema::{emergencies, places};

const SQLITE_SCHEMA: &str = r#"
DROP TABLE IF EXISTS emergencies;
CREATE TABLE emergencies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    steps TEXT NOT NULL
);

DROP TABLE IF EXISTS places;
CREATE TABLE places (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    city TEXT NOT NULL COLLATE NOCASE,
    name TEXT NOT NULL,
    category TEXT NOT NULL CHECK (category IN ('Hospital', 'Police Station', 'Fire Station')),
    address TEXT NOT NULL,
    phone TEXT NOT NULL,
    lat REAL NOT NULL,
    lon REAL NOT NULL
);
CREATE INDEX idx_places_city ON places(city);
"#;

/// Builds (or rebuilds) both catalogs in a SQLite database.
#[derive(Debug, Clone)]
pub struct Provisioner {
    pool: AsyncSqlitePool,
}

impl Provisioner {
    pub fn new(pool: AsyncSqlitePool) -> Self {
        Self { pool }
    }

    /// Replace both catalogs with the built-in seed data.
    pub async fn provision(&self) -> Result<(), StoreError> {
        self.provision_with(&seed::emergencies(), &seed::places())
            .await
    }

    /// Replace both catalogs with the given entries, preserving their order.
    pub async fn provision_with(
        &self,
        entries: &[EmergencyEntry],
        places_list: &[PlaceRecord],
    ) -> Result<(), StoreError> {
        if let Some(parent) = self.pool.database_path().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let new_emergencies: Vec<NewEmergency<'_>> = entries.iter().map(NewEmergency::from).collect();
        let new_places: Vec<NewPlace<'_>> = places_list.iter().map(NewPlace::from).collect();

        let mut conn = self.pool.get().await?;
        conn.transaction(|conn| {
            Box::pin(async move {
                conn.batch_execute(SQLITE_SCHEMA).await?;

                // One row per statement; ids follow input order.
                for row in &new_emergencies {
                    diesel::insert_into(emergencies::table)
                        .values(row)
                        .execute(conn)
                        .await?;
                }
                for row in &new_places {
                    diesel::insert_into(places::table)
                        .values(row)
                        .execute(conn)
                        .await?;
                }
                Ok::<(), DieselError>(())
            })
        })
        .await?;

        info!(
            "Provisioned {} emergencies and {} places into {}",
            entries.len(),
            places_list.len(),
            self.pool.database_path().display()
        );
        Ok(())
    }

    /// Provision only if the database file does not exist yet.
    ///
    /// Returns `true` when provisioning ran.
    pub async fn ensure_provisioned(&self) -> Result<bool, StoreError> {
        let path = self.pool.database_path();
        if path.exists() {
            debug!("Database already present at {}", path.display());
            return Ok(false);
        }
        self.provision().await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{EmergencyRepository, PlaceRepository};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_provision_is_repeatable() {
        let dir = tempdir().unwrap();
        let pool = AsyncSqlitePool::from_path(&dir.path().join("lifeline.db"));
        let provisioner = Provisioner::new(pool.clone());

        provisioner.provision().await.unwrap();
        provisioner.provision().await.unwrap();

        let emergencies = EmergencyRepository::new(pool.clone());
        let places = PlaceRepository::new(pool);
        assert_eq!(emergencies.count().await.unwrap(), seed::emergencies().len() as i64);
        assert_eq!(places.count().await.unwrap(), seed::places().len() as i64);
    }

    #[tokio::test]
    async fn test_provision_with_keeps_every_row_in_order() {
        let dir = tempdir().unwrap();
        let pool = AsyncSqlitePool::from_path(&dir.path().join("lifeline.db"));
        let entries = vec![
            EmergencyEntry::new("Stroke", "Use the FAST method."),
            EmergencyEntry::new("Burns", "Cool the burn."),
            EmergencyEntry::new("Fracture", "Keep the limb still."),
        ];
        let mut place_list = seed::places();
        place_list.reverse();

        Provisioner::new(pool.clone())
            .provision_with(&entries, &place_list)
            .await
            .unwrap();

        assert_eq!(EmergencyRepository::new(pool.clone()).all().await.unwrap(), entries);
        let stored = PlaceRepository::new(pool)
            .list(&crate::models::CategoryFilter::all())
            .await
            .unwrap();
        assert_eq!(stored, place_list);
    }

    #[tokio::test]
    async fn test_ensure_provisioned_only_when_missing() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested").join("lifeline.db");
        let pool = AsyncSqlitePool::from_path(&db_path);
        let provisioner = Provisioner::new(pool.clone());

        assert!(provisioner.ensure_provisioned().await.unwrap());
        assert!(db_path.exists());

        // Replace contents, then make sure a second call leaves them alone.
        provisioner
            .provision_with(&[EmergencyEntry::new("Only", "One entry")], &[])
            .await
            .unwrap();
        assert!(!provisioner.ensure_provisioned().await.unwrap());

        let repo = EmergencyRepository::new(pool);
        let all = repo.all().await.unwrap();
        assert_eq!(all, vec![EmergencyEntry::new("Only", "One entry")]);
    }
}
