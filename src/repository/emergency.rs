//! Emergency catalog store.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use super::models::EmergencyRecord;
use super::pool::AsyncSqlitePool;
use super::StoreError;
use crate::models::EmergencyEntry;
use crate::schema::emergencies;
use crate::services::guidance::EmergencyCatalog;

/// Read access to the `emergencies` table.
#[derive(Debug, Clone)]
pub struct EmergencyRepository {
    pool: AsyncSqlitePool,
}

impl EmergencyRepository {
    pub fn new(pool: AsyncSqlitePool) -> Self {
        Self { pool }
    }

    /// All entries in catalog order.
    pub async fn all(&self) -> Result<Vec<EmergencyEntry>, StoreError> {
        let mut conn = self.pool.get().await?;

        let records = emergencies::table
            .order(emergencies::id.asc())
            .select(EmergencyRecord::as_select())
            .load::<EmergencyRecord>(&mut conn)
            .await?;

        Ok(records.into_iter().map(EmergencyEntry::from).collect())
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        let mut conn = self.pool.get().await?;

        let count = emergencies::table
            .count()
            .get_result::<i64>(&mut conn)
            .await?;

        Ok(count)
    }

    /// First entry (catalog order) whose name or steps contain `query`, case-sensitively.
    ///
    /// `LIKE` narrows the candidates (it is case-insensitive, so it returns a
    /// superset); the exact rule is applied to the survivors.
    pub async fn first_match(&self, query: &str) -> Result<Option<EmergencyEntry>, StoreError> {
        let mut conn = self.pool.get().await?;
        let pattern = format!("%{}%", query);

        let candidates = emergencies::table
            .filter(
                emergencies::name
                    .like(&pattern)
                    .or(emergencies::steps.like(&pattern)),
            )
            .order(emergencies::id.asc())
            .select(EmergencyRecord::as_select())
            .load::<EmergencyRecord>(&mut conn)
            .await?;

        debug!("{} catalog candidates for {:?}", candidates.len(), query);
        Ok(candidates
            .into_iter()
            .map(EmergencyEntry::from)
            .find(|entry| entry.mentions(query)))
    }
}

#[async_trait]
impl EmergencyCatalog for EmergencyRepository {
    async fn find_first(&self, query: &str) -> Result<Option<EmergencyEntry>, StoreError> {
        self.first_match(query).await
    }
}
