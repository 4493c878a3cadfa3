//! Place directory store.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use diesel_async::RunQueryDsl;

use super::models::PlaceRecordRow;
use super::pool::AsyncSqlitePool;
use super::StoreError;
use crate::models::{CategoryFilter, PlaceRecord};
use crate::schema::places;

type BoxedPlaceQuery<'a> = places::BoxedQuery<'a, Sqlite>;

/// Read access to the `places` table. Results are always in catalog order.
#[derive(Debug, Clone)]
pub struct PlaceRepository {
    pool: AsyncSqlitePool,
}

impl PlaceRepository {
    pub fn new(pool: AsyncSqlitePool) -> Self {
        Self { pool }
    }

    /// Every place allowed by `filter`.
    pub async fn list(&self, filter: &CategoryFilter) -> Result<Vec<PlaceRecord>, StoreError> {
        self.load(Self::filtered(filter)).await
    }

    /// Places in `city` (case-insensitive exact match) allowed by `filter`.
    pub async fn in_city(
        &self,
        city: &str,
        filter: &CategoryFilter,
    ) -> Result<Vec<PlaceRecord>, StoreError> {
        // The city column is declared COLLATE NOCASE.
        let query = Self::filtered(filter).filter(places::city.eq(city.to_string()));
        self.load(query).await
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        let mut conn = self.pool.get().await?;

        let count = places::table.count().get_result::<i64>(&mut conn).await?;
        Ok(count)
    }

    fn filtered(filter: &CategoryFilter) -> BoxedPlaceQuery<'static> {
        let mut query = places::table.into_boxed();
        if !filter.is_unrestricted() {
            let labels: Vec<&'static str> = filter
                .categories()
                .into_iter()
                .map(|c| c.as_str())
                .collect();
            query = query.filter(places::category.eq_any(labels));
        }
        query
    }

    async fn load(&self, query: BoxedPlaceQuery<'static>) -> Result<Vec<PlaceRecord>, StoreError> {
        let mut conn = self.pool.get().await?;

        let rows = query
            .order(places::id.asc())
            .select(PlaceRecordRow::as_select())
            .load::<PlaceRecordRow>(&mut conn)
            .await?;

        rows.into_iter().map(PlaceRecord::try_from).collect()
    }
}
