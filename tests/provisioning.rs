//! Provisioning Schema Tests
//!
//! Verifies the tables written by provisioning, inspected directly through
//! SQLite rather than through Diesel.

use std::collections::BTreeMap;

use lifeline::models::EmergencyEntry;
use lifeline::repository::{seed, AsyncSqlitePool, Provisioner};
use rusqlite::{Connection, Result as SqliteResult};

#[derive(Debug, Clone, PartialEq, Eq)]
struct ColumnInfo {
    col_type: String,
    not_null: bool,
    primary_key: bool,
}

/// Extract column info for a table
fn extract_columns(conn: &Connection, table: &str) -> SqliteResult<BTreeMap<String, ColumnInfo>> {
    let mut pragma = conn.prepare(&format!("PRAGMA table_info(\"{}\")", table))?;
    let rows = pragma.query_map([], |row| {
        Ok((
            row.get::<_, String>(1)?,
            ColumnInfo {
                col_type: row.get::<_, String>(2)?.to_uppercase(),
                not_null: row.get(3)?,
                primary_key: row.get::<_, i32>(5)? > 0,
            },
        ))
    })?;
    rows.collect()
}

fn table_names(conn: &Connection) -> SqliteResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )?;
    let names = stmt
        .query_map([], |row| row.get(0))?
        .collect::<SqliteResult<Vec<String>>>()?;
    Ok(names)
}

async fn provisioned_db() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lifeline.db");
    Provisioner::new(AsyncSqlitePool::from_path(&path))
        .provision()
        .await
        .unwrap();
    (dir, path)
}

#[tokio::test]
async fn test_schema_matches_expected_layout() {
    let (_dir, path) = provisioned_db().await;
    let conn = Connection::open(&path).unwrap();

    assert_eq!(table_names(&conn).unwrap(), vec!["emergencies", "places"]);

    let emergencies = extract_columns(&conn, "emergencies").unwrap();
    assert_eq!(
        emergencies.keys().cloned().collect::<Vec<_>>(),
        vec!["id", "name", "steps"]
    );
    assert!(emergencies["id"].primary_key);
    assert!(emergencies["steps"].not_null);

    let places = extract_columns(&conn, "places").unwrap();
    assert_eq!(places.len(), 8);
    assert_eq!(places["lat"].col_type, "REAL");
    assert_eq!(places["lon"].col_type, "REAL");
    assert!(places.values().filter(|c| !c.primary_key).all(|c| c.not_null));
}

#[tokio::test]
async fn test_seed_rows_in_catalog_order() {
    let (_dir, path) = provisioned_db().await;
    let conn = Connection::open(&path).unwrap();

    let mut stmt = conn
        .prepare("SELECT name, steps FROM emergencies ORDER BY id")
        .unwrap();
    let rows: Vec<EmergencyEntry> = stmt
        .query_map([], |row| Ok(EmergencyEntry::new(row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
        .unwrap()
        .collect::<SqliteResult<_>>()
        .unwrap();
    assert_eq!(rows, seed::emergencies());

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM places", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, seed::places().len() as i64);
}

#[tokio::test]
async fn test_category_constraint_rejects_unknown_values() {
    let (_dir, path) = provisioned_db().await;
    let conn = Connection::open(&path).unwrap();

    let result = conn.execute(
        "INSERT INTO places (city, name, category, address, phone, lat, lon) \
         VALUES ('Lahore', 'Pharmacy', 'Pharmacy', 'Mall Rd', '000', 31.5, 74.3)",
        [],
    );
    assert!(result.is_err());
}

#[tokio::test]
async fn test_reprovision_discards_manual_rows() {
    let (_dir, path) = provisioned_db().await;
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute(
            "INSERT INTO emergencies (name, steps) VALUES ('Snake Bite', 'Keep still.')",
            [],
        )
        .unwrap();
    }

    Provisioner::new(AsyncSqlitePool::from_path(&path))
        .provision()
        .await
        .unwrap();

    let conn = Connection::open(&path).unwrap();
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM emergencies WHERE name = 'Snake Bite'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 0);
}
