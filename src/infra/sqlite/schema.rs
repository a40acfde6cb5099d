use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn open_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)
        .with_context(|| format!("failed to open db: {}", db_path.display()))?;
    conn.execute("PRAGMA foreign_keys = ON", [])
        .context("failed to enable foreign key enforcement")?;
    Ok(conn)
}

pub fn init_db(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create parent dir: {}", parent.display()))?;
    }

    let conn = open_connection(db_path)?;

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS orders (
            seq         INTEGER PRIMARY KEY AUTOINCREMENT,
            id          TEXT NOT NULL UNIQUE,
            quantity    INTEGER NOT NULL,
            product     TEXT NOT NULL,
            company     TEXT NOT NULL,
            category    TEXT NOT NULL,
            image_url   TEXT NOT NULL,
            customer    TEXT NOT NULL,
            status      TEXT NOT NULL,
            price       REAL NOT NULL,
            order_date  TEXT NOT NULL
        );
        ",
    )
    .context("failed to initialize schema")?;

    Ok(())
}
