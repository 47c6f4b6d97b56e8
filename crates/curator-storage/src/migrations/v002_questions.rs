//! v002: question catalog, seeded with the two default questions.

use rusqlite::{params, Connection};

use curator_core::errors::CuratorResult;

use crate::to_storage_err;

const DEFAULT_QUESTIONS: &[(i64, &str, &[&str])] = &[
    (
        1,
        "What is the main style of this work?",
        &["Renaissance", "Baroque", "Impressionism", "Cubism", "Other"],
    ),
    (
        2,
        "What is the main subject of this work?",
        &[
            "Portrait",
            "Landscape",
            "Still life",
            "Historical scene",
            "Religious scene",
            "Abstract",
        ],
    ),
];

pub fn migrate(conn: &Connection) -> CuratorResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS questions (
            id              INTEGER PRIMARY KEY,
            text            TEXT NOT NULL,
            options         TEXT NOT NULL DEFAULT '[]',
            correct_answer  TEXT
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    for (id, text, options) in DEFAULT_QUESTIONS {
        let options_json =
            serde_json::to_string(options).map_err(|e| to_storage_err(e.to_string()))?;
        conn.execute(
            "INSERT OR IGNORE INTO questions (id, text, options) VALUES (?1, ?2, ?3)",
            params![id, text, options_json],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(())
}
