//! Question CRUD. Options are stored as a JSON array.

use rusqlite::{params, Connection, Row};

use curator_core::errors::{CuratorError, CuratorResult};
use curator_core::models::{NewQuestion, Question};

use crate::to_storage_err;

fn row_to_parts(row: &Row<'_>) -> rusqlite::Result<(i64, String, String, Option<String>)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn parts_to_question(parts: (i64, String, String, Option<String>)) -> CuratorResult<Question> {
    let (id, text, options_json, correct_answer) = parts;
    let options: Vec<String> =
        serde_json::from_str(&options_json).map_err(|e| to_storage_err(e.to_string()))?;
    Ok(Question {
        id,
        text,
        options,
        correct_answer,
    })
}

pub fn list_questions(conn: &Connection) -> CuratorResult<Vec<Question>> {
    let mut stmt = conn
        .prepare("SELECT id, text, options, correct_answer FROM questions ORDER BY id")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], row_to_parts)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut questions = Vec::new();
    for row in rows {
        questions.push(parts_to_question(
            row.map_err(|e| to_storage_err(e.to_string()))?,
        )?);
    }
    Ok(questions)
}

/// Insert with id one past the current maximum, or 1 for an empty table.
pub fn create_question(conn: &Connection, question: NewQuestion) -> CuratorResult<Question> {
    let max: Option<i64> = conn
        .query_row("SELECT MAX(id) FROM questions", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let id = max.map_or(1, |m| m + 1);
    let options_json =
        serde_json::to_string(&question.options).map_err(|e| to_storage_err(e.to_string()))?;

    conn.execute(
        "INSERT INTO questions (id, text, options, correct_answer) VALUES (?1, ?2, ?3, ?4)",
        params![id, question.text, options_json, question.correct_answer],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(Question {
        id,
        text: question.text,
        options: question.options,
        correct_answer: question.correct_answer,
    })
}

pub fn update_question(
    conn: &Connection,
    id: i64,
    question: NewQuestion,
) -> CuratorResult<Question> {
    let options_json =
        serde_json::to_string(&question.options).map_err(|e| to_storage_err(e.to_string()))?;
    let changed = conn
        .execute(
            "UPDATE questions SET text = ?2, options = ?3, correct_answer = ?4 WHERE id = ?1",
            params![id, question.text, options_json, question.correct_answer],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if changed == 0 {
        return Err(CuratorError::QuestionNotFound { id });
    }
    Ok(Question {
        id,
        text: question.text,
        options: question.options,
        correct_answer: question.correct_answer,
    })
}

pub fn delete_question(conn: &Connection, id: i64) -> CuratorResult<()> {
    let changed = conn
        .execute("DELETE FROM questions WHERE id = ?1", params![id])
        .map_err(|e| to_storage_err(e.to_string()))?;
    if changed == 0 {
        return Err(CuratorError::QuestionNotFound { id });
    }
    Ok(())
}
