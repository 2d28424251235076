use chrono::{SecondsFormat, Utc};
use rusqlite::types::Value as SqlValue;
use rusqlite::{params, params_from_iter, Connection};
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::AppError;

pub type Document = Map<String, Value>;

// ── Writes ──

pub fn create_document<T: Serialize>(
    conn: &Connection,
    collection: &str,
    record: &T,
) -> Result<String, AppError> {
    let mut body = match serde_json::to_value(record)? {
        Value::Object(map) => map,
        other => {
            return Err(AppError::BadRequest(format!(
                "document must be a JSON object, got: {other}"
            )))
        }
    };

    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    body.insert("created_at".to_string(), Value::String(now.clone()));
    body.insert("updated_at".to_string(), Value::String(now.clone()));

    let id = Uuid::new_v4().to_string();
    let body_json = serde_json::to_string(&body)?;

    conn.execute(
        "INSERT INTO documents (id, collection, body, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![id, collection, body_json, now],
    )?;

    tracing::debug!(collection, id = %id, "document created");
    Ok(id)
}

// ── Reads ──

pub fn get_documents(
    conn: &Connection,
    collection: &str,
    filter: &Document,
    limit: u32,
) -> Result<Vec<Document>, AppError> {
    let mut sql = String::from("SELECT id, body FROM documents WHERE collection = ?1");
    let mut values: Vec<SqlValue> = vec![SqlValue::Text(collection.to_string())];

    for (key, expected) in filter {
        if key.contains('"') {
            return Err(AppError::BadRequest(format!(
                "invalid filter field: {key}"
            )));
        }
        values.push(SqlValue::Text(format!("$.\"{key}\"")));
        let path_idx = values.len();
        values.push(to_sql_value(expected));
        let value_idx = values.len();
        if let Some(types) = json_types(expected) {
            sql.push_str(&format!(
                " AND json_type(body, ?{path_idx}) IN ({types})"
            ));
        }
        sql.push_str(&format!(
            " AND json_extract(body, ?{path_idx}) IS ?{value_idx}"
        ));
    }

    values.push(SqlValue::Integer(i64::from(limit)));
    sql.push_str(&format!(" ORDER BY rowid ASC LIMIT ?{}", values.len()));

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values.iter()), |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut documents = vec![];
    for row in rows {
        let (id, body_json) = row?;
        let mut doc: Document = serde_json::from_str(&body_json)?;
        doc.insert("id".to_string(), Value::String(id));
        documents.push(doc);
    }
    Ok(documents)
}

pub fn list_collection_names(conn: &Connection) -> Result<Vec<String>, AppError> {
    let mut stmt = conn.prepare("SELECT DISTINCT collection FROM documents ORDER BY collection")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut names = vec![];
    for row in rows {
        names.push(row?);
    }
    Ok(names)
}

// json_extract yields 1/0 for booleans, so the JSON type is checked as well.
// Null has no guard: it matches both an explicit null and a missing field.
fn json_types(value: &Value) -> Option<&'static str> {
    match value {
        Value::Null => None,
        Value::Bool(true) => Some("'true'"),
        Value::Bool(false) => Some("'false'"),
        Value::Number(_) => Some("'integer', 'real'"),
        Value::String(_) => Some("'text'"),
        Value::Array(_) => Some("'array'"),
        Value::Object(_) => Some("'object'"),
    }
}

fn to_sql_value(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Bool(b) => SqlValue::Integer(i64::from(*b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => SqlValue::Integer(i),
            None => SqlValue::Real(n.as_f64().unwrap_or_default()),
        },
        Value::String(s) => SqlValue::Text(s.clone()),
        Value::Array(_) | Value::Object(_) => SqlValue::Text(value.to_string()),
    }
}
