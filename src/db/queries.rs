use crate::db::initialize::seed_default_settings;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::event::WorkEvent;
use crate::models::event_kind::EventKind;
use crate::models::settings::{KEY_LAST_RESET_DATE, Settings};
use crate::utils::date::{self, TIMESTAMP_FMT};
use chrono::NaiveDateTime;
use rusqlite::{Connection, Row, params};
use std::collections::HashMap;

/// Load all events in display order: most recently added/imported first.
pub fn load_events(store: &Store) -> AppResult<Vec<WorkEvent>> {
    let mut stmt = store
        .conn
        .prepare("SELECT id, timestamp, kind, amount FROM events ORDER BY pos ASC, id ASC")?;

    let rows = stmt.query_map([], map_event_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn map_event_row(row: &Row) -> rusqlite::Result<WorkEvent> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp = date::parse_timestamp(&ts_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(ts_str.clone())),
        )
    })?;

    let kind_str: String = row.get("kind")?;
    let kind = EventKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidKind(kind_str.clone())),
        )
    })?;

    Ok(WorkEvent {
        id: row.get("id")?,
        timestamp,
        kind,
        amount: row.get("amount")?,
    })
}

/// Insert one event ahead of everything already stored. Returns its id.
pub fn insert_event_front(conn: &Connection, ev: &WorkEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (pos, timestamp, kind, amount)
         VALUES ((SELECT COALESCE(MIN(pos), 0) - 1 FROM events), ?1, ?2, ?3)",
        params![ev.timestamp_str(), ev.kind.to_db_str(), ev.amount],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Insert an imported batch ahead of the existing list, preserving file order
/// inside the batch.
pub fn insert_events_front(conn: &mut Connection, events: &[WorkEvent]) -> AppResult<()> {
    if events.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    {
        let front: i64 = tx.query_row(
            "SELECT COALESCE(MIN(pos), 0) FROM events",
            [],
            |row| row.get(0),
        )?;
        let base = front - events.len() as i64;

        let mut stmt = tx.prepare(
            "INSERT INTO events (pos, timestamp, kind, amount) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for (i, ev) in events.iter().enumerate() {
            stmt.execute(params![
                base + i as i64,
                ev.timestamp_str(),
                ev.kind.to_db_str(),
                ev.amount
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}

pub fn delete_event(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM events WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::EventNotFound(id));
    }
    Ok(())
}

/// Raw settings exactly as persisted (string-valued wire format).
pub fn load_raw_settings(store: &Store) -> AppResult<HashMap<String, String>> {
    let mut stmt = store.conn.prepare("SELECT key, value FROM settings")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut out = HashMap::new();
    for r in rows {
        let (k, v) = r?;
        out.insert(k, v);
    }
    Ok(out)
}

/// Load and normalize settings; decoding failures surface as AppError.
pub fn load_settings(store: &Store) -> AppResult<Settings> {
    let raw = load_raw_settings(store)?;
    Settings::from_raw(&raw).map_err(AppError::from)
}

pub fn save_setting(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
        [key, value],
    )?;
    Ok(())
}

/// Reset: move the active window start to `now`. History is kept.
pub fn reset_balance(conn: &Connection, now: NaiveDateTime) -> AppResult<()> {
    save_setting(
        conn,
        KEY_LAST_RESET_DATE,
        &now.format(TIMESTAMP_FMT).to_string(),
    )
}

/// Factory reset: wipe events, payroll data and settings, reseed defaults.
pub fn factory_reset(conn: &mut Connection) -> AppResult<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(
        "DELETE FROM events;
         DELETE FROM employees;
         DELETE FROM employee_events;
         DELETE FROM settings;",
    )?;
    seed_default_settings(&tx)?;
    tx.commit()?;
    Ok(())
}

/// Replace the whole employee collection (payroll imports never merge).
pub fn replace_employees(conn: &mut Connection, employees: &[Employee]) -> AppResult<()> {
    let tx = conn.transaction()?;
    {
        tx.execute_batch("DELETE FROM employees; DELETE FROM employee_events;")?;

        let mut emp_stmt =
            tx.prepare("INSERT INTO employees (name, total_due) VALUES (?1, ?2)")?;
        let mut ev_stmt = tx.prepare(
            "INSERT INTO employee_events (employee_id, timestamp, kind, amount)
             VALUES (?1, ?2, ?3, ?4)",
        )?;

        for emp in employees {
            emp_stmt.execute(params![emp.name, emp.total_due])?;
            let emp_id = tx.last_insert_rowid();
            for ev in &emp.events {
                ev_stmt.execute(params![
                    emp_id,
                    ev.timestamp_str(),
                    ev.kind.to_db_str(),
                    ev.amount
                ])?;
            }
        }
    }
    tx.commit()?;
    Ok(())
}

pub fn load_employees(store: &Store) -> AppResult<Vec<Employee>> {
    let mut stmt = store
        .conn
        .prepare("SELECT id, name, total_due FROM employees ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(Employee {
            id: row.get(0)?,
            name: row.get(1)?,
            total_due: row.get(2)?,
            events: Vec::new(),
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    let mut ev_stmt = store.conn.prepare(
        "SELECT id, timestamp, kind, amount FROM employee_events
         WHERE employee_id = ?1 ORDER BY id ASC",
    )?;
    for emp in &mut out {
        let rows = ev_stmt.query_map([emp.id], map_event_row)?;
        for r in rows {
            emp.events.push(r?);
        }
    }
    Ok(out)
}
