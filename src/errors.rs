//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::models::settings::FieldErrors;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid event kind: {0} (expected 'half' or 'full')")]
    InvalidKind(String),

    #[error("Invalid export range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Settings errors
    // ---------------------------
    #[error("Invalid settings: {0}")]
    Settings(#[from] FieldErrors),

    #[error("Invalid setting assignment: {0}")]
    InvalidSetting(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No event found with id {0}")]
    EventNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Admin / payroll
    // ---------------------------
    #[error("Incorrect admin password")]
    AdminAuth,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
