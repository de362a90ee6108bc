//! Unified application error type.
//! All modules (core, cli, config, export) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Clock time parsing / construction
    // ---------------------------
    #[error("Invalid time format: {0} (expected H:MM AM|PM, HH:MM or 'now')")]
    InvalidTime(String),

    #[error("Invalid hour: {0} (must be between 1 and 12)")]
    InvalidHour(u32),

    #[error("Invalid minute: {0} (must be between 0 and 59)")]
    InvalidMinute(u32),

    #[error("Invalid meridiem: {0} (must be AM or PM)")]
    InvalidMeridiem(String),

    // ---------------------------
    // Session errors
    // ---------------------------
    #[error("Unknown session command: {0} (type 'help' for the list)")]
    UnknownCommand(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
