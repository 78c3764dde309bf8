//! Import sessions from CSV
//!
//! Columns: `date,game_type,bet_amount,win_amount,loss_amount,duration,location,notes`.
//! `date` accepts RFC 3339 timestamps or plain `YYYY-MM-DD` (midnight UTC).
//! Every imported row gets a new id; the net result is always derived.
//! Rows go through the same checks as manual entry; the first invalid row
//! rejects the whole file.

use super::{validate_new_session, NewSession, Session};
use crate::error::{FieldError, RealityError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SessionRow {
    date: String,
    game_type: String,
    bet_amount: f64,
    #[serde(default)]
    win_amount: f64,
    #[serde(default)]
    loss_amount: f64,
    duration: u32,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

pub fn load_sessions<P: AsRef<Path>>(path: P) -> Result<Vec<Session>> {
    let file = File::open(path.as_ref())?;
    log::debug!("Importing sessions from {}", path.as_ref().display());
    load_sessions_from_reader(file)
}

pub fn load_sessions_from_reader<R: Read>(reader: R) -> Result<Vec<Session>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut sessions = Vec::new();
    for (line, record) in csv_reader.deserialize::<SessionRow>().enumerate() {
        let row = record?;
        let date = parse_date(&row.date).ok_or_else(|| {
            RealityError::Validation(vec![FieldError {
                field: "date",
                message: format!("row {}: unrecognized date '{}'", line + 1, row.date),
            }])
        })?;

        let new = NewSession {
            date,
            game_type: row.game_type,
            bet_amount: row.bet_amount,
            win_amount: row.win_amount,
            loss_amount: row.loss_amount,
            duration: row.duration,
            location: row.location.filter(|s| !s.is_empty()),
            notes: row.notes.filter(|s| !s.is_empty()),
        };
        validate_new_session(&new).map_err(|e| match e {
            RealityError::Validation(errors) => RealityError::Validation(
                errors
                    .into_iter()
                    .map(|f| FieldError {
                        field: f.field,
                        message: format!("row {}: {}", line + 1, f.message),
                    })
                    .collect(),
            ),
            other => other,
        })?;
        sessions.push(Session::create(new));
    }

    log::info!("Imported {} sessions", sessions.len());
    Ok(sessions)
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
