use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pronote account coordinates. Carried in requests only — never persisted.
/// Deliberately no `Debug` impl so the password cannot end up in a trace.
#[derive(Clone, Deserialize)]
pub struct PronoteCredentials {
    pub url: String,
    pub username: String,
    pub password: String,
}

/// One lesson slot in the timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub date: NaiveDate,
    /// HH:MM
    pub start: String,
    /// HH:MM
    pub end: String,
    pub subject: String,
    pub room: Option<String>,
    pub teacher: Option<String>,
    pub group: Option<String>,
}

/// One recorded absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsenceRecord {
    pub date: NaiveDate,
    /// HH:MM
    pub start: String,
    /// HH:MM
    pub end: String,
    #[serde(default)]
    pub justified: bool,
    pub reason: Option<String>,
}

/// Body for POST /api/pronote/timetable.
#[derive(Deserialize)]
pub struct TimetableRequest {
    #[serde(flatten)]
    pub credentials: PronoteCredentials,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Body for POST /api/pronote/absences. `end` is accepted for parity with
/// the timetable request; the simulation only reads `start`.
#[derive(Deserialize)]
pub struct AbsencesRequest {
    #[serde(flatten)]
    pub credentials: PronoteCredentials,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}
