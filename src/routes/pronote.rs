use axum::Json;
use chrono::Utc;

use crate::{
    models::pronote::{AbsenceRecord, AbsencesRequest, TimetableEntry, TimetableRequest},
    services::pronote::PronoteService,
};

// Pour une intégration réelle, brancher un client Pronote côté serveur.
// Ces handlers renvoient des données simulées pour valider le flux
// bout-en-bout; les identifiants reçus ne sont ni stockés ni journalisés.

/// POST /api/pronote/timetable — l'emploi du temps (simulation).
/// `start` defaults to the current UTC date, `end` to `start`.
pub async fn get_timetable(Json(req): Json<TimetableRequest>) -> Json<Vec<TimetableEntry>> {
    let start = req.start.unwrap_or_else(|| Utc::now().date_naive());
    let end = req.end.unwrap_or(start);
    Json(PronoteService::simulate_timetable(start, end))
}

/// POST /api/pronote/absences — les absences (simulation). A single record
/// dated `start` (default: current UTC date); `end` is ignored.
pub async fn get_absences(Json(req): Json<AbsencesRequest>) -> Json<Vec<AbsenceRecord>> {
    let start = req.start.unwrap_or_else(|| Utc::now().date_naive());
    Json(PronoteService::simulate_absences(start))
}
