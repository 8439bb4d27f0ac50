use chrono::{Duration, NaiveDate, NaiveTime};

use crate::models::pronote::{AbsenceRecord, TimetableEntry};

/// Subjects and rooms the simulated timetable cycles through.
const SUBJECTS: [&str; 5] = ["Maths", "Français", "Physique", "Histoire", "Anglais"];
const ROOMS: [&str; 5] = ["B201", "A105", "Lab1", "C303", "L001"];

/// Upper bound on generated lessons, whatever the requested window.
const MAX_LESSONS: usize = 10;

const TIME_FORMAT: &str = "%H:%M";

/// Deterministic stand-in for a real Pronote client. Fabricates plausible
/// timetable and absence data without contacting any external system, so the
/// request/response flow can be exercised end to end.
pub struct PronoteService;

impl PronoteService {
    /// One lesson per calendar day from `start` to `end` inclusive, capped
    /// at [`MAX_LESSONS`]. An `end` earlier than `start` is clamped to
    /// `start`. Every lesson occupies the fixed 08:00–09:30 slot.
    pub fn simulate_timetable(start: NaiveDate, end: NaiveDate) -> Vec<TimetableEntry> {
        let end = end.max(start);
        let lesson_start = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let lesson_end = lesson_start + Duration::minutes(90);

        let mut entries = Vec::new();
        let mut day = start;
        while day <= end && entries.len() < MAX_LESSONS {
            let i = entries.len();
            entries.push(TimetableEntry {
                date: day,
                start: lesson_start.format(TIME_FORMAT).to_string(),
                end: lesson_end.format(TIME_FORMAT).to_string(),
                subject: SUBJECTS[i % SUBJECTS.len()].to_string(),
                room: Some(ROOMS[i % ROOMS.len()].to_string()),
                teacher: Some("M./Mme X".to_string()),
                group: Some("2nde A".to_string()),
            });
            day = day + Duration::days(1);
        }
        entries
    }

    /// A single fixed, unjustified mid-morning absence dated `start`.
    pub fn simulate_absences(start: NaiveDate) -> Vec<AbsenceRecord> {
        vec![AbsenceRecord {
            date: start,
            start: "10:00".to_string(),
            end: "12:00".to_string(),
            justified: false,
            reason: None,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn timetable_covers_each_day_of_the_window() {
        let entries =
            PronoteService::simulate_timetable(date("2024-01-01"), date("2024-01-03"));

        assert_eq!(entries.len(), 3);
        let days: Vec<(String, &str)> = entries
            .iter()
            .map(|e| (e.date.to_string(), e.subject.as_str()))
            .collect();
        assert_eq!(
            days,
            [
                ("2024-01-01".to_string(), "Maths"),
                ("2024-01-02".to_string(), "Français"),
                ("2024-01-03".to_string(), "Physique"),
            ]
        );
        for entry in &entries {
            assert_eq!(entry.start, "08:00");
            assert_eq!(entry.end, "09:30");
            assert_eq!(entry.teacher.as_deref(), Some("M./Mme X"));
            assert_eq!(entry.group.as_deref(), Some("2nde A"));
        }
    }

    #[test]
    fn timetable_clamps_inverted_windows_to_start() {
        let entries =
            PronoteService::simulate_timetable(date("2024-01-10"), date("2024-01-05"));

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, date("2024-01-10"));
    }

    #[test]
    fn timetable_caps_long_windows_and_wraps_the_cycle() {
        let entries =
            PronoteService::simulate_timetable(date("2024-01-01"), date("2024-01-31"));

        assert_eq!(entries.len(), 10);
        assert_eq!(entries.last().unwrap().date, date("2024-01-10"));
        // Sixth lesson restarts the subject/room cycle.
        assert_eq!(entries[5].subject, "Maths");
        assert_eq!(entries[5].room.as_deref(), Some("B201"));
    }

    #[test]
    fn absences_return_one_fixed_record() {
        let records = PronoteService::simulate_absences(date("2024-03-05"));

        assert_eq!(
            records,
            [AbsenceRecord {
                date: date("2024-03-05"),
                start: "10:00".to_string(),
                end: "12:00".to_string(),
                justified: false,
                reason: None,
            }]
        );
    }
}
