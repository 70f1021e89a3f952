//! Aggregate statistics over wellbeing logs.

use crate::WellbeingLog;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Summary of all logged entries
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct LogStatistics {
    pub total_logs: usize,
    /// Rounded to one decimal
    pub avg_sleep: f64,
    /// Rounded to one decimal
    pub avg_energy: f64,
    pub logs_this_week: usize,
}

/// Entries dated within the last `days` days of `now`
pub fn logs_from_last_days(logs: &[WellbeingLog], days: i64, now: DateTime<Utc>) -> Vec<&WellbeingLog> {
    let cutoff = now - Duration::days(days);
    logs.iter().filter(|log| log.date >= cutoff).collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute totals and averages; all zeros for an empty log
pub fn compute_statistics(logs: &[WellbeingLog], now: DateTime<Utc>) -> LogStatistics {
    if logs.is_empty() {
        return LogStatistics {
            total_logs: 0,
            avg_sleep: 0.0,
            avg_energy: 0.0,
            logs_this_week: 0,
        };
    }

    let n = logs.len() as f64;
    let sleep: u32 = logs.iter().map(|l| u32::from(l.sleep_quality)).sum();
    let energy: u32 = logs.iter().map(|l| u32::from(l.energy_level)).sum();

    LogStatistics {
        total_logs: logs.len(),
        avg_sleep: round_one_decimal(f64::from(sleep) / n),
        avg_energy: round_one_decimal(f64::from(energy) / n),
        logs_this_week: logs_from_last_days(logs, 7, now).len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn log_at(days_ago: i64, sleep: u8, energy: u8, now: DateTime<Utc>) -> WellbeingLog {
        WellbeingLog {
            id: Uuid::new_v4(),
            date: now - Duration::days(days_ago),
            sleep_quality: sleep,
            energy_level: energy,
            mood: "fine".into(),
            muscle_pain: vec![],
            notes: None,
        }
    }

    #[test]
    fn test_empty_statistics() {
        let stats = compute_statistics(&[], Utc::now());
        assert_eq!(stats.total_logs, 0);
        assert_eq!(stats.avg_sleep, 0.0);
        assert_eq!(stats.logs_this_week, 0);
    }

    #[test]
    fn test_averages_and_week_window() {
        let now = Utc::now();
        let logs = vec![
            log_at(1, 4, 3, now),
            log_at(3, 5, 2, now),
            log_at(10, 3, 4, now),
        ];

        let stats = compute_statistics(&logs, now);
        assert_eq!(stats.total_logs, 3);
        assert_eq!(stats.avg_sleep, 4.0);
        assert_eq!(stats.avg_energy, 3.0);
        assert_eq!(stats.logs_this_week, 2);
    }

    #[test]
    fn test_average_rounding() {
        let now = Utc::now();
        let logs = vec![log_at(0, 4, 1, now), log_at(0, 4, 2, now), log_at(0, 5, 2, now)];
        let stats = compute_statistics(&logs, now);
        assert_eq!(stats.avg_sleep, 4.3);
        assert_eq!(stats.avg_energy, 1.7);
    }

    #[test]
    fn test_logs_from_last_days() {
        let now = Utc::now();
        let logs = vec![log_at(2, 3, 3, now), log_at(20, 3, 3, now)];
        assert_eq!(logs_from_last_days(&logs, 7, now).len(), 1);
        assert_eq!(logs_from_last_days(&logs, 30, now).len(), 2);
    }
}
