use chrono::{DateTime, Utc};

/// Relative age label: `"{h}h ago"` under a day, `"{d}d ago"` otherwise.
/// Hours and days are floored.
pub fn time_ago(posted: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - posted).num_seconds().div_euclid(3600);
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours.div_euclid(24))
}

/// "Showing 1 job" / "Showing 3 jobs".
pub fn results_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Showing {count} job{plural}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_hours_under_a_day() {
        assert_eq!(time_ago(now() - Duration::minutes(30), now()), "0h ago");
        assert_eq!(time_ago(now() - Duration::hours(5), now()), "5h ago");
        assert_eq!(time_ago(now() - Duration::minutes(23 * 60 + 59), now()), "23h ago");
    }

    #[test]
    fn test_days_floor() {
        assert_eq!(time_ago(now() - Duration::hours(24), now()), "1d ago");
        assert_eq!(time_ago(now() - Duration::hours(47), now()), "1d ago");
        assert_eq!(time_ago(now() - Duration::days(5), now()), "5d ago");
    }

    #[test]
    fn test_future_date_floors_negative() {
        assert_eq!(time_ago(now() + Duration::minutes(30), now()), "-1h ago");
    }

    #[test]
    fn test_results_label() {
        assert_eq!(results_label(0), "Showing 0 jobs");
        assert_eq!(results_label(1), "Showing 1 job");
        assert_eq!(results_label(4), "Showing 4 jobs");
    }
}
