//! Attendance rate computation
//!
//! Pure computation, recomputed on every request. No caching.

/// Format the attendance rate as a two-decimal percentage string.
///
/// `"0.00%"` when there are no reservations at all.
pub fn attendance_rate(participants: i64, total: i64) -> String {
    if total == 0 {
        return "0.00%".to_string();
    }

    let rate = participants as f64 / total as f64 * 100.0;
    format!("{:.2}%", rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_total_avoids_division() {
        assert_eq!(attendance_rate(0, 0), "0.00%");
    }

    #[test]
    fn test_one_of_three() {
        assert_eq!(attendance_rate(1, 3), "33.33%");
    }

    #[test]
    fn test_full_attendance() {
        assert_eq!(attendance_rate(4, 4), "100.00%");
    }

    #[test]
    fn test_no_participants() {
        assert_eq!(attendance_rate(0, 1), "0.00%");
    }
}
