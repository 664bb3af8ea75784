//! Posting-date sampling.

use chrono::{DateTime, NaiveTime, Utc};
use engagement_core::DateWindow;
use rand::Rng;

/// Draw a posting date by adding a uniform day offset, inclusive of both
/// window bounds, to the window start. Rendered as midnight UTC.
///
/// The window must satisfy `start <= end` (see `DatasetSchema::validate`).
pub fn date_in_window<R: Rng>(rng: &mut R, window: &DateWindow) -> DateTime<Utc> {
    let offset = rng.gen_range(0..=window.days());
    let date = window.start + chrono::Duration::days(offset);
    date.and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_window() -> DateWindow {
        DateWindow::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        )
    }

    #[test]
    fn test_date_in_window_inclusive() {
        let mut rng = StdRng::seed_from_u64(42);
        let window = test_window();

        for _ in 0..200 {
            let dt = date_in_window(&mut rng, &window);
            assert!(window.contains(dt.date_naive()));
        }
    }

    #[test]
    fn test_midnight_rendering() {
        let mut rng = StdRng::seed_from_u64(42);
        let dt = date_in_window(&mut rng, &test_window());

        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.minute(), 0);
        assert_eq!(dt.second(), 0);
    }

    #[test]
    fn test_single_day_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let window = DateWindow::new(day, day);

        assert_eq!(date_in_window(&mut rng, &window).date_naive(), day);
    }

    #[test]
    fn test_deterministic_draws() {
        let window = test_window();
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            date_in_window(&mut rng1, &window),
            date_in_window(&mut rng2, &window)
        );
    }
}
