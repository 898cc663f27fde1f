use crate::models::StoppageRecord;

pub const DEFAULT_THRESHOLD_MINUTES: i64 = 0;

/// Keeps stoppages lasting at least `threshold_minutes`, in their original order.
pub fn filter(records: &[StoppageRecord], threshold_minutes: i64) -> Vec<StoppageRecord> {
    records
        .iter()
        .filter(|r| r.stoppage_time >= threshold_minutes)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(lat: f64, minutes: i64) -> StoppageRecord {
        StoppageRecord::new(lat, 0.0, 0, minutes * 60_000, &Utc)
    }

    fn fixture() -> Vec<StoppageRecord> {
        vec![record(1.0, 3), record(2.0, 0), record(3.0, 12), record(4.0, 5), record(5.0, 3)]
    }

    #[test]
    fn test_default_threshold_admits_all() {
        let records = fixture();
        assert_eq!(filter(&records, DEFAULT_THRESHOLD_MINUTES), records);
        assert_eq!(filter(&records, -10), records);
    }

    #[test]
    fn test_threshold_is_inclusive_and_keeps_order() {
        let kept = filter(&fixture(), 3);
        let lats: Vec<f64> = kept.iter().map(|r| r.latitude).collect();
        assert_eq!(lats, vec![1.0, 3.0, 4.0, 5.0]);

        let kept = filter(&fixture(), 5);
        let lats: Vec<f64> = kept.iter().map(|r| r.latitude).collect();
        assert_eq!(lats, vec![3.0, 4.0]);

        assert!(filter(&fixture(), 13).is_empty());
        assert!(filter(&[], 0).is_empty());
    }

    #[test]
    fn test_raising_threshold_never_grows_result() {
        let records = fixture();
        let mut previous = records.len();
        for threshold in -1..=14 {
            let kept = filter(&records, threshold);
            assert!(kept.len() <= previous);
            assert!(kept.iter().all(|r| records.contains(r)));
            previous = kept.len();
        }
    }

    #[test]
    fn test_idempotent() {
        let records = fixture();
        for threshold in [0, 3, 5, 20] {
            let once = filter(&records, threshold);
            assert_eq!(filter(&once, threshold), once);
        }
    }

    #[test]
    fn test_scenario_threshold() {
        let records = vec![record(13.0, 3)];
        assert!(filter(&records, 5).is_empty());
        assert_eq!(filter(&records, 3), records);
    }
}
