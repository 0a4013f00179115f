//! Visibility policy for the install dialog
//!
//! The dialog is offered on the first visit, then re-offered on the third
//! and fourth visits unless the user chose "remind me later" within the
//! cooldown. Later visits never show it.

use chrono::{DateTime, TimeDelta, Utc};

pub const FIRST_VISIT: u32 = 1;
pub const REOFFER_VISITS: [u32; 2] = [3, 4];
pub const DISMISS_COOLDOWN_DAYS: i64 = 7;

/// Policy with the default 7-day cooldown
pub fn should_show(
    visit_count: u32,
    last_dismissed_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    should_show_with_cooldown(
        visit_count,
        last_dismissed_at,
        now,
        TimeDelta::days(DISMISS_COOLDOWN_DAYS),
    )
}

pub fn should_show_with_cooldown(
    visit_count: u32,
    last_dismissed_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    cooldown: TimeDelta,
) -> bool {
    if visit_count == FIRST_VISIT {
        return true;
    }

    if REOFFER_VISITS.contains(&visit_count) {
        // A dismissal stamped in the future counts as inside the cooldown
        if let Some(dismissed) = last_dismissed_at {
            if now.signed_duration_since(dismissed) < cooldown {
                return false;
            }
        }
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_thresholds_without_dismissal() {
        let now = at(1, 12);
        let shown: Vec<u32> = (0..=10).filter(|&n| should_show(n, None, now)).collect();
        assert_eq!(shown, vec![1, 3, 4]);
    }

    #[test]
    fn test_first_visit_ignores_dismissal() {
        assert!(should_show(1, Some(at(1, 11)), at(1, 12)));
    }

    #[test]
    fn test_cooldown_boundary() {
        let dismissed = at(1, 12);
        let just_before = dismissed + TimeDelta::days(7) - TimeDelta::milliseconds(1);
        let exactly = dismissed + TimeDelta::days(7);

        assert!(!should_show(3, Some(dismissed), just_before));
        assert!(should_show(3, Some(dismissed), exactly));
        assert!(should_show(4, Some(dismissed), exactly + TimeDelta::days(30)));
    }

    #[test]
    fn test_future_dismissal_suppresses() {
        assert!(!should_show(3, Some(at(20, 0)), at(1, 0)));
    }

    #[test]
    fn test_beyond_fourth_visit_never_shows() {
        let now = at(1, 12);
        for n in [5, 6, 50, u32::MAX] {
            assert!(!should_show(n, None, now));
            assert!(!should_show(n, Some(at(1, 0) - TimeDelta::days(365)), now));
        }
    }

    #[test]
    fn test_custom_cooldown() {
        let dismissed = at(1, 0);
        let now = at(2, 0);
        assert!(should_show_with_cooldown(
            4,
            Some(dismissed),
            now,
            TimeDelta::hours(12)
        ));
        assert!(!should_show_with_cooldown(
            4,
            Some(dismissed),
            now,
            TimeDelta::days(2)
        ));
    }
}
