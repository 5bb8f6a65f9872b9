//! Time label formatting and progress math for the transport controls.

use std::time::Duration;

/// Render seconds as `m:ss` with zero-padded seconds.
///
/// Non-finite or negative input renders as `0:00`, which covers the
/// "duration not known yet" case without a separate code path.
pub fn format_timestamp(seconds: f32) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return String::from("0:00");
    }
    let total = seconds as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Playback position as a 0-100 ratio of the total duration.
///
/// Yields `0.0` while the duration is unknown or zero.
pub fn progress_percent(position: Duration, duration: Option<Duration>) -> f32 {
    match duration {
        Some(total) if !total.is_zero() => {
            (position.as_secs_f32() / total.as_secs_f32() * 100.0).clamp(0.0, 100.0)
        }
        _ => 0.0,
    }
}

/// Convert a 0-100 slider value back to a playback position.
///
/// `None` while the duration is unknown, so scrubbing stays a no-op
/// until the track metadata has been read.
pub fn percent_to_position(percent: f32, duration: Option<Duration>) -> Option<Duration> {
    let total = duration?;
    let clamped = percent.clamp(0.0, 100.0);
    Some(total.mul_f32(clamped / 100.0))
}

#[cfg(test)]
mod tests {
    use super::{format_timestamp, percent_to_position, progress_percent};
    use std::time::Duration;

    #[test]
    fn formats_zero() {
        assert_eq!(format_timestamp(0.0), "0:00");
    }

    #[test]
    fn pads_seconds() {
        assert_eq!(format_timestamp(65.0), "1:05");
        assert_eq!(format_timestamp(600.0), "10:00");
    }

    #[test]
    fn guards_non_finite_input() {
        assert_eq!(format_timestamp(f32::NAN), "0:00");
        assert_eq!(format_timestamp(f32::INFINITY), "0:00");
        assert_eq!(format_timestamp(-3.0), "0:00");
    }

    #[test]
    fn truncates_fractional_seconds() {
        assert_eq!(format_timestamp(59.9), "0:59");
    }

    #[test]
    fn progress_is_zero_without_duration() {
        assert_eq!(progress_percent(Duration::from_secs(30), None), 0.0);
        assert_eq!(
            progress_percent(Duration::from_secs(30), Some(Duration::ZERO)),
            0.0
        );
    }

    #[test]
    fn progress_is_ratio_of_duration() {
        let half = progress_percent(Duration::from_secs(30), Some(Duration::from_secs(60)));
        assert!((half - 50.0).abs() < 1e-4);
    }

    #[test]
    fn progress_clamps_past_end() {
        let over = progress_percent(Duration::from_secs(90), Some(Duration::from_secs(60)));
        assert_eq!(over, 100.0);
    }

    #[test]
    fn scrub_maps_percent_to_time() {
        let target = percent_to_position(50.0, Some(Duration::from_secs(60))).unwrap();
        assert!((target.as_secs_f32() - 30.0).abs() < 1e-4);
    }

    #[test]
    fn scrub_is_none_without_duration() {
        assert_eq!(percent_to_position(50.0, None), None);
    }
}
