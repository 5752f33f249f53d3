/// Renders seconds as `M:SS`. Unknown, zero or nonsensical values show `0:00`.
pub fn format_time(seconds: Option<f64>) -> String {
    let Some(seconds) = seconds.filter(|s| s.is_finite() && *s > 0.0) else {
        return "0:00".to_string();
    };

    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_values_render_zero() {
        assert_eq!(format_time(Some(0.0)), "0:00");
        assert_eq!(format_time(Some(f64::NAN)), "0:00");
        assert_eq!(format_time(None), "0:00");
        assert_eq!(format_time(Some(f64::INFINITY)), "0:00");
        assert_eq!(format_time(Some(-3.0)), "0:00");
    }

    #[test]
    fn minutes_unpadded_seconds_padded() {
        assert_eq!(format_time(Some(65.0)), "1:05");
        assert_eq!(format_time(Some(600.0)), "10:00");
        assert_eq!(format_time(Some(59.9)), "0:59");
        assert_eq!(format_time(Some(3725.0)), "62:05");
    }
}
