// Number formatting for displayed metrics

/// Rounds to a whole number and groups thousands with commas: 13500.4 -> "13,500"
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(13500.0), "13,500");
        assert_eq!(format_thousands(360.0), "360");
        assert_eq!(format_thousands(1234567.6), "1,234,568");
        assert_eq!(format_thousands(0.4), "0");
        assert_eq!(format_thousands(-2500.0), "-2,500");
        assert_eq!(format_thousands(100000.0), "100,000");
    }
}
