//! Number formatting for table cells

/// Formats an integer with a thousands separator
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::number_format::format_number_int;
/// assert_eq!(format_number_int(1234567, ','), "1,234,567");
/// ```
pub fn format_number_int(value: i64, separator: char) -> String {
    let digits = value.unsigned_abs().to_string();

    // Insert the separator every 3 digits from the right
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    if value < 0 {
        result.push('-');
    }

    result.chars().rev().collect()
}

/// Formats an hourly wage in yen
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::number_format::format_yen;
/// assert_eq!(format_yen(1200), "¥1,200");
/// ```
pub fn format_yen(value: i32) -> String {
    let formatted = format_number_int(i64::from(value), ',');
    match formatted.strip_prefix('-') {
        Some(abs) => format!("-¥{}", abs),
        None => format!("¥{}", formatted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567, ','), "1,234,567");
        assert_eq!(format_number_int(0, ','), "0");
        assert_eq!(format_number_int(999, ','), "999");
        assert_eq!(format_number_int(-1234, ' '), "-1 234");
    }

    #[test]
    fn test_format_yen() {
        assert_eq!(format_yen(1200), "¥1,200");
        assert_eq!(format_yen(1000), "¥1,000");
        assert_eq!(format_yen(950), "¥950");
        assert_eq!(format_yen(-1500), "-¥1,500");
    }
}
