//! Display formatting helpers.

/// Format a yen amount with thousands separators, e.g. `¥15,000`.
#[must_use]
pub fn format_price(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("¥{grouped}")
}

/// Format a quoted price range. A collapsed range renders as an
/// open-ended starting price.
#[must_use]
pub fn format_price_range(min: u32, max: u32) -> String {
    if max > min {
        format!("{}〜{}", format_price(min), format_price(max))
    } else {
        format!("{}〜", format_price(min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "¥0")]
    #[case(500, "¥500")]
    #[case(8000, "¥8,000")]
    #[case(15_000, "¥15,000")]
    #[case(1_234_567, "¥1,234,567")]
    fn prices_group_thousands(#[case] amount: u32, #[case] expected: &str) {
        assert_eq!(format_price(amount), expected);
    }

    #[rstest]
    #[case(8000, 15_000, "¥8,000〜¥15,000")]
    #[case(8000, 8000, "¥8,000〜")]
    fn ranges_collapse_when_bounds_meet(#[case] min: u32, #[case] max: u32, #[case] expected: &str) {
        assert_eq!(format_price_range(min, max), expected);
    }
}
