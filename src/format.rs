// src/format.rs

/// Revenue display: rupee prefix plus thousands separators,
/// e.g. `₹ 1,234,567`.
pub fn inr(amount: i64) -> String {
    format!("₹ {}", group_thousands(amount))
}

/// Insert a comma every three digits from the right.
pub fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(57_432), "57,432");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(1_000_000_000), "1,000,000,000");
    }

    #[test]
    fn handles_negative_amounts() {
        assert_eq!(group_thousands(-1_234), "-1,234");
    }

    #[test]
    fn revenue_has_currency_prefix_and_separators() {
        assert_eq!(inr(8_223_957), "₹ 8,223,957");
        assert_eq!(inr(0), "₹ 0");
    }
}
