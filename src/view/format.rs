//! Number formatting

/// Two decimal places, always (`100.0` → `"100.00"`)
///
/// Exact ties at the third decimal round away from zero (`0.125` → `"0.13"`),
/// and negative zero prints as `"0.00"`.
pub fn money(value: f64) -> String {
    if value == 0.0 {
        return "0.00".to_string();
    }

    // A binary f64 ties at the third decimal only when it is an odd number of eighths
    let eighths = value.abs() * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let cents = (value.abs() * 100.0).ceil();
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{:.2}", sign, cents / 100.0);
    }

    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money() {
        assert_eq!(money(100.0), "100.00");
        assert_eq!(money(42.5), "42.50");
        assert_eq!(money(-3.14159), "-3.14");
        assert_eq!(money(0.0), "0.00");
        assert_eq!(money(1234567.891), "1234567.89");
    }

    #[test]
    fn test_money_ties_round_away_from_zero() {
        assert_eq!(money(10.125), "10.13");
        assert_eq!(money(0.125), "0.13");
        assert_eq!(money(-0.125), "-0.13");
        assert_eq!(money(0.375), "0.38");
        assert_eq!(money(0.625), "0.63");
        assert_eq!(money(-2.875), "-2.88");
    }

    #[test]
    fn test_money_near_ties_follow_binary_value() {
        // 1.005 and 2.675 are stored just below the tie
        assert_eq!(money(1.005), "1.00");
        assert_eq!(money(2.675), "2.67");
    }

    #[test]
    fn test_money_negative_zero() {
        assert_eq!(money(-0.0), "0.00");
    }
}
