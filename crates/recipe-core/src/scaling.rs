//! Serving Scaler
//!
//! Ingredient amounts are authored for a recipe's base serving count and
//! rescaled on display. Scaling always starts from the authored amount, so
//! repeated changes never compound rounding.

/// Lowest serving count the stepper allows
pub const MIN_SERVINGS: u32 = 1;

/// Scale `amount` from `base_servings` to `requested_servings`.
///
/// Amounts without a leading number ("по вкусу") come back unchanged.
/// Numeric results are rounded to one decimal place.
///
/// `base_servings` must be non-zero.
pub fn scale_amount(amount: &str, base_servings: u32, requested_servings: u32) -> String {
    let Some(value) = leading_number(amount) else {
        return amount.to_string();
    };
    let scaled = value * f64::from(requested_servings) / f64::from(base_servings);
    format!("{:.1}", round_one_decimal(scaled))
}

pub fn increment_servings(servings: u32) -> u32 {
    servings.saturating_add(1)
}

/// Step down one serving, never below [`MIN_SERVINGS`]
pub fn decrement_servings(servings: u32) -> u32 {
    servings.saturating_sub(1).max(MIN_SERVINGS)
}

/// Round half away from zero
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Longest decimal number at the start of `text`, leading whitespace ignored.
/// "2.5 cups" -> 2.5, "1/2" -> 1, "по вкусу" -> None
fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// One line of a recipe's ingredient list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ingredient<'a> {
    pub name: &'a str,
    /// Authored amount for the base serving count, numeric or free text
    pub amount: &'a str,
    /// Unit label, empty for free-text amounts
    pub unit: &'a str,
}

impl<'a> Ingredient<'a> {
    pub fn scaled_amount(&self, base_servings: u32, requested_servings: u32) -> String {
        scale_amount(self.amount, base_servings, requested_servings)
    }

    /// Scaled amount followed by the unit, e.g. "800.0 г"
    pub fn display(&self, base_servings: u32, requested_servings: u32) -> String {
        let amount = self.scaled_amount(base_servings, requested_servings);
        if self.unit.is_empty() {
            amount
        } else {
            format!("{} {}", amount, self.unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_up_and_down() {
        assert_eq!(scale_amount("400", 4, 8), "800.0");
        assert_eq!(scale_amount("400", 4, 2), "200.0");
    }

    #[test]
    fn test_fractional_result() {
        assert_eq!(scale_amount("3", 4, 6), "4.5");
        assert_eq!(scale_amount("2", 4, 3), "1.5");
        assert_eq!(scale_amount("100", 3, 1), "33.3");
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        // 1 * 1 / 4 = 0.25
        assert_eq!(scale_amount("1", 4, 1), "0.3");
    }

    #[test]
    fn test_same_servings_formats_one_decimal() {
        assert_eq!(scale_amount("3", 4, 4), "3.0");
    }

    #[test]
    fn test_free_text_passes_through() {
        assert_eq!(scale_amount("по вкусу", 4, 8), "по вкусу");
        assert_eq!(scale_amount("", 4, 8), "");
        assert_eq!(scale_amount(".", 4, 8), ".");
        assert_eq!(scale_amount("-", 4, 8), "-");
    }

    #[test]
    fn test_leading_number_prefix() {
        assert_eq!(leading_number("2.5 cups"), Some(2.5));
        assert_eq!(leading_number("  12"), Some(12.0));
        assert_eq!(leading_number("1/2"), Some(1.0));
        assert_eq!(leading_number(".5"), Some(0.5));
        assert_eq!(leading_number("3."), Some(3.0));
        assert_eq!(leading_number("1e2g"), Some(100.0));
        assert_eq!(leading_number("2e"), Some(2.0));
        assert_eq!(leading_number("-4"), Some(-4.0));
        assert_eq!(leading_number("abc 5"), None);
    }

    #[test]
    fn test_servings_stepper_clamps() {
        assert_eq!(decrement_servings(4), 3);
        assert_eq!(decrement_servings(1), MIN_SERVINGS);
        assert_eq!(decrement_servings(0), MIN_SERVINGS);
        assert_eq!(increment_servings(4), 5);
    }

    #[test]
    fn test_ingredient_display() {
        let spaghetti = Ingredient { name: "Спагетти", amount: "400", unit: "г" };
        let salt = Ingredient { name: "Соль", amount: "по вкусу", unit: "" };

        assert_eq!(spaghetti.display(4, 8), "800.0 г");
        assert_eq!(salt.display(4, 8), "по вкусу");
    }
}
