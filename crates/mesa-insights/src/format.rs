//! # Prompt Text Formatting
//!
//! Peso and compact-number rendering for prompt text.
//!
//! This is deliberately NOT a UI formatting layer - the frontend localizes
//! its own display. Prompt text is this crate's output format, and the AI
//! guidelines require peso symbols and comma grouping inside the prompt
//! itself.

// =============================================================================
// Peso Formatting
// =============================================================================

/// Renders centavos as a peso string with comma-grouped thousands:
/// `123456789` → `"₱1,234,567.89"`.
pub fn peso(centavos: i64) -> String {
    let sign = if centavos < 0 { "-" } else { "" };
    let abs = centavos.abs();
    format!("{}₱{}.{:02}", sign, group_thousands(abs / 100), abs % 100)
}

/// Renders centavos compactly for axis labels: `1_250_00` → `"1.25K"`.
/// Values below a thousand pesos keep two decimals.
pub fn compact(centavos: i64) -> String {
    let pesos = centavos as f64 / 100.0;
    let abs = pesos.abs();

    if abs >= 1e12 {
        format!("{:.2}T", pesos / 1e12)
    } else if abs >= 1e9 {
        format!("{:.2}B", pesos / 1e9)
    } else if abs >= 1e6 {
        format!("{:.2}M", pesos / 1e6)
    } else if abs >= 1e3 {
        format!("{:.2}K", pesos / 1e3)
    } else {
        format!("{:.2}", pesos)
    }
}

/// Comma-groups a non-negative integer: `1234567` → `"1,234,567"`.
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peso() {
        assert_eq!(peso(0), "₱0.00");
        assert_eq!(peso(14950), "₱149.50");
        assert_eq!(peso(123456789), "₱1,234,567.89");
        assert_eq!(peso(-550), "-₱5.50");
    }

    #[test]
    fn test_compact() {
        assert_eq!(compact(50000), "500.00");
        assert_eq!(compact(125000), "1.25K");
        assert_eq!(compact(250000000), "2.50M");
        assert_eq!(compact(3_000_000_000_00), "3.00B");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
