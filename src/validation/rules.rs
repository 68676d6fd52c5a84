//! Typed rule functions.
//!
//! Each rule returns `Ok(())` or the field's message. Rules for one field are
//! chained with `and_then`, so the first failing rule wins.

use regex::Regex;

pub type RuleResult = Result<(), String>;

/// Fails when the string is empty or whitespace.
pub fn required(value: &str, message: &str) -> RuleResult {
    if value.trim().is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Fails when the number is zero (the platform treats zero as "not provided").
pub fn required_number(value: f64, message: &str) -> RuleResult {
    if value == 0.0 {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Fails when the count is zero.
pub fn required_count(value: i64, message: &str) -> RuleResult {
    if value == 0 {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Character-length bounds, inclusive.
pub fn length(value: &str, min: usize, max: usize, message: &str) -> RuleResult {
    let n = value.chars().count();
    if n < min || n > max {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

pub fn min_number(value: f64, min: f64, message: &str) -> RuleResult {
    if value < min {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

pub fn min_count(value: i64, min: i64, message: &str) -> RuleResult {
    if value < min {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Allow-list check. The message names the offending value.
pub fn one_of(value: &str, allowed: &[&str], label: &str) -> RuleResult {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(format!("invalid {label} {value}"))
    }
}

pub fn matches(value: &str, pattern: &Regex, message: &str) -> RuleResult {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// Applies `rule` only when `condition` holds.
pub fn when(condition: bool, rule: impl FnOnce() -> RuleResult) -> RuleResult {
    if condition {
        rule()
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        assert!(required("  ", "x must not be empty").is_err());
        assert!(required("a", "x must not be empty").is_ok());
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        assert!(length("测试客户", 1, 4, "too long").is_ok());
        assert!(length("测试客户!", 1, 4, "too long").is_err());
        assert!(length("", 1, 4, "too short").is_err());
    }

    #[test]
    fn one_of_names_the_value() {
        assert_eq!(
            one_of("EUR", &["USD", "CAD"], "currency code"),
            Err("invalid currency code EUR".to_string())
        );
    }

    #[test]
    fn chain_stops_at_first_failure() {
        let r = required("", "empty").and_then(|_| length("", 1, 3, "length"));
        assert_eq!(r, Err("empty".to_string()));
    }

    #[test]
    fn when_skips_rule() {
        assert!(when(false, || required("", "empty")).is_ok());
        assert!(when(true, || required("", "empty")).is_err());
    }
}
