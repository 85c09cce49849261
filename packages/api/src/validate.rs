//! Client-side form checks.
//!
//! Cosmetic only — the server remains authoritative. Each check fails fast
//! with [`ApiError::Validation`] before any request is issued.

use chrono::NaiveDate;

use crate::error::ApiError;

pub(crate) fn require(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{field} is required")));
    }
    Ok(())
}

pub(crate) fn email(value: &str) -> Result<(), ApiError> {
    require(value, "email")?;
    if !value.contains('@') {
        return Err(ApiError::validation("please enter a valid email"));
    }
    Ok(())
}

/// Vietnamese mobile format: leading 0, exactly 10 digits.
pub(crate) fn phone_vn(value: &str) -> Result<(), ApiError> {
    let value = value.trim();
    if value.len() != 10 || !value.starts_with('0') || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ApiError::validation(
            "phone must be 10 digits starting with 0",
        ));
    }
    Ok(())
}

pub(crate) fn date_order(check_in: NaiveDate, check_out: NaiveDate) -> Result<(), ApiError> {
    if check_out <= check_in {
        return Err(ApiError::validation("check-out must be after check-in"));
    }
    Ok(())
}

pub(crate) fn guest_count(count: u32) -> Result<(), ApiError> {
    if count == 0 {
        return Err(ApiError::validation("at least one guest is required"));
    }
    Ok(())
}

pub(crate) fn star_rating(stars: u8) -> Result<(), ApiError> {
    if !(1..=5).contains(&stars) {
        return Err(ApiError::validation("rating must be between 1 and 5 stars"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_require_rejects_blank() {
        assert!(require("  ", "name").is_err());
        assert!(require("Lan", "name").is_ok());
    }

    #[test]
    fn test_email_needs_at_sign() {
        assert!(email("lan.example.com").is_err());
        assert!(email("lan@example.com").is_ok());
    }

    #[test]
    fn test_phone_format() {
        assert!(phone_vn("0912345678").is_ok());
        assert!(phone_vn("091234567").is_err()); // 9 digits
        assert!(phone_vn("09123456789").is_err()); // 11 digits
        assert!(phone_vn("1912345678").is_err()); // no leading 0
        assert!(phone_vn("09123a5678").is_err()); // non-digit
    }

    #[test]
    fn test_date_order_is_strict() {
        assert!(date_order(date("2026-09-01"), date("2026-09-02")).is_ok());
        assert!(date_order(date("2026-09-01"), date("2026-09-01")).is_err());
        assert!(date_order(date("2026-09-02"), date("2026-09-01")).is_err());
    }

    #[test]
    fn test_star_bounds() {
        assert!(star_rating(0).is_err());
        assert!(star_rating(1).is_ok());
        assert!(star_rating(5).is_ok());
        assert!(star_rating(6).is_err());
    }
}
