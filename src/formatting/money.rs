//! Currency formatting.
//!
//! Two tiers: a locale-style formatter with digit grouping, and a plain
//! `{symbol}{amount:.2}` fallback used whenever the rich tier fails.
//! Neither tier ever renders `NaN` or `inf`.

use crate::inputs::Currency;

/// Failure of a rich money formatter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// Amount was NaN or infinite
    #[error("cannot format non-finite amount {0}")]
    NonFinite(f64),
    /// The formatting facility is not available
    #[error("money formatting unavailable: {0}")]
    Unavailable(String),
}

pub trait MoneyFormatter {
    fn format(&self, amount: f64, currency: Currency) -> Result<String, FormatError>;
}

/// en-US style currency rendering: `-$1,234.50`, `€1,234.50`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleFormatter;

impl MoneyFormatter for LocaleFormatter {
    fn format(&self, amount: f64, currency: Currency) -> Result<String, FormatError> {
        if !amount.is_finite() {
            return Err(FormatError::NonFinite(amount));
        }

        let fixed = format!("{:.2}", amount.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let sign = if amount.is_sign_negative() && fixed != "0.00" {
            "-"
        } else {
            ""
        };

        Ok(format!(
            "{sign}{}{}.{fraction}",
            currency.symbol(),
            group_digits(whole)
        ))
    }
}

/// `{symbol}{amount:.2}` with no grouping.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl MoneyFormatter for PlainFormatter {
    fn format(&self, amount: f64, currency: Currency) -> Result<String, FormatError> {
        Ok(plain(amount, currency))
    }
}

fn plain(amount: f64, currency: Currency) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    format!("{}{:.2}", currency.symbol(), amount)
}

/// Insert `,` between every group of three digits.
pub fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_money(amount: f64, currency: Currency) -> String {
    format_money_with(&LocaleFormatter, amount, currency)
}

/// Format with `formatter`, falling back to plain rendering on failure.
pub fn format_money_with(
    formatter: &dyn MoneyFormatter,
    amount: f64,
    currency: Currency,
) -> String {
    match formatter.format(amount, currency) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("{e}; using plain money format");
            plain(amount, currency)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoLocale;

    impl MoneyFormatter for NoLocale {
        fn format(&self, _amount: f64, _currency: Currency) -> Result<String, FormatError> {
            Err(FormatError::Unavailable("no locale data".into()))
        }
    }

    #[test]
    fn test_locale_usd() {
        let text = format_money(1234.5, Currency::Usd);
        assert!(text.contains("1,234.50"));
        assert_eq!(text, "$1,234.50");
    }

    #[test]
    fn test_locale_eur() {
        assert_eq!(format_money(1234.5, Currency::Eur), "€1,234.50");
    }

    #[test]
    fn test_fallback_path() {
        assert_eq!(format_money_with(&NoLocale, 1234.5, Currency::Usd), "$1234.50");
        assert_eq!(format_money_with(&NoLocale, 1234.5, Currency::Eur), "€1234.50");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_money(0.0, Currency::Usd), "$0.00");
        assert_eq!(format_money(999.999, Currency::Usd), "$1,000.00");
        assert_eq!(format_money(1_234_567.891, Currency::Usd), "$1,234,567.89");
        assert_eq!(group_digits("100"), "100");
        assert_eq!(group_digits("1000"), "1,000");
        assert_eq!(group_digits(""), "");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_money(-1234.5, Currency::Usd), "-$1,234.50");
        assert_eq!(format_money(-0.001, Currency::Usd), "$0.00");
    }

    #[test]
    fn test_non_finite_never_surfaces() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let text = format_money(value, Currency::Usd);
            assert_eq!(text, "$0.00");
        }
        assert!(LocaleFormatter.format(f64::NAN, Currency::Eur).is_err());
    }

    #[test]
    fn test_plain_formatter_tier() {
        assert_eq!(
            PlainFormatter.format(42.0, Currency::Eur).unwrap(),
            "€42.00"
        );
    }

    #[test]
    fn test_format_error_messages() {
        assert_eq!(
            FormatError::NonFinite(f64::INFINITY).to_string(),
            "cannot format non-finite amount inf"
        );
        let err: Box<dyn std::error::Error> = Box::new(FormatError::Unavailable("no ICU".into()));
        assert_eq!(err.to_string(), "money formatting unavailable: no ICU");
    }
}
