//! Money representation and currency formatting.
//!
//! Prices are carried as integers in the smallest currency unit (centavos)
//! so aggregation never touches floating point. Presentation is a separate,
//! configured concern: [`CurrencyFormatter`] renders the same numbers the
//! cart summary computes, for one fixed locale/currency.

use serde::{Deserialize, Serialize};

/// Amount in smallest currency unit (e.g. centavos).
pub type Centavos = u64;

/// Convert a major-unit amount from the catalog payload (e.g. `150` or
/// `99.5` pesos) into centavos.
///
/// Returns `None` for negative, non-finite, or out-of-range values.
pub fn centavos_from_major(value: f64) -> Option<Centavos> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let cents = (value * 100.0).round();
    if cents > u64::MAX as f64 {
        return None;
    }
    Some(cents as Centavos)
}

/// Fixed-locale currency formatting strategy.
///
/// One configured instance per process; everything user-visible goes through
/// it so totals always render from the same numbers the cart computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormatter {
    /// ISO currency code (e.g. "MXN").
    pub code: String,
    /// Symbol prefixed to formatted amounts.
    pub symbol: String,
    /// Thousands separator for the integer part.
    pub thousands_sep: char,
    /// Separator between integer part and the two-digit fraction.
    pub decimal_sep: char,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        // es-MX / MXN, matching the storefront's single configured locale.
        Self {
            code: "MXN".to_owned(),
            symbol: "$".to_owned(),
            thousands_sep: ',',
            decimal_sep: '.',
        }
    }
}

impl CurrencyFormatter {
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Render centavos as e.g. `$1,234.50`.
    pub fn format(&self, amount: Centavos) -> String {
        let major = amount / 100;
        let minor = amount % 100;
        let mut integer = String::new();
        let digits = major.to_string();
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                integer.push(self.thousands_sep);
            }
            integer.push(ch);
        }
        format!(
            "{}{}{}{:02}",
            self.symbol, integer, self.decimal_sep, minor
        )
    }
}
