//! Currency converter
//!
//! Holds the active exchange rate (target currency per unit of base currency)
//! and converts amounts in the target currency back into the base currency.
//! The rate is never fetched; users can override the default and the
//! override survives restarts through the [`RateStore`].

use thiserror::Error;
use tracing::{info, warn};

use crate::store::RateStore;

/// Currency the traveller thinks in
pub const BASE_CURRENCY: &str = "TWD";
/// Currency spent on the trip
pub const TARGET_CURRENCY: &str = "JPY";
/// JPY per TWD used when the user has not set a rate
pub const DEFAULT_EXCHANGE_RATE: f64 = 4.5;
/// Smallest rate that still shows as non-zero with four decimals
pub const MIN_EXCHANGE_RATE: f64 = 0.00005;

/// Reasons a candidate exchange rate is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateError {
    /// The input is not a finite number
    #[error("'{0}' is not a number")]
    NotANumber(String),
    /// The input is a number but not greater than zero
    #[error("exchange rate must be greater than 0 (got {0})")]
    NotPositive(f64),
    /// Positive, but too small to show in the rate editor
    #[error("exchange rate must be at least 0.0001 (got {0})")]
    TooSmall(f64),
}

/// Parses a candidate exchange rate
///
/// Valid iff finite, greater than zero and large enough to be displayed.
pub fn parse_rate(input: &str) -> Result<f64, RateError> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| RateError::NotANumber(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(RateError::NotANumber(trimmed.to_string()));
    }
    if value <= 0.0 {
        return Err(RateError::NotPositive(value));
    }
    if value < MIN_EXCHANGE_RATE {
        return Err(RateError::TooSmall(value));
    }
    Ok(value)
}

/// Parses an amount to convert. Anything that is not a finite positive number is `None`.
pub fn parse_amount(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Converts a target-currency amount into the base currency at `rate`
///
/// Invalid or empty amounts, and quotients too large to represent, yield the
/// zero result rather than an error. Halves round away from zero.
pub fn convert(amount: &str, rate: f64) -> String {
    match parse_amount(amount).map(|value| round_cents(value / rate)) {
        Some(value) if value.is_finite() => format!("≈ {:.2} {}", value, BASE_CURRENCY),
        _ => zero_result(),
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The result shown when there is nothing to convert
pub fn zero_result() -> String {
    format!("≈ 0 {}", BASE_CURRENCY)
}

/// External search for today's rate between the two currencies
pub fn rate_search_url() -> String {
    format!(
        "https://www.google.com/search?q={}+to+{}+exchange+rate",
        BASE_CURRENCY, TARGET_CURRENCY
    )
}

fn format_rate(rate: f64) -> String {
    format!("{:.4}", rate)
}

/// Exchange rate state plus the converter's input fields
#[derive(Debug, Clone)]
pub struct CurrencyConverter {
    /// Active rate, always finite and > 0
    current_rate: f64,
    /// Contents of the rate editor
    rate_input: String,
    /// Contents of the amount input
    amount_input: String,
    /// Last conversion result
    result: String,
    /// Where overrides are persisted; `None` disables persistence
    store: Option<RateStore>,
}

impl CurrencyConverter {
    /// Creates a converter with the rate read from `store`
    ///
    /// Falls back to [`DEFAULT_EXCHANGE_RATE`] if the slot is absent or does
    /// not hold a valid rate.
    pub fn load_rate(store: Option<RateStore>) -> Self {
        let persisted = store
            .as_ref()
            .and_then(|s| s.load())
            .and_then(|stored| parse_rate(&stored.rate).ok());

        let current_rate = match persisted {
            Some(rate) => {
                info!(rate, "loaded custom exchange rate");
                rate
            }
            None => DEFAULT_EXCHANGE_RATE,
        };

        Self {
            current_rate,
            rate_input: format_rate(current_rate),
            amount_input: String::new(),
            result: zero_result(),
            store,
        }
    }

    /// The active exchange rate
    pub fn current_rate(&self) -> f64 {
        self.current_rate
    }

    /// Contents of the rate editor
    pub fn rate_input(&self) -> &str {
        &self.rate_input
    }

    /// Contents of the amount input
    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    /// Last conversion result
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Mutable access to the rate editor while the user is typing
    pub fn rate_input_mut(&mut self) -> &mut String {
        &mut self.rate_input
    }

    /// Attempts to change the active rate
    ///
    /// On success the rate is persisted, the display re-rendered and the
    /// pending conversion re-run. On failure nothing changes except that the
    /// rate editor is restored to the active rate.
    pub fn set_rate(&mut self, candidate: &str) -> Result<f64, RateError> {
        let rate = match parse_rate(candidate) {
            Ok(rate) => rate,
            Err(e) => {
                warn!(candidate, error = %e, "rejected exchange rate");
                self.revert_rate_input();
                return Err(e);
            }
        };

        self.current_rate = rate;
        if let Some(store) = &self.store {
            if let Err(e) = store.save_rate(rate) {
                warn!(error = %e, "failed to persist exchange rate");
            }
        }
        info!(rate, "exchange rate updated");

        self.render();
        Ok(rate)
    }

    /// Discards whatever is in the rate editor
    pub fn revert_rate_input(&mut self) {
        self.rate_input = format_rate(self.current_rate);
    }

    /// Replaces the amount input and re-runs the conversion
    pub fn set_amount(&mut self, input: &str) {
        self.amount_input = input.to_string();
        self.result = self.convert(&self.amount_input);
    }

    /// Appends a character to the amount input and re-runs the conversion
    pub fn push_amount_char(&mut self, c: char) {
        self.amount_input.push(c);
        self.result = self.convert(&self.amount_input);
    }

    /// Removes the last character of the amount input and re-runs the conversion
    pub fn pop_amount_char(&mut self) {
        self.amount_input.pop();
        self.result = self.convert(&self.amount_input);
    }

    /// Converts `amount` at the active rate
    pub fn convert(&self, amount: &str) -> String {
        convert(amount, self.current_rate)
    }

    /// Brings the display in line with the active rate
    ///
    /// The rate editor shows the rate to four decimals and the result is
    /// recomputed from the current amount so it is never stale.
    pub fn render(&mut self) {
        self.rate_input = format_rate(self.current_rate);
        self.result = self.convert(&self.amount_input);
    }
}
