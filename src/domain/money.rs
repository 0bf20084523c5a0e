use thiserror::Error;

/// Money is represented as integer cents to keep sums exact.
/// `500.00` is stored as `50000`.
pub type Cents = i64;

/// Sums of [`Cents`]. Wide enough that adding up any number of stored
/// amounts cannot overflow.
pub type TotalCents = i128;

/// Format cents (single amounts or totals) as a plain decimal string,
/// without any currency symbol.
/// Example: 37950 -> "379.50", -1 -> "-0.01"
pub fn format_cents(cents: impl Into<TotalCents>) -> String {
    let cents: TotalCents = cents.into();
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

/// Parse a decimal string into cents.
/// Example: "500" -> 50000, "120.5" -> 12050, ".50" -> 50
///
/// More than two decimal places is an error rather than a silent truncation.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (units_str, decimal_str) = match digits.split_once('.') {
        Some((units, decimals)) => (units, decimals),
        None => (digits, ""),
    };

    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(ParseCentsError::Empty);
    }
    if !is_ascii_digits(units_str) || !is_ascii_digits(decimal_str) {
        return Err(ParseCentsError::InvalidFormat(input.to_string()));
    }
    if decimal_str.len() > 2 {
        return Err(ParseCentsError::TooManyDecimals(input.to_string()));
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str
            .parse()
            .map_err(|_| ParseCentsError::OutOfRange(input.to_string()))?
    };

    // "5" after the point means 50 cents
    let decimal_cents: i64 = match decimal_str.len() {
        0 => 0,
        1 => i64::from(decimal_str.as_bytes()[0] - b'0') * 10,
        _ => i64::from(decimal_str.as_bytes()[0] - b'0') * 10
            + i64::from(decimal_str.as_bytes()[1] - b'0'),
    };

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(decimal_cents))
        .ok_or_else(|| ParseCentsError::OutOfRange(input.to_string()))?;

    Ok(if negative { -cents } else { cents })
}

fn is_ascii_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCentsError {
    #[error("empty amount")]
    Empty,

    #[error("invalid money format: '{0}'")]
    InvalidFormat(String),

    #[error("too many decimal places (at most 2): '{0}'")]
    TooManyDecimals(String),

    #[error("amount out of range: '{0}'")]
    OutOfRange(String),
}
