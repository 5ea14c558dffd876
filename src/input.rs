//! Input sources and the number parsing applied to them.
//!
//! The raw text of the input field is parsed leniently: leading whitespace,
//! an optional sign, an optional `0x` prefix selecting hexadecimal, then the
//! longest run of digits. Anything after the digits is ignored. No digits at
//! all yields [`RequestNumber::NaN`], which is still sent to the server as the
//! literal text `NaN`.

use std::fmt;
use std::io::BufRead;

use crate::error::{ClientError, ClientResult};

/// The value sent as `n` in the request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestNumber {
    /// Canonical decimal text: no leading zeros, `-` only for non-zero values.
    Integer(String),
    NaN,
}

impl RequestNumber {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let (radix, body) = match rest.get(..2) {
            Some("0x" | "0X") => (16, &rest[2..]),
            _ => (10, rest),
        };

        // `is_digit` only accepts ASCII, so the count is also a byte length
        let digit_len = body.chars().take_while(|c| c.is_digit(radix)).count();
        if digit_len == 0 {
            return RequestNumber::NaN;
        }

        let digits = &body[..digit_len];
        let decimal = if radix == 16 {
            hex_to_decimal(digits)
        } else {
            digits.trim_start_matches('0').to_string()
        };
        if decimal.is_empty() {
            return RequestNumber::Integer("0".to_string());
        }

        let mut text = String::with_capacity(decimal.len() + 1);
        if negative {
            text.push('-');
        }
        text.push_str(&decimal);
        RequestNumber::Integer(text)
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, RequestNumber::NaN)
    }
}

/// Hex digits to decimal text without leading zeros. All zeros gives `""`.
fn hex_to_decimal(hex: &str) -> String {
    // Little-endian base-10 digits
    let mut decimal: Vec<u32> = Vec::new();
    for c in hex.chars() {
        let mut carry = c.to_digit(16).unwrap_or(0);
        for d in decimal.iter_mut() {
            let v = *d * 16 + carry;
            *d = v % 10;
            carry = v / 10;
        }
        while carry > 0 {
            decimal.push(carry % 10);
            carry /= 10;
        }
    }

    decimal
        .iter()
        .rev()
        .skip_while(|&&d| d == 0)
        .filter_map(|&d| char::from_digit(d, 10))
        .collect()
}

impl fmt::Display for RequestNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestNumber::Integer(text) => f.write_str(text),
            RequestNumber::NaN => f.write_str("NaN"),
        }
    }
}

impl From<i64> for RequestNumber {
    fn from(value: i64) -> Self {
        RequestNumber::Integer(value.to_string())
    }
}

/// Where the raw text of the `n` field comes from.
pub trait InputSource {
    fn read_value(&mut self) -> ClientResult<String>;
}

/// Text captured up front, e.g. from a command-line argument.
#[derive(Debug, Clone)]
pub struct ArgInput(pub String);

impl InputSource for ArgInput {
    fn read_value(&mut self) -> ClientResult<String> {
        Ok(self.0.clone())
    }
}

/// Reads one line per trigger from any buffered reader (stdin by default).
pub struct StdinInput<R = std::io::StdinLock<'static>> {
    reader: R,
}

impl StdinInput {
    pub fn new() -> Self {
        Self {
            reader: std::io::stdin().lock(),
        }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> StdinInput<R> {
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for StdinInput<R> {
    fn read_value(&mut self) -> ClientResult<String> {
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(line)
    }
}

/// Parse the raw field text, rejecting `NaN` when `strict` is set.
pub fn read_number(source: &mut impl InputSource, strict: bool) -> ClientResult<RequestNumber> {
    let raw = source.read_value()?;
    let number = RequestNumber::parse(&raw);
    if strict && number.is_nan() {
        return Err(ClientError::InvalidInput { raw });
    }
    Ok(number)
}
