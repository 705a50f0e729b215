//! Safe parsing for decorated values arriving at the ingestion edge
//!
//! Monetary fields in legacy job records arrive either as numbers or as
//! decorated strings (`"R 1500.00"`, `"31.82%"`, `"1,500"`). Dates arrive as
//! `YYYY-MM-DD`, sometimes as `MM/DD/YYYY` from locale-dependent inputs.
//! Both parsers degrade instead of failing: unparseable amounts become 0,
//! unparseable dates become `None`.

use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Currency symbol, percent sign, thousands separators, whitespace
static AMOUNT_DECORATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[R%,\s]").expect("valid regex"));

/// An amount as it arrives from a form or a legacy record: already numeric
/// or a decorated string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    /// Parse to plain currency units, never failing
    pub fn to_amount(&self) -> f64 {
        match self {
            RawAmount::Number(n) => *n,
            RawAmount::Text(s) => parse_amount(s),
        }
    }
}

impl From<f64> for RawAmount {
    fn from(n: f64) -> Self {
        RawAmount::Number(n)
    }
}

impl From<&str> for RawAmount {
    fn from(s: &str) -> Self {
        RawAmount::Text(s.to_string())
    }
}

/// Parse a possibly decorated monetary or percentage string.
///
/// Strips the currency symbol, percent sign, thousands separators and
/// whitespace, then parses as floating point. Unparseable input yields 0.
pub fn parse_amount(value: &str) -> f64 {
    let clean = AMOUNT_DECORATION.replace_all(value, "");
    clean.parse::<f64>().unwrap_or(0.0)
}

/// Parse a calendar date leniently.
///
/// Accepts `YYYY-MM-DD`, `MM/DD/YYYY` (locale-dependent browser inputs) and
/// RFC 3339 timestamps. Anything else yields `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%m/%d/%Y") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    None
}

/// Format a date the way the rest of the system displays it
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
