use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::stats::{self, MedianRule};

// ---------------------------------------------------------------------------
// Method selector
// ---------------------------------------------------------------------------

/// Which outlier test [`trim`] applies to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// More than 1.5 × IQR beyond the nearer of Q1 / Q3.
    Iqr,
    /// More than 2 standard deviations from the mean.
    StdDev,
}

impl Method {
    /// Resolve the historic numeric selector (1 = IQR, 2 = standard
    /// deviation). Anything else is [`Error::InvalidMethod`].
    pub fn from_selector(n: u8) -> Result<Method, Error> {
        match n {
            1 => Ok(Method::Iqr),
            2 => Ok(Method::StdDev),
            other => Err(Error::InvalidMethod(other.to_string())),
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if let Ok(n) = token.parse::<u8>() {
            return Method::from_selector(n);
        }
        match token.to_ascii_lowercase().as_str() {
            "iqr" => Ok(Method::Iqr),
            "stddev" | "sd" => Ok(Method::StdDev),
            _ => Err(Error::InvalidMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Iqr => write!(f, "IQR"),
            Method::StdDev => write!(f, "standard deviation"),
        }
    }
}

// ---------------------------------------------------------------------------
// Trimming
// ---------------------------------------------------------------------------

/// Remove outliers from `column` according to `method`.
///
/// Pure: returns a new vector and leaves the input untouched. Survivors keep
/// their relative order for both methods; the sort required by quartile
/// computation happens on an internal copy only.
///
/// Values exactly at the fence distance are kept; only strictly greater
/// distances count as outliers. `rule` picks the even-count median formula
/// for the quartile computation (ignored by the standard-deviation method).
pub fn trim(column: &[f64], method: Method, rule: MedianRule) -> Result<Vec<f64>, Error> {
    let survivors = match method {
        Method::Iqr => {
            let (q1, q3) = stats::quartiles(column, rule)?;
            let fence = (q3 - q1) * 1.5;
            log::debug!("IQR fence: q1={q1}, q3={q3}, fence={fence}");
            filter_by_distance(column, |x| (x - q1).abs().min((x - q3).abs()), fence)
        }
        Method::StdDev => {
            let mean = stats::average(column)?;
            let sd = stats::standard_deviation(column, mean)?;
            let fence = 2.0 * sd;
            log::debug!("stddev fence: mean={mean}, sd={sd}, fence={fence}");
            filter_by_distance(column, |x| (x - mean).abs(), fence)
        }
    };
    Ok(survivors)
}

fn filter_by_distance(column: &[f64], distance: impl Fn(f64) -> f64, fence: f64) -> Vec<f64> {
    column.iter().copied().filter(|&x| distance(x) <= fence).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
