use crate::error::Error;

// ---------------------------------------------------------------------------
// Basic moments
// ---------------------------------------------------------------------------

/// Arithmetic mean of `values`.
pub fn average(values: &[f64]) -> Result<f64, Error> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation of `values` around `mean`.
///
/// Divides the summed squared deviations by the count (no Bessel correction),
/// then takes the square root.
pub fn standard_deviation(values: &[f64], mean: f64) -> Result<f64, Error> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }
    let sum_sq: f64 = values.iter().map(|x| (x - mean) * (x - mean)).sum();
    Ok((sum_sq / values.len() as f64).sqrt())
}

// ---------------------------------------------------------------------------
// Order statistics
// ---------------------------------------------------------------------------

/// Which even-count median formula to apply.
///
/// The historical formula averages the elements at indices `n/2` and
/// `n/2 + 1`, one position to the right of the two central elements. It is
/// kept as [`MedianRule::Legacy`] (and used by [`quartiles`]) so existing
/// results stay reproducible; [`MedianRule::Conventional`] is the textbook
/// definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MedianRule {
    #[default]
    Legacy,
    Conventional,
}

impl std::str::FromStr for MedianRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(MedianRule::Legacy),
            "conventional" => Ok(MedianRule::Conventional),
            _ => Err(Error::InvalidMedianRule(s.to_string())),
        }
    }
}

/// Median of an already-sorted slice.
///
/// Precondition: `sorted` is ascending. Not checked at runtime; an unsorted
/// input silently yields a meaningless result.
pub fn median(sorted: &[f64], rule: MedianRule) -> Result<f64, Error> {
    if sorted.is_empty() {
        return Err(Error::EmptyInput);
    }
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        return Ok(sorted[mid]);
    }
    let value = match rule {
        MedianRule::Legacy => {
            // Historical formula reads one past the midpoint; clamping keeps
            // a two-element input in range (degenerating to its last element).
            let hi = (mid + 1).min(n - 1);
            (sorted[mid] + sorted[hi]) / 2.0
        }
        MedianRule::Conventional => (sorted[mid - 1] + sorted[mid]) / 2.0,
    };
    Ok(value)
}

/// First and third quartile of `values`, as `(Q1, Q3)`.
///
/// Sorts an internal copy; the caller's slice is never reordered. The lower
/// half covers indices `[0, n/2 - 1)` and the upper half
/// `[ceil(n/2), n - 1)` of the sorted copy, so the last element (and, for odd
/// counts, the middle element) belongs to neither half. Q3 is therefore
/// biased low on some inputs; the slicing is kept as-is for reproducibility.
///
/// `rule` selects the even-count median formula used on each half.
///
/// Fewer than four values leave both halves empty and fail with
/// [`Error::EmptyInput`].
pub fn quartiles(values: &[f64], rule: MedianRule) -> Result<(f64, f64), Error> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let lower = &sorted[..(n / 2).saturating_sub(1)];
    let upper = &sorted[n.div_ceil(2).min(n - 1)..n - 1];

    let q1 = median(lower, rule)?;
    let q3 = median(upper, rule)?;
    Ok((q1, q3))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
