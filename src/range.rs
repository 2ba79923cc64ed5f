use std::sync::Arc;

use tracing::debug;

/// Callback applied to each generated range value, given the value and its
/// zero-based position in the range. Its return value replaces the value.
pub type BulletFn = Arc<dyn Fn(&str, usize) -> String + Send + Sync>;

/// Separator between the bounds (and optional step) of a range expression.
pub const RANGE_SEPARATOR: &str = "..";

/// Ranges longer than this expand to nothing.
pub const MAX_RANGE_ITEMS: usize = 65_536;

/// Splits a range expression such as `"1..10..2"` into its tokens.
pub fn split_range(spec: &str) -> Vec<&str> {
    spec.split(RANGE_SEPARATOR).collect()
}

/// Turns range bounds into an explicit, ordered sequence of strings.
pub trait RangeExpander {
    fn expand(
        &self,
        start: &str,
        end: &str,
        step: Option<&str>,
        each: Option<&BulletFn>,
    ) -> Vec<String>;
}

/// Inclusive numeric and single-character alphabetic ranges.
///
/// - `"1..5"` yields `1, 2, 3, 4, 5`; `"5..1"` counts down.
/// - A bound written with a leading zero pads every value: `"01..03"`.
/// - `"a..e"` walks code points, so `"E..A"` and `"a..z..5"` also work.
/// - The step's sign is ignored and `0` counts as `1`.
///
/// Anything else (mixed bounds, words, a non-integer step) expands to an
/// empty sequence rather than an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRangeExpander;

impl RangeExpander for DefaultRangeExpander {
    fn expand(
        &self,
        start: &str,
        end: &str,
        step: Option<&str>,
        each: Option<&BulletFn>,
    ) -> Vec<String> {
        let step = match step {
            None => 1,
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(n) => n.unsigned_abs().max(1),
                Err(_) => {
                    debug!(step = raw, "range step is not an integer");
                    return Vec::new();
                }
            },
        };

        let values = match (parse_bound(start), parse_bound(end)) {
            (Some(a), Some(b)) => numeric_range(a, b, step, pad_width(start, end)),
            (None, None) => match (single_char(start), single_char(end)) {
                (Some(a), Some(b)) => alpha_range(a, b, step),
                _ => {
                    debug!(start, end, "range bounds are not single characters");
                    Vec::new()
                }
            },
            _ => {
                debug!(start, end, "range mixes numeric and alphabetic bounds");
                Vec::new()
            }
        };

        match each {
            Some(f) => values
                .iter()
                .enumerate()
                .map(|(i, value)| f(value.as_str(), i))
                .collect(),
            None => values,
        }
    }
}

fn parse_bound(bound: &str) -> Option<i64> {
    bound.trim().parse::<i64>().ok()
}

fn single_char(bound: &str) -> Option<char> {
    let mut chars = bound.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Width to zero-pad to, or 0 when neither bound has a leading zero.
fn pad_width(start: &str, end: &str) -> usize {
    let digits = |s: &str| {
        let s = s.trim();
        s.strip_prefix(&['-', '+'][..]).unwrap_or(s).to_string()
    };
    let (a, b) = (digits(start), digits(end));
    let padded = |d: &str| d.len() > 1 && d.starts_with('0');
    if padded(&a) || padded(&b) {
        a.len().max(b.len())
    } else {
        0
    }
}

/// Number of values an inclusive range from `a` to `b` produces, or `None`
/// when it exceeds `MAX_RANGE_ITEMS`.
fn range_len(a: i128, b: i128, step: u64) -> Option<usize> {
    let len = (a - b).unsigned_abs() / u128::from(step) + 1;
    usize::try_from(len)
        .ok()
        .filter(|len| *len <= MAX_RANGE_ITEMS)
}

fn stepped(a: i128, b: i128, step: u64) -> Option<impl Iterator<Item = i128>> {
    let len = match range_len(a, b, step) {
        Some(len) => len,
        None => {
            debug!(start = %a, end = %b, step, max = MAX_RANGE_ITEMS, "range too long");
            return None;
        }
    };
    let delta = if a <= b { step as i128 } else { -(step as i128) };
    Some((0..len).map(move |i| a + delta * i as i128))
}

fn numeric_range(a: i64, b: i64, step: u64, width: usize) -> Vec<String> {
    let Some(values) = stepped(i128::from(a), i128::from(b), step) else {
        return Vec::new();
    };
    values
        .map(|n| {
            if n < 0 {
                format!("-{:0width$}", -n, width = width)
            } else {
                format!("{:0width$}", n, width = width)
            }
        })
        .collect()
}

fn alpha_range(a: char, b: char, step: u64) -> Vec<String> {
    let Some(codes) = stepped(i128::from(u32::from(a)), i128::from(u32::from(b)), step) else {
        return Vec::new();
    };
    codes
        .filter_map(|code| u32::try_from(code).ok().and_then(char::from_u32))
        .map(String::from)
        .collect()
}
