//! Number rendering for the `"x,y"` display format.
//!
//! Integral values drop their fraction, negative zero prints as `0`, and
//! non-finite values use the names `NaN`, `Infinity` and `-Infinity`.
//! Magnitudes below `1e-6` or from `1e21` up switch to exponent form.
//!
//! Fixed-point rendering rounds exact ties away from zero (`0.125` to two
//! places is `0.13`), unlike `{:.N}` which rounds them to even.

use crate::{Float2Error, Float2Result};
use config::constants::MAX_FIXED_DECIMALS;

/// Smallest magnitude printed without an exponent.
const PLAIN_MIN: f64 = 1.0e-6;
/// Magnitude from which both renderings switch to exponent form.
const PLAIN_LIMIT: f64 = 1.0e21;

/// Renders a component with default formatting.
///
/// # Examples
/// ```
/// use float2::format::format_number;
/// assert_eq!(format_number(1.0), "1");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(1.0e-7), "1e-7");
/// assert_eq!(format_number(1.5e21), "1.5e+21");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    if let Some(name) = non_finite_name(value) {
        return name.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude < PLAIN_MIN || magnitude >= PLAIN_LIMIT {
        return exponent_form(value);
    }
    value.to_string()
}

/// Renders a component with exactly `decimals` digits after the point.
///
/// # Errors
///
/// `InvalidArgument` when `decimals` exceeds [`MAX_FIXED_DECIMALS`].
///
/// # Examples
/// ```
/// use float2::format::format_fixed;
/// assert_eq!(format_fixed(1.0 / 3.0, 2).unwrap(), "0.33");
/// assert_eq!(format_fixed(2.5, 0).unwrap(), "3");
/// assert!(format_fixed(1.0, 500).is_err());
/// ```
pub fn format_fixed(value: f64, decimals: usize) -> Float2Result<String> {
    check_decimals(decimals)?;
    Ok(render_fixed(value, decimals))
}

/// Rejects precisions above [`MAX_FIXED_DECIMALS`].
pub(crate) fn check_decimals(decimals: usize) -> Float2Result<()> {
    if decimals > MAX_FIXED_DECIMALS {
        log::debug!("fixed formatting rejected {decimals} decimals");
        return Err(Float2Error::InvalidArgument(format!(
            "decimals must be between 0 and {MAX_FIXED_DECIMALS}: {decimals}"
        )));
    }
    Ok(())
}

/// Fixed-point rendering for an already validated `decimals`.
pub(crate) fn render_fixed(value: f64, decimals: usize) -> String {
    if let Some(name) = non_finite_name(value) {
        return name.to_string();
    }
    let magnitude = value.abs();
    if magnitude >= PLAIN_LIMIT {
        return format_number(value);
    }
    let digits = if is_tie(magnitude, decimals) {
        round_tie_up(magnitude, decimals)
    } else {
        format!("{magnitude:.decimals$}")
    };
    // -0.0 is not negative, so it prints unsigned
    if value < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// True when `magnitude` lies exactly halfway between two values with
/// `decimals` fractional digits.
///
/// A finite double `m * 2^-k` with odd `m` has exactly `k` fractional
/// decimal digits, the last of which is 5, so it is a tie iff
/// `k == decimals + 1`.
fn is_tie(magnitude: f64, decimals: usize) -> bool {
    let bits = magnitude.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1_u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1_u64 << 52), biased - 1075)
    };
    if mantissa == 0 {
        return false;
    }
    let exponent = exponent + i64::from(mantissa.trailing_zeros());
    exponent < 0 && exponent.unsigned_abs() == decimals as u64 + 1
}

/// Rounds an exact tie away from zero.
fn round_tie_up(magnitude: f64, decimals: usize) -> String {
    // exact: the expansion ends at digit decimals + 1, which is the 5
    let exact = format!("{:.prec$}", magnitude, prec = decimals + 1);
    let mut digits = exact.into_bytes();
    digits.pop();
    if decimals == 0 {
        digits.pop();
    }

    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        match *digit {
            b'.' => continue,
            b'9' => *digit = b'0',
            _ => {
                *digit += 1;
                carry = false;
                break;
            }
        }
    }
    if carry {
        digits.insert(0, b'1');
    }
    digits.into_iter().map(char::from).collect()
}

fn exponent_form(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

fn non_finite_name(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}
