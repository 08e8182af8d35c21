//! Number formatting shared by every render target

/// Extra digits printed past the requested precision to tell exact ties apart
/// from values that only look like ties after rounding.
const TIE_DIGITS: usize = 25;

/// Fixed-point text with `digits` decimals, rounding halves away from zero.
///
/// `format!("{:.2}")` rounds exact binary ties such as `187.125` to even; the
/// dashboard always shows the larger magnitude instead.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", digits + TIE_DIGITS, value.abs());
    let (kept, rest) = exact.split_at(exact.len() - TIE_DIGITS);
    let kept = kept.trim_end_matches('.');
    let magnitude = if rest.as_bytes()[0] >= b'5' {
        round_up_last_digit(kept)
    } else {
        kept.to_string()
    };

    if value < 0.0 {
        format!("-{}", magnitude)
    } else {
        magnitude
    }
}

/// Adds one unit in the last place of a plain decimal string, e.g. `9.99` -> `10.00`.
fn round_up_last_digit(decimal: &str) -> String {
    let mut bytes = decimal.as_bytes().to_vec();
    for i in (0..bytes.len()).rev() {
        match bytes[i] {
            b'.' => continue,
            b'9' => bytes[i] = b'0',
            digit => {
                bytes[i] = digit + 1;
                return bytes.into_iter().map(char::from).collect();
            }
        }
    }
    std::iter::once('1')
        .chain(bytes.into_iter().map(char::from))
        .collect()
}

/// Formats a magnitude with a B/M/K suffix. Below one thousand the plain number is returned.
pub fn format_volume(value: f64) -> String {
    if value >= 1e9 {
        format!("{}B", to_fixed(value / 1e9, 2))
    } else if value >= 1e6 {
        format!("{}M", to_fixed(value / 1e6, 2))
    } else if value >= 1e3 {
        format!("{}K", to_fixed(value / 1e3, 2))
    } else {
        value.to_string()
    }
}

/// `$` followed by the value with two decimals.
pub fn format_price(value: f64) -> String {
    format!("${}", to_fixed(value, 2))
}

/// Price-change line, e.g. `+1.25% (+$2.30)` or `-0.83% ($1.50)`.
///
/// Both components get a leading `+` when the change is non-negative. The percent
/// keeps its own sign, while the dollar delta is always shown as a magnitude.
pub fn format_price_change(change: f64, percent: f64) -> String {
    let sign = if change >= 0.0 { "+" } else { "" };
    format!(
        "{sign}{}% ({sign}${})",
        to_fixed(percent, 2),
        to_fixed(change.abs(), 2)
    )
}
