// src/discovery/price.rs

/// Extracts the lower-bound price from a free-form price-range string.
///
/// The catalog is not consistent about how ranges are written:
/// `"$500-$1000"`, `"₹20,000-₹50,000"`, `"$800 - $2,000"`, en-dash or
/// hyphen, with or without a currency symbol. We take whatever comes
/// before the first hyphen/en-dash (or the whole string if there is no
/// separator), throw away every non-digit, and read the rest as a
/// base-10 integer.
///
/// Anything that can't be read that way is worth 0 — this function
/// never fails.
pub fn lower_bound(text: Option<&str>) -> u64 {
    let raw = match text {
        Some(t) if !t.is_empty() => t,
        _ => return 0,
    };

    // First half of the range, whichever separator style is in use.
    let head = match raw.find(['-', '–']) {
        Some(idx) => &raw[..idx],
        None => raw,
    };

    // Drop currency symbols, thousands separators, whitespace.
    let digits: String = head.chars().filter(|c| c.is_ascii_digit()).collect();

    digits.parse().unwrap_or(0)
}
