//!
//! Utility functions.
//!

///
/// Formats an integer with comma thousands separators, e.g. `24576` as `24,576`.
///
pub fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            result.push(',');
        }
        result.push(digit);
    }
    result
}
