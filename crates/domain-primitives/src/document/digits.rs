//! Digit extraction and rendering shared by every identifier.

/// Extract the ASCII digits of `raw` as numeric values (`0..=9`).
///
/// Every other character, including punctuation, whitespace and non-ASCII
/// digits, is discarded.
///
/// # Examples
///
/// ```
/// use domain_primitives::document::normalize_digits;
///
/// assert_eq!(normalize_digits("529.982-2"), vec![5, 2, 9, 9, 8, 2, 2]);
/// assert!(normalize_digits("no digits").is_empty());
/// ```
#[must_use]
pub fn normalize_digits(raw: &str) -> Vec<u8> {
    raw.bytes()
        .filter(u8::is_ascii_digit)
        .map(|byte| byte - b'0')
        .collect()
}

/// Convert a validated digit value into its ASCII character.
pub(crate) fn digit_char(digit: u8) -> char {
    char::from(b'0' + digit)
}

/// Render digits without separators.
pub(crate) fn digit_string(digits: &[u8]) -> String {
    digits.iter().copied().map(digit_char).collect()
}

/// Render digits with `separators` inserted before the given indices.
///
/// Digits for which `reveal` returns `false` are replaced by `*`.
pub(crate) fn render(
    digits: &[u8],
    separators: &[(usize, char)],
    reveal: impl Fn(usize) -> bool,
) -> String {
    let mut rendered = String::with_capacity(digits.len() + separators.len());
    for (index, digit) in digits.iter().copied().enumerate() {
        if let Some((_, separator)) = separators.iter().find(|(at, _)| *at == index) {
            rendered.push(*separator);
        }
        rendered.push(if reveal(index) { digit_char(digit) } else { '*' });
    }
    rendered
}
