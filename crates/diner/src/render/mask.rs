//! Input masks for the payment prompt.

/// Keeps ASCII digits only.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Card number as shown back to the customer: digits only, in groups of four.
///
/// ```
/// use diner::render::mask_card_number;
/// assert_eq!(mask_card_number("1234-5678 9012 3456"), "1234 5678 9012 3456");
/// ```
pub fn mask_card_number(raw: &str) -> String {
    let digits = digits_only(raw);
    let mut masked = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            masked.push(' ');
        }
        masked.push(digit);
    }
    masked
}
