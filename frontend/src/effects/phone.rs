/// Masks whatever was typed into `(555) 123-4567` form, keeping at most ten
/// digits. Three or fewer digits are left bare.
pub fn format_us_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        len => format!(
            "({}) {}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..len.min(10)]
        ),
    }
}
