//! Digit sanitizing for code entry

/// Keep only ASCII decimal digits from raw keyboard or clipboard text
pub fn sanitize_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Check that `code` is exactly `len` ASCII digits
pub fn is_numeric_code(code: &str, len: usize) -> bool {
    code.len() == len && code.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_digits() {
        assert_eq!(sanitize_digits("12-34 56"), "123456");
        assert_eq!(sanitize_digits("abc"), "");
        assert_eq!(sanitize_digits("٣4"), "4");
    }

    #[test]
    fn test_is_numeric_code() {
        assert!(is_numeric_code("004213", 6));
        assert!(!is_numeric_code("12345", 6));
        assert!(!is_numeric_code("12345a", 6));
    }
}
