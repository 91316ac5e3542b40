//! Common validation utilities

/// Check if a string is not empty (ignoring surrounding whitespace)
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if an email address is plausibly valid (basic shape check)
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.') && email.len() >= 5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_empty_ignores_whitespace() {
        assert!(not_empty("mypwd"));
        assert!(!not_empty(""));
        assert!(!not_empty("   "));
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("quyetcv1@fpt.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("no-dot@com"));
        assert!(!is_valid_email(""));
    }
}
