// Contact form validation
//
// Email validation checks only the local@domain.tld shape - no further RFC
// compliance, matching what the contact form actually needs. The phone
// pattern defaults to the domestic 010-XXXX-XXXX plan but is a configurable
// policy (see `[validation]` in the config file), since the hardcoded plan
// is locale-specific.

use regex::Regex;

/// Default phone pattern: 010-XXXX-XXXX (4+4 digits)
pub const DEFAULT_PHONE_PATTERN: &str = r"^010-\d{4}-\d{4}$";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Compiled validation patterns for the contact form
#[derive(Debug, Clone)]
pub struct ValidationPolicy {
    email: Regex,
    phone: Regex,
}

impl ValidationPolicy {
    /// Build a policy with a custom phone pattern.
    ///
    /// An invalid pattern falls back to the default with a logged warning
    /// rather than failing startup - a broken config entry should not take
    /// the contact form down with it.
    pub fn with_phone_pattern(pattern: &str) -> Self {
        let phone = Regex::new(pattern).unwrap_or_else(|e| {
            tracing::warn!(
                "Invalid phone pattern {:?} ({}), using default {:?}",
                pattern,
                e,
                DEFAULT_PHONE_PATTERN
            );
            default_phone_regex()
        });

        Self {
            email: email_regex(),
            phone,
        }
    }

    pub fn validate_email(&self, email: &str) -> bool {
        self.email.is_match(email)
    }

    pub fn validate_phone(&self, phone: &str) -> bool {
        self.phone.is_match(phone)
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            email: email_regex(),
            phone: default_phone_regex(),
        }
    }
}

fn email_regex() -> Regex {
    // Both patterns are compile-time constants; they always parse
    Regex::new(EMAIL_PATTERN).unwrap_or_else(|_| unreachable!("email pattern is valid"))
}

fn default_phone_regex() -> Regex {
    Regex::new(DEFAULT_PHONE_PATTERN).unwrap_or_else(|_| unreachable!("phone pattern is valid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_local_domain_tld() {
        let policy = ValidationPolicy::default();
        assert!(policy.validate_email("a@b.com"));
        assert!(policy.validate_email("first.last@example.co.kr"));
    }

    #[test]
    fn email_rejects_malformed() {
        let policy = ValidationPolicy::default();
        assert!(!policy.validate_email("a@b")); // no tld
        assert!(!policy.validate_email("a b@c.com")); // whitespace in local part
        assert!(!policy.validate_email("a@b@c.com")); // double @
        assert!(!policy.validate_email("@b.com")); // empty local part
        assert!(!policy.validate_email("a@.com")); // empty domain part
        assert!(!policy.validate_email(""));
    }

    #[test]
    fn phone_accepts_domestic_plan() {
        let policy = ValidationPolicy::default();
        assert!(policy.validate_phone("010-1234-5678"));
        assert!(policy.validate_phone("010-0000-0000"));
    }

    #[test]
    fn phone_rejects_other_prefixes_and_shapes() {
        let policy = ValidationPolicy::default();
        assert!(!policy.validate_phone("02-1234-5678")); // landline prefix
        assert!(!policy.validate_phone("010-123-5678")); // short middle group
        assert!(!policy.validate_phone("01012345678")); // missing dashes
        assert!(!policy.validate_phone("010-1234-56789")); // trailing digit
        assert!(!policy.validate_phone(""));
    }

    #[test]
    fn custom_phone_pattern_applies() {
        // North American shape
        let policy = ValidationPolicy::with_phone_pattern(r"^\d{3}-\d{3}-\d{4}$");
        assert!(policy.validate_phone("555-123-4567"));
        assert!(!policy.validate_phone("010-1234-5678"));
    }

    #[test]
    fn invalid_pattern_falls_back_to_default() {
        let policy = ValidationPolicy::with_phone_pattern(r"(unclosed");
        assert!(policy.validate_phone("010-1234-5678"));
        assert!(!policy.validate_phone("02-1234-5678"));
    }
}
