//! Utility functions

pub fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        match local.chars().count() {
            0 => format!("***{}", domain),
            1 | 2 => format!("{}***{}", local.chars().take(1).collect::<String>(), domain),
            _ => format!("{}***{}", local.chars().take(2).collect::<String>(), domain),
        }
    } else {
        "***".to_string()
    }
}

/// Replaces every run of whitespace with a single `-`.
pub fn dash_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("joao@example.com"), "jo***@example.com");
        assert_eq!(mask_email("a@example.com"), "a***@example.com");
        assert_eq!(mask_email("invalid"), "***");
    }

    #[test]
    fn test_dash_whitespace() {
        assert_eq!(dash_whitespace("Maria  da Silva"), "Maria-da-Silva");
        assert_eq!(dash_whitespace("Ana"), "Ana");
    }
}
