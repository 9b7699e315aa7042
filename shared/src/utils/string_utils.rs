/// Email as stored and compared: trimmed and lower-cased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn contains_ignore_case(haystack: &str, lower_needle: &str) -> bool {
    haystack.to_lowercase().contains(lower_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_normalization() {
        assert_eq!(normalize_email("  Admin1@Demo.LOCAL "), "admin1@demo.local");
    }

    #[test]
    fn case_insensitive_search() {
        assert!(contains_ignore_case("Tablero Ejecutivo", "ejecutivo"));
        assert!(!contains_ignore_case("Tablero", "demanda"));
    }
}
