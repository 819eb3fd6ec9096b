/// Partie locale entre guillemets (`"john doe"`).
pub(crate) fn is_quoted(s: &str) -> bool {
    s.len() >= 2 && s.starts_with('"') && s.ends_with('"')
}

/// Règle des points pour une partie locale non quotée: pas de "..".
/// Le motif structurel garantit déjà un premier et un dernier caractère alphanumériques.
pub(crate) fn has_valid_dots(s: &str) -> bool {
    is_quoted(s) || !s.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_dots_rejected() {
        assert!(!has_valid_dots("a..b"));
        assert!(has_valid_dots("a.b"));
    }

    #[test]
    fn quoted_local_may_hold_dots() {
        assert!(is_quoted("\"a..b\""));
        assert!(has_valid_dots("\"a..b\""));
        assert!(!is_quoted("\""));
    }
}
