/// Conversion IDNA du domaine (forme ASCII utilisée pour le motif et le DNS).
/// Les littéraux `[a.b.c.d]` passent tels quels.
pub(crate) fn to_ascii_domain(domain: &str) -> Result<String, idna::Errors> {
    if is_address_literal(domain) {
        return Ok(domain.to_string());
    }
    idna::domain_to_ascii(domain)
}

pub(crate) fn is_address_literal(domain: &str) -> bool {
    domain.len() >= 2 && domain.starts_with('[') && domain.ends_with(']')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_domain_becomes_punycode() {
        let ascii = to_ascii_domain("exämple.com").expect("idna conversion");
        assert!(ascii.starts_with("xn--"), "{ascii}");
        assert!(ascii.ends_with(".com"));
    }

    #[test]
    fn ascii_domain_is_lowercased() {
        assert_eq!(to_ascii_domain("Example.COM").unwrap(), "example.com");
    }

    #[test]
    fn literal_left_untouched() {
        assert_eq!(to_ascii_domain("[10.0.0.1]").unwrap(), "[10.0.0.1]");
        assert!(!is_address_literal("["));
    }
}
