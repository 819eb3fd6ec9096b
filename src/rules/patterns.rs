//! Compiled pattern rules for suspicious local parts and domains.

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in rule pattern is a valid regex")
}

static SUSPICIOUS_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"(?i)\*|^a+b+c+|address|bastard|bitch|blabla|d+e+f+g+|example|fake|fuck|junk|^lol$",
        r"|^(?:a|no|some)name$|no1|nobody|none|noone|nope|nothank|noway|qwerty|sample|spam|suck",
        r"|test|thanks|^user$|whatever|^x+y+z+",
    ))
});
static MISTYPED_TLD: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\.(?:cm|cmo|om|comm)$"));
static DISALLOWED_TLD: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\.(?:ru|cn|info|tk)$"));
static NUMERIC: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]+$"));
static NUMERIC_DOMAIN: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]+\.[^.]+$"));
// rangée de clavier "qwerty" (main gauche + quelques voisines)
static KEYBOARD_ROLL: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^[asdfghjkvlxm]+$"));
static KEYBOARD_ROLL_DOMAIN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^[asdfghjkvlx]+\.[^.]+$"));

/// Minimum run length flagged by [`has_repeated_run`].
const REPEATED_RUN: usize = 4;

/// Filler words, placeholder names and "abc"/"xyz" rolls.
pub(crate) fn is_suspicious_token(s: &str) -> bool {
    SUSPICIOUS_TOKEN.is_match(s)
}

pub(crate) fn has_mistyped_tld(domain: &str) -> bool {
    MISTYPED_TLD.is_match(domain)
}

pub(crate) fn has_disallowed_tld(domain: &str) -> bool {
    DISALLOWED_TLD.is_match(domain)
}

pub(crate) fn is_numeric(s: &str) -> bool {
    NUMERIC.is_match(s)
}

/// `<digits>.<tld>`
pub(crate) fn is_numeric_domain(domain: &str) -> bool {
    NUMERIC_DOMAIN.is_match(domain)
}

pub(crate) fn is_keyboard_roll(s: &str) -> bool {
    KEYBOARD_ROLL.is_match(s)
}

/// `<keyboard roll>.<tld>`
pub(crate) fn is_keyboard_roll_domain(domain: &str) -> bool {
    KEYBOARD_ROLL_DOMAIN.is_match(domain)
}

/// Four or more identical characters in a row, or a string made of a single
/// repeated character.
pub(crate) fn has_repeated_characters(s: &str) -> bool {
    has_repeated_run(s, REPEATED_RUN) || is_single_repeated(s)
}

fn has_repeated_run(s: &str, min_run: usize) -> bool {
    let mut previous = None;
    let mut run = 0;
    for c in s.chars() {
        if Some(c) == previous {
            run += 1;
        } else {
            previous = Some(c);
            run = 1;
        }
        if run >= min_run {
            return true;
        }
    }
    false
}

fn is_single_repeated(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return false;
    };
    let rest = &s[first.len_utf8()..];
    !rest.is_empty() && rest.chars().all(|c| c == first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suspicious_tokens() {
        for s in ["test", "mytest1", "spammer", "abc", "aabbcc", "xyz", "noname", "user", "a*b"] {
            assert!(is_suspicious_token(s), "{s}");
        }
        for s in ["validuser", "alice", "username", "lola", "john.doe", "anamendez", "renoname"] {
            assert!(!is_suspicious_token(s), "{s}");
        }
    }

    #[test]
    fn placeholder_names_are_whole_words() {
        for s in ["aname", "noname", "somename"] {
            assert!(is_suspicious_token(s), "{s}");
        }
        assert!(!is_suspicious_token("anamendez"));
        assert!(!is_suspicious_token("somenamer"));
    }

    #[test]
    fn tld_rules() {
        assert!(has_mistyped_tld("gmail.cm"));
        assert!(has_mistyped_tld("hotmail.comm"));
        assert!(!has_mistyped_tld("gmail.com"));
        assert!(has_disallowed_tld("mail.ru"));
        assert!(has_disallowed_tld("site.info"));
        assert!(!has_disallowed_tld("site.io"));
    }

    #[test]
    fn numeric_rules() {
        assert!(is_numeric("123456"));
        assert!(!is_numeric("123a"));
        assert!(is_numeric_domain("163.com"));
        assert!(!is_numeric_domain("163.mail.com"));
    }

    #[test]
    fn keyboard_rolls() {
        assert!(is_keyboard_roll("asdf"));
        assert!(is_keyboard_roll("jkl"));
        assert!(!is_keyboard_roll("qwerty"));
        assert!(is_keyboard_roll_domain("asdf.net"));
        assert!(!is_keyboard_roll_domain("qwerty.net"));
        assert!(!is_keyboard_roll_domain("asdf.co.uk"));
    }

    #[test]
    fn repeated_characters() {
        assert!(has_repeated_characters("aaaa"));
        assert!(has_repeated_characters("joe1111"));
        assert!(has_repeated_characters("zz"));
        assert!(!has_repeated_characters("aaa.com"));
        assert!(!has_repeated_characters("bookkeeper"));
        assert!(!has_repeated_characters("z"));
        assert!(!has_repeated_characters(""));
    }
}
