use std::fmt;

/// How aggressive classification is, conventionally `0..=10`.
///
/// Every rule active at level `n` is also active at every level above `n`.
/// Levels above [`Strictness::MAX`] behave like it.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Strictness(u8);

impl Strictness {
    /// Only the "definitely fake" rules.
    pub const LENIENT: Self = Self(0);
    pub const MAX: Self = Self(10);

    pub const fn new(level: u8) -> Self {
        Self(level)
    }

    pub const fn level(self) -> u8 {
        self.0
    }
}

impl From<u8> for Strictness {
    fn from(level: u8) -> Self {
        Self(level)
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why an address was classified as fake.
#[cfg_attr(
    feature = "with-serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    InvalidFormat,
    Unparseable,
    BelowMinimumPrefix,
    MistypedDomain,
    MistypedTld,
    BlockedDomain,
    SuspiciousLocalPart,
    RepeatedCharacters,
    NumericLocalPart,
    SuspiciousAddress,
    KeyboardRollLocalPart,
    KeyboardRollDomain,
    NumericDomain,
    ShortDomain,
    VeryShortLocalPart,
    ShortLocalPart,
    DisallowedTld,
    NoValidMx,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "invalid-format",
            Self::Unparseable => "unparseable",
            Self::BelowMinimumPrefix => "below-minimum-prefix",
            Self::MistypedDomain => "mistyped-domain",
            Self::MistypedTld => "mistyped-tld",
            Self::BlockedDomain => "blocked-domain",
            Self::SuspiciousLocalPart => "suspicious-local-part",
            Self::RepeatedCharacters => "repeated-characters",
            Self::NumericLocalPart => "numeric-local-part",
            Self::SuspiciousAddress => "suspicious-address",
            Self::KeyboardRollLocalPart => "keyboard-roll-local-part",
            Self::KeyboardRollDomain => "keyboard-roll-domain",
            Self::NumericDomain => "numeric-domain",
            Self::ShortDomain => "short-domain",
            Self::VeryShortLocalPart => "very-short-local-part",
            Self::ShortLocalPart => "short-local-part",
            Self::DisallowedTld => "disallowed-tld",
            Self::NoValidMx => "no-valid-mx",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a classification.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Legitimate,
    Fake(Reason),
}

impl Verdict {
    pub fn is_fake(&self) -> bool {
        matches!(self, Self::Fake(_))
    }

    pub fn reason(&self) -> Option<Reason> {
        match self {
            Self::Fake(reason) => Some(*reason),
            Self::Legitimate => None,
        }
    }
}
