//! Graduated heuristic classification.
//!
//! Rules form an ordered ladder; each one carries the minimum [`Strictness`]
//! at which it becomes active. Evaluation walks the ladder in order and stops
//! at the first rule that fires.

mod types;

pub use types::{Reason, Strictness, Verdict};

use std::sync::Arc;

use tracing::debug;

use crate::address::Address;
use crate::format::FormatValidator;
use crate::rules::{RuleSet, patterns};

type Check = fn(&RuleSet, &Address) -> bool;

/// One named rung of the ladder.
#[derive(Clone, Copy)]
pub struct Rule {
    reason: Reason,
    min_strictness: Strictness,
    check: Check,
}

impl Rule {
    const fn new(reason: Reason, min_level: u8, check: Check) -> Self {
        Self {
            reason,
            min_strictness: Strictness::new(min_level),
            check,
        }
    }

    pub fn reason(&self) -> Reason {
        self.reason
    }

    pub fn min_strictness(&self) -> Strictness {
        self.min_strictness
    }

    pub fn is_active(&self, strictness: Strictness) -> bool {
        strictness >= self.min_strictness
    }

    /// Runs the predicate regardless of strictness.
    pub fn matches(&self, rules: &RuleSet, address: &Address) -> bool {
        (self.check)(rules, address)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("reason", &self.reason)
            .field("min_strictness", &self.min_strictness)
            .finish()
    }
}

static LADDER: [Rule; 15] = [
    Rule::new(Reason::BelowMinimumPrefix, 0, below_minimum_prefix),
    Rule::new(Reason::MistypedDomain, 0, mistyped_domain),
    Rule::new(Reason::MistypedTld, 0, mistyped_tld),
    Rule::new(Reason::BlockedDomain, 1, blocked_domain),
    Rule::new(Reason::SuspiciousLocalPart, 2, suspicious_local_part),
    Rule::new(Reason::RepeatedCharacters, 4, repeated_characters),
    Rule::new(Reason::NumericLocalPart, 5, numeric_local_part),
    Rule::new(Reason::SuspiciousAddress, 5, suspicious_address),
    Rule::new(Reason::KeyboardRollLocalPart, 6, keyboard_roll_local_part),
    Rule::new(Reason::KeyboardRollDomain, 6, keyboard_roll_domain),
    Rule::new(Reason::NumericDomain, 6, numeric_domain),
    // TLD compris: 2 lettres + point + 3 lettres = 6, déjà généreux
    Rule::new(Reason::ShortDomain, 7, short_domain),
    Rule::new(Reason::VeryShortLocalPart, 8, very_short_local_part),
    Rule::new(Reason::ShortLocalPart, 9, short_local_part),
    Rule::new(Reason::DisallowedTld, 10, disallowed_tld),
];

/// The rule ladder in evaluation order.
pub fn ladder() -> &'static [Rule] {
    &LADDER
}

/// First active rule that fires for `address`, if any.
pub fn evaluate(rules: &RuleSet, address: &Address, strictness: Strictness) -> Option<Reason> {
    LADDER
        .iter()
        .filter(|rule| rule.is_active(strictness))
        .find(|rule| rule.matches(rules, address))
        .map(Rule::reason)
}

/// Format check, parsing and the static rule ladder. No network access.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Arc<RuleSet>,
    format: FormatValidator,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(RuleSet::builtin())
    }
}

impl Classifier {
    pub fn new(rules: RuleSet) -> Self {
        Self::from_shared(Arc::new(rules))
    }

    pub fn from_shared(rules: Arc<RuleSet>) -> Self {
        Self {
            rules,
            format: FormatValidator::default(),
        }
    }

    pub fn with_format_validator(mut self, format: FormatValidator) -> Self {
        self.format = format;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn classify(&self, email: &str, strictness: Strictness) -> Verdict {
        match self.screen(email, strictness) {
            Ok(_) => Verdict::Legitimate,
            Err(reason) => Verdict::Fake(reason),
        }
    }

    pub fn is_probably_fake(&self, email: &str, strictness: Strictness) -> bool {
        self.classify(email, strictness).is_fake()
    }

    /// Runs every static step. Returns the parsed address when nothing fired,
    /// so the caller can go on with the MX check.
    pub(crate) fn screen(&self, email: &str, strictness: Strictness) -> Result<Address, Reason> {
        // les motifs sont écrits en minuscules
        let lowered = email.to_lowercase();
        if lowered.trim().is_empty() || !self.format.is_valid(&lowered) {
            return Err(Reason::InvalidFormat);
        }

        let address = Address::parse(&lowered).map_err(|err| {
            debug!(email, error = %err, "address parse failed");
            Reason::Unparseable
        })?;

        match evaluate(&self.rules, &address, strictness) {
            Some(reason) => {
                debug!(%address, %strictness, %reason, "rule fired");
                Err(reason)
            }
            None => Ok(address),
        }
    }
}

fn below_minimum_prefix(rules: &RuleSet, address: &Address) -> bool {
    rules
        .minimum_prefix(address.domain())
        .is_some_and(|min| address.local().chars().count() < min)
}

fn mistyped_domain(rules: &RuleSet, address: &Address) -> bool {
    rules.is_mistyped_domain(address.domain())
}

fn mistyped_tld(_: &RuleSet, address: &Address) -> bool {
    patterns::has_mistyped_tld(address.domain())
}

fn blocked_domain(rules: &RuleSet, address: &Address) -> bool {
    rules.is_blocked_domain(address.domain())
}

fn suspicious_local_part(_: &RuleSet, address: &Address) -> bool {
    patterns::is_suspicious_token(address.local())
}

fn repeated_characters(_: &RuleSet, address: &Address) -> bool {
    patterns::has_repeated_characters(address.local())
        || patterns::has_repeated_characters(address.domain())
}

fn numeric_local_part(_: &RuleSet, address: &Address) -> bool {
    patterns::is_numeric(address.local())
}

fn suspicious_address(_: &RuleSet, address: &Address) -> bool {
    patterns::is_suspicious_token(&address.full())
}

fn keyboard_roll_local_part(_: &RuleSet, address: &Address) -> bool {
    patterns::is_keyboard_roll(address.local())
}

fn keyboard_roll_domain(_: &RuleSet, address: &Address) -> bool {
    patterns::is_keyboard_roll_domain(address.domain())
}

fn numeric_domain(_: &RuleSet, address: &Address) -> bool {
    patterns::is_numeric_domain(address.domain())
}

fn short_domain(_: &RuleSet, address: &Address) -> bool {
    address.domain().chars().count() < 6
}

fn very_short_local_part(_: &RuleSet, address: &Address) -> bool {
    address.local().chars().count() < 3
}

fn short_local_part(_: &RuleSet, address: &Address) -> bool {
    address.local().chars().count() < 5
}

fn disallowed_tld(_: &RuleSet, address: &Address) -> bool {
    patterns::has_disallowed_tld(address.domain())
}
