use regex::Regex;
use std::{fmt::Display, ops::Range, sync::LazyLock};

static BUILD_DECLARATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)static\s+constexpr\s+uint16_t\s+BUILD\s*=\s*([0-9]+)\s*;")
        .expect("hardcoded regex must compile")
});

/// Largest value the `uint16_t BUILD` field can hold.
pub const BUILD_FIELD_MAX: u64 = u16::MAX as u64;

/// Non-negative decimal counter of any length, stored without leading zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildNumber(String);

impl BuildNumber {
    /// `None` unless `digits` is a non-empty run of ASCII digits.
    #[must_use]
    pub fn parse(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        Some(Self(if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }))
    }

    /// Add one to the decimal string, carrying from the last digit.
    #[must_use]
    pub fn increment(&self) -> Self {
        let mut digits = self.0.bytes().collect::<Vec<u8>>();
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        let mut next = String::with_capacity(digits.len() + 1);
        if carry {
            next.push('1');
        }
        next.extend(digits.into_iter().map(char::from));
        Self(next)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `None` when the value does not fit in a `u64`.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<u64> for BuildNumber {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl Display for BuildNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A `BUILD` declaration found in a version file: its value and the byte span of its digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMatch {
    value: BuildNumber,
    span: Range<usize>,
}

impl BuildMatch {
    #[must_use]
    pub fn new(value: BuildNumber, span: Range<usize>) -> Self {
        Self { value, span }
    }

    #[must_use]
    pub fn value(&self) -> &BuildNumber {
        &self.value
    }

    /// Byte range of the decimal literal, excluding the declaration prefix and `;`.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

/// Rule for locating the `BUILD` counter in free-form text.
///
/// Only the first declaration in document order is reported.
pub trait BuildNumberMatcher: Send + Sync {
    fn find(&self, text: &str) -> Option<BuildMatch>;
}

/// Matches `static constexpr uint16_t BUILD = <digits>;` with any whitespace between tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeclarationMatcher;

impl BuildNumberMatcher for DeclarationMatcher {
    fn find(&self, text: &str) -> Option<BuildMatch> {
        let digits = BUILD_DECLARATION_PATTERN.captures(text)?.get(1)?;
        BuildNumber::parse(digits.as_str()).map(|value| BuildMatch::new(value, digits.range()))
    }
}

/// Find the first `BUILD` declaration using [`DeclarationMatcher`].
#[must_use]
pub fn extract_build_number(text: &str) -> Option<BuildMatch> {
    DeclarationMatcher.find(text)
}

/// `old + 1`, with no upper bound. Values past [`BUILD_FIELD_MAX`] are still produced.
#[must_use]
pub fn next_build_number(old: &BuildNumber) -> BuildNumber {
    old.increment()
}

/// Replace the bytes in `span` with `new_value`, keeping everything else.
///
/// `span` must come from a [`BuildMatch`] taken on the same `text`.
#[must_use]
pub fn splice_value(text: &str, span: Range<usize>, new_value: &BuildNumber) -> String {
    let replacement = new_value.as_str();
    let mut spliced = String::with_capacity(text.len() - span.len() + replacement.len());
    spliced.push_str(&text[..span.start]);
    spliced.push_str(replacement);
    spliced.push_str(&text[span.end..]);
    spliced
}
