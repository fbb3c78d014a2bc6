//! Per-field matchers the pipeline predicates are assembled from.

pub mod parse;
pub mod range;
pub mod value;

use crate::filters::{NumericRange, SelectorTerm};
use crate::records::{AccountName, LooseValue};

pub use parse::{normalize_number, parse_revenue};
pub use range::{NumberParser, RangeMatcher};
pub use value::{KeywordMatcher, ValueMatcher};

/// A field value as handed to a matcher. Absent text reads as `""`.
#[derive(Debug, Clone, Copy)]
pub enum Candidate<'a> {
    Text(&'a str),
    Loose(Option<&'a LooseValue>),
}

impl<'a> Candidate<'a> {
    fn with_text<R>(self, f: impl FnOnce(&str) -> R) -> R {
        match self {
            Candidate::Text(s) => f(s),
            Candidate::Loose(None) => f(""),
            Candidate::Loose(Some(value)) => f(&value.as_text()),
        }
    }
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(s: &'a str) -> Self {
        Candidate::Text(s)
    }
}

impl<'a> From<&'a String> for Candidate<'a> {
    fn from(s: &'a String) -> Self {
        Candidate::Text(s.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Candidate<'a> {
    fn from(s: &'a Option<String>) -> Self {
        Candidate::Text(s.as_deref().unwrap_or(""))
    }
}

impl<'a> From<&'a AccountName> for Candidate<'a> {
    fn from(name: &'a AccountName) -> Self {
        Candidate::Text(name.as_str())
    }
}

impl<'a> From<&'a Option<LooseValue>> for Candidate<'a> {
    fn from(value: &'a Option<LooseValue>) -> Self {
        Candidate::Loose(value.as_ref())
    }
}

pub trait Matcher {
    fn accepts(&self, candidate: Candidate<'_>) -> bool;
}

impl Matcher for ValueMatcher<'_> {
    fn accepts(&self, candidate: Candidate<'_>) -> bool {
        self.is_empty() || candidate.with_text(|text| self.accepts_text(text))
    }
}

impl Matcher for KeywordMatcher {
    fn accepts(&self, candidate: Candidate<'_>) -> bool {
        self.is_empty() || candidate.with_text(|text| self.accepts_text(text))
    }
}

impl Matcher for RangeMatcher {
    fn accepts(&self, candidate: Candidate<'_>) -> bool {
        let parsed = match candidate {
            Candidate::Text(s) => self.parser().parse_text(s),
            Candidate::Loose(value) => self.parser().parse(value),
        };
        self.accepts_number(parsed)
    }
}

/// The three filter shapes behind one `accepts` call.
#[derive(Debug, Clone)]
pub enum FieldMatcher<'s> {
    Value(ValueMatcher<'s>),
    Keyword(KeywordMatcher),
    Range(RangeMatcher),
}

impl<'s> FieldMatcher<'s> {
    pub fn value(terms: &'s [SelectorTerm]) -> Self {
        FieldMatcher::Value(ValueMatcher::new(terms))
    }

    pub fn keyword(terms: &[SelectorTerm]) -> Self {
        FieldMatcher::Keyword(KeywordMatcher::new(terms))
    }

    pub fn range(range: NumericRange, include_null: bool, parser: NumberParser) -> Self {
        FieldMatcher::Range(RangeMatcher::new(range, include_null, parser))
    }
}

impl Matcher for FieldMatcher<'_> {
    fn accepts(&self, candidate: Candidate<'_>) -> bool {
        match self {
            FieldMatcher::Value(m) => m.accepts(candidate),
            FieldMatcher::Keyword(m) => m.accepts(candidate),
            FieldMatcher::Range(m) => m.accepts(candidate),
        }
    }
}
