use super::parse::{normalize_number, parse_number_text, parse_revenue, parse_revenue_text};
use crate::filters::NumericRange;
use crate::records::LooseValue;

/// How a range candidate is read as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberParser {
    Plain,
    Revenue,
}

impl NumberParser {
    pub fn parse(&self, value: Option<&LooseValue>) -> f64 {
        match self {
            NumberParser::Plain => normalize_number(value),
            NumberParser::Revenue => parse_revenue(value),
        }
    }

    pub fn parse_text(&self, text: &str) -> f64 {
        match self {
            NumberParser::Plain => parse_number_text(text),
            NumberParser::Revenue => parse_revenue_text(text),
        }
    }
}

/// Closed-interval matcher with the null/zero policy:
/// a value reading as `0` is decided by `include_null` alone.
#[derive(Debug, Clone, Copy)]
pub struct RangeMatcher {
    range: NumericRange,
    include_null: bool,
    parser: NumberParser,
}

impl RangeMatcher {
    pub fn new(range: NumericRange, include_null: bool, parser: NumberParser) -> Self {
        Self {
            range,
            include_null,
            parser,
        }
    }

    pub fn accepts_number(&self, parsed: f64) -> bool {
        if parsed == 0.0 {
            return self.include_null;
        }
        self.range.contains(parsed)
    }

    pub fn parser(&self) -> NumberParser {
        self.parser
    }
}
