use crate::filters::{SelectorMode, SelectorTerm};

/// Exact-equality include/exclude matcher over one categorical field.
#[derive(Debug, Clone, Default)]
pub struct ValueMatcher<'s> {
    includes: Vec<&'s str>,
    excludes: Vec<&'s str>,
}

impl<'s> ValueMatcher<'s> {
    pub fn new(terms: &'s [SelectorTerm]) -> Self {
        let mut matcher = Self::default();
        for term in terms {
            match term.mode {
                SelectorMode::Include => matcher.includes.push(term.value.as_str()),
                SelectorMode::Exclude => matcher.excludes.push(term.value.as_str()),
            }
        }
        matcher
    }

    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }

    pub fn accepts_text(&self, candidate: &str) -> bool {
        if !self.includes.is_empty() && !self.includes.contains(&candidate) {
            return false;
        }
        !self.excludes.contains(&candidate)
    }
}

/// Case-insensitive substring include/exclude matcher over free text.
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher {
    includes: Vec<String>,
    excludes: Vec<String>,
}

impl KeywordMatcher {
    pub fn new(terms: &[SelectorTerm]) -> Self {
        let mut matcher = Self::default();
        for term in terms {
            let fragment = term.value.to_lowercase();
            match term.mode {
                SelectorMode::Include => matcher.includes.push(fragment),
                SelectorMode::Exclude => matcher.excludes.push(fragment),
            }
        }
        matcher
    }

    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }

    pub fn accepts_text(&self, candidate: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        let haystack = candidate.to_lowercase();
        if !self.includes.is_empty()
            && !self.includes.iter().any(|fragment| haystack.contains(fragment.as_str()))
        {
            return false;
        }
        !self.excludes.iter().any(|fragment| haystack.contains(fragment.as_str()))
    }
}
