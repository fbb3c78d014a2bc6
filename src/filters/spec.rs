use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::defaults::{
    DEFAULT_CENTER_INC_YEAR_RANGE, DEFAULT_INCLUDE_NULL, DEFAULT_REVENUE_RANGE,
    DEFAULT_YEARS_IN_INDIA_RANGE, UNBOUNDED_MAX,
};
use crate::facets::{FacetEntity, FacetKey};
use crate::types::identifiers::SpecFingerprint;
use crate::types::result_bundle::BaseRanges;

#[derive(Debug, Error)]
pub enum FilterSpecError {
    #[error("Malformed filter specification: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorMode {
    Include,
    Exclude,
}

/// One `{value, mode}` pair of a categorical or keyword filter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SelectorTerm {
    pub value: String,
    pub mode: SelectorMode,
}

impl SelectorTerm {
    pub fn include(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            mode: SelectorMode::Include,
        }
    }

    pub fn exclude(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            mode: SelectorMode::Exclude,
        }
    }
}

/// Closed interval `[min, max]`, serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange(pub f64, pub f64);

impl NumericRange {
    pub fn min(&self) -> f64 {
        self.0
    }

    pub fn max(&self) -> f64 {
        self.1
    }

    pub fn contains(&self, value: f64) -> bool {
        self.0 <= value && value <= self.1
    }

    fn is_open(&self) -> bool {
        self.0 <= 0.0 && self.1 >= UNBOUNDED_MAX
    }

    /// Lenient decoding of a stored range: a two-element array whose bounds
    /// read as numbers. `null`, `false` and blank strings read as `0`, `true`
    /// as `1`. Anything else is rejected so the caller can fall back.
    fn from_json(value: &serde_json::Value) -> Option<Self> {
        use serde_json::Value;

        let bounds = value.as_array()?;
        if bounds.len() != 2 {
            return None;
        }
        let coerce = |v: &Value| -> Option<f64> {
            let n = match v {
                Value::Null => 0.0,
                Value::Bool(b) => f64::from(u8::from(*b)),
                Value::Number(n) => n.as_f64()?,
                Value::String(s) if s.trim().is_empty() => 0.0,
                Value::String(s) => s.trim().parse::<f64>().ok()?,
                _ => return None,
            };
            n.is_finite().then_some(n)
        };
        Some(NumericRange(coerce(&bounds[0])?, coerce(&bounds[1])?))
    }
}

fn coerce_range<'de, D>(deserializer: D, fallback: NumericRange) -> Result<NumericRange, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(NumericRange::from_json(&value).unwrap_or(fallback))
}

fn revenue_range<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NumericRange, D::Error> {
    coerce_range(deserializer, DEFAULT_REVENUE_RANGE)
}

fn years_in_india_range<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NumericRange, D::Error> {
    coerce_range(deserializer, DEFAULT_YEARS_IN_INDIA_RANGE)
}

fn center_inc_year_range<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NumericRange, D::Error> {
    coerce_range(deserializer, DEFAULT_CENTER_INC_YEAR_RANGE)
}

/// The complete, immutable filter state of one dashboard view.
///
/// Field names serialize in camelCase so saved filters written by the UI
/// decode unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    pub account_hq_region_values: Vec<SelectorTerm>,
    pub account_hq_country_values: Vec<SelectorTerm>,
    pub account_hq_industry_values: Vec<SelectorTerm>,
    pub account_data_coverage_values: Vec<SelectorTerm>,
    pub account_source_values: Vec<SelectorTerm>,
    pub account_type_values: Vec<SelectorTerm>,
    pub account_primary_category_values: Vec<SelectorTerm>,
    pub account_primary_nature_values: Vec<SelectorTerm>,
    pub account_nasscom_status_values: Vec<SelectorTerm>,
    pub account_hq_employee_range_values: Vec<SelectorTerm>,
    pub account_center_employees_range_values: Vec<SelectorTerm>,
    #[serde(deserialize_with = "revenue_range")]
    pub account_hq_revenue_range: NumericRange,
    pub account_hq_revenue_include_null: bool,
    #[serde(deserialize_with = "years_in_india_range")]
    pub account_years_in_india_range: NumericRange,
    pub years_in_india_include_null: bool,
    pub account_global_legal_name_keywords: Vec<SelectorTerm>,
    pub center_type_values: Vec<SelectorTerm>,
    pub center_focus_values: Vec<SelectorTerm>,
    pub center_city_values: Vec<SelectorTerm>,
    pub center_state_values: Vec<SelectorTerm>,
    pub center_country_values: Vec<SelectorTerm>,
    pub center_employees_range_values: Vec<SelectorTerm>,
    pub center_status_values: Vec<SelectorTerm>,
    #[serde(deserialize_with = "center_inc_year_range")]
    pub center_inc_year_range: NumericRange,
    pub center_inc_year_include_null: bool,
    pub function_name_values: Vec<SelectorTerm>,
    pub tech_software_in_use_keywords: Vec<SelectorTerm>,
    pub prospect_department_values: Vec<SelectorTerm>,
    pub prospect_level_values: Vec<SelectorTerm>,
    pub prospect_city_values: Vec<SelectorTerm>,
    pub prospect_title_keywords: Vec<SelectorTerm>,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            account_hq_region_values: Vec::new(),
            account_hq_country_values: Vec::new(),
            account_hq_industry_values: Vec::new(),
            account_data_coverage_values: Vec::new(),
            account_source_values: Vec::new(),
            account_type_values: Vec::new(),
            account_primary_category_values: Vec::new(),
            account_primary_nature_values: Vec::new(),
            account_nasscom_status_values: Vec::new(),
            account_hq_employee_range_values: Vec::new(),
            account_center_employees_range_values: Vec::new(),
            account_hq_revenue_range: DEFAULT_REVENUE_RANGE,
            account_hq_revenue_include_null: DEFAULT_INCLUDE_NULL,
            account_years_in_india_range: DEFAULT_YEARS_IN_INDIA_RANGE,
            years_in_india_include_null: DEFAULT_INCLUDE_NULL,
            account_global_legal_name_keywords: Vec::new(),
            center_type_values: Vec::new(),
            center_focus_values: Vec::new(),
            center_city_values: Vec::new(),
            center_state_values: Vec::new(),
            center_country_values: Vec::new(),
            center_employees_range_values: Vec::new(),
            center_status_values: Vec::new(),
            center_inc_year_range: DEFAULT_CENTER_INC_YEAR_RANGE,
            center_inc_year_include_null: DEFAULT_INCLUDE_NULL,
            function_name_values: Vec::new(),
            tech_software_in_use_keywords: Vec::new(),
            prospect_department_values: Vec::new(),
            prospect_level_values: Vec::new(),
            prospect_city_values: Vec::new(),
            prospect_title_keywords: Vec::new(),
        }
    }
}

impl FilterSpec {
    /// Decode a possibly partial document, filling every missing field with
    /// its default. Malformed ranges fall back to the default range.
    pub fn from_json(json: &str) -> Result<Self, FilterSpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Default spec whose numeric ranges span the data instead of the
    /// static defaults.
    pub fn with_base_ranges(base: &BaseRanges) -> Self {
        Self {
            account_hq_revenue_range: base.revenue.as_range(),
            account_years_in_india_range: base.years_in_india.as_range(),
            center_inc_year_range: base.center_inc_year.as_range(),
            ..Self::default()
        }
    }

    /// Copy of this spec with one facet's selector cleared.
    pub fn without(&self, key: FacetKey) -> Self {
        let mut scoped = self.clone();
        key.selector_mut(&mut scoped).clear();
        scoped
    }

    fn has_facet_terms(&self, entity: FacetEntity) -> bool {
        FacetKey::of_entity(entity).any(|key| !key.selector(self).is_empty())
    }

    pub fn has_account_filters(&self) -> bool {
        self.has_facet_terms(FacetEntity::Account)
            || !self.account_global_legal_name_keywords.is_empty()
            || !self.account_hq_revenue_range.is_open()
            || self.account_hq_revenue_include_null
            || !self.account_years_in_india_range.is_open()
            || self.years_in_india_include_null
    }

    pub fn has_prospect_filters(&self) -> bool {
        self.has_facet_terms(FacetEntity::Prospect) || !self.prospect_title_keywords.is_empty()
    }

    pub fn has_function_filters(&self) -> bool {
        !self.function_name_values.is_empty()
    }

    pub fn has_software_filters(&self) -> bool {
        !self.tech_software_in_use_keywords.is_empty()
    }

    /// Badge count shown next to the filter panel: one per selector term,
    /// one per range moved off its base bounds, one per include-null flag set.
    pub fn active_filter_count(&self, base: &BaseRanges) -> usize {
        let terms: usize = FacetKey::ALL
            .into_iter()
            .map(|key| key.selector(self).len())
            .chain(self.keyword_lists().iter().map(|terms| terms.len()))
            .sum();
        let moved = [
            (self.account_hq_revenue_range, base.revenue.as_range()),
            (self.account_years_in_india_range, base.years_in_india.as_range()),
            (self.center_inc_year_range, base.center_inc_year.as_range()),
        ]
        .iter()
        .filter(|(current, bounds)| current != bounds)
        .count();
        let include_null = [
            self.account_hq_revenue_include_null,
            self.years_in_india_include_null,
            self.center_inc_year_include_null,
        ]
        .iter()
        .filter(|flag| **flag)
        .count();

        terms + moved + include_null
    }

    /// Stable digest of the spec. Term order inside a selector list does not
    /// affect the result.
    pub fn fingerprint(&self) -> Result<SpecFingerprint, FilterSpecError> {
        let mut canonical = self.clone();
        for key in FacetKey::ALL {
            key.selector_mut(&mut canonical).sort();
        }
        for terms in canonical.keyword_lists_mut() {
            terms.sort();
        }
        let bytes = serde_json::to_vec(&canonical)?;
        Ok(SpecFingerprint::from_content(&bytes))
    }

    // Free-text selectors; every other selector list is reached via `FacetKey`.
    fn keyword_lists(&self) -> [&Vec<SelectorTerm>; 3] {
        [
            &self.account_global_legal_name_keywords,
            &self.tech_software_in_use_keywords,
            &self.prospect_title_keywords,
        ]
    }

    fn keyword_lists_mut(&mut self) -> [&mut Vec<SelectorTerm>; 3] {
        [
            &mut self.account_global_legal_name_keywords,
            &mut self.tech_software_in_use_keywords,
            &mut self.prospect_title_keywords,
        ]
    }
}
