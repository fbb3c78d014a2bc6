use super::index::SoftwareIndex;
use crate::facets::{FacetEntity, FacetKey};
use crate::filters::FilterSpec;
use crate::matching::{Candidate, FieldMatcher, Matcher, NumberParser};
use crate::records::{Account, Center, Function, Prospect};

fn facet_matchers(spec: &FilterSpec, entity: FacetEntity) -> Vec<(FacetKey, FieldMatcher<'_>)> {
    FacetKey::of_entity(entity)
        .filter(|key| !key.selector(spec).is_empty())
        .map(|key| (key, FieldMatcher::value(key.selector(spec))))
        .collect()
}

/// Every account-level condition of a spec.
pub struct AccountPredicate<'s> {
    facets: Vec<(FacetKey, FieldMatcher<'s>)>,
    revenue: Option<FieldMatcher<'s>>,
    years_in_india: FieldMatcher<'s>,
    name: Option<FieldMatcher<'s>>,
}

impl<'s> AccountPredicate<'s> {
    pub fn new(spec: &'s FilterSpec) -> Self {
        Self {
            revenue: Some(FieldMatcher::range(
                spec.account_hq_revenue_range,
                spec.account_hq_revenue_include_null,
                NumberParser::Revenue,
            )),
            name: Some(FieldMatcher::keyword(&spec.account_global_legal_name_keywords)),
            ..Self::for_revenue_bounds(spec)
        }
    }

    /// Account conditions minus revenue and name keywords; the set the
    /// revenue slider rescales against.
    pub fn for_revenue_bounds(spec: &'s FilterSpec) -> Self {
        Self {
            facets: facet_matchers(spec, FacetEntity::Account),
            revenue: None,
            years_in_india: FieldMatcher::range(
                spec.account_years_in_india_range,
                spec.years_in_india_include_null,
                NumberParser::Plain,
            ),
            name: None,
        }
    }

    pub fn accepts(&self, account: &Account) -> bool {
        self.facets.iter().all(|(key, matcher)| {
            matcher.accepts(Candidate::Text(key.account_value(account).unwrap_or("")))
        }) && self
            .revenue
            .as_ref()
            .map_or(true, |m| m.accepts((&account.account_hq_revenue).into()))
            && self.years_in_india.accepts((&account.years_in_india).into())
            && self
                .name
                .as_ref()
                .map_or(true, |m| m.accepts((&account.account_global_legal_name).into()))
    }
}

/// Center-level conditions, including the software keyword matched against
/// the derived per-center software text.
pub struct CenterPredicate<'s> {
    facets: Vec<(FacetKey, FieldMatcher<'s>)>,
    inc_year: FieldMatcher<'s>,
    software: Option<FieldMatcher<'s>>,
}

impl<'s> CenterPredicate<'s> {
    pub fn new(spec: &'s FilterSpec) -> Self {
        Self {
            facets: facet_matchers(spec, FacetEntity::Center),
            inc_year: FieldMatcher::range(
                spec.center_inc_year_range,
                spec.center_inc_year_include_null,
                NumberParser::Plain,
            ),
            software: spec
                .has_software_filters()
                .then(|| FieldMatcher::keyword(&spec.tech_software_in_use_keywords)),
        }
    }

    pub fn accepts(&self, center: &Center, software: &SoftwareIndex<'_>) -> bool {
        self.facets.iter().all(|(key, matcher)| {
            matcher.accepts(Candidate::Text(key.center_value(center).unwrap_or("")))
        }) && self.inc_year.accepts((&center.center_inc_year).into())
            && self
                .software
                .as_ref()
                .map_or(true, |m| m.accepts(software.get(&center.cn_unique_key).into()))
    }
}

pub struct FunctionPredicate<'s> {
    name: FieldMatcher<'s>,
}

impl<'s> FunctionPredicate<'s> {
    /// `None` when no function filter is set; functions then pass on center
    /// membership alone and never narrow centers.
    pub fn new(spec: &'s FilterSpec) -> Option<Self> {
        spec.has_function_filters().then(|| Self {
            name: FieldMatcher::value(&spec.function_name_values),
        })
    }

    pub fn accepts(&self, function: &Function) -> bool {
        self.name.accepts((&function.function_name).into())
    }
}

pub struct ProspectPredicate<'s> {
    facets: Vec<(FacetKey, FieldMatcher<'s>)>,
    title: FieldMatcher<'s>,
}

impl<'s> ProspectPredicate<'s> {
    /// `None` when no prospect-level filter is set; every prospect then passes.
    pub fn new(spec: &'s FilterSpec) -> Option<Self> {
        spec.has_prospect_filters().then(|| Self {
            facets: facet_matchers(spec, FacetEntity::Prospect),
            title: FieldMatcher::keyword(&spec.prospect_title_keywords),
        })
    }

    pub fn accepts(&self, prospect: &Prospect) -> bool {
        self.facets.iter().all(|(key, matcher)| {
            matcher.accepts(Candidate::Text(key.prospect_value(prospect).unwrap_or("")))
        }) && self.title.accepts((&prospect.prospect_title).into())
    }
}
