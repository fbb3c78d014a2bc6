use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filters::{FilterSpec, SelectorTerm};
use crate::records::{Account, Center, Function, Prospect};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FacetKeyError {
    #[error("Unknown facet key: {0}")]
    Unknown(String),
}

/// Which filtered collection a facet counts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetEntity {
    Account,
    Center,
    Function,
    Prospect,
}

/// Every categorical attribute the UI offers a multi-select for.
///
/// Ordering follows declaration order, which is the order option lists are
/// rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FacetKey {
    AccountHqRegionValues,
    AccountHqCountryValues,
    AccountHqIndustryValues,
    AccountDataCoverageValues,
    AccountSourceValues,
    AccountTypeValues,
    AccountPrimaryCategoryValues,
    AccountPrimaryNatureValues,
    AccountNasscomStatusValues,
    AccountHqEmployeeRangeValues,
    AccountCenterEmployeesRangeValues,
    CenterTypeValues,
    CenterFocusValues,
    CenterCityValues,
    CenterStateValues,
    CenterCountryValues,
    CenterEmployeesRangeValues,
    CenterStatusValues,
    FunctionNameValues,
    ProspectDepartmentValues,
    ProspectLevelValues,
    ProspectCityValues,
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

impl FacetKey {
    pub const ALL: [FacetKey; 22] = [
        FacetKey::AccountHqRegionValues,
        FacetKey::AccountHqCountryValues,
        FacetKey::AccountHqIndustryValues,
        FacetKey::AccountDataCoverageValues,
        FacetKey::AccountSourceValues,
        FacetKey::AccountTypeValues,
        FacetKey::AccountPrimaryCategoryValues,
        FacetKey::AccountPrimaryNatureValues,
        FacetKey::AccountNasscomStatusValues,
        FacetKey::AccountHqEmployeeRangeValues,
        FacetKey::AccountCenterEmployeesRangeValues,
        FacetKey::CenterTypeValues,
        FacetKey::CenterFocusValues,
        FacetKey::CenterCityValues,
        FacetKey::CenterStateValues,
        FacetKey::CenterCountryValues,
        FacetKey::CenterEmployeesRangeValues,
        FacetKey::CenterStatusValues,
        FacetKey::FunctionNameValues,
        FacetKey::ProspectDepartmentValues,
        FacetKey::ProspectLevelValues,
        FacetKey::ProspectCityValues,
    ];

    pub fn entity(self) -> FacetEntity {
        match self {
            FacetKey::CenterTypeValues
            | FacetKey::CenterFocusValues
            | FacetKey::CenterCityValues
            | FacetKey::CenterStateValues
            | FacetKey::CenterCountryValues
            | FacetKey::CenterEmployeesRangeValues
            | FacetKey::CenterStatusValues => FacetEntity::Center,
            FacetKey::FunctionNameValues => FacetEntity::Function,
            FacetKey::ProspectDepartmentValues
            | FacetKey::ProspectLevelValues
            | FacetKey::ProspectCityValues => FacetEntity::Prospect,
            _ => FacetEntity::Account,
        }
    }

    /// Facet keys counted over one entity collection, in declaration order.
    pub fn of_entity(entity: FacetEntity) -> impl Iterator<Item = FacetKey> {
        FacetKey::ALL.into_iter().filter(move |key| key.entity() == entity)
    }

    /// The account field this facet reads, or `None` for non-account facets.
    pub fn account_value(self, account: &Account) -> Option<&str> {
        let value = match self {
            FacetKey::AccountHqRegionValues => &account.account_hq_region,
            FacetKey::AccountHqCountryValues => &account.account_hq_country,
            FacetKey::AccountHqIndustryValues => &account.account_hq_industry,
            FacetKey::AccountDataCoverageValues => &account.account_data_coverage,
            FacetKey::AccountSourceValues => &account.account_source,
            FacetKey::AccountTypeValues => &account.account_type,
            FacetKey::AccountPrimaryCategoryValues => &account.account_primary_category,
            FacetKey::AccountPrimaryNatureValues => &account.account_primary_nature,
            FacetKey::AccountNasscomStatusValues => &account.account_nasscom_status,
            FacetKey::AccountHqEmployeeRangeValues => &account.account_hq_employee_range,
            FacetKey::AccountCenterEmployeesRangeValues => {
                &account.account_center_employees_range
            }
            _ => return None,
        };
        Some(text(value))
    }

    pub fn center_value(self, center: &Center) -> Option<&str> {
        let value = match self {
            FacetKey::CenterTypeValues => &center.center_type,
            FacetKey::CenterFocusValues => &center.center_focus,
            FacetKey::CenterCityValues => &center.center_city,
            FacetKey::CenterStateValues => &center.center_state,
            FacetKey::CenterCountryValues => &center.center_country,
            FacetKey::CenterEmployeesRangeValues => &center.center_employees_range,
            FacetKey::CenterStatusValues => &center.center_status,
            _ => return None,
        };
        Some(text(value))
    }

    pub fn function_value(self, function: &Function) -> Option<&str> {
        match self {
            FacetKey::FunctionNameValues => Some(function.function_name.as_str()),
            _ => None,
        }
    }

    pub fn prospect_value(self, prospect: &Prospect) -> Option<&str> {
        let value = match self {
            FacetKey::ProspectDepartmentValues => &prospect.prospect_department,
            FacetKey::ProspectLevelValues => &prospect.prospect_level,
            FacetKey::ProspectCityValues => &prospect.prospect_city,
            _ => return None,
        };
        Some(text(value))
    }
}

// One table maps each facet to its selector field in `FilterSpec` and its wire name.
macro_rules! selector_fields {
    ($($key:ident => $field:ident as $name:literal,)*) => {
        impl FacetKey {
            pub fn as_str(self) -> &'static str {
                match self {
                    $(FacetKey::$key => $name,)*
                }
            }

            pub fn selector(self, spec: &FilterSpec) -> &[SelectorTerm] {
                match self {
                    $(FacetKey::$key => &spec.$field,)*
                }
            }

            pub(crate) fn selector_mut(self, spec: &mut FilterSpec) -> &mut Vec<SelectorTerm> {
                match self {
                    $(FacetKey::$key => &mut spec.$field,)*
                }
            }
        }
    };
}

selector_fields! {
    AccountHqRegionValues => account_hq_region_values as "accountHqRegionValues",
    AccountHqCountryValues => account_hq_country_values as "accountHqCountryValues",
    AccountHqIndustryValues => account_hq_industry_values as "accountHqIndustryValues",
    AccountDataCoverageValues => account_data_coverage_values as "accountDataCoverageValues",
    AccountSourceValues => account_source_values as "accountSourceValues",
    AccountTypeValues => account_type_values as "accountTypeValues",
    AccountPrimaryCategoryValues => account_primary_category_values as "accountPrimaryCategoryValues",
    AccountPrimaryNatureValues => account_primary_nature_values as "accountPrimaryNatureValues",
    AccountNasscomStatusValues => account_nasscom_status_values as "accountNasscomStatusValues",
    AccountHqEmployeeRangeValues => account_hq_employee_range_values as "accountHqEmployeeRangeValues",
    AccountCenterEmployeesRangeValues => account_center_employees_range_values as "accountCenterEmployeesRangeValues",
    CenterTypeValues => center_type_values as "centerTypeValues",
    CenterFocusValues => center_focus_values as "centerFocusValues",
    CenterCityValues => center_city_values as "centerCityValues",
    CenterStateValues => center_state_values as "centerStateValues",
    CenterCountryValues => center_country_values as "centerCountryValues",
    CenterEmployeesRangeValues => center_employees_range_values as "centerEmployeesRangeValues",
    CenterStatusValues => center_status_values as "centerStatusValues",
    FunctionNameValues => function_name_values as "functionNameValues",
    ProspectDepartmentValues => prospect_department_values as "prospectDepartmentValues",
    ProspectLevelValues => prospect_level_values as "prospectLevelValues",
    ProspectCityValues => prospect_city_values as "prospectCityValues",
}

impl fmt::Display for FacetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FacetKey {
    type Err = FacetKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FacetKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| FacetKeyError::Unknown(s.to_string()))
    }
}
