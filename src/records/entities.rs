use serde::{Deserialize, Serialize};

use super::value::LooseValue;
use crate::types::identifiers::{AccountName, CenterKey};

/// A business account, joined to centers and prospects by its legal name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub account_global_legal_name: AccountName,
    pub account_hq_region: Option<String>,
    pub account_hq_country: Option<String>,
    pub account_hq_industry: Option<String>,
    pub account_data_coverage: Option<String>,
    pub account_source: Option<String>,
    pub account_type: Option<String>,
    pub account_primary_category: Option<String>,
    pub account_primary_nature: Option<String>,
    pub account_nasscom_status: Option<String>,
    pub account_hq_employee_range: Option<String>,
    pub account_center_employees_range: Option<String>,
    pub account_hq_revenue: Option<LooseValue>,
    pub years_in_india: Option<LooseValue>,
    pub account_hq_website: Option<String>,
}

/// A delivery center owned by exactly one account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Center {
    pub cn_unique_key: CenterKey,
    pub account_global_legal_name: AccountName,
    pub center_name: Option<String>,
    pub center_type: Option<String>,
    pub center_focus: Option<String>,
    pub center_city: Option<String>,
    pub center_state: Option<String>,
    pub center_country: Option<String>,
    pub center_employees_range: Option<String>,
    pub center_status: Option<String>,
    pub center_inc_year: Option<LooseValue>,
}

/// One functional offering of a center.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Function {
    pub cn_unique_key: CenterKey,
    pub function_name: String,
}

/// Descriptive service row for a center. Carries no predicate of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub cn_unique_key: CenterKey,
    pub center_name: Option<String>,
    pub primary_service: Option<String>,
    pub focus_region: Option<String>,
    pub software_vendor: Option<String>,
    pub software_in_use: Option<String>,
}

/// Software used at a center. Only feeds the per-center software index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tech {
    pub cn_unique_key: Option<CenterKey>,
    pub account_global_legal_name: Option<AccountName>,
    pub software_in_use: Option<String>,
    pub software_vendor: Option<String>,
    pub software_category: Option<String>,
}

/// A contact at an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prospect {
    pub account_global_legal_name: AccountName,
    pub prospect_full_name: Option<String>,
    pub prospect_title: Option<String>,
    pub prospect_department: Option<String>,
    pub prospect_level: Option<String>,
    pub prospect_city: Option<String>,
}
