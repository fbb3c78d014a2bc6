#![allow(dead_code)]

use facet_core::records::{Account, Center, Dataset, Function, LooseValue, Prospect, Service, Tech};
use facet_core::types::FilteredData;

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

pub fn num(value: f64) -> Option<LooseValue> {
    Some(LooseValue::Number(value))
}

pub fn text(value: &str) -> Option<LooseValue> {
    Some(LooseValue::Text(value.to_string()))
}

pub fn account(
    name: &str,
    region: &str,
    country: &str,
    industry: &str,
    revenue: Option<LooseValue>,
    years_in_india: Option<LooseValue>,
) -> Account {
    Account {
        account_global_legal_name: name.into(),
        account_hq_region: s(region),
        account_hq_country: s(country),
        account_hq_industry: s(industry),
        account_type: s("Enterprise"),
        account_hq_revenue: revenue,
        years_in_india,
        ..Default::default()
    }
}

pub fn center(key: &str, account: &str, center_type: &str, city: &str, inc_year: Option<i64>) -> Center {
    Center {
        cn_unique_key: key.into(),
        account_global_legal_name: account.into(),
        center_name: Some(format!("{account} {city}")),
        center_type: s(center_type),
        center_city: s(city),
        center_country: s("India"),
        center_status: s("Active"),
        center_inc_year: inc_year.map(LooseValue::from),
        ..Default::default()
    }
}

pub fn function(key: &str, name: &str) -> Function {
    Function {
        cn_unique_key: key.into(),
        function_name: name.to_string(),
    }
}

pub fn service(key: &str) -> Service {
    Service {
        cn_unique_key: key.into(),
        primary_service: s("Shared Services"),
        ..Default::default()
    }
}

pub fn tech(key: Option<&str>, software: &str) -> Tech {
    Tech {
        cn_unique_key: key.map(Into::into),
        software_in_use: s(software),
        ..Default::default()
    }
}

pub fn prospect(account: &str, department: &str, level: &str, city: &str, title: &str) -> Prospect {
    Prospect {
        account_global_legal_name: account.into(),
        prospect_department: s(department),
        prospect_level: s(level),
        prospect_city: s(city),
        prospect_title: s(title),
        ..Default::default()
    }
}

/// Four accounts, five centers, a consistent web of children.
///
/// | account  | country       | revenue | centers      |
/// |----------|---------------|---------|--------------|
/// | Acme     | India         | 250     | C1 Bangalore, C2 Pune |
/// | Globex   | United States | "450"   | C3 Chennai   |
/// | Initech  | India         | null    | C4 Hyderabad |
/// | Umbrella | United States | 900     | C5 Bangalore |
pub fn fixture() -> Dataset {
    Dataset {
        accounts: vec![
            account("Acme Corp", "APAC", "India", "Software", num(250.0), num(12.0)),
            account("Globex", "NA", "United States", "Manufacturing", text("450"), text("8")),
            account("Initech", "EMEA", "India", "Software", None, None),
            account("Umbrella", "NA", "United States", "Pharma", num(900.0), num(20.0)),
        ],
        centers: vec![
            center("C1", "Acme Corp", "GCC", "Bangalore", Some(2005)),
            center("C2", "Acme Corp", "GCC", "Pune", Some(2015)),
            center("C3", "Globex", "Captive", "Chennai", Some(2010)),
            center("C4", "Initech", "GCC", "Hyderabad", None),
            center("C5", "Umbrella", "Captive", "Bangalore", Some(2018)),
        ],
        functions: vec![
            function("C1", "IT"),
            function("C1", "Finance"),
            function("C2", "IT"),
            function("C3", "Engineering"),
            function("C4", "Finance"),
            function("C5", "HR"),
        ],
        services: vec![service("C1"), service("C2"), service("C3"), service("C4"), service("C5")],
        prospects: vec![
            prospect("Acme Corp", "IT", "Director", "Bangalore", "Director of Engineering"),
            prospect("Acme Corp", "Finance", "VP", "Pune", "VP Finance"),
            prospect("Globex", "IT", "Manager", "Chennai", "IT Manager"),
            prospect("Initech", "HR", "Director", "Hyderabad", "HR Director"),
            prospect("Umbrella", "Finance", "CXO", "Bangalore", "Chief Financial Officer"),
        ],
        tech: vec![
            tech(Some("C1"), "Salesforce"),
            tech(Some("C1"), "SAP"),
            tech(Some("C2"), "   "),
            tech(Some("C3"), "Workday"),
            tech(Some("C5"), "SAP S/4HANA"),
            tech(None, "Orphaned Tool"),
        ],
    }
}

pub fn account_names<'a>(filtered: &FilteredData<'a>) -> Vec<&'a str> {
    filtered
        .accounts
        .iter()
        .map(|account| account.account_global_legal_name.as_str())
        .collect()
}

pub fn center_keys<'a>(filtered: &FilteredData<'a>) -> Vec<&'a str> {
    filtered
        .centers
        .iter()
        .map(|center| center.cn_unique_key.as_str())
        .collect()
}

pub fn function_rows<'a>(filtered: &FilteredData<'a>) -> Vec<(&'a str, &'a str)> {
    filtered
        .functions
        .iter()
        .map(|function| (function.cn_unique_key.as_str(), function.function_name.as_str()))
        .collect()
}

pub fn service_keys<'a>(filtered: &FilteredData<'a>) -> Vec<&'a str> {
    filtered
        .services
        .iter()
        .map(|service| service.cn_unique_key.as_str())
        .collect()
}

pub fn prospect_titles<'a>(filtered: &FilteredData<'a>) -> Vec<&'a str> {
    filtered
        .prospects
        .iter()
        .map(|prospect| prospect.prospect_title.as_deref().unwrap_or(""))
        .collect()
}
