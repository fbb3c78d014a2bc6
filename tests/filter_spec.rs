use facet_core::facets::FacetKey;
use facet_core::filters::{FilterSpec, FilterSpecError, NumericRange, SelectorMode, SelectorTerm};
use facet_core::types::{BaseRanges, SpecFingerprint, ValueBounds};
use serde_json::json;

#[test]
fn default_spec_serializes_with_ui_field_names() {
    let value = serde_json::to_value(FilterSpec::default()).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 31);
    assert_eq!(object["accountHqRegionValues"], json!([]));
    assert_eq!(object["accountHqRevenueRange"], json!([0.0, 1000000.0]));
    assert_eq!(object["accountHqRevenueIncludeNull"], json!(true));
    assert_eq!(object["yearsInIndiaIncludeNull"], json!(true));
    assert_eq!(object["centerIncYearRange"], json!([0.0, 1000000.0]));
    assert_eq!(object["techSoftwareInUseKeywords"], json!([]));
    assert_eq!(object["prospectTitleKeywords"], json!([]));
}

#[test]
fn selector_terms_use_lowercase_modes() {
    let spec = FilterSpec {
        center_city_values: vec![SelectorTerm::exclude("Pune")],
        ..FilterSpec::default()
    };
    let value = serde_json::to_value(&spec).unwrap();

    assert_eq!(value["centerCityValues"], json!([{ "value": "Pune", "mode": "exclude" }]));
}

#[test]
fn partial_document_fills_defaults() {
    let spec = FilterSpec::from_json(
        r#"{
            "accountHqCountryValues": [{ "value": "India", "mode": "include" }],
            "accountHqRevenueIncludeNull": false
        }"#,
    )
    .unwrap();

    assert_eq!(spec.account_hq_country_values, vec![SelectorTerm::include("India")]);
    assert!(!spec.account_hq_revenue_include_null);
    assert!(spec.years_in_india_include_null);
    assert_eq!(spec.account_hq_revenue_range, NumericRange(0.0, 1_000_000.0));
    assert!(spec.function_name_values.is_empty());
}

#[test]
fn empty_document_is_the_default_spec() {
    assert_eq!(FilterSpec::from_json("{}").unwrap(), FilterSpec::default());
}

#[test]
fn malformed_ranges_fall_back_to_defaults() {
    let spec = FilterSpec::from_json(
        r#"{
            "accountHqRevenueRange": [5],
            "accountYearsInIndiaRange": "wide",
            "centerIncYearRange": [2000, "soon"]
        }"#,
    )
    .unwrap();

    let defaults = FilterSpec::default();
    assert_eq!(spec.account_hq_revenue_range, defaults.account_hq_revenue_range);
    assert_eq!(spec.account_years_in_india_range, defaults.account_years_in_india_range);
    assert_eq!(spec.center_inc_year_range, defaults.center_inc_year_range);
}

#[test]
fn numeric_strings_in_ranges_are_coerced() {
    let spec = FilterSpec::from_json(r#"{ "centerIncYearRange": ["2000", " 2020 "] }"#).unwrap();

    assert_eq!(spec.center_inc_year_range, NumericRange(2000.0, 2020.0));
}

#[test]
fn null_and_blank_range_bounds_read_as_zero() {
    let spec = FilterSpec::from_json(
        r#"{
            "accountHqRevenueRange": [null, 500],
            "accountYearsInIndiaRange": ["", true],
            "centerIncYearRange": [false, "2020"]
        }"#,
    )
    .unwrap();

    assert_eq!(spec.account_hq_revenue_range, NumericRange(0.0, 500.0));
    assert_eq!(spec.account_years_in_india_range, NumericRange(0.0, 1.0));
    assert_eq!(spec.center_inc_year_range, NumericRange(0.0, 2020.0));
}

#[test]
fn unknown_mode_is_a_decode_error() {
    let result = FilterSpec::from_json(r#"{ "centerTypeValues": [{ "value": "GCC", "mode": "maybe" }] }"#);

    assert!(matches!(result, Err(FilterSpecError::Json(_))));
}

#[test]
fn active_filter_count_adds_terms_moved_ranges_and_flags() {
    let base = BaseRanges {
        revenue: ValueBounds { min: 250.0, max: 900.0 },
        ..BaseRanges::default()
    };
    let untouched = FilterSpec {
        account_hq_revenue_include_null: false,
        years_in_india_include_null: false,
        center_inc_year_include_null: false,
        ..FilterSpec::with_base_ranges(&base)
    };
    assert_eq!(untouched.active_filter_count(&base), 0);

    let busy = FilterSpec {
        account_hq_region_values: vec![SelectorTerm::include("APAC"), SelectorTerm::include("NA")],
        prospect_title_keywords: vec![SelectorTerm::exclude("intern")],
        account_hq_revenue_range: NumericRange(300.0, 900.0),
        center_inc_year_include_null: true,
        ..untouched.clone()
    };
    assert_eq!(busy.active_filter_count(&base), 5);
}

#[test]
fn default_spec_counts_its_include_null_flags() {
    let spec = FilterSpec::default();

    assert_eq!(spec.active_filter_count(&BaseRanges::default()), 3);
}

#[test]
fn with_base_ranges_only_moves_the_sliders() {
    let base = BaseRanges {
        revenue: ValueBounds { min: 250.0, max: 900.0 },
        years_in_india: ValueBounds { min: 8.0, max: 20.0 },
        center_inc_year: ValueBounds { min: 2005.0, max: 2018.0 },
    };
    let spec = FilterSpec::with_base_ranges(&base);

    assert_eq!(spec.account_hq_revenue_range, NumericRange(250.0, 900.0));
    assert_eq!(spec.account_years_in_india_range, NumericRange(8.0, 20.0));
    assert_eq!(spec.center_inc_year_range, NumericRange(2005.0, 2018.0));
    assert_eq!(
        FilterSpec {
            account_hq_revenue_range: NumericRange(0.0, 1_000_000.0),
            account_years_in_india_range: NumericRange(0.0, 1_000_000.0),
            center_inc_year_range: NumericRange(0.0, 1_000_000.0),
            ..spec
        },
        FilterSpec::default()
    );
}

#[test]
fn without_clears_only_the_named_selector() {
    let spec = FilterSpec {
        center_city_values: vec![SelectorTerm::include("Pune")],
        center_type_values: vec![SelectorTerm::include("GCC")],
        ..FilterSpec::default()
    };
    let scoped = spec.without(FacetKey::CenterCityValues);

    assert!(scoped.center_city_values.is_empty());
    assert_eq!(scoped.center_type_values, spec.center_type_values);
    assert_eq!(spec.center_city_values.len(), 1);
}

#[test]
fn account_filters_are_active_unless_ranges_are_open_and_flags_clear() {
    let open = FilterSpec {
        account_hq_revenue_range: NumericRange(0.0, 9_007_199_254_740_991.0),
        account_years_in_india_range: NumericRange(0.0, f64::MAX),
        account_hq_revenue_include_null: false,
        years_in_india_include_null: false,
        ..FilterSpec::default()
    };
    assert!(!open.has_account_filters());
    assert!(FilterSpec::default().has_account_filters());

    let named = FilterSpec {
        account_global_legal_name_keywords: vec![SelectorTerm::include("acme")],
        ..open.clone()
    };
    assert!(named.has_account_filters());
    assert!(!named.has_prospect_filters());
    assert!(!named.has_function_filters());
    assert!(!named.has_software_filters());
}

#[test]
fn fingerprint_ignores_term_order() {
    let first = FilterSpec {
        account_hq_country_values: vec![SelectorTerm::include("India"), SelectorTerm::exclude("Nepal")],
        ..FilterSpec::default()
    };
    let second = FilterSpec {
        account_hq_country_values: vec![SelectorTerm::exclude("Nepal"), SelectorTerm::include("India")],
        ..FilterSpec::default()
    };

    let keywords_one_way = FilterSpec {
        prospect_title_keywords: vec![SelectorTerm::include("vp"), SelectorTerm::include("head")],
        ..first.clone()
    };
    let keywords_other_way = FilterSpec {
        prospect_title_keywords: vec![SelectorTerm::include("head"), SelectorTerm::include("vp")],
        ..second.clone()
    };
    assert_eq!(
        keywords_one_way.fingerprint().unwrap(),
        keywords_other_way.fingerprint().unwrap()
    );

    let a = first.fingerprint().unwrap();
    let b = second.fingerprint().unwrap();
    assert_eq!(a, b);
    assert!(a.as_str().starts_with("sha256:"));
    assert_eq!(a.as_str().len(), "sha256:".len() + 64);
}

#[test]
fn fingerprint_tracks_content() {
    let base = FilterSpec::default();
    let flipped = FilterSpec {
        center_city_values: vec![SelectorTerm {
            value: "Pune".to_string(),
            mode: SelectorMode::Include,
        }],
        ..FilterSpec::default()
    };
    let narrowed = FilterSpec {
        center_inc_year_range: NumericRange(2000.0, 2020.0),
        ..FilterSpec::default()
    };

    let fingerprints = [
        base.fingerprint().unwrap(),
        flipped.fingerprint().unwrap(),
        narrowed.fingerprint().unwrap(),
    ];
    assert_ne!(fingerprints[0], fingerprints[1]);
    assert_ne!(fingerprints[0], fingerprints[2]);
    assert_ne!(fingerprints[1], fingerprints[2]);
    assert_eq!(base.fingerprint().unwrap(), fingerprints[0]);
}

#[test]
fn fingerprint_is_a_tagged_sha256_hex_digest() {
    assert_eq!(
        SpecFingerprint::from_content(b"").as_str(),
        "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        SpecFingerprint::from_content(b"abc").to_string(),
        "sha256:ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}
