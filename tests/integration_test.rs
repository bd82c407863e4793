/// Integration tests for the catalogs, policies and use cases
mod test_utilities;

use iq_license_report::license_compliance::catalog::DEFAULT_HIGH_RISK_THRESHOLD;
use iq_license_report::prelude::*;
use iq_license_report::shared::error::ReportError;
use proptest::prelude::*;
use serde_json::{json, Value};
use test_utilities::mocks::*;

fn confirmed_a() -> Value {
    json!({
        "artifactId": "a",
        "version": "1.0",
        "status": "Confirmed",
        "effectiveLicenses": ["MIT", "Apache-2.0"],
        "effectiveLicenseThreat": 2
    })
}

fn overridden_b() -> Value {
    json!({
        "artifactId": "b",
        "version": "2.0",
        "status": "Overridden",
        "overriddenLicenses": ["GPL-3.0"],
        "overriddenLicenseThreat": 9
    })
}

#[test]
fn test_resolution_and_categorization_scenario() {
    let mut catalog = DependencyCatalog::new();
    catalog.add_or_update(&confirmed_a(), None, true).unwrap();
    catalog.add_or_update(&overridden_b(), None, true).unwrap();

    let info = catalog.resolve_best_license_info("a : 1.0").unwrap();
    assert_eq!(info.licenses(), ["Apache-2.0".to_string(), "MIT".to_string()]);
    assert_eq!(info.threat(), Threat::Known(2));
    assert_eq!(info.status(), "Confirmed");

    let high_risk = catalog.list_high_risk(DEFAULT_HIGH_RISK_THRESHOLD);
    assert_eq!(high_risk.len(), 1);
    let (dependency, info) = &high_risk[0];
    assert_eq!(dependency.key(), "b : 2.0");
    assert_eq!(info.licenses(), ["GPL-3.0".to_string()]);
    assert_eq!(info.threat(), Threat::Known(9));
    assert_eq!(info.status(), "Overridden");

    assert_eq!(
        LicenseCategorizer::categorize("Apache-2.0 AND MIT"),
        LicenseCategory::Attribution
    );
    assert_eq!(
        LicenseCategorizer::categorize("GPL-3.0"),
        LicenseCategory::Copyleft
    );
}

#[test]
fn test_normalizer_scenario() {
    let combined = LicenseNormalizer::combine_license_views(
        &["MIT".to_string()],
        &["MIT".to_string()],
        &["MIT or Apache-2.0".to_string()],
    );
    assert_eq!(combined, "MIT AND (MIT OR Apache-2.0)");
}

#[test]
fn test_resolution_is_pure() {
    let mut catalog = DependencyCatalog::new();
    catalog.add_or_update(&confirmed_a(), Some("web"), true).unwrap();

    let first = catalog.resolve_best_license_info("a : 1.0");
    let second = catalog.resolve_best_license_info("a : 1.0");
    assert_eq!(first, second);
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_update_is_idempotent() {
    let mut catalog = DependencyCatalog::new();
    catalog.add_or_update(&confirmed_a(), Some("web"), true).unwrap();
    let before = catalog.resolve_best_license_info("a : 1.0");

    catalog.add_or_update(&confirmed_a(), Some("web"), true).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.resolve_best_license_info("a : 1.0"), before);

    let dependency = catalog.get(None, "a", "1.0").unwrap();
    assert_eq!(dependency.app_names().len(), 1);
}

#[test]
fn test_duplicate_without_update_rejected() {
    let mut catalog = DependencyCatalog::new();
    catalog.add_or_update(&confirmed_a(), None, false).unwrap();
    let err = catalog.add_or_update(&confirmed_a(), None, false).unwrap_err();
    assert_eq!(
        err,
        ReportError::DuplicateDependency {
            key: "a : 1.0".to_string()
        }
    );
}

#[test]
fn test_unscored_dependencies_never_high_risk() {
    let mut catalog = DependencyCatalog::new();
    catalog
        .add_or_update(
            &json!({"artifactId": "u", "version": "1", "status": "Open",
                    "effectiveLicenses": ["GPL-3.0"], "effectiveLicenseThreat": null}),
            None,
            true,
        )
        .unwrap();
    catalog
        .add_or_update(
            &json!({"artifactId": "m", "version": "1", "status": "Open",
                    "effectiveLicenses": ["GPL-3.0"]}),
            None,
            true,
        )
        .unwrap();

    assert!(catalog.list_high_risk(0).is_empty());
    assert_eq!(catalog.list_unscored().len(), 2);
}

#[test]
fn test_every_dependency_is_categorized() {
    let mut catalog = DependencyCatalog::new();
    catalog.add_or_update(&confirmed_a(), None, true).unwrap();
    catalog.add_or_update(&overridden_b(), None, true).unwrap();
    catalog
        .add_or_update(
            &json!({"artifactId": "odd", "version": "1", "effectiveLicenses": ["Odd-License"]}),
            None,
            true,
        )
        .unwrap();
    catalog
        .add_or_update(&json!({"artifactId": "bare", "version": "1"}), None, true)
        .unwrap();

    let summary = LicenseAggregator::collect_all_licenses(&catalog);
    let categorized: usize = summary
        .categories
        .values()
        .flat_map(|expressions| expressions.values())
        .map(Vec::len)
        .sum();
    assert_eq!(categorized, catalog.len());
    assert!(summary.categories.contains_key(&LicenseCategory::Other));
    assert!(summary.categories.contains_key(&LicenseCategory::NotFound));
}

#[test]
fn test_load_use_case_with_mock_source() {
    let source = MockReportSource::new()
        .with_application("web", vec![confirmed_a(), json!({"status": "Open"})])
        .with_application("billing", vec![confirmed_a(), overridden_b()])
        .with_unscanned_application("draft");
    let reporter = MockProgressReporter::new();

    let mut applications = ApplicationCatalog::new("org-1");
    let mut dependencies = DependencyCatalog::new();
    let use_case = LoadLicensesUseCase::new(source, reporter.clone());
    let summary = use_case
        .execute(&mut applications, &mut dependencies)
        .unwrap();

    assert_eq!(summary.applications_loaded, 2);
    assert_eq!(summary.applications_skipped, 1);
    assert_eq!(summary.malformed_records, 1);
    assert_eq!(dependencies.len(), 2);

    let shared = dependencies.get(None, "a", "1.0").unwrap();
    let used_in: Vec<&str> = shared.app_names().iter().map(String::as_str).collect();
    assert_eq!(used_in, vec!["billing", "web"]);

    let errors = reporter.errors();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|m| m.contains("draft")));
    assert!(errors.iter().any(|m| m.contains("malformed")));
    assert!(reporter
        .get_messages()
        .iter()
        .any(|m| m.starts_with("Completed:")));
}

#[test]
fn test_load_use_case_listing_failure_propagates() {
    let use_case = LoadLicensesUseCase::new(
        MockReportSource::with_failure(),
        MockProgressReporter::new(),
    );
    let mut applications = ApplicationCatalog::new("org-1");
    let mut dependencies = DependencyCatalog::new();

    let result = use_case.execute(&mut applications, &mut dependencies);
    assert!(result.is_err());
}

#[test]
fn test_load_then_generate_report() {
    let source = MockReportSource::new()
        .with_application("web", vec![confirmed_a(), overridden_b()]);

    let mut applications = ApplicationCatalog::new("org-1");
    let mut dependencies = DependencyCatalog::new();
    LoadLicensesUseCase::new(source, MockProgressReporter::new())
        .execute(&mut applications, &mut dependencies)
        .unwrap();

    let response = GenerateReportUseCase::new(MockProgressReporter::new())
        .execute(&ReportRequest::default(), &applications, &dependencies)
        .unwrap();

    assert!(response.has_high_risk);
    let model = &response.read_model;
    assert_eq!(model.metadata.organization_id, "org-1");
    assert_eq!(model.applications.len(), 1);
    assert_eq!(model.applications[0].rows.len(), 2);
    assert_eq!(model.high_risk.dependencies[0].component, "b : 2.0");
    assert_eq!(model.high_risk.dependencies[0].used_in, vec!["web"]);

    let labels: Vec<&str> = model
        .license_summary
        .categories
        .iter()
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(labels, vec!["Attribution", "Copyleft"]);

    let csv = CsvFormatter::new().format(model).unwrap();
    assert_eq!(csv[0].file_name, "web.csv");
    let red = RedReportFormatter::new().format(model).unwrap();
    assert!(red[0].content.starts_with("* b : 2.0:\n"));
}

proptest! {
    #[test]
    fn test_coordinate_key_round_trip(
        group in proptest::option::of("[a-zA-Z0-9._-]{1,20}"),
        artifact in "[a-zA-Z0-9._-]{1,20}",
        version in "[a-zA-Z0-9._+-]{1,12}",
    ) {
        let coordinates = Coordinates::new(group.clone(), artifact.clone(), version.clone());
        let parsed = Coordinates::parse_key(&coordinates.key()).unwrap();
        prop_assert_eq!(parsed.group_id(), group.as_deref());
        prop_assert_eq!(parsed.artifact_id(), artifact.as_str());
        prop_assert_eq!(parsed.version(), version.as_str());
        prop_assert_eq!(parsed.key(), coordinates.key());
    }

    #[test]
    fn test_license_lists_sorted(licenses in proptest::collection::vec("[A-Za-z0-9.-]{1,12}", 0..6)) {
        let info = LicenseInfo::new(licenses, Threat::Missing, String::new());
        let mut sorted = info.licenses().to_vec();
        sorted.sort();
        prop_assert_eq!(info.licenses(), sorted.as_slice());
    }
}
