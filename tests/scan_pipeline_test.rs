/// Integration tests for the scan-and-aggregate pipeline, driven through
/// the application layer with a mock vulnerability repository.
mod test_utilities;

use std::sync::Arc;
use test_utilities::mocks::MockVulnerabilityRepository;
use vulnscan::prelude::*;

fn pipeline(
    repository: MockVulnerabilityRepository,
) -> (
    CreateApplicationUseCase<MockVulnerabilityRepository>,
    ApplicationQueries,
    Arc<ApplicationStore>,
) {
    let store = Arc::new(ApplicationStore::new());
    let create = CreateApplicationUseCase::new(ScanManifestUseCase::new(repository, 4), store.clone());
    let queries = ApplicationQueries::new(store.clone());
    (create, queries, store)
}

#[tokio::test]
async fn test_end_to_end_example_manifest() {
    let repository = MockVulnerabilityRepository::new().with_vulnerability("flask", "1.0", "V-1");
    let lookup_log = repository.lookup_log();
    let (create, _, store) = pipeline(repository);

    let application = create
        .execute(
            "web".to_string(),
            Some("frontend".to_string()),
            "flask==1.0\n# comment\nrequests\n",
        )
        .await
        .unwrap();

    let packages = application.packages();
    assert_eq!(packages.len(), 2);

    assert_eq!(packages[0].name(), "flask");
    assert_eq!(packages[0].version(), "1.0");
    assert_eq!(packages[0].vulnerabilities().len(), 1);
    assert_eq!(packages[0].vulnerabilities()[0].id(), "V-1");

    assert_eq!(packages[1].name(), "requests");
    assert_eq!(packages[1].version(), "unknown");
    assert!(packages[1].vulnerabilities().is_empty());
    assert_eq!(packages[1].error(), Some("version not specified"));

    // The versionless entry never reached the lookup client.
    assert_eq!(lookup_log.lock().unwrap().as_slice(), ["flask==1.0"]);
    assert_eq!(store.get_all().len(), 1);
}

#[tokio::test]
async fn test_fault_isolation_middle_lookup_fails() {
    let repository = MockVulnerabilityRepository::new()
        .with_vulnerability("a", "1", "V-A")
        .with_error("b", "2", "Failed to query OSV API for b==2: status 500")
        .with_vulnerability("c", "3", "V-C");
    let (create, _, _) = pipeline(repository);

    let application = create
        .execute("app".to_string(), None, "a==1\nb==2\nc==3\n")
        .await
        .unwrap();

    let packages = application.packages();
    assert_eq!(packages.len(), 3);

    assert!(packages[0].error().is_none());
    assert_eq!(packages[0].vulnerabilities().len(), 1);

    assert_eq!(
        packages[1].error(),
        Some("Failed to query OSV API for b==2: status 500")
    );
    assert!(packages[1].vulnerabilities().is_empty());
    assert!(!packages[1].is_vulnerable());

    assert!(packages[2].error().is_none());
    assert_eq!(packages[2].vulnerabilities().len(), 1);
}

#[tokio::test]
async fn test_duplicate_application_name_conflicts_and_keeps_prior_entry() {
    let repository = MockVulnerabilityRepository::new().with_vulnerability("flask", "1.0", "V-1");
    let (create, queries, _) = pipeline(repository);

    create
        .execute("web".to_string(), Some("first".to_string()), "flask==1.0\n")
        .await
        .unwrap();
    let err = create
        .execute("web".to_string(), Some("second".to_string()), "requests==2.0\n")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ScanServiceError::DuplicateApplication { ref name } if name == "web"
    ));

    let applications = queries.list_applications();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].description.as_deref(), Some("first"));
    assert!(applications[0].is_vulnerable);
}

#[tokio::test]
async fn test_dedup_by_merge_across_applications() {
    let repository = MockVulnerabilityRepository::new()
        .with_full_vulnerability("requests", "2.0", "V-1", Some("first finding"), None)
        .with_vulnerability("requests", "2.0", "V-2");
    let (create, queries, _) = pipeline(repository);

    create
        .execute("web".to_string(), Some("frontend".to_string()), "requests==2.0\n")
        .await
        .unwrap();
    create
        .execute("api".to_string(), Some("backend".to_string()), "requests==2.0\n")
        .await
        .unwrap();

    // One merged record, vulnerabilities concatenated (2 + 2).
    let records = queries.list_dependencies();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "requests");
    assert_eq!(records[0].vulnerabilities.len(), 4);

    let detail = queries.get_dependency("requests", "2.0").unwrap();
    assert_eq!(detail.vulnerabilities.len(), 4);
    assert_eq!(detail.usage.len(), 2);
    assert_eq!(detail.usage[0].application_name, "web");
    assert_eq!(detail.usage[1].application_name, "api");
    assert_eq!(
        detail.usage[1].application_description.as_deref(),
        Some("backend")
    );
}

#[tokio::test]
async fn test_aggregation_is_idempotent_without_store_mutation() {
    let repository = MockVulnerabilityRepository::new().with_vulnerability("flask", "1.0", "V-1");
    let (create, queries, _) = pipeline(repository);

    create
        .execute("web".to_string(), None, "flask==1.0\nrequests==2.0\n")
        .await
        .unwrap();

    let first = queries.list_dependencies();
    let second = queries.list_dependencies();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_vulnerability_flag_is_always_derived() {
    let repository = MockVulnerabilityRepository::new().with_vulnerability("flask", "1.0", "V-1");
    let (create, queries, store) = pipeline(repository);

    create
        .execute("web".to_string(), None, "flask==1.0\nrequests==2.0\nmissing\n")
        .await
        .unwrap();

    for application in store.get_all() {
        for package in application.packages() {
            assert_eq!(
                package.is_vulnerable(),
                !package.vulnerabilities().is_empty()
            );
        }
    }
    for record in queries.list_dependencies() {
        assert_eq!(record.is_vulnerable(), !record.vulnerabilities.is_empty());
    }
}

#[tokio::test]
async fn test_sentinel_defaults_flow_through_to_detail_view() {
    let repository = MockVulnerabilityRepository::new().with_full_vulnerability(
        "flask",
        "1.0",
        "V-1",
        None,
        None,
    );
    let (create, queries, _) = pipeline(repository);

    create
        .execute("web".to_string(), None, "flask==1.0\n")
        .await
        .unwrap();

    let detail = queries.get_dependency("flask", "1.0").unwrap();
    assert_eq!(detail.vulnerabilities[0].summary(), "N/A");
    assert_eq!(detail.vulnerabilities[0].details(), "N/A");
}

#[tokio::test]
async fn test_stored_packages_keep_manifest_order_despite_slow_lookups() {
    let repository = MockVulnerabilityRepository::new()
        .with_vulnerability("slow", "1.0", "V-1")
        .with_delay("slow", "1.0", std::time::Duration::from_millis(50))
        .with_vulnerability("fast", "2.0", "V-2");
    let (create, _, store) = pipeline(repository);

    create
        .execute("web".to_string(), None, "slow==1.0\nfast==2.0\n")
        .await
        .unwrap();

    let application = store.get_by_name("web").unwrap();
    assert_eq!(application.packages()[0].name(), "slow");
    assert_eq!(application.packages()[1].name(), "fast");
}

#[tokio::test]
async fn test_dependency_index_orders_by_first_encounter() {
    let repository = MockVulnerabilityRepository::new();
    let (create, queries, _) = pipeline(repository);

    create
        .execute("first".to_string(), None, "b==2\na==1\n")
        .await
        .unwrap();
    create
        .execute("second".to_string(), None, "a==1\nc==3\n")
        .await
        .unwrap();

    let records = queries.list_dependencies();
    let names: Vec<&str> = records.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
}
