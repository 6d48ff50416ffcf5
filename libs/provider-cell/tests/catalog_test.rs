use std::sync::Arc;

use assert_matches::assert_matches;

use provider_cell::{CatalogLoad, ProviderCatalog};
use shared_utils::test_utils::{MockClinicStore, TestFixtures};

#[tokio::test]
async fn either_fetch_failing_fails_the_load() {
    let store = MockClinicStore::new()
        .with_service(TestFixtures::service("svc-1", "Cleaning"))
        .failing_services();
    let catalog = ProviderCatalog::new(Arc::new(store));
    assert!(catalog.load("svc-1").await.is_err());

    let store = MockClinicStore::new()
        .with_service(TestFixtures::service("svc-1", "Cleaning"))
        .failing_providers();
    let catalog = ProviderCatalog::new(Arc::new(store));
    assert!(catalog.load("svc-1").await.is_err());
}

#[tokio::test]
async fn missing_service_is_reported_not_errored() {
    let catalog = ProviderCatalog::new(Arc::new(MockClinicStore::new()));
    assert_matches!(catalog.load("svc-x").await, Ok(CatalogLoad::ServiceNotFound));
}

#[tokio::test]
async fn found_service_keeps_fetch_order() {
    let store = MockClinicStore::new()
        .with_service(TestFixtures::service("svc-1", "Cleaning"))
        .with_provider(TestFixtures::provider("b", "Dr. B", "General", None, 1, &["svc-1"]))
        .with_provider(TestFixtures::provider("a", "Dr. A", "General", None, 1, &["svc-1"]));
    let catalog = ProviderCatalog::new(Arc::new(store));

    assert_matches!(
        catalog.load("svc-1").await,
        Ok(CatalogLoad::Found { service, providers })
            if service.id == "svc-1" && providers.iter().map(|p| p.id.as_str()).collect::<Vec<_>>() == ["b", "a"]
    );
}
