use prodpulse_core::db::open_db_in_memory;
use prodpulse_core::{
    ProductHealth, ProductHealthRepository, ProductHealthService, RepoError,
    SqliteProductHealthRepository,
};

#[test]
fn save_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductHealthRepository::new(&conn);

    let saved = repo.save(&ProductHealth::new("checkout", 87)).unwrap();
    assert_eq!(saved.product_name, "checkout");
    assert_eq!(saved.health_score, 87);

    let loaded = repo.get("checkout").unwrap().unwrap();
    assert_eq!(loaded, saved);
}

#[test]
fn get_missing_product_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductHealthRepository::new(&conn);

    assert!(repo.get("ghost").unwrap().is_none());
}

#[test]
fn duplicate_save_is_rejected_and_keeps_first_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductHealthRepository::new(&conn);

    repo.save(&ProductHealth::new("checkout", 87)).unwrap();
    let err = repo.save(&ProductHealth::new("checkout", 12)).unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(name) if name == "checkout"));

    let unchanged = repo.get("checkout").unwrap().unwrap();
    assert_eq!(unchanged.health_score, 87);
}

#[test]
fn negative_scores_are_persisted_as_reported() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductHealthRepository::new(&conn);

    repo.save(&ProductHealth::new("legacy-batch", -5)).unwrap();
    let loaded = repo.get("legacy-batch").unwrap().unwrap();
    assert_eq!(loaded.health_score, -5);
}

#[test]
fn delete_removes_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductHealthRepository::new(&conn);

    repo.save(&ProductHealth::new("checkout", 87)).unwrap();
    repo.delete("checkout").unwrap();

    assert!(repo.get("checkout").unwrap().is_none());
}

#[test]
fn delete_missing_product_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductHealthRepository::new(&conn);

    let err = repo.delete("ghost").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(name) if name == "ghost"));
}

#[test]
fn service_wraps_repository_calls() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductHealthRepository::new(&conn);
    let service = ProductHealthService::new(repo);

    let saved = service
        .save_product_health(&ProductHealth::new("search", 64))
        .unwrap();
    assert_eq!(saved.product_name, "search");

    let fetched = service.get_product_health("search").unwrap().unwrap();
    assert_eq!(fetched.health_score, 64);

    service.delete_product_health("search").unwrap();
    assert!(service.get_product_health("search").unwrap().is_none());
}
