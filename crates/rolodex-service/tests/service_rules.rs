use rolodex_model::ContactDraft;
use rolodex_service::{ContactService, ServiceError};
use rolodex_store::{MemoryStore, StoreError};
use std::sync::atomic::Ordering;
use std::sync::Arc;

fn draft(first: &str, email: &str) -> ContactDraft {
    ContactDraft {
        first_name: Some(first.to_string()),
        last_name: Some("Lovelace".to_string()),
        email: Some(email.to_string()),
        phone_number: Some("1234567890".to_string()),
        company: Some("Analytical".to_string()),
        job_title: Some("Engineer".to_string()),
    }
}

fn service() -> (ContactService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    (ContactService::new(store.clone()), store)
}

#[tokio::test]
async fn create_returns_the_contact_with_a_fresh_positive_id() {
    let (service, _) = service();
    let a = service.create(&draft("Ada", "ada@x.io")).await.expect("create a");
    let b = service.create(&draft("Grace", "grace@x.io")).await.expect("create b");
    assert!(a.id > 0);
    assert!(b.id > a.id);
    assert_eq!(a.first_name, "Ada");
}

#[tokio::test]
async fn create_with_an_empty_field_never_reaches_the_store() {
    let (service, store) = service();
    let mut incomplete = draft("Ada", "ada@x.io");
    incomplete.company = Some(String::new());
    let err = service.create(&incomplete).await.expect_err("invalid draft");
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(store.calls.load(Ordering::Relaxed), 0);
}

#[tokio::test]
async fn duplicate_email_is_a_conflict_and_leaves_the_row_count_unchanged() {
    let (service, _) = service();
    service.create(&draft("Ada", "ada@x.io")).await.expect("first create");
    let err = service
        .create(&draft("Other", "ada@x.io"))
        .await
        .expect_err("duplicate email");
    assert!(matches!(err, ServiceError::Conflict(_)));
    assert_eq!(service.list().await.expect("list").len(), 1);
}

#[tokio::test]
async fn update_of_an_unknown_id_is_not_found_and_changes_nothing() {
    let (service, _) = service();
    let created = service.create(&draft("Ada", "ada@x.io")).await.expect("create");
    let err = service
        .update(created.id + 1, &draft("Ghost", "ghost@x.io"))
        .await
        .expect_err("unknown id");
    assert!(matches!(err, ServiceError::NotFound(_)));
    assert_eq!(service.list().await.expect("list"), vec![created]);
}

#[tokio::test]
async fn update_replaces_all_six_fields_as_observed_by_list() {
    let (service, _) = service();
    let created = service.create(&draft("Ada", "ada@x.io")).await.expect("create");
    let updated = service
        .update(created.id, &draft("Augusta", "ada2@x.io"))
        .await
        .expect("update");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.email, "ada2@x.io");

    let listed = service.list().await.expect("list");
    assert_eq!(listed, vec![updated]);
    assert!(listed.iter().all(|c| c.email != "ada@x.io"));
}

#[tokio::test]
async fn update_with_an_empty_field_is_a_validation_error() {
    let (service, _) = service();
    let created = service.create(&draft("Ada", "ada@x.io")).await.expect("create");
    let mut incomplete = draft("Ada", "ada@x.io");
    incomplete.phone_number = None;
    let err = service
        .update(created.id, &incomplete)
        .await
        .expect_err("missing field");
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn delete_removes_exactly_that_row_and_repeats_as_not_found() {
    let (service, _) = service();
    let a = service.create(&draft("Ada", "ada@x.io")).await.expect("create a");
    let b = service.create(&draft("Grace", "grace@x.io")).await.expect("create b");

    service.delete(a.id).await.expect("delete a");
    assert_eq!(service.list().await.expect("list"), vec![b]);

    let err = service.delete(a.id).await.expect_err("second delete");
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn store_failures_surface_as_store_errors() {
    let (service, store) = service();
    store.fail_all.store(true, Ordering::Relaxed);
    let err = service.list().await.expect_err("store down");
    assert!(matches!(err, ServiceError::Store(_)));
}

#[test]
fn unique_index_violations_convert_to_conflicts() {
    let conflict: ServiceError =
        StoreError("UNIQUE constraint failed: contacts.email".to_string()).into();
    assert!(matches!(conflict, ServiceError::Conflict(_)));

    let other: ServiceError = StoreError("disk I/O error".to_string()).into();
    assert!(matches!(other, ServiceError::Store(_)));
}
