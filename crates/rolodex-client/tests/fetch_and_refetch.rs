// SPDX-License-Identifier: Apache-2.0

use rolodex_client::{ApiClient, ContactList};
use rolodex_model::ContactFields;
use rolodex_server::{build_router, AppState};
use rolodex_service::ContactService;
use rolodex_store::{ContactStore, SqliteStore};
use std::sync::Arc;

async fn spawn_server() -> String {
    let store = Arc::new(SqliteStore::open_in_memory().expect("open store"));
    let service = Arc::new(ContactService::new(store as Arc<dyn ContactStore>));
    let app = build_router(AppState::new(service));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve app");
    });
    format!("http://{addr}")
}

fn fields(first: &str, email: &str) -> ContactFields {
    ContactFields::parse(first, "Lovelace", email, "1234567890", "Analytical", "Engineer")
        .expect("valid fields")
}

#[tokio::test]
async fn every_successful_mutation_triggers_a_full_refetch() {
    let base_url = spawn_server().await;
    let mut list = ContactList::new(ApiClient::new(base_url));

    list.refresh().await.expect("initial fetch");
    assert!(list.rows().is_empty());

    let ada = list.add(&fields("Ada", "ada@x.io")).await.expect("add ada");
    assert_eq!(list.rows().len(), 1, "add refetches the canonical list");
    assert_eq!(list.rows()[0], ada);

    let grace = list
        .add(&fields("Grace", "grace@x.io"))
        .await
        .expect("add grace");
    assert_eq!(list.rows().len(), 2);

    let edited = list
        .edit(ada.id, &fields("Augusta", "ada2@x.io"))
        .await
        .expect("edit ada");
    assert_eq!(edited.id, ada.id);
    assert!(list.rows().iter().any(|c| c.email == "ada2@x.io"));
    assert!(list.rows().iter().all(|c| c.email != "ada@x.io"));

    list.remove(grace.id).await.expect("remove grace");
    assert_eq!(list.rows().len(), 1);
    assert_eq!(list.rows()[0].id, ada.id);
}

#[tokio::test]
async fn failed_mutations_leave_the_list_untouched() {
    let base_url = spawn_server().await;
    let mut list = ContactList::new(ApiClient::new(base_url));

    let ada = list.add(&fields("Ada", "ada@x.io")).await.expect("add ada");
    let before = list.rows().to_vec();

    let err = list
        .add(&fields("Copy", "ada@x.io"))
        .await
        .expect_err("duplicate email is rejected");
    assert!(err.0.contains("400"));
    assert_eq!(list.rows(), &before[..], "no refetch on the failure path");

    let err = list
        .edit(ada.id + 99, &fields("Ghost", "ghost@x.io"))
        .await
        .expect_err("unknown id is rejected");
    assert!(err.0.contains("404"));
    assert_eq!(list.rows(), &before[..]);
}
