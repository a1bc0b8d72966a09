use rolodex_client::{ApiClient, API_URL_ENV};

// Single test: the variable is process-global, so the unset and set cases
// must run sequentially.
#[test]
fn client_construction_requires_the_api_url_variable() {
    std::env::remove_var(API_URL_ENV);
    let err = ApiClient::from_env().expect_err("unset base url");
    assert!(err.0.contains(API_URL_ENV));

    std::env::set_var(API_URL_ENV, "   ");
    assert!(ApiClient::from_env().is_err(), "blank base url is unset");

    std::env::set_var(API_URL_ENV, "http://127.0.0.1:5000/");
    assert!(ApiClient::from_env().is_ok());
    std::env::remove_var(API_URL_ENV);
}
