//! Session lifecycle tests against a mock backend

use std::sync::Arc;

use lsc_portal_core::models::{LscCenter, NewLscCenter};
use lsc_portal_core::{
    ApiClient, ApiError, MemorySessionStore, Session, SessionEvent, SessionStore, ValidationError,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, store: Arc<MemorySessionStore>) -> ApiClient {
    ApiClient::new(format!("{}/api", server.uri()), store).expect("client should build")
}

fn signed_in_store() -> Arc<MemorySessionStore> {
    Arc::new(MemorySessionStore::with_session(Session::new("A1", "R1")))
}

#[tokio::test]
async fn test_bearer_header_attached_when_signed_in() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/students/"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, signed_in_store());
    let students = client.list_students().await.expect("request should succeed");
    assert!(students.is_empty());
}

#[tokio::test]
async fn test_no_header_without_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/reports/summary/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_applications": 0,
            "confirmed_admissions": 0,
            "pending_payments": 0,
            "revenue_generated": 0
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(MemorySessionStore::new()));
    client.report_summary().await.expect("request should succeed");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_401_clears_session_and_redirects_to_login() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/students/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "Given token not valid for any token type"})),
        )
        .mount(&server)
        .await;

    let store = signed_in_store();
    let client = client_for(&server, store.clone());
    let mut events = client.subscribe();

    let result = client.list_students().await;
    assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    assert!(store.get().is_none());
    assert!(!client.is_authenticated());
    assert_eq!(
        events.try_recv().expect("expired event"),
        SessionEvent::Expired { redirect_to: "/login" }
    );
}

#[tokio::test]
async fn test_401_from_any_endpoint_tears_down() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/auth/lsc-centers/LC2101/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let store = signed_in_store();
    let client = client_for(&server, store.clone());
    let mut events = client.subscribe();

    let err = client.delete_lsc_center("LC2101").await.unwrap_err();
    assert!(err.is_auth());
    assert!(store.get().is_none());
    assert_eq!(events.try_recv().unwrap(), SessionEvent::expired());
}

#[tokio::test]
async fn test_no_retry_after_401() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/counsellors/"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/token/refresh/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "A9"})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, signed_in_store());
    assert!(client.list_counsellors().await.is_err());
}

#[tokio::test]
async fn test_other_errors_keep_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/attendance/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let store = signed_in_store();
    let client = client_for(&server, store.clone());

    let err = client.list_attendance().await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
    assert_eq!(store.get(), Some(Session::new("A1", "R1")));
}

#[tokio::test]
async fn test_login_stores_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .and(body_json(json!({"lscNumber": "LC2101", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "A2", "refresh": "R2"})))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::new());
    let client = client_for(&server, store.clone());
    let mut events = client.subscribe();

    let session = client.login("LC2101", "secret").await.expect("login should succeed");
    assert_eq!(session, Session::new("A2", "R2"));
    assert_eq!(store.get(), Some(Session::new("A2", "R2")));
    assert!(client.is_authenticated());
    assert_eq!(events.try_recv().unwrap(), SessionEvent::LoggedIn);
}

#[tokio::test]
async fn test_login_rejected_with_backend_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "No active account found with the given credentials"})),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::new());
    let client = client_for(&server, store.clone());

    let err = client.login("LC2101", "wrong").await.unwrap_err();
    match err {
        ApiError::Auth(message) => {
            assert_eq!(message, "No active account found with the given credentials")
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(store.get().is_none());
}

#[tokio::test]
async fn test_failed_login_keeps_existing_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "No active account found with the given credentials"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_in_store();
    let client = client_for(&server, store.clone());
    let mut events = client.subscribe();

    let err = client.login("LC2102", "wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "No active account found with the given credentials");
    assert_eq!(store.get(), Some(Session::new("A1", "R1")));
    assert!(client.is_authenticated());
    assert!(events.try_recv().is_err());

    // The login attempt does not carry the current session's token
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_login_replaces_existing_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "A2", "refresh": "R2"})))
        .mount(&server)
        .await;

    let store = signed_in_store();
    let client = client_for(&server, store.clone());

    client.login("LC2102", "secret").await.unwrap();
    assert_eq!(store.get(), Some(Session::new("A2", "R2")));
}

#[tokio::test]
async fn test_login_rejected_without_message_uses_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(MemorySessionStore::new()));
    let err = client.login("LC2101", "wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "Login failed");
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let server = MockServer::start().await;
    let client = client_for(&server, Arc::new(MemorySessionStore::new()));

    let err = client.login("", "secret").await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(ValidationError::MissingField(_))));
    let err = client.login("LC2101", "").await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(ValidationError::MissingField(_))));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_network_failure_is_distinct_and_keeps_session() {
    // Nothing listens on port 1
    let store = signed_in_store();
    let client = ApiClient::new("http://127.0.0.1:1/api", store.clone()).unwrap();
    let mut events = client.subscribe();

    let err = client.list_students().await.unwrap_err();
    assert!(err.is_network());
    assert!(!err.is_auth());
    assert_eq!(store.get(), Some(Session::new("A1", "R1")));
    assert!(events.try_recv().is_err());

    let err = client.login("LC2101", "secret").await.unwrap_err();
    assert!(err.is_network());
}

#[tokio::test]
async fn test_logout_clears_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout/"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Logout successful"})))
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_in_store();
    let client = client_for(&server, store.clone());
    let mut events = client.subscribe();

    client.logout().await;
    assert!(store.get().is_none());
    assert_eq!(events.try_recv().unwrap(), SessionEvent::LoggedOut);
}

#[tokio::test]
async fn test_logout_clears_session_when_backend_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = signed_in_store();
    client_for(&server, store.clone()).logout().await;
    assert!(store.get().is_none());

    let store = signed_in_store();
    ApiClient::new("http://127.0.0.1:1/api", store.clone())
        .unwrap()
        .logout()
        .await;
    assert!(store.get().is_none());
}

#[tokio::test]
async fn test_duplicate_code_rejected_before_network() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/lsc-centers/"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let existing = vec![LscCenter {
        id: 1,
        lsc_number: "LC2101".to_string(),
        lsc_name: "Salem Arts College".to_string(),
        email: "salem@pu.ac.in".to_string(),
        mobile: None,
        address: None,
        is_active: true,
        is_staff: false,
        date_joined: None,
    }];
    let candidate = NewLscCenter {
        lsc_number: "lc2101".to_string(),
        lsc_name: "Another".to_string(),
        email: "another@pu.ac.in".to_string(),
        password: "Secret123".to_string(),
        ..Default::default()
    };

    let client = client_for(&server, signed_in_store());
    let err = client
        .create_lsc_center_checked(&existing, &candidate)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::DuplicateCode(ref code)) if code == "lc2101"
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_change_password_passes_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/change-password/"))
        .and(body_json(json!({"oldPassword": "Old12345", "newPassword": "New12345"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Password changed successfully"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/change-password/"))
        .and(body_json(json!({"oldPassword": "bad", "newPassword": "New12345"})))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "Incorrect old password"})))
        .mount(&server)
        .await;

    let store = signed_in_store();
    let client = client_for(&server, store.clone());

    client
        .change_password("Old12345", "New12345")
        .await
        .expect("change should succeed");

    let err = client.change_password("bad", "New12345").await.unwrap_err();
    assert_eq!(err.to_string(), "Incorrect old password");
    assert_eq!(store.get(), Some(Session::new("A1", "R1")));
}

#[tokio::test]
async fn test_refresh_token_updates_access() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/token/refresh/"))
        .and(body_json(json!({"refresh": "R1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "A3"})))
        .mount(&server)
        .await;

    let store = signed_in_store();
    let client = client_for(&server, store.clone());

    let access = client.refresh_token().await.expect("refresh should succeed");
    assert_eq!(access, "A3");
    assert_eq!(store.get(), Some(Session::new("A3", "R1")));
}

#[tokio::test]
async fn test_refresh_token_without_session() {
    let server = MockServer::start().await;
    let client = client_for(&server, Arc::new(MemorySessionStore::new()));
    assert!(client.refresh_token().await.unwrap_err().is_auth());
}
