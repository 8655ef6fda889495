//! API integration tests
//!
//! Normalization contract and typed surface against a mock backend.

use std::sync::Arc;

use mockito::{Matcher, Server};
use serde_json::json;

use libris_client::{
    ApiError, ApiResponse, ClientConfig, LibrisClient, MemoryTokenStore, TokenStore,
    API_REFRESH_TOKEN_KEY, API_TOKEN_KEY,
};

fn client_with(server: &Server, store: Arc<dyn TokenStore>) -> LibrisClient {
    let mut config = ClientConfig::default();
    config.api.base_url = server.url();
    LibrisClient::with_store(config, store, None).expect("failed to build client")
}

fn authed_store() -> Arc<dyn TokenStore> {
    let store = MemoryTokenStore::new();
    store.set(API_TOKEN_KEY, "token-1");
    Arc::new(store)
}

#[tokio::test]
async fn list_books_decodes_catalog_payload() {
    //* Given
    let mut server = Server::new_async().await;
    let books = server
        .mock("GET", "/books")
        .match_header("authorization", "Bearer token-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": true,
                "books": [{
                    "_id": "b1",
                    "title": "The Left Hand of Darkness",
                    "author": "Ursula K. Le Guin",
                    "category_id": "c1",
                    "quantity_total": 3,
                    "quantity_available": 2,
                    "status": "available",
                    "is_hidden": false,
                    "createdAt": "2025-03-01T09:00:00Z",
                    "updatedAt": "2025-03-05T10:30:00Z"
                }]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = client_with(&server, authed_store());

    //* When
    let result = client.books().list().await.expect("list should succeed");

    //* Then
    books.assert_async().await;
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "b1");
    assert_eq!(result[0].author, "Ursula K. Le Guin");
    assert_eq!(result[0].quantity_available, 2);
}

#[tokio::test]
async fn bad_request_surfaces_server_message() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/categories")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":false,"message":"Category already exists"}"#)
        .create_async()
        .await;

    let client = client_with(&server, authed_store());
    let result = client
        .categories()
        .create(&libris_client::models::category::CreateCategory {
            name: "Fiction".into(),
        })
        .await;

    match result {
        Err(ApiError::Validation(failure)) => {
            assert_eq!(failure.code, "400");
            assert_eq!(failure.message, "Category already exists");
            assert!(!failure.success);
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[tokio::test]
async fn bad_request_without_message_gets_fallback() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/books")
        .with_status(400)
        .with_body("not even json")
        .create_async()
        .await;

    let client = client_with(&server, authed_store());
    let result = client.books().list().await;

    match result {
        Err(ApiError::Validation(failure)) => assert_eq!(failure.message, "Request failed."),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_is_normalized_with_status_code() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/fines")
        .with_status(503)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Database unavailable"}"#)
        .create_async()
        .await;

    let client = client_with(&server, authed_store());
    let result = client.fines().list().await;

    match result {
        Err(ApiError::Server(failure)) => {
            assert_eq!(failure.code, "503");
            assert_eq!(failure.message, "Database unavailable");
        }
        other => panic!("expected server failure, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_without_message_gets_fallback() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/fines")
        .with_status(500)
        .with_body("")
        .create_async()
        .await;

    let client = client_with(&server, authed_store());
    let result = client.fines().list().await;

    match result {
        Err(ApiError::Server(failure)) => {
            assert_eq!(failure.code, "500");
            assert_eq!(failure.message, "Internal Server Error");
        }
        other => panic!("expected server failure, got {other:?}"),
    }
}

#[tokio::test]
async fn success_false_on_200_rejects_with_the_body() {
    //* Given: HTTP success carrying an application-level failure
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/books")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":false,"message":"Quota exceeded"}"#)
        .create_async()
        .await;

    let client = client_with(&server, authed_store());
    let result = client.books().list().await;

    //* Then: rejected, and the handler sees the same envelope a success
    //* would have produced
    match result {
        Err(ApiError::Rejected(envelope)) => {
            assert_eq!(envelope.message, "Success");
            assert_eq!(envelope.data["message"], "Quota exceeded");
            assert_eq!(envelope.data["success"], false);
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn unhandled_status_passes_the_raw_response_through() {
    let mut server = Server::new_async().await;
    server
        .mock("DELETE", "/books/b1")
        .with_status(204)
        .create_async()
        .await;

    let client = client_with(&server, authed_store());
    let result = client
        .http()
        .request::<()>(
            reqwest::Method::DELETE,
            "books/b1",
            None,
            Default::default(),
        )
        .await
        .expect("request should not error");

    match result {
        ApiResponse::Raw(response) => assert_eq!(response.status().as_u16(), 204),
        ApiResponse::Success(envelope) => panic!("expected passthrough, got {envelope:?}"),
    }
}

#[tokio::test]
async fn identical_requests_reuse_the_same_authorization_header() {
    let mut server = Server::new_async().await;
    let books = server
        .mock("GET", "/books")
        .match_header("authorization", "Bearer token-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"books":[]}"#)
        .expect(2)
        .create_async()
        .await;

    let client = client_with(&server, authed_store());
    client.books().list().await.expect("first call");
    client.books().list().await.expect("second call");

    books.assert_async().await;
}

#[tokio::test]
async fn requests_without_stored_token_carry_no_authorization() {
    let mut server = Server::new_async().await;
    let books = server
        .mock("GET", "/books")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"books":[]}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_with(&server, Arc::new(MemoryTokenStore::new()));
    client.books().list().await.expect("anonymous call");

    books.assert_async().await;
}

#[tokio::test]
async fn login_persists_the_token_pair() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/auth/login")
        .match_body(Matcher::Json(json!({
            "email": "reader@example.com",
            "password": "secret",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": true,
                "accessToken": "access-1",
                "refreshToken": "refresh-1",
                "user": {
                    "_id": "u1",
                    "full_name": "Reader",
                    "email": "reader@example.com",
                    "role": "member"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
    let client = client_with(&server, store.clone());

    let session = client
        .auth()
        .login(&libris_client::models::auth::LoginRequest {
            email: "reader@example.com".into(),
            password: "secret".into(),
        })
        .await
        .expect("login should succeed");

    assert_eq!(session.access_token, "access-1");
    assert_eq!(session.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
    assert_eq!(store.get(API_TOKEN_KEY).as_deref(), Some("access-1"));
    assert_eq!(store.get(API_REFRESH_TOKEN_KEY).as_deref(), Some("refresh-1"));
}

#[tokio::test]
async fn logout_clears_tokens_even_when_the_server_call_fails() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/auth/logout")
        .with_status(500)
        .with_body(r#"{"message":"session store down"}"#)
        .create_async()
        .await;

    let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
    store.set(API_TOKEN_KEY, "access-1");
    store.set(API_REFRESH_TOKEN_KEY, "refresh-1");
    let client = client_with(&server, store.clone());

    let result = client.auth().logout().await;

    assert!(result.is_err(), "server failure should surface");
    assert!(store.get(API_TOKEN_KEY).is_none());
    assert!(store.get(API_REFRESH_TOKEN_KEY).is_none());
}

#[tokio::test]
async fn client_side_validation_never_reaches_the_wire() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/books")
        .expect(0)
        .create_async()
        .await;

    let client = client_with(&server, authed_store());
    let result = client
        .books()
        .create(&libris_client::models::book::CreateBook {
            title: String::new(),
            author: "Someone".into(),
            category_id: "c1".into(),
            quantity_total: 1,
            description: None,
            image_url: None,
        })
        .await;

    create.assert_async().await;
    match result {
        Err(ApiError::Validation(failure)) => {
            assert_eq!(failure.message, "Title cannot be empty");
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[tokio::test]
async fn payload_shape_mismatch_is_a_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/books")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"books":"not-an-array"}"#)
        .create_async()
        .await;

    let client = client_with(&server, authed_store());
    let result = client.books().list().await;

    assert!(
        matches!(result, Err(ApiError::Decode(_))),
        "expected decode error, got {result:?}"
    );
}
