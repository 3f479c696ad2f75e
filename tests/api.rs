//! End-to-end API tests against a live PostgreSQL server.
//!
//! Run with a server available:
//!   DATABASE_URL=postgres://localhost/petcover_test cargo test -- --ignored

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use petcover::{api_router, apply_migrations, ensure_database_exists, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

async fn test_app() -> Router {
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost/petcover_test".into());
    ensure_database_exists(&database_url).await.expect("create test database");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .expect("connect to test database");
    apply_migrations(&pool).await.expect("apply migrations");
    api_router(AppState { pool })
}

fn unique_email(prefix: &str) -> String {
    format!("{}-{}@rainwalk.io", prefix, Uuid::new_v4().simple())
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&v).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn registration(email: &str) -> Value {
    json!({
        "email": email,
        "password": "testpass",
        "name": "Name",
        "phone_number": "1234567899",
        "address_1": "123 Main st",
        "address_2": "#123",
        "city": "Washington, D.C.",
        "zipcode": "12345",
        "state": "DC",
    })
}

async fn register_and_login(app: &Router, email: &str) -> String {
    let (status, _) = send(app, "POST", "/user/create", None, Some(registration(email))).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = send(
        app,
        "POST",
        "/user/token",
        None,
        Some(json!({"email": email, "password": "testpass"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().expect("token in response").to_string()
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn create_user_returns_profile_without_password() {
    let app = test_app().await;
    let email = unique_email("create");
    let (status, body) = send(&app, "POST", "/user/create", None, Some(registration(&email))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], email);
    assert_eq!(body["name"], "Name");
    assert_eq!(body["zipcode"], "12345");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn stored_email_is_lower_cased() {
    let app = test_app().await;
    let email = unique_email("mixed");
    let mixed = email.to_uppercase();
    let (status, body) = send(&app, "POST", "/user/create", None, Some(registration(&mixed))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], email);

    // Login uses the normalized form regardless of the case presented.
    let (status, body) = send(
        &app,
        "POST",
        "/user/token",
        None,
        Some(json!({"email": mixed, "password": "testpass"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn duplicate_email_is_rejected() {
    let app = test_app().await;
    let email = unique_email("dup");
    let (status, _) = send(&app, "POST", "/user/create", None, Some(registration(&email))).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = send(&app, "POST", "/user/create", None, Some(registration(&email))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn short_password_is_rejected_and_nothing_persists() {
    let app = test_app().await;
    let email = unique_email("short");
    let mut payload = registration(&email);
    payload["password"] = json!("pw");
    let (status, _) = send(&app, "POST", "/user/create", None, Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The email is still free: a valid registration goes through.
    let (status, _) = send(&app, "POST", "/user/create", None, Some(registration(&email))).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn token_rejected_for_bad_credentials() {
    let app = test_app().await;
    let email = unique_email("badcred");
    let (status, _) = send(&app, "POST", "/user/create", None, Some(registration(&email))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        "POST",
        "/user/token",
        None,
        Some(json!({"email": email, "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("token").is_none());

    let (status, body) = send(
        &app,
        "POST",
        "/user/token",
        None,
        Some(json!({"email": unique_email("ghost"), "password": "testpass"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("token").is_none());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn me_requires_a_valid_token() {
    let app = test_app().await;
    let (status, _) = send(&app, "GET", "/user/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = send(&app, "GET", "/user/me", Some("not-a-token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn post_to_me_is_not_allowed() {
    let app = test_app().await;
    let email = unique_email("postme");
    let token = register_and_login(&app, &email).await;
    let (status, _) = send(&app, "POST", "/user/me", Some(&token), Some(json!({}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn patch_me_merges_fields_and_rehashes_password() {
    let app = test_app().await;
    let email = unique_email("patchme");
    let token = register_and_login(&app, &email).await;

    let (status, body) = send(
        &app,
        "PATCH",
        "/user/me",
        Some(&token),
        Some(json!({"name": "new name", "password": "newpassword12345"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "new name");
    // Untouched fields survive the merge.
    assert_eq!(body["phone_number"], "1234567899");

    let (status, _) = send(
        &app,
        "POST",
        "/user/token",
        None,
        Some(json!({"email": email, "password": "newpassword12345"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn pets_are_scoped_to_their_owner() {
    let app = test_app().await;
    let token_a = register_and_login(&app, &unique_email("owner-a")).await;
    let token_b = register_and_login(&app, &unique_email("owner-b")).await;

    let (status, pet_a) = send(
        &app,
        "POST",
        "/pet/pets",
        Some(&token_a),
        Some(json!({"pet_name": "Rex", "pet_species": 1, "pet_breed": 1, "pet_age": 9})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(
        &app,
        "POST",
        "/pet/pets",
        Some(&token_b),
        Some(json!({"pet_name": "Whiskers", "pet_age": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "GET", "/pet/pets", Some(&token_a), None).await;
    assert_eq!(status, StatusCode::OK);
    let pets = body.as_array().unwrap();
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0]["pet_name"], "Rex");

    let (status, body) = send(&app, "GET", "/pet/pets", Some(&token_b), None).await;
    assert_eq!(status, StatusCode::OK);
    let pets = body.as_array().unwrap();
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0]["pet_name"], "Whiskers");

    // Another owner's pet by id is a 404, not a 403.
    let pet_a_id = pet_a["id"].as_i64().unwrap();
    let (status, _) = send(
        &app,
        "GET",
        &format!("/pet/pets/{}", pet_a_id),
        Some(&token_b),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn pet_creation_validates_species_breed_and_age() {
    let app = test_app().await;
    let token = register_and_login(&app, &unique_email("petval")).await;

    let (status, _) = send(
        &app,
        "POST",
        "/pet/pets",
        Some(&token),
        Some(json!({"pet_name": "X", "pet_species": 9, "pet_age": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/pet/pets",
        Some(&token),
        Some(json!({"pet_name": "X", "pet_breed": 5, "pet_age": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/pet/pets",
        Some(&token),
        Some(json!({"pet_name": "X", "pet_age": -1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Species and breed default to cat/bulldog when omitted.
    let (status, body) = send(
        &app,
        "POST",
        "/pet/pets",
        Some(&token),
        Some(json!({"pet_name": "Default", "pet_age": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["pet_species"], 0);
    assert_eq!(body["pet_breed"], 0);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn pet_update_and_delete_stay_in_scope() {
    let app = test_app().await;
    let token = register_and_login(&app, &unique_email("petlife")).await;
    let intruder = register_and_login(&app, &unique_email("intruder")).await;

    let (_, pet) = send(
        &app,
        "POST",
        "/pet/pets",
        Some(&token),
        Some(json!({"pet_name": "Rex", "pet_age": 2})),
    )
    .await;
    let id = pet["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/pet/pets/{}", id),
        Some(&token),
        Some(json!({"pet_age": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pet_age"], 3);
    assert_eq!(body["pet_name"], "Rex");

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/pet/pets/{}", id),
        Some(&intruder),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &format!("/pet/pets/{}", id), Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "GET", &format!("/pet/pets/{}", id), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn policy_listing_requires_auth_and_orders_by_number() {
    let app = test_app().await;
    let (status, _) = send(&app, "GET", "/pet/policies", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = register_and_login(&app, &unique_email("policies")).await;
    let suffix = Uuid::new_v4().simple().to_string();
    for number in ["PA-54321", "PA-12345"] {
        let (status, _) = send(
            &app,
            "POST",
            "/pet/policies",
            Some(&token),
            Some(json!({"policy_number": format!("{}-{}", number, suffix), "policy_premium": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, "GET", "/pet/policies", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let numbers: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["policy_number"].as_str().unwrap())
        .collect();
    assert_eq!(numbers.len(), 2);
    assert!(numbers[0] < numbers[1]);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn invalid_premium_is_rejected_and_nothing_persists() {
    let app = test_app().await;
    let token = register_and_login(&app, &unique_email("premium")).await;
    let (status, body) = send(
        &app,
        "POST",
        "/pet/policies",
        Some(&token),
        Some(json!({"policy_premium": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "validation_error");

    let (_, body) = send(&app, "GET", "/pet/policies", Some(&token), None).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn policy_number_is_generated_when_absent() {
    let app = test_app().await;
    let token = register_and_login(&app, &unique_email("autonum")).await;
    let (status, body) = send(
        &app,
        "POST",
        "/pet/policies",
        Some(&token),
        Some(json!({"policy_premium": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let number = body["policy_number"].as_str().unwrap();
    assert!(number.starts_with("PA-"));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn policies_filter_by_quote_reference() {
    let app = test_app().await;
    let token = register_and_login(&app, &unique_email("byquote")).await;

    let (status, quote) = send(&app, "POST", "/quate/quates", None, Some(json!({}))).await;
    assert_eq!(status, StatusCode::CREATED);
    let quate_id = quote["quate_id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "POST",
        "/pet/policies",
        Some(&token),
        Some(json!({"policy_premium": 0, "policy_quate_number": quate_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(
        &app,
        "POST",
        "/pet/policies",
        Some(&token),
        Some(json!({"policy_premium": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        "GET",
        &format!("/pet/policies?policy_quate_number={}", quate_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let filtered = body.as_array().unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["policy_quate_number"], quate_id.as_str());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn policy_with_unknown_quote_is_rejected() {
    let app = test_app().await;
    let token = register_and_login(&app, &unique_email("noquote")).await;
    let (status, body) = send(
        &app,
        "POST",
        "/pet/policies",
        Some(&token),
        Some(json!({"policy_premium": 0, "policy_quate_number": format!("missing-{}", Uuid::new_v4())})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn duplicate_quote_id_is_rejected_on_the_second_attempt() {
    let app = test_app().await;
    let quate_id = Uuid::new_v4().to_string();
    let (status, _) = send(
        &app,
        "POST",
        "/quate/quates",
        None,
        Some(json!({"quate_id": quate_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        "POST",
        "/quate/quates",
        None,
        Some(json!({"quate_id": quate_id})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn quote_defaults_and_retrieval() {
    let app = test_app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/quate/quates",
        None,
        Some(json!({"quate_base_rate": 25.5, "quate_wellness": true})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let quate_id = body["quate_id"].as_str().unwrap().to_string();
    assert_eq!(body["quate_base_rate"], 25.5);
    assert_eq!(body["quate_geo_factor"], 1.0);
    assert_eq!(body["quate_wellness"], true);
    assert_eq!(body["quate_exam_fee"], false);

    let (status, body) = send(&app, "GET", &format!("/quate/quates/{}", quate_id), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quate_id"], quate_id.as_str());

    let (status, _) = send(&app, "GET", "/quate/quates/does-not-exist", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn health_and_ready_report_ok() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    let (status, body) = send(&app, "GET", "/ready", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");
}
