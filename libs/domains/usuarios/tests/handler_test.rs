//! Handler tests for the usuarios domain
//!
//! Exercise the `/usuarios` routes end to end (JSON in, status and JSON out)
//! against the in-memory store, so no database is needed.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_usuarios::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(UserService::new(InMemoryUserRepository::new()))
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn usuario_prueba() -> Value {
    json!({
        "username": "usuarioprueba",
        "password": "123456",
        "nombre": "nombreprueba",
        "apellido": "apellidoprueba",
        "telefono": "1234567890",
        "perfil": "fotoprueba.png"
    })
}

fn post_json(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/usuarios/")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_create_user_returns_201() {
    let response = app().oneshot(post_json(&usuario_prueba())).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["username"], "usuarioprueba");
    assert_eq!(body["enabled"], true);
    assert_eq!(body["roles"], json!([{"id": 1, "nombre": "NORMAL"}]));
    assert!(body["id"].is_i64());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_create_user_with_only_username_returns_201() {
    let app = app();
    let response = app
        .clone()
        .oneshot(post_json(&json!({"username": "solo"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["username"], "solo");
    assert_eq!(body["nombre"], Value::Null);
    assert_eq!(body["enabled"], true);

    let response = app.oneshot(request("GET", "/usuarios/solo")).await.unwrap();
    let user: User = json_body(response.into_body()).await;
    assert_eq!(user.password, None);
    assert_eq!(user.roles, vec![Role::normal()]);
}

#[tokio::test]
async fn test_get_user_after_create_returns_200() {
    let app = app();
    app.clone().oneshot(post_json(&usuario_prueba())).await.unwrap();

    let response = app
        .oneshot(request("GET", "/usuarios/usuarioprueba"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let user: User = json_body(response.into_body()).await;
    assert_eq!(user.username, "usuarioprueba");
    assert_eq!(user.nombre.as_deref(), Some("nombreprueba"));
}

#[tokio::test]
async fn test_delete_user_after_create_returns_204() {
    let app = app();
    app.clone().oneshot(post_json(&usuario_prueba())).await.unwrap();

    let response = app
        .clone()
        .oneshot(request("DELETE", "/usuarios/usuarioprueba"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(request("GET", "/usuarios/usuarioprueba"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert!(body.is_null());
}

#[tokio::test]
async fn test_duplicate_username_returns_409() {
    let app = app();
    let first = app.clone().oneshot(post_json(&usuario_prueba())).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);
    let first: User = json_body(first.into_body()).await;

    let mut second = usuario_prueba();
    second["nombre"] = json!("otro");
    let response = app.clone().oneshot(post_json(&second)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "CONFLICT");

    // The original record is untouched
    let response = app
        .oneshot(request("GET", "/usuarios/usuarioprueba"))
        .await
        .unwrap();
    let user: User = json_body(response.into_body()).await;
    assert_eq!(user.id, first.id);
    assert_eq!(user.nombre.as_deref(), Some("nombreprueba"));
}

#[tokio::test]
async fn test_get_missing_user_returns_null() {
    let response = app()
        .oneshot(request("GET", "/usuarios/nadie"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert!(body.is_null());
}

#[tokio::test]
async fn test_get_blank_username_returns_400() {
    let response = app()
        .oneshot(request("GET", "/usuarios/%20%20"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_missing_user_returns_404() {
    let response = app()
        .oneshot(request("DELETE", "/usuarios/nadie"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_blank_username_returns_400() {
    let mut body = usuario_prueba();
    body["username"] = json!("   ");

    let response = app().oneshot(post_json(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["username"].is_array());
}

#[tokio::test]
async fn test_create_malformed_json_returns_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/usuarios/")
        .header("content-type", "application/json")
        .body(Body::from("{\"username\": "))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_accepts_enable_alias() {
    let mut body = usuario_prueba();
    body["enable"] = json!(false);

    let response = app().oneshot(post_json(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let user: User = json_body(response.into_body()).await;
    assert!(!user.enabled);
}

#[tokio::test]
async fn test_hola_returns_greeting() {
    let response = app()
        .oneshot(request("GET", "/usuarios/hola/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"hola");
}
