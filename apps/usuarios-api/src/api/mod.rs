use axum::{Router, routing::get};

pub mod health;
pub mod usuarios;

/// Domain routes; each sub-router has its state applied
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().merge(usuarios::router(state))
}

/// `/ready` with a real database check
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use database::postgres::PostgresConfig;
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use tower::ServiceExt;

    fn state() -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                database: PostgresConfig::new("postgresql://localhost/usuarios"),
                server: ServerConfig::default(),
                environment: Environment::Development,
                run_migrations: false,
            },
            db: MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        }
    }

    fn app(state: AppState) -> Router {
        axum_helpers::create_router::<crate::openapi::ApiDoc>(routes(&state))
            .merge(axum_helpers::health_router(state.config.app))
            .merge(ready_router(state))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_hola_is_mounted_under_usuarios() {
        let (status, body) = get(app(state()), "/usuarios/hola/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"hola");
    }

    #[tokio::test]
    async fn test_health_reports_crate_name() {
        let (status, body) = get(app(state()), "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["name"], "usuarios_api");
    }

    #[tokio::test]
    async fn test_ready_pings_database() {
        let (status, body) = get(app(state()), "/ready").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["database"], "connected");
    }

    #[tokio::test]
    async fn test_openapi_json_lists_usuarios() {
        let (status, body) = get(app(state()), "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["paths"]["/usuarios/{username}"].is_object());
    }
}
