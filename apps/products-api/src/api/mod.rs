//! API routes module

pub mod health;

use axum::Router;
use domain_products::{PgProductRepository, ProductService, entity, handlers};

use crate::state::AppState;

/// Routes nested under `/api` by `create_router`
pub fn routes(state: &AppState) -> Router {
    let service = ProductService::new(PgProductRepository::new(state.db.clone()));

    Router::new().nest(entity::Model::URL, handlers::router(service))
}

/// `/ready`, mounted outside `/api`
pub fn ready_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::openapi::ApiDoc;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::build_router;
    use core_config::{app_info, server::ServerConfig};
    use database::postgres::{DatabaseConnection, PostgresConfig};
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use serde_json::Value;
    use std::collections::BTreeMap;
    use std::time::Duration;
    use tower::ServiceExt;

    fn state(db: DatabaseConnection) -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                database: PostgresConfig::new("postgresql://localhost/inventory"),
                server: ServerConfig::default(),
                environment: Environment::Development,
                run_migrations: false,
            },
            db,
        }
    }

    fn app(state: AppState) -> Router {
        build_router::<ApiDoc>(routes(&state), Vec::new(), Duration::from_secs(5))
            .merge(ready_router(state))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_products_are_served_under_api_products() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![entity::Model {
                id: 1,
                name: "Bolt".to_string(),
                description: None,
                stock_quantity: 5,
                low_stock_threshold: 10,
            }]])
            .into_connection();

        let (status, json) = get(app(state(db)), "/api/products").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json[0]["name"], "Bolt");
        assert_eq!(json[0]["stockQuantity"], 5);
    }

    #[tokio::test]
    async fn test_ready_reports_connected_database() {
        let row: BTreeMap<&str, sea_orm::Value> = BTreeMap::from([("?column?", 1i32.into())]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        let (status, json) = get(app(state(db)), "/ready").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ready");
        assert_eq!(json["database"], "connected");
    }

    #[tokio::test]
    async fn test_ready_returns_503_when_database_fails() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".into())])
            .into_connection();

        let (status, json) = get(app(state(db)), "/ready").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["status"], "not ready");
        assert_eq!(json["database"], "disconnected");
    }
}
