//! Shared harness for API integration tests: router construction,
//! request helpers, and database seeding.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use cicluz_api::auth::jwt::{generate_token, JwtConfig};
use cicluz_api::config::ServerConfig;
use cicluz_api::router::build_app_router;
use cicluz_api::state::AppState;
use cicluz_core::content::{ItemStatus, ItemType, Payload};
use cicluz_core::types::DbId;
use cicluz_db::models::answer_option::CreateAnswerOption;
use cicluz_db::models::content_item::CreateContentItem;
use cicluz_db::models::question::CreateQuestion;
use cicluz_db::models::track::CreateTrack;
use cicluz_db::models::user::CreateUser;
use cicluz_db::repositories::{ContentItemRepo, QuestionRepo, TrackRepo, UserRepo};

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool. Mirrors production via `build_app_router`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

fn request(
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(request(Method::GET, path, None, None))
        .await
        .unwrap()
}

pub async fn get_auth(app: Router, path: &str, token: &str) -> Response {
    app.oneshot(request(Method::GET, path, Some(token), None))
        .await
        .unwrap()
}

pub async fn post_json(
    app: Router,
    path: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response {
    app.oneshot(request(Method::POST, path, token, Some(body)))
        .await
        .unwrap()
}

pub async fn put_json(
    app: Router,
    path: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response {
    app.oneshot(request(Method::PUT, path, token, Some(body)))
        .await
        .unwrap()
}

pub async fn delete_auth(app: Router, path: &str, token: &str) -> Response {
    app.oneshot(request(Method::DELETE, path, Some(token), None))
        .await
        .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Create a user with the given role and mint a token for them.
pub async fn seed_user(pool: &PgPool, email: &str, role: &str) -> (DbId, String) {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            display_name: "Test User".to_string(),
            role: Some(role.to_string()),
        },
    )
    .await
    .expect("seed user");
    let token = generate_token(user.id, role, &test_config().jwt).expect("mint token");
    (user.id, token)
}

pub async fn seed_track(pool: &PgPool, name: &str, start_content_id: Option<DbId>) -> DbId {
    TrackRepo::create(
        pool,
        &CreateTrack {
            name: name.to_string(),
            description: None,
            category: "wellbeing".to_string(),
            thumbnail_url: None,
            display_order: None,
            start_content_id,
        },
    )
    .await
    .expect("seed track")
    .id
}

pub async fn seed_item(
    pool: &PgPool,
    track_id: Option<DbId>,
    title: &str,
    status: ItemStatus,
    next_content_id: Option<DbId>,
    display_order: i32,
) -> DbId {
    ContentItemRepo::create(
        pool,
        &CreateContentItem {
            track_id,
            title: title.to_string(),
            description: None,
            item_type: ItemType::Text,
            status: Some(status),
            payload: Payload::Text {
                body: format!("body of {title}"),
            },
            next_content_id,
            display_order: Some(display_order),
        },
    )
    .await
    .expect("seed item")
    .id
}

/// Attach one question with the given `(label, next_content_id)` options
/// to an item, returning `(question_id, option_ids)`.
pub async fn seed_question(
    pool: &PgPool,
    item_id: DbId,
    prompt: &str,
    options: &[(&str, Option<DbId>)],
) -> (DbId, Vec<DbId>) {
    let questions = QuestionRepo::replace_for_item(
        pool,
        item_id,
        &[CreateQuestion {
            prompt: prompt.to_string(),
            question_type: None,
            display_order: None,
            required: None,
            options: options
                .iter()
                .map(|(label, next)| CreateAnswerOption {
                    label: label.to_string(),
                    value: None,
                    next_content_id: *next,
                    display_order: None,
                })
                .collect(),
        }],
    )
    .await
    .expect("seed question");
    let question = &questions[0];
    (
        question.question.id,
        question.options.iter().map(|o| o.id).collect(),
    )
}
