mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use common::memory_pool;
use linkhub::config::{Config, Environment};
use linkhub::resolvers::WritePolicy;
use linkhub::router::{HubState, hub_router};
use serde_json::{Value, json};
use tower::ServiceExt;
use tower_sessions::MemoryStore;

async fn app(cfg: &Config) -> Router {
    let pool = memory_pool().await;
    let schema = linkhub::build_schema(pool, WritePolicy::from(cfg));
    hub_router(HubState::new(schema), MemoryStore::default(), cfg).expect("router builds")
}

fn graphql_request(query: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder
        .body(Body::from(json!({ "query": query }).to_string()))
        .expect("failed to build request")
}

async fn json_body(resp: axum::response::Response) -> Value {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&body).expect("response body was not json")
}

const TEN_YEARS_SECS: i64 = 3650 * 24 * 60 * 60;

/// The cookie's Max-Age; tower-sessions derives it from the expiry at
/// response time, so it can trail the configured value by a second.
fn max_age(set_cookie: &str) -> i64 {
    set_cookie
        .split(';')
        .filter_map(|attr| attr.trim().strip_prefix("Max-Age="))
        .next()
        .expect("Max-Age attribute present")
        .parse()
        .expect("Max-Age is an integer")
}

const REGISTER_ALICE: &str =
    r#"mutation { register(options: { username: "alice", password: "secret" }) { user { id } } }"#;

#[tokio::test]
async fn register_sets_qid_cookie_that_identifies_later_requests() {
    let app = app(&Config::default()).await;

    let resp = app
        .clone()
        .oneshot(graphql_request(REGISTER_ALICE, None))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("session cookie set")
        .to_string();
    assert!(set_cookie.starts_with("qid="), "{set_cookie}");
    assert!(set_cookie.contains("HttpOnly"), "{set_cookie}");
    assert!(set_cookie.contains("SameSite=Lax"), "{set_cookie}");
    assert!(
        (TEN_YEARS_SECS - 5..=TEN_YEARS_SECS).contains(&max_age(&set_cookie)),
        "{set_cookie}"
    );
    assert!(!set_cookie.contains("Secure"), "{set_cookie}");

    let cookie = set_cookie.split(';').next().unwrap();
    let resp = app
        .oneshot(graphql_request("{ me { username } }", Some(cookie)))
        .await
        .expect("request failed");
    let body = json_body(resp).await;
    assert_eq!(body["data"]["me"]["username"], "alice");
}

#[tokio::test]
async fn production_cookie_is_secure() {
    let mut cfg = Config::default();
    cfg.basic.environment = Environment::Production;
    let app = app(&cfg).await;

    let resp = app
        .oneshot(graphql_request(REGISTER_ALICE, None))
        .await
        .expect("request failed");

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("session cookie set");
    assert!(set_cookie.contains("Secure"), "{set_cookie}");
}

#[tokio::test]
async fn anonymous_read_does_not_create_a_session() {
    let app = app(&Config::default()).await;

    let resp = app
        .oneshot(graphql_request("{ me { id } posts { id } }", None))
        .await
        .expect("request failed");

    assert!(resp.headers().get(header::SET_COOKIE).is_none());
    let body = json_body(resp).await;
    assert!(body["data"]["me"].is_null());
}

#[tokio::test]
async fn cors_allows_the_configured_origin_with_credentials() {
    let app = app(&Config::default()).await;

    let mut req = graphql_request("{ hello }", None);
    req.headers_mut()
        .insert(header::ORIGIN, "http://localhost:3000".parse().unwrap());
    let resp = app.oneshot(req).await.expect("request failed");

    let headers = resp.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn graphiql_is_served_on_get() {
    let app = app(&Config::default()).await;

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/graphql")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let html = std::str::from_utf8(&body).expect("html is utf-8");
    assert!(html.to_lowercase().contains("graphiql"));
}

#[tokio::test]
async fn invalid_cors_origin_is_rejected() {
    let mut cfg = Config::default();
    cfg.cors.allowed_origin = "bad\norigin".to_string();
    let pool = memory_pool().await;
    let schema = linkhub::build_schema(pool, WritePolicy::default());
    let result = hub_router(HubState::new(schema), MemoryStore::default(), &cfg);
    assert!(matches!(result, Err(linkhub::HubError::InvalidHeader(_))));
}
