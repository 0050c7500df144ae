use crate::config::Config;
use crate::error::HubError;
use crate::schema::HubSchema;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    http::{HeaderValue, Method, header},
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::{
    Expiry, Session, SessionManagerLayer, SessionStore, cookie::SameSite,
};

pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(Clone)]
pub struct HubState {
    pub schema: HubSchema,
}

impl HubState {
    pub fn new(schema: HubSchema) -> Self {
        Self { schema }
    }
}

/// Assemble the HTTP surface: GraphQL + GraphiQL on one path, wrapped in the
/// session manager, CORS, and request tracing.
pub fn hub_router<S>(state: HubState, session_store: S, cfg: &Config) -> Result<Router, HubError>
where
    S: SessionStore + Clone,
{
    let session_layer = session_layer(session_store, cfg);
    let cors = cors_layer(&cfg.cors.allowed_origin)?;

    Ok(Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .with_state(state)
        .layer(session_layer)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// `qid` cookie: long-lived, HttpOnly, SameSite=Lax, Secure only in production.
pub fn session_layer<S>(store: S, cfg: &Config) -> SessionManagerLayer<S>
where
    S: SessionStore + Clone,
{
    SessionManagerLayer::new(store)
        .with_name(cfg.session.cookie_name.clone())
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_secure(cfg.is_production())
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            cfg.session.max_age_days,
        )))
}

fn cors_layer(origin: &str) -> Result<CorsLayer, HubError> {
    let origin: HeaderValue = origin.parse()?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

async fn graphql_handler(
    State(state): State<HubState>,
    session: Session,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state
        .schema
        .execute(req.into_inner().data(session))
        .await
        .into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
