use std::io;

use axum::{
    http::{HeaderValue, Request},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Settings, store::LazyStore};

mod error;
mod health;
pub mod waitlist;

#[derive(Clone)]
pub struct AppState {
    store: LazyStore,
}

fn app_router() -> Router<AppState> {
    health::router().merge(waitlist::router())
}

/// `*` allows any origin. Credentials forbid a literal wildcard, so the
/// request's own origin is echoed back instead.
fn allow_origin(allowed_origins: &[String]) -> AllowOrigin {
    if allowed_origins.iter().any(|origin| origin == "*") {
        return AllowOrigin::mirror_request();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid allowed origin");
                None
            }
        })
        .collect();
    AllowOrigin::list(origins)
}

/// Allows the configured origins with credentials, echoing back whatever
/// method and headers the preflight asks for.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allow_origin(allowed_origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

pub struct App {
    listener: TcpListener,
    store: LazyStore,
    allowed_origins: Vec<String>,
}

impl App {
    pub async fn with(config: &Settings) -> Result<Self, io::Error> {
        let listener = TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

        Ok(Self {
            listener,
            store: LazyStore::new(config.store.clone()),
            allowed_origins: config.allowed_origins(),
        })
    }

    pub fn port(&self) -> Result<u16, io::Error> {
        Ok(self.listener.local_addr()?.port())
    }

    pub async fn serve(self) -> Result<(), io::Error> {
        let app = app_router()
            .with_state(AppState { store: self.store })
            .layer(cors_layer(&self.allowed_origins))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                    let id = uuid::Uuid::new_v4();
                    tracing::info_span!(
                        "request",
                        method = ?request.method(),
                        uri = ?request.uri(),
                        %id,
                    )
                }),
            );

        axum::serve(self.listener, app.into_make_service()).await
    }
}
