//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One axum router serves the whole app: `/healthz`, the WASM/JS/CSS bundle
//! under `/pkg`, the bundled public files (the sample PDF) under the
//! configured base path, and the Leptos SSR viewer page for every other path.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::handler::{Handler, HandlerWithoutStateExt};
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream_with_context};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Health check plus public files under `config.public_url`. Anything else
/// is 404.
pub fn public_routes(config: &ServerConfig) -> Router {
    with_public_files(base_routes(), config, not_found)
}

/// Leptos SSR frontend merged with the public routes.
///
/// Paths that match neither a route nor a public file render the viewer
/// page, so deep links land on the app instead of a bare 404.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let page = render_app_to_stream_with_context(|| {}, {
        let opts = leptos_options.clone();
        move || client::app::shell(opts.clone())
    });

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let router = base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")));

    Ok(with_public_files(router, config, page)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Mount the public directory and send unmatched requests to `fallback`.
///
/// With an empty base path the public directory sits at `/` and `fallback`
/// only runs when no file matches, so files never shadow routes and the
/// fallback never shadows files.
fn with_public_files<H, T>(router: Router, config: &ServerConfig, fallback: H) -> Router
where
    H: Handler<T, ()>,
    T: 'static,
{
    let files = ServeDir::new(&config.public_dir);
    if config.public_url.is_empty() {
        router.fallback_service(files.fallback(fallback.into_service()))
    } else {
        router.nest_service(&config.public_url, files).fallback(fallback)
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
