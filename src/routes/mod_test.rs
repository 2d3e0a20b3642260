use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

use super::*;

// =============================================================
// Helpers
// =============================================================

const SAMPLE_BODY: &str = "%PDF-1.4 test body";

struct PublicDir(PathBuf);

impl PublicDir {
    fn with_sample() -> Self {
        let dir = std::env::temp_dir().join(format!("docpanel-public-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).expect("create temp public dir");
        fs::write(dir.join("c4611_sample_explain.pdf"), SAMPLE_BODY).expect("write sample");
        Self(dir)
    }
}

impl Drop for PublicDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    addr
}

fn config(public: &PublicDir, public_url: &str) -> ServerConfig {
    ServerConfig { port: 0, public_dir: public.0.clone(), public_url: public_url.to_owned() }
}

// =============================================================
// Routes
// =============================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let public = PublicDir::with_sample();
    let addr = serve(public_routes(&config(&public, ""))).await;
    let resp = reqwest::get(format!("http://{addr}/healthz")).await.expect("request");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn sample_pdf_served_under_base_path() {
    let public = PublicDir::with_sample();
    let addr = serve(public_routes(&config(&public, "/static"))).await;
    let resp = reqwest::get(format!("http://{addr}/static/c4611_sample_explain.pdf"))
        .await
        .expect("request");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.expect("body"), SAMPLE_BODY);
}

#[tokio::test]
async fn sample_pdf_served_at_root_without_base_path() {
    let public = PublicDir::with_sample();
    let addr = serve(public_routes(&config(&public, ""))).await;
    let resp = reqwest::get(format!("http://{addr}/c4611_sample_explain.pdf")).await.expect("request");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn missing_public_file_is_not_found() {
    let public = PublicDir::with_sample();
    let addr = serve(public_routes(&config(&public, "/static"))).await;
    let resp = reqwest::get(format!("http://{addr}/static/missing.pdf")).await.expect("request");
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_path_without_viewer_is_not_found() {
    let public = PublicDir::with_sample();
    let addr = serve(public_routes(&config(&public, ""))).await;
    let resp = reqwest::get(format!("http://{addr}/missing.pdf")).await.expect("request");
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

// =============================================================
// Viewer page (SSR)
// =============================================================

async fn get_page(addr: SocketAddr, path: &str) -> (reqwest::StatusCode, String) {
    let resp = reqwest::get(format!("http://{addr}{path}")).await.expect("request");
    let status = resp.status();
    (status, resp.text().await.expect("body"))
}

fn assert_viewer_markup(body: &str) {
    assert!(body.contains("document-viewer"), "missing viewer in {body}");
    assert!(body.contains("button-shape-container"), "missing palette in {body}");
    for kind in ["square", "circle", "triangle"] {
        assert!(body.contains(&format!("shape-button--{kind}")), "missing {kind} button");
    }
}

#[tokio::test]
async fn viewer_page_renders_at_root() {
    let public = PublicDir::with_sample();
    let app = leptos_app(&config(&public, "")).expect("leptos app");
    let addr = serve(app).await;

    let (status, body) = get_page(addr, "/").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_viewer_markup(&body);
    assert!(body.contains("c4611_sample_explain.pdf"));
}

#[tokio::test]
async fn unknown_path_renders_viewer_page() {
    let public = PublicDir::with_sample();
    let addr = serve(leptos_app(&config(&public, "")).expect("leptos app")).await;

    let (status, body) = get_page(addr, "/some/other/route").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_viewer_markup(&body);
}

#[tokio::test]
async fn public_file_wins_over_viewer_at_root() {
    let public = PublicDir::with_sample();
    let addr = serve(leptos_app(&config(&public, "")).expect("leptos app")).await;

    let (status, body) = get_page(addr, "/c4611_sample_explain.pdf").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body, SAMPLE_BODY);
}

#[tokio::test]
async fn viewer_app_with_base_path_serves_all_surfaces() {
    let public = PublicDir::with_sample();
    let addr = serve(leptos_app(&config(&public, "/static")).expect("leptos app")).await;

    let (status, _) = get_page(addr, "/healthz").await;
    assert_eq!(status, reqwest::StatusCode::OK);

    let (status, body) = get_page(addr, "/static/c4611_sample_explain.pdf").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body, SAMPLE_BODY);

    let (status, body) = get_page(addr, "/elsewhere").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_viewer_markup(&body);
}
