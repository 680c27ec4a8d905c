//! Web server module for Hearth.
//!
//! Builds the axum `Router` binding the home route and serves it over HTTP.
//! The router is exposed separately from `run` so tests can drive it with an
//! in-process client instead of a real socket.
//!
use axum::{Router, response::Html, routing::get};
use tokio::net::TcpListener;

use crate::{config::CONFIG, html::INDEX_PAGE};

/// Build the application router with the home route bound
pub fn app() -> Router {
    Router::new().route("/", get(index_page))
}

/// Start the web server on the configured port
pub async fn run() {
    let addr = format!("0.0.0.0:{}", CONFIG.web_port);
    let listener = TcpListener::bind(&addr).await.unwrap();

    println!("🌐 Hearth home page at http://localhost:{}/", CONFIG.web_port);

    axum::serve(listener, app()).await.unwrap();
}

/// Display home page
async fn index_page() -> Html<&'static str> {
    Html(INDEX_PAGE)
}
