mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Initialize the completion client (non-fatal: when unconfigured the chat
    // endpoint answers with its generic failure payload and the rest of the
    // site still serves).
    let llm: Option<Arc<dyn llm::ChatCompletion>> = match llm::client_from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "completion client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "completion client not configured — chat replies disabled");
            None
        }
    };

    let state = state::AppState::new(llm);

    let app = routes::app(state).expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "baho server listening");
    axum::serve(listener, app).await.expect("server failed");
}
