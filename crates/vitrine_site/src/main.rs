//! Vitrine marketing site server
//!
//! Serves the static home, privacy, and support pages, handles the
//! support form by building a `mailto:` link, and answers the well-known
//! `/app-ads.txt` path with a fixed plain-text body.

use std::net::SocketAddr;

use axum::{
    extract::Form,
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use clap::Parser;
use tracing::{info, warn};
use vitrine_contact::{InquiryForm, SubmitOutcome, SUPPORT_ADDRESS};

mod pages;
mod well_known;

#[derive(Debug, Parser)]
#[command(name = "vitrine_site", about = "Marketing site for the Vitrine mobile app")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!(addr = %args.bind, "serving site");
    axum::serve(listener, build_router()).await?;
    Ok(())
}

fn build_router() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/privacy", get(privacy))
        .route("/support", get(support).post(submit_support))
        .layer(middleware::from_fn(well_known::serve_app_ads))
}

async fn home() -> Html<String> {
    Html(pages::home())
}

async fn privacy() -> Html<String> {
    Html(pages::privacy())
}

async fn support() -> Html<String> {
    Html(pages::support())
}

/// Turn the submitted form into a mailto link, or fall back to the
/// literal support address
async fn submit_support(Form(form): Form<InquiryForm>) -> impl IntoResponse {
    match form.mailto_uri(SUPPORT_ADDRESS) {
        Ok(uri) => {
            info!("support inquiry prepared");
            let notice = SubmitOutcome::MailClientOpened.notice();
            (
                StatusCode::OK,
                Html(pages::submit_result(&notice, Some(&uri))),
            )
        }
        Err(err) => {
            warn!(%err, "rejected support inquiry");
            let notice = SubmitOutcome::Fallback {
                contact: SUPPORT_ADDRESS.to_string(),
            }
            .notice();
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(pages::submit_result(&notice, None)),
            )
        }
    }
}
