mod id;
mod tweet;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{
    routing::{delete, post},
    Router,
};
use rbatis::RBatis;
use tracing::info;
use tweetkit::TWEETS_PATH;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let db_url = std::env::var("TWEETKIT_DB_URL")
        .context("database url must be set via environment variable 'TWEETKIT_DB_URL'")?;
    let addr: SocketAddr = std::env::var("TWEETKIT_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .context("'TWEETKIT_ADDR' is not a socket address")?;

    let db = RBatis::new();
    db.init(rbdc_sqlite::driver::SqliteDriver {}, &db_url)
        .context("failed to open database")?;
    db.get_pool()
        .context("database pool missing")?
        .set_max_open_conns(5)
        .await;
    db.exec(tweet::CREATE_TABLE, vec![])
        .await
        .context("failed to create tweets table")?;

    let app = Router::new()
        .route(TWEETS_PATH, post(tweet::create_tweet))
        .route(&format!("{TWEETS_PATH}/:id"), delete(tweet::delete_tweet))
        .with_state(db);

    info!(%addr, "listening");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .context("server stopped")?;

    Ok(())
}
