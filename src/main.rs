use std::path::Path;

use chrono::Utc;
use readme_sync::{update_readme, FEED_URL, README_PATH};
use tracing::error;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let client = reqwest::Client::new();
    if let Err(err) = update_readme(&client, FEED_URL, Path::new(README_PATH), Utc::now()).await {
        error!("readme update failed: {err}");
        std::process::exit(1);
    }
}
