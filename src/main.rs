use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use homedir::my_home;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod posts;
mod semantic;
#[cfg(test)]
mod tests;
mod web;

use config::Config;
use posts::{Post, SearchRequest};
use semantic::{Embedder, EmbeddingModel, PostSearchService};

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,post_search=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// `POST_SEARCH_BASE_PATH`, or `~/.local/share/post-search`.
fn base_path() -> anyhow::Result<PathBuf> {
    if let Ok(path) = std::env::var("POST_SEARCH_BASE_PATH") {
        return Ok(PathBuf::from(path));
    }

    let home = my_home()
        .context("could not determine home directory")?
        .context("home directory path is empty")?;
    Ok(home.join(".local/share/post-search"))
}

fn load_service(config: &Config) -> anyhow::Result<PostSearchService> {
    let sem = &config.semantic_search;
    log::info!("loading embedding model '{}'", sem.model);

    let model = EmbeddingModel::new(
        &sem.model,
        config.base_path().to_path_buf(),
        sem.show_download_progress,
    )
    .with_context(|| format!("failed to load embedding model '{}'", sem.model))?;

    log::info!("model '{}' ready ({} dimensions)", model.name(), model.dimensions());

    Ok(PostSearchService::new(Arc::new(model)))
}

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    init_logging();

    let base_path = base_path()?;
    let mut config = Config::load_with(&base_path)
        .with_context(|| format!("failed to load config from {}", base_path.display()))?;

    match args.command {
        cli::Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let service = load_service(&config)?;
            web::start_daemon(service, config.server)
        }

        cli::Command::Search {
            prompt,
            posts,
            scores,
        } => {
            let posts_str = std::fs::read_to_string(&posts)
                .with_context(|| format!("failed to read {}", posts.display()))?;
            let posts: Vec<Post> =
                serde_json::from_str(&posts_str).context("posts file is not a JSON array of posts")?;

            let service = load_service(&config)?;

            if scores {
                let scored = service.score_all(&prompt, &posts)?;
                println!("{}", serde_json::to_string_pretty(&scored)?);
            } else {
                let response = service.search(&SearchRequest { prompt, posts })?;
                println!("{}", serde_json::to_string_pretty(&response)?);
            }

            Ok(())
        }
    }
}
