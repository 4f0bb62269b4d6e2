//! reader-links
//!
//! Resolves Reader universal links and prints the navigation each one
//! produces, one JSON object per link.
//!
//! ```text
//! reader-links https://wordpress.com/read/feeds/42/posts/7
//! {"link":"https://wordpress.com/read/feeds/42/posts/7","route":"reader_feeds_post","navigations":[{"screen":"post","post_id":7,"site_id":42,"is_feed":true}]}
//! ```
//!
//! With no positional arguments, links are read from stdin, one per line.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use serde_json::json;

use reader_links::config::{load_config, LinksConfig};
use reader_links::navigation::RecordingPresenter;
use reader_links::observability::logging::init_logging;
use reader_links::{LinkRouter, LinkSource, ReaderRoute};

#[derive(Parser)]
#[command(name = "reader-links")]
#[command(about = "Resolve Reader universal links into navigations", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(short, long)]
    log_level: Option<String>,

    /// Where the links are coming from.
    #[arg(short, long, value_enum, default_value_t = SourceArg::UniversalLink)]
    source: SourceArg,

    /// Links to resolve. Read from stdin when empty.
    links: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    UniversalLink,
    Notification,
    Widget,
}

impl From<SourceArg> for LinkSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::UniversalLink => LinkSource::UniversalLink,
            SourceArg::Notification => LinkSource::Notification,
            SourceArg::Widget => LinkSource::Widget,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LinksConfig::default(),
    };
    if let Some(level) = &cli.log_level {
        config.observability.log_level = level.clone();
    }

    init_logging(&config.observability)?;

    tracing::info!(
        hosts = ?config.links.allowed_hosts,
        jetpack_features = config.features.jetpack_features_enabled,
        "Configuration loaded"
    );

    let presenter = Arc::new(RecordingPresenter::new());
    let router = LinkRouter::builder(&config)
        .routes(ReaderRoute::ALL)
        .presenter(&presenter)
        .build()?;

    let source = LinkSource::from(cli.source);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut resolve = |link: &str| -> io::Result<()> {
        let result = router.handle(link, Some(&source));
        let navigations = presenter.journal().take();

        let line = match result {
            Ok(route) => json!({
                "link": link,
                "route": route,
                "navigations": navigations,
            }),
            Err(err) => {
                tracing::warn!(link = %link, error = %err, "Link not handled");
                json!({
                    "link": link,
                    "error": err.to_string(),
                    "reason": err.reason(),
                })
            }
        };
        writeln!(out, "{}", line)
    };

    if cli.links.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let link = line.trim();
            if !link.is_empty() {
                resolve(link)?;
            }
        }
    } else {
        for link in &cli.links {
            resolve(link)?;
        }
    }

    tracing::info!("Done");
    Ok(())
}
