//! Homepage CLI
//!
//! Local entry point for inspecting and maintaining the site documents.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use homepage::{
    config::load_config,
    error::{AppError, Result},
    feed::RenderFrame,
    models::Config,
    render::TextRenderer,
    services::{self, AnnounceKind, Session, join_stats},
    storage::{self, ContentSource, LocalStorage},
    utils::is_remote,
};

/// homepage - academic homepage content tool
#[derive(Parser, Debug)]
#[command(
    name = "homepage",
    version,
    about = "Inspect, paginate and maintain homepage content documents"
)]
struct Cli {
    /// Path to the tool configuration file
    #[arg(short, long, default_value = "homepage.toml")]
    config: PathBuf,

    /// Content directory or base URL (overrides site.source)
    #[arg(short, long)]
    source: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one page of the news feed
    News {
        /// Page to show; out-of-range values are clamped
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,

        /// Print the render frame as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration and content documents
    Validate,

    /// Show document counts and feed layout
    Info,

    /// Show citation statistics per publication
    Stats,

    /// Generate a news entry for existing content
    Announce {
        /// publication, dataset or award
        kind: AnnounceKind,

        /// Entity id (award: position in awards.json, starting at 0)
        id: String,

        /// Fallback date (YYYY-MM-DD) when the entity has no added_date
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Arc::new(load_config(&cli.config, cli.source.as_deref())?);
    log::debug!("Content source: {}", config.site.source);

    match cli.command {
        Command::News { page, json } => run_news(config, page, json).await?,
        Command::Validate => run_validate(config).await?,
        Command::Info => run_info(config).await?,
        Command::Stats => run_stats(config).await?,
        Command::Announce { kind, id, date } => run_announce(&config, kind, &id, date).await?,
    }

    Ok(())
}

fn open_source(config: &Config) -> Result<Arc<dyn ContentSource>> {
    Ok(Arc::from(storage::open(config)?))
}

async fn run_news(config: Arc<Config>, page: i64, json: bool) -> Result<()> {
    let source = open_source(&config)?;
    let mut session = Session::open(config, source).await?;

    // Stats race the first render; they only ever patch the banner.
    let stats_task = session.spawn_stats();
    let frame = session.feed_mut().go_to(page);

    if json {
        // One JSON document: wait for the stats so the frame carries the final banner.
        let banner = match join_stats(stats_task).await {
            Some(stats) => session.apply_stats(&stats),
            None => frame.banner.clone(),
        };
        let frame = RenderFrame { banner, ..frame };
        println!("{}", serde_json::to_string_pretty(&frame)?);
        return Ok(());
    }

    let renderer = TextRenderer::new(session.config().render.width);
    println!("{}", renderer.render(&frame));
    if let Some(stats) = join_stats(stats_task).await {
        if let Some(banner) = session.apply_stats(&stats) {
            println!("\n{}", renderer.render_banner(&banner));
        }
    }

    Ok(())
}

async fn run_validate(config: Arc<Config>) -> Result<()> {
    log::info!("Validating configuration...");
    log::info!("✓ Config OK (source: {})", config.site.source);

    let source = open_source(&config)?;
    let store = match services::ContentStore::load(source.as_ref()).await {
        Ok(store) => store,
        Err(e) => {
            log::error!("Content load failed: {}", e);
            return Err(e);
        }
    };

    let findings = store.validate();
    if findings.is_empty() {
        log::info!("✓ Content OK ({} news items)", store.news.len());
    } else {
        for finding in &findings {
            log::warn!("{}", finding);
        }
        log::warn!("{} content finding(s)", findings.len());
    }

    log::info!("Validation finished");
    Ok(())
}

async fn run_info(config: Arc<Config>) -> Result<()> {
    let source = open_source(&config)?;
    let description = source.describe();
    let session = Session::open(Arc::clone(&config), source).await?;
    let content = session.content();
    let feed = session.feed();

    log::info!("Content source: {}", description);
    for (kind, count) in content.counts() {
        log::info!("    {}: {}", kind, count);
    }
    log::info!(
        "News feed: {} item(s), {} pinned, {} per page, {} page(s)",
        feed.news().feed().len(),
        feed.news().pinned().len(),
        feed.items_per_page(),
        feed.total_pages()
    );
    Ok(())
}

async fn run_stats(config: Arc<Config>) -> Result<()> {
    let source = open_source(&config)?;
    let session = Session::open(config, source).await?;

    let stats = join_stats(session.spawn_stats()).await;
    let placeholder = &session.config().stats.placeholder;
    let show = |value: Option<u64>| value.map_or_else(|| placeholder.clone(), |v| v.to_string());

    let banner = session.content().banner_stats();
    println!(
        "Total citations: {}",
        show(stats.as_ref().map(|s| s.citedby))
    );
    println!("Total downloads: {}", show(banner.total_downloads));
    println!(
        "Highly cited:    {}",
        show(banner.highly_cited_count.map(|n| n as u64))
    );
    println!();

    for publication in &session.content().publications {
        let key = publication.stats_key();
        let citations = stats.as_ref().and_then(|s| s.citations_for(key));
        println!("{:>8}  {}", show(citations), publication.title);
    }
    Ok(())
}

async fn run_announce(
    config: &Config,
    kind: AnnounceKind,
    id: &str,
    date: Option<NaiveDate>,
) -> Result<()> {
    if is_remote(&config.site.source) {
        return Err(AppError::config(
            "announce writes news.json and needs a local site.source",
        ));
    }

    let storage = LocalStorage::new(&config.site.source);
    let today = date.unwrap_or_else(|| Local::now().date_naive());

    match services::announce(&storage, kind, id, today).await? {
        Some(item) => {
            log::info!("✓ {} '{}' announced as '{}'", kind, id, item.id);
            log::info!("    {} {}", item.date, item.content);
        }
        None => log::info!("News for {} '{}' already exists", kind, id),
    }
    Ok(())
}
