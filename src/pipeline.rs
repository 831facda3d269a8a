use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use scraper::Html;
use url::Url;

use crate::charset::decode_html;
use crate::cli::{ExtractArgs, LatestArgs, RunArgs, ShowArgs};
use crate::config::{Config, Overrides};
use crate::fetch::Fetcher;
use crate::formats::MenuEntry;
use crate::latest::find_latest_post_url;
use crate::menu::{ExtractError, try_extract_menu};
use crate::report::{write_grouped, write_jsonl};
use crate::store::MenuStore;

pub async fn run(args: RunArgs) -> anyhow::Result<()> {
    let config = load_config(args.source.config.as_deref(), args.overrides())?;
    let fetcher = Fetcher::new(&config.fetch).context("init fetcher")?;
    let list_url = &config.fetch.list_url;

    tracing::info!(%list_url, "run: find latest post");
    let view_url = resolve_view_url(&fetcher, list_url).await?;

    tracing::info!(%view_url, "run: fetch menu post");
    let view_html = fetcher.fetch_html(&view_url).await.context("fetch menu post")?;
    let entries = menu_from_html(&view_html).map_err(|ExtractError::TableNotFound| {
        anyhow::anyhow!("could not locate a menu table on {view_url}")
    })?;

    tracing::info!(db = %config.store.path.display(), entries = entries.len(), "run: store");
    let mut store = MenuStore::open(&config.store.path)?;
    let retrieved_at = chrono::Utc::now().to_rfc3339();
    let added = store
        .insert_new(&entries, &retrieved_at)
        .context("store menu entries")?;
    tracing::info!(added, "run: done");

    let mut out = std::io::stdout().lock();
    if args.json {
        write_jsonl(&mut out, &entries)?;
    } else {
        writeln!(out, "added: {added}\n").context("write summary")?;
        write_grouped(&mut out, &entries)?;
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

pub async fn latest(args: LatestArgs) -> anyhow::Result<()> {
    let config = load_config(args.source.config.as_deref(), args.source.overrides())?;
    let fetcher = Fetcher::new(&config.fetch).context("init fetcher")?;
    let view_url = resolve_view_url(&fetcher, &config.fetch.list_url).await?;
    println!("{view_url}");
    Ok(())
}

pub fn extract(args: ExtractArgs) -> anyhow::Result<()> {
    let path = PathBuf::from(&args.html);
    let bytes = std::fs::read(&path).with_context(|| format!("read html: {}", path.display()))?;
    let html = decode_html(&bytes, None);
    let entries = menu_from_html(&html).map_err(|ExtractError::TableNotFound| {
        anyhow::anyhow!("could not locate a menu table in {}", path.display())
    })?;
    tracing::info!(entries = entries.len(), "extracted lunch menu");

    let mut out = std::io::stdout().lock();
    if args.json {
        write_jsonl(&mut out, &entries)?;
    } else {
        write_grouped(&mut out, &entries)?;
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

pub fn show(args: ShowArgs) -> anyhow::Result<()> {
    let config = load_config(
        args.config.as_deref(),
        Overrides {
            db: args.db.clone(),
            ..Overrides::default()
        },
    )?;
    if !config.store.path.exists() {
        anyhow::bail!("database does not exist: {}", config.store.path.display());
    }
    let store = MenuStore::open(&config.store.path)?;
    let stored = store.entries()?;

    let mut out = std::io::stdout().lock();
    if args.json {
        write_jsonl(&mut out, &stored)?;
    } else {
        let entries: Vec<MenuEntry> = stored.into_iter().map(|s| s.entry).collect();
        write_grouped(&mut out, &entries)?;
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

fn load_config(path: Option<&str>, overrides: Overrides) -> anyhow::Result<Config> {
    Config::load(path.map(Path::new))
        .context("load config")?
        .with_overrides(overrides)
}

async fn resolve_view_url(fetcher: &Fetcher, list_url: &Url) -> anyhow::Result<Url> {
    let list_html = fetcher.fetch_html(list_url).await.context("fetch board listing")?;
    let document = Html::parse_document(&list_html);
    find_latest_post_url(&document, list_url)
        .ok_or_else(|| anyhow::anyhow!("could not locate a detail link on {list_url}"))
}

fn menu_from_html(html: &str) -> Result<Vec<MenuEntry>, ExtractError> {
    try_extract_menu(&Html::parse_document(html))
}
