//! CLI probe for the content catalog.
//!
//! # Responsibility
//! - Verify `folio_core` linkage without the Flutter runtime.
//! - Print the gallery titles a selection produces, one per line.

use clap::Parser;
use folio_core::{
    init_stderr_logging, FolioConfig, KindSelection, LoadPolicy, ProjectGallery, SelectionEvent,
};
use log::warn;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Inspect the portfolio content catalog")]
struct Cli {
    /// Catalog JSON file; defaults to FOLIO_CATALOG_PATH or the bundled catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[arg(long, default_value = "en")]
    locale: String,

    /// `all`, `project` or `post`.
    #[arg(long, default_value = "all")]
    kind: String,

    /// Skill label, matched ignoring case.
    #[arg(long, conflicts_with = "category")]
    skill: Option<String>,

    /// Category id such as `category_security`.
    #[arg(long)]
    category: Option<String>,

    /// Fail on the first defective item instead of skipping it.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("folio: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = FolioConfig::from_env();
    init_stderr_logging(&config.log_level)?;
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }
    if cli.strict {
        config.load_policy = LoadPolicy::Strict;
    }

    println!("folio_core ping={}", folio_core::ping());
    println!("folio_core version={}", folio_core::core_version());

    let load = config.load_catalog()?;
    for dropped in &load.dropped {
        warn!(
            "event=catalog_item_skipped module=cli status=warn item_id={} reason={}",
            dropped.id, dropped.reason
        );
    }

    let kind = KindSelection::parse(&cli.kind)
        .ok_or_else(|| format!("unknown kind `{}`; expected all|project|post", cli.kind))?;
    let mut gallery = ProjectGallery::new(&load.catalog);
    gallery.apply(SelectionEvent::SetKind(kind));
    if let Some(category) = cli.category {
        gallery.apply(SelectionEvent::SelectCategory(category));
    }
    if let Some(skill) = cli.skill {
        gallery.apply(SelectionEvent::SelectSkill(skill));
    }

    let locale = load.catalog.locales().resolve(&cli.locale).to_string();
    let view = gallery.view(&locale)?;
    println!("locale={} shown={} total={}", locale, view.shown(), view.total);
    for card in &view.cards {
        println!("{}\t{}\t{}", card.kind.as_str(), card.id, card.title);
    }
    Ok(())
}
