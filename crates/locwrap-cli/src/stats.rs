use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use locwrap_i18n::{Category, TranslationCatalog};

use crate::error::Result;
use crate::lookup::load_catalog;

#[derive(Debug, Clone, Args)]
pub struct StatsArgs {
    /// Locale directory holding the translation JSON files.
    #[arg(long)]
    pub data: PathBuf,

    /// Print a JSON object instead of a table.
    #[arg(long)]
    pub json: bool,
}

pub fn run_stats(args: StatsArgs, out: &mut impl Write) -> Result<()> {
    let catalog = load_catalog(&args.data)?;
    if args.json {
        writeln!(out, "{}", stats_json(&catalog))?;
    } else {
        for category in Category::ALL {
            writeln!(out, "{:<14}{}", category.as_str(), catalog.len(category))?;
        }
        writeln!(out, "{:<14}{}", "ui", catalog.ui_len())?;
    }
    Ok(())
}

fn stats_json(catalog: &TranslationCatalog) -> serde_json::Value {
    let mut counts = serde_json::Map::new();
    for category in Category::ALL {
        counts.insert(category.as_str().into(), catalog.len(category).into());
    }
    counts.insert("ui".into(), catalog.ui_len().into());
    serde_json::Value::Object(counts)
}
