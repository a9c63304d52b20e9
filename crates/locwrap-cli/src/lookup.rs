use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use locwrap_i18n::{Category, Field, Localizer, TranslationCatalog};

use crate::error::{CliError, Result};
use crate::wrap::PolicyArgs;

#[derive(Debug, Clone, Args)]
pub struct LookupArgs {
    /// Locale directory holding the translation JSON files.
    #[arg(long)]
    pub data: PathBuf,

    /// Entity category, or `ui` for UI strings.
    pub category: String,

    /// Entity or UI key.
    pub key: String,

    /// Field to print; ignored for `ui`.
    #[arg(default_value = "name")]
    pub field: String,

    /// Log every lookup once at debug level.
    #[arg(long = "debug-keys")]
    pub debug_keys: bool,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

pub(crate) fn load_catalog(dir: &Path) -> Result<TranslationCatalog> {
    if !dir.exists() {
        return Err(CliError::MissingPath {
            path: dir.to_path_buf(),
        });
    }
    Ok(TranslationCatalog::load_dir(dir)?)
}

pub fn run_lookup(args: LookupArgs, out: &mut impl Write) -> Result<()> {
    let catalog = load_catalog(&args.data)?;
    let localizer =
        Localizer::with_policy(catalog, args.policy.resolve()?)?.with_debug_keys(args.debug_keys);

    let found = if args.category.eq_ignore_ascii_case("ui") {
        localizer.ui(&args.key)
    } else {
        let category: Category = args.category.parse()?;
        localizer.get(category, &args.key, &Field::from(args.field.as_str()))
    };

    match found {
        Some(text) => {
            writeln!(out, "{text}")?;
            Ok(())
        }
        None => Err(CliError::NotFound {
            target: args.category,
            key: args.key,
        }),
    }
}
