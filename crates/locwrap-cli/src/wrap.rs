use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use locwrap_text::{ScriptChoice, WrapPolicy, try_wrap};

use crate::error::{CliError, Result};

/// Options that shape the wrap policy, shared by every subcommand that wraps.
#[derive(Debug, Clone, Default, Args)]
pub struct PolicyArgs {
    /// Maximum visible characters per line.
    #[arg(long, short = 'w')]
    pub width: Option<usize>,

    /// Break preset: auto, latin, thai or cjk.
    #[arg(long)]
    pub script: Option<ScriptChoice>,

    /// Wrap policy file (.toml or .json).
    #[arg(long)]
    pub policy: Option<PathBuf>,

    /// Extra break characters added to the preset.
    #[arg(long = "extra-breaks")]
    pub extra_breaks: Option<String>,
}

impl PolicyArgs {
    /// Policy from the file (if any) with command-line overrides applied.
    pub fn resolve(&self) -> Result<WrapPolicy> {
        let mut policy = match &self.policy {
            Some(path) => load_policy(path)?,
            None => WrapPolicy::default(),
        };
        if let Some(width) = self.width {
            policy.max_line_width = width;
        }
        if let Some(script) = self.script {
            policy.script = script;
        }
        if let Some(extra) = &self.extra_breaks {
            policy.extra_breaks.push_str(extra);
        }
        Ok(policy)
    }
}

fn load_policy(path: &Path) -> Result<WrapPolicy> {
    if !path.is_file() {
        return Err(CliError::MissingPath {
            path: path.to_path_buf(),
        });
    }
    let policy = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => WrapPolicy::from_json_file(path)?,
        Some("toml") => WrapPolicy::from_toml_file(path)?,
        _ => {
            return Err(CliError::invalid(format!(
                "policy file must end in .toml or .json: {}",
                path.display()
            )));
        }
    };
    tracing::debug!(path = %path.display(), ?policy, "loaded wrap policy");
    Ok(policy)
}

#[derive(Debug, Clone, Default, Args)]
pub struct WrapArgs {
    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Input file; reads stdin when omitted.
    pub file: Option<PathBuf>,
}

pub fn run_wrap(args: WrapArgs, out: &mut impl Write) -> Result<()> {
    let text = match &args.file {
        Some(path) if !path.exists() => {
            return Err(CliError::MissingPath { path: path.clone() });
        }
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let text = text
        .strip_suffix('\n')
        .map_or(text.as_str(), |line| line.strip_suffix('\r').unwrap_or(line));
    let config = args.policy.resolve()?.try_into_config(text)?;
    let wrapped = try_wrap(text, &config)?;
    writeln!(out, "{wrapped}")?;
    Ok(())
}
