use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::cli::flags::Cli;
use crate::config::AppConfig;
use crate::core::types::Mode;
use crate::sources::wordlists::WordlistCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandName {
    Run(Mode),
    ListWordlists,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub command: CommandName,
    pub domain: String,
    pub list: Option<PathBuf>,
    pub wordlist: Option<PathBuf>,
    pub download: Option<String>,
    pub output: Option<PathBuf>,
    pub print: bool,
    pub depth: usize,
    pub strip_domain: bool,
    pub progress: bool,
    pub max_candidates: u64,
    pub timeout_ms: u64,
    pub user_agent: String,
    pub wordlist_dir: PathBuf,
    pub catalog: WordlistCatalog,
}

/// Merge command line flags over file config. Flags win.
pub fn resolve_config(cli: &Cli, app: &AppConfig) -> Result<RunConfig> {
    let catalog = WordlistCatalog::with_extra(&app.wordlists);

    let command = match (cli.list_wordlists, cli.mode) {
        (true, _) => CommandName::ListWordlists,
        (false, Some(mode)) => CommandName::Run(mode.into()),
        (false, None) => return Err(anyhow!("mode is required")),
    };

    let domain = match command {
        CommandName::ListWordlists => String::new(),
        CommandName::Run(_) => normalize_domain(cli.domain.as_deref().unwrap_or_default())?,
    };

    if let Some(name) = &cli.download {
        if command == CommandName::Run(Mode::Wordlist) {
            return Err(anyhow!("--download only applies to subdomains mode"));
        }
        if cli.list.is_some() {
            return Err(anyhow!("--download cannot be combined with --list"));
        }
        catalog.resolve(name)?;
    }

    Ok(RunConfig {
        command,
        domain,
        list: cli.list.clone(),
        wordlist: cli.wordlist.clone(),
        download: cli.download.clone(),
        output: cli.output.clone(),
        print: cli.print,
        depth: cli.depth.map(usize::from).unwrap_or(app.default_depth),
        strip_domain: !cli.keep_domain,
        progress: !cli.quiet,
        max_candidates: cli.max_candidates.unwrap_or(app.max_candidates),
        timeout_ms: app.timeout_ms,
        user_agent: app.user_agent.clone(),
        wordlist_dir: PathBuf::from(&app.wordlist_dir),
        catalog,
    })
}

fn normalize_domain(raw: &str) -> Result<String> {
    let domain = raw.trim().trim_matches('.');
    if domain.is_empty() {
        return Err(anyhow!("domain is required"));
    }
    if domain.contains("://") || domain.contains('/') {
        return Err(anyhow!("domain must be a bare hostname, got {raw}"));
    }
    Ok(domain.to_string())
}
