use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::cli::config::{resolve_config, CommandName, RunConfig};
use crate::cli::flags::Cli;
use crate::config::load_config;
use crate::core::input::read_lines;
use crate::core::output::{print_lines, write_lines};
use crate::core::types::{Mode, WordSet};
use crate::pipeline::extractor::{extract_words, extract_words_for_domain};
use crate::pipeline::permuter::{generate_permutations, permutation_count};
use crate::sources::wordlists::{build_client, download_wordlist};

/// What a run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub generated: usize,
    pub saved_to: Option<PathBuf>,
    pub printed: bool,
}

pub async fn run(cli: Cli) -> Result<()> {
    let app = load_config(cli.config.as_deref())?;
    let cfg = resolve_config(&cli, &app)?;
    run_with_config(&cfg).await.map(|_| ())
}

pub async fn run_with_config(cfg: &RunConfig) -> Result<RunSummary> {
    match cfg.command {
        CommandName::ListWordlists => run_list_wordlists(cfg),
        CommandName::Run(Mode::Wordlist) => run_wordlist(cfg),
        CommandName::Run(Mode::Subdomains) => run_subdomains(cfg).await,
    }
}

fn run_list_wordlists(cfg: &RunConfig) -> Result<RunSummary> {
    let rows: Vec<String> = cfg
        .catalog
        .iter()
        .map(|s| format!("{:<12} {}  {}", s.name, s.url, s.description))
        .collect();
    let generated = print_lines(&rows)?;
    Ok(RunSummary {
        generated,
        saved_to: None,
        printed: true,
    })
}

fn run_wordlist(cfg: &RunConfig) -> Result<RunSummary> {
    let lines = match &cfg.list {
        Some(path) => read_lines(path)?,
        None => Vec::new(),
    };
    let words = extract(cfg, &lines);
    tracing::info!("Generated {} words from subdomains.", words.len());
    Ok(emit(cfg, &words))
}

async fn run_subdomains(cfg: &RunConfig) -> Result<RunSummary> {
    let words: Vec<String> = if let Some(path) = &cfg.list {
        let lines = read_lines(path)?;
        extract(cfg, &lines).into_iter().collect()
    } else if let Some(path) = &cfg.wordlist {
        read_lines(path)?
    } else if let Some(name) = &cfg.download {
        let source = cfg.catalog.resolve(name)?;
        let client = build_client(&cfg.user_agent, cfg.timeout_ms)?;
        let path = download_wordlist(&client, source, &cfg.wordlist_dir, cfg.progress).await?;
        read_lines(&path)?
    } else {
        return Err(anyhow!(
            "please specify an input file (--list, --wordlist or --download) for subdomain generation"
        ));
    };
    tracing::debug!("{} input words, depth {}", words.len(), cfg.depth);

    if cfg.output.is_none() && !cfg.print {
        tracing::warn!("Please specify an output file or enable --print.");
        return Ok(RunSummary::default());
    }

    let expected = permutation_count(words.len(), cfg.depth)
        .filter(|n| *n <= cfg.max_candidates)
        .ok_or_else(|| {
            anyhow!(
                "{} words at depth {} exceed the candidate limit of {}; lower --depth or raise --max-candidates",
                words.len(),
                cfg.depth,
                cfg.max_candidates
            )
        })?;
    tracing::info!("Generating {} candidates for {}", expected, cfg.domain);

    let candidates = generate_permutations(&words, &cfg.domain, cfg.depth);
    Ok(emit(cfg, &candidates))
}

fn extract(cfg: &RunConfig, lines: &[String]) -> WordSet {
    if cfg.strip_domain {
        extract_words_for_domain(lines, &cfg.domain)
    } else {
        extract_words(lines)
    }
}

/// Write to the output file when one is set, else print when asked.
/// Failures are logged, not propagated.
fn emit<'a, I>(cfg: &RunConfig, items: I) -> RunSummary
where
    I: IntoIterator<Item = &'a String> + Copy,
{
    let mut summary = RunSummary {
        generated: items.into_iter().count(),
        ..RunSummary::default()
    };

    if let Some(path) = &cfg.output {
        match write_lines(items, path) {
            Ok(_) => {
                tracing::info!("Output successfully saved to {}", path.display());
                summary.saved_to = Some(path.clone());
            }
            Err(err) => {
                tracing::error!("An error occurred while saving the output: {}", err);
            }
        }
    } else if cfg.print {
        match print_lines(items) {
            Ok(_) => summary.printed = true,
            Err(err) => tracing::error!("failed to print output: {}", err),
        }
    }
    summary
}
