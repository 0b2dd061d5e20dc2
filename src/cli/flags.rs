use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::core::types::Mode;

#[derive(Parser, Debug)]
#[command(
    name = "deplist",
    version,
    about = "Build subdomain wordlists and permutations from known hosts",
    after_help = "Candidates are only generated, never resolved."
)]
pub struct Cli {
    /// Target domain, e.g. example.com
    #[arg(short, long, value_name = "DOMAIN", required_unless_present = "list_wordlists")]
    pub domain: Option<String>,

    /// Mode of operation
    #[arg(short, long, value_enum, required_unless_present = "list_wordlists")]
    pub mode: Option<ModeArg>,

    /// File of known subdomains or URLs to extract words from
    #[arg(short, long, value_name = "FILE")]
    pub list: Option<PathBuf>,

    /// Wordlist file for permutation, one word per line
    #[arg(short, long, value_name = "FILE", conflicts_with = "download")]
    pub wordlist: Option<PathBuf>,

    /// Download a named wordlist and use it for permutation
    #[arg(long, value_name = "NAME")]
    pub download: Option<String>,

    /// Print the downloadable wordlists and exit
    #[arg(long)]
    pub list_wordlists: bool,

    /// Output file, one result per line
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Permutation depth (1-5). Default: 3 or config default_depth
    #[arg(long, visible_alias = "dp", value_parser = clap::value_parser!(u8).range(1..=5))]
    pub depth: Option<u8>,

    /// Keep the target domain's own labels when extracting words from --list
    #[arg(long)]
    pub keep_domain: bool,

    /// Refuse to generate more candidates than this
    #[arg(long, value_name = "N")]
    pub max_candidates: Option<u64>,

    /// Print results to stdout
    #[arg(
        short = 'v',
        long = "verbose",
        visible_short_alias = 'p',
        visible_alias = "print"
    )]
    pub print: bool,

    /// Path to config file (TOML). Default: config/deplist.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Raise the log level (debug, trace)
    #[arg(short = 'D', long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub debug: u8,

    /// Only log errors and hide the download progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    Wordlist,
    Subdomains,
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Wordlist => Mode::Wordlist,
            ModeArg::Subdomains => Mode::Subdomains,
        }
    }
}
