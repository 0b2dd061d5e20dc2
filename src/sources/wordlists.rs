use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use serde::Deserialize;
use tokio::io::AsyncWriteExt;

use crate::core::error::DeplistError;

/// A named remote wordlist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordlistSource {
    pub name: Cow<'static, str>,
    pub url: Cow<'static, str>,
    #[serde(default)]
    pub description: Cow<'static, str>,
}

impl WordlistSource {
    const fn builtin(name: &'static str, url: &'static str, description: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            url: Cow::Borrowed(url),
            description: Cow::Borrowed(description),
        }
    }

    /// File name the wordlist is stored under once downloaded.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.name)
    }
}

pub const BUILTIN_WORDLISTS: &[WordlistSource] = &[
    WordlistSource::builtin(
        "top5000",
        "https://raw.githubusercontent.com/danielmiessler/SecLists/master/Discovery/DNS/subdomains-top1million-5000.txt",
        "SecLists subdomains-top1million-5000",
    ),
    WordlistSource::builtin(
        "top20000",
        "https://raw.githubusercontent.com/danielmiessler/SecLists/master/Discovery/DNS/subdomains-top1million-20000.txt",
        "SecLists subdomains-top1million-20000",
    ),
    WordlistSource::builtin(
        "top110000",
        "https://raw.githubusercontent.com/danielmiessler/SecLists/master/Discovery/DNS/subdomains-top1million-110000.txt",
        "SecLists subdomains-top1million-110000",
    ),
    WordlistSource::builtin(
        "jhaddix",
        "https://raw.githubusercontent.com/danielmiessler/SecLists/master/Discovery/DNS/dns-Jhaddix.txt",
        "SecLists dns-Jhaddix (all.txt)",
    ),
    WordlistSource::builtin(
        "bitquark",
        "https://raw.githubusercontent.com/danielmiessler/SecLists/master/Discovery/DNS/bitquark-subdomains-top100000.txt",
        "SecLists bitquark-subdomains-top100000",
    ),
    WordlistSource::builtin(
        "assetnote",
        "https://wordlists-cdn.assetnote.io/data/manual/best-dns-wordlist.txt",
        "Assetnote best-dns-wordlist",
    ),
];

/// Lookup table of downloadable wordlists: the builtins plus any configured
/// extras. Names are matched case-insensitively.
#[derive(Debug, Clone)]
pub struct WordlistCatalog {
    sources: Vec<WordlistSource>,
}

impl Default for WordlistCatalog {
    fn default() -> Self {
        Self {
            sources: BUILTIN_WORDLISTS.to_vec(),
        }
    }
}

impl WordlistCatalog {
    pub fn with_extra(extra: &[WordlistSource]) -> Self {
        let mut catalog = Self::default();
        for source in extra {
            if !is_safe_name(&source.name) {
                tracing::warn!("ignoring configured wordlist {:?}: invalid name", source.name);
                continue;
            }
            if catalog.get(&source.name).is_some() {
                tracing::warn!("ignoring configured wordlist {}: name already taken", source.name);
                continue;
            }
            catalog.sources.push(source.clone());
        }
        catalog
    }

    pub fn get(&self, name: &str) -> Option<&WordlistSource> {
        self.sources
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn resolve(&self, name: &str) -> Result<&WordlistSource, DeplistError> {
        self.get(name)
            .ok_or_else(|| DeplistError::UnknownWordlist(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordlistSource> {
        self.sources.iter()
    }
}

/// Names become file names under the wordlist directory.
fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains("..")
        && !name.contains(|c: char| c == '/' || c == '\\' || c == ':' || c.is_control())
}

pub fn build_client(user_agent: &str, timeout_ms: u64) -> Result<Client, DeplistError> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_millis(timeout_ms))
        .redirect(reqwest::redirect::Policy::limited(4))
        .build()
        .map_err(DeplistError::from)
}

/// Stream `source` into `dir`, returning the written path. A partially
/// written file is removed on failure. `show_progress` draws a byte
/// progress bar on stderr.
pub async fn download_wordlist(
    client: &Client,
    source: &WordlistSource,
    dir: &Path,
    show_progress: bool,
) -> Result<PathBuf, DeplistError> {
    tokio::fs::create_dir_all(dir).await?;
    let dest = dir.join(source.file_name());
    tracing::info!("Downloading wordlist {} from {}", source.name, source.url);

    match fetch_to_file(client, source, &dest, show_progress).await {
        Ok(bytes) => {
            tracing::info!("Saved {} ({} bytes)", dest.display(), bytes);
            Ok(dest)
        }
        Err(err) => {
            let _ = tokio::fs::remove_file(&dest).await;
            Err(err)
        }
    }
}

async fn fetch_to_file(
    client: &Client,
    source: &WordlistSource,
    dest: &Path,
    show_progress: bool,
) -> Result<u64, DeplistError> {
    let url = source.url.as_ref();
    let mut response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(DeplistError::Http(format!("{url} returned {status}")));
    }

    let pb = progress_bar(response.content_length(), show_progress);
    pb.set_message(source.name.to_string());

    let mut file = tokio::fs::File::create(dest).await?;
    let mut written = 0u64;
    loop {
        let chunk = match response.chunk().await {
            Ok(Some(chunk)) => chunk,
            Ok(None) => break,
            Err(err) => {
                pb.abandon();
                return Err(err.into());
            }
        };
        if let Err(err) = file.write_all(&chunk).await {
            pb.abandon();
            return Err(err.into());
        }
        written += chunk.len() as u64;
        pb.inc(chunk.len() as u64);
    }
    file.flush().await?;
    pb.finish_and_clear();
    Ok(written)
}

/// Byte bar when the length is known, spinner otherwise.
fn progress_bar(content_length: Option<u64>, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let (pb, template) = match content_length {
        Some(total) => (
            ProgressBar::new(total),
            "{spinner:.green} {msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})",
        ),
        None => (
            ProgressBar::new_spinner(),
            "{spinner:.green} {msg} [{elapsed_precise}] {bytes} ({bytes_per_sec})",
        ),
    };
    pb.set_style(
        ProgressStyle::with_template(template).unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb
}
