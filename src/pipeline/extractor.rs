use percent_encoding::percent_decode_str;
use url::{form_urlencoded, Url};

use crate::core::types::WordSet;

const SCHEME_SEPARATOR: &str = "://";

/// Tokenize bare hostnames and URLs into a deduplicated word set.
///
/// Lines containing `://` that parse as URLs contribute their host labels,
/// non-empty path segments and query keys, taken from the line as written
/// (path segments percent-decoded). Anything else, including URLs the
/// parser rejects, is split on `.`. Blank lines and empty pieces are
/// dropped.
pub fn extract_words<I, S>(lines: I) -> WordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words = WordSet::new();
    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        if line.contains(SCHEME_SEPARATOR) {
            match Url::parse(line) {
                Ok(_) => {
                    collect_url(RawUrl::split(line), &mut words);
                    continue;
                }
                Err(err) => {
                    tracing::debug!("falling back to plain split for {line:?}: {err}");
                }
            }
        }
        collect_labels(line, &mut words);
    }
    words
}

/// Drop a trailing `.<domain>` so only the labels left of the base domain
/// remain. URLs and lines outside the domain are returned untouched.
pub fn strip_domain<'a>(line: &'a str, domain: &str) -> &'a str {
    if domain.is_empty() || line.contains(SCHEME_SEPARATOR) {
        return line;
    }
    match line.strip_suffix(domain) {
        Some(rest) if rest.ends_with('.') => &rest[..rest.len() - 1],
        _ => line,
    }
}

/// [`extract_words`] over lines with the base domain stripped first.
pub fn extract_words_for_domain<I, S>(lines: I, domain: &str) -> WordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words = WordSet::new();
    for line in lines {
        words.extend(extract_words([strip_domain(line.as_ref(), domain)]));
    }
    words
}

/// Pieces of a URL line sliced from the original text, so host case and
/// Unicode survive the parser's normalization.
#[derive(Debug, PartialEq, Eq)]
struct RawUrl<'a> {
    host: &'a str,
    path: &'a str,
    query: &'a str,
}

impl<'a> RawUrl<'a> {
    fn split(line: &'a str) -> Self {
        let rest = line
            .split_once(SCHEME_SEPARATOR)
            .map_or(line, |(_, rest)| rest);
        let rest = rest.find('#').map_or(rest, |i| &rest[..i]);
        let (rest, query) = rest.split_once('?').unwrap_or((rest, ""));
        let (authority, path) = rest.find('/').map_or((rest, ""), |i| rest.split_at(i));

        let host = authority
            .rsplit_once('@')
            .map_or(authority, |(_, host)| host);
        let host = match host.find(']') {
            Some(end) if host.starts_with('[') => &host[..=end],
            _ => host.rsplit_once(':').map_or(host, |(host, _)| host),
        };

        Self { host, path, query }
    }
}

fn collect_url(raw: RawUrl<'_>, words: &mut WordSet) {
    collect_labels(raw.host, words);
    for segment in raw.path.split('/') {
        push_token(&percent_decode_str(segment).decode_utf8_lossy(), words);
    }
    for (key, _) in form_urlencoded::parse(raw.query.as_bytes()) {
        push_token(&key, words);
    }
}

fn collect_labels(text: &str, words: &mut WordSet) {
    for label in text.split('.') {
        push_token(label, words);
    }
}

fn push_token(token: &str, words: &mut WordSet) {
    if token.is_empty() {
        return;
    }
    if !words.contains(token) {
        words.insert(token.to_string());
    }
}
