use std::collections::BTreeSet;

/// One extracted word: a host label, path segment or query key.
pub type Token = String;

/// Unique tokens. Ordered so generated output is reproducible.
pub type WordSet = BTreeSet<Token>;

/// A dot-joined hypothetical subdomain.
pub type Candidate = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Wordlist,
    Subdomains,
}
