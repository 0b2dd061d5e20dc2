use crate::core::types::Candidate;

/// Expand `words` into dot-joined candidates under `domain`.
///
/// Level one is `word.domain` for every word. Each further round prefixes
/// every word onto every candidate accumulated so far and appends the
/// results, so earlier levels stay in the output and the total grows as
/// `n * (n + 1)^(depth - 1)`. A depth of zero behaves like one.
///
/// No upper bound is enforced here; check [`permutation_count`] first.
pub fn generate_permutations<S: AsRef<str>>(
    words: &[S],
    domain: &str,
    depth: usize,
) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = words
        .iter()
        .map(|word| format!("{}.{}", word.as_ref(), domain))
        .collect();

    for _ in 1..depth {
        let mut round = Vec::with_capacity(words.len() * candidates.len());
        for word in words {
            let word = word.as_ref();
            for candidate in &candidates {
                round.push(format!("{word}.{candidate}"));
            }
        }
        candidates.append(&mut round);
    }

    candidates
}

/// Exact length of [`generate_permutations`] output for `n` words, or
/// `None` if it does not fit in a `u64`.
pub fn permutation_count(n: usize, depth: usize) -> Option<u64> {
    let n = u64::try_from(n).ok()?;
    let mut total = n;
    for _ in 1..depth {
        total = total.checked_mul(n.checked_add(1)?)?;
    }
    Some(total)
}
