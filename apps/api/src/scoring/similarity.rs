//! String similarity measures used by the fuzzy skill matcher.
//!
//! The default is the Ratcliff/Obershelp "gestalt" ratio: twice the number of
//! characters in recursively-found longest common blocks over the combined
//! length. No junk heuristics are applied.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMetric {
    /// Ratcliff/Obershelp matching-blocks ratio.
    #[default]
    Sequence,
    /// `1 - levenshtein / max_len` via strsim.
    Levenshtein,
    /// Jaro-Winkler via strsim.
    JaroWinkler,
}

impl std::str::FromStr for SimilarityMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequence" => Ok(SimilarityMetric::Sequence),
            "levenshtein" => Ok(SimilarityMetric::Levenshtein),
            "jaro_winkler" | "jaro-winkler" => Ok(SimilarityMetric::JaroWinkler),
            other => Err(format!(
                "unknown similarity metric '{other}' (expected sequence, levenshtein or jaro_winkler)"
            )),
        }
    }
}

impl SimilarityMetric {
    pub fn similarity(self, a: &str, b: &str) -> f64 {
        match self {
            SimilarityMetric::Sequence => sequence_ratio(a, b),
            SimilarityMetric::Levenshtein => strsim::normalized_levenshtein(a, b),
            SimilarityMetric::JaroWinkler => strsim::jaro_winkler(a, b),
        }
    }

    /// `similarity(candidate, term) >= threshold`, using cheap upper bounds
    /// first for the sequence ratio.
    pub fn is_close(self, candidate: &str, term: &str, threshold: f64) -> bool {
        match self {
            SimilarityMetric::Sequence => {
                let a: Vec<char> = candidate.chars().collect();
                let b: Vec<char> = term.chars().collect();
                length_bound(&a, &b) >= threshold
                    && multiset_bound(&a, &b) >= threshold
                    && ratio_of(&a, &b) >= threshold
            }
            other => other.similarity(candidate, term) >= threshold,
        }
    }
}

/// Ratcliff/Obershelp similarity in `[0, 1]`. Two empty strings are identical.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_of(&a, &b)
}

fn ratio_of(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_characters(a, b) as f64 / total as f64
}

/// Upper bound from lengths alone.
fn length_bound(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * a.len().min(b.len()) as f64 / total as f64
}

/// Upper bound from shared character counts, ignoring order.
fn multiset_bound(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let mut available: HashMap<char, usize> = HashMap::new();
    for &c in b {
        *available.entry(c).or_insert(0) += 1;
    }
    let mut shared = 0;
    for c in a {
        if let Some(n) = available.get_mut(c) {
            if *n > 0 {
                *n -= 1;
                shared += 1;
            }
        }
    }
    2.0 * shared as f64 / total as f64
}

/// Total size of the matching blocks: take the longest common block, then
/// recurse into the pieces left and right of it.
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        positions.entry(c).or_default().push(j);
    }

    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, &positions, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }
    matched
}

/// Longest block `a[i..i+k] == b[j..j+k]` within the given window. Ties go to
/// the earliest `i`, then the earliest `j`.
fn longest_match(
    a: &[char],
    positions: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0);
    // run length of the match ending at (previous i, j)
    let mut runs: HashMap<usize, usize> = HashMap::new();
    for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next = HashMap::new();
        if let Some(js) = positions.get(c) {
            for &j in js {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = j
                    .checked_sub(1)
                    .and_then(|prev| runs.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next.insert(j, k);
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            }
        }
        runs = next;
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_identical_strings_ratio_one() {
        assert!(approx(sequence_ratio("docker", "docker"), 1.0));
        assert!(approx(sequence_ratio("", ""), 1.0));
    }

    #[test]
    fn test_disjoint_strings_ratio_zero() {
        assert!(approx(sequence_ratio("abc", "xyz"), 0.0));
        assert!(approx(sequence_ratio("abc", ""), 0.0));
    }

    #[test]
    fn test_known_ratios() {
        // "abcd" vs "bcde": block "bcd" → 2*3/8
        assert!(approx(sequence_ratio("abcd", "bcde"), 0.75));
        // one dropped letter: 2*9/19
        assert!(approx(sequence_ratio("kubernetes", "kubernets"), 18.0 / 19.0));
        // "python" vs "pythn": 2*5/11
        assert!(approx(sequence_ratio("python", "pythn"), 10.0 / 11.0));
    }

    #[test]
    fn test_recurses_on_both_sides_of_longest_block() {
        // "ab" first, then "cd" to its right: 2*4/10
        assert!(approx(sequence_ratio("abxcd", "abycd"), 0.8));
        // "ab" and "cd" tie; the earlier block wins, "cd" follows
        assert!(approx(sequence_ratio("abqcd", "zzabcd"), 8.0 / 11.0));
    }

    #[test]
    fn test_bounds_never_below_ratio() {
        let pairs = [("apis", "api"), ("react", "reactjs"), ("sql", "mysql"), ("java", "javascript")];
        for (x, y) in pairs {
            let a: Vec<char> = x.chars().collect();
            let b: Vec<char> = y.chars().collect();
            let r = ratio_of(&a, &b);
            assert!(multiset_bound(&a, &b) >= r, "{x} vs {y}");
            assert!(length_bound(&a, &b) >= r, "{x} vs {y}");
        }
    }

    #[test]
    fn test_is_close_threshold_boundary() {
        // 2*3/7 ≈ 0.857
        assert!(SimilarityMetric::Sequence.is_close("apis", "api", 0.8));
        // 2*4/14 ≈ 0.571
        assert!(!SimilarityMetric::Sequence.is_close("javascript", "java", 0.8));
        // exactly 0.8 is accepted
        assert!(SimilarityMetric::Sequence.is_close("abxcd", "abycd", 0.8));
    }

    #[test]
    fn test_strsim_metrics() {
        assert!(approx(SimilarityMetric::Levenshtein.similarity("rust", "rust"), 1.0));
        assert!(approx(SimilarityMetric::Levenshtein.similarity("rust", "bust"), 0.75));
        assert!(SimilarityMetric::JaroWinkler.similarity("python", "pythn") > 0.9);
    }

    #[test]
    fn test_metric_from_str() {
        assert_eq!("sequence".parse::<SimilarityMetric>(), Ok(SimilarityMetric::Sequence));
        assert_eq!("Jaro-Winkler".parse::<SimilarityMetric>(), Ok(SimilarityMetric::JaroWinkler));
        assert!("cosine".parse::<SimilarityMetric>().is_err());
    }
}
