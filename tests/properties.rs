//! Property-based tests.
//!
//! Small alphabets keep collisions between random sequences frequent, so the
//! match/transposition paths of every algorithm get exercised. The fast
//! implementations are checked against plain full-matrix or brute-force
//! versions written out below.

use proptest::prelude::*;
use seqsim::algorithms::*;
use seqsim::search::*;
use std::ops::Range;

fn arb_seq(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..max_len)
}

fn arb_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-5i32..6, 0..24)
}

fn is_subsequence(sub: &[u8], seq: &[u8]) -> bool {
    let mut it = seq.iter();
    sub.iter().all(|x| it.any(|y| y == x))
}

// ============================================================================
// Reference implementations
// ============================================================================

fn levenshtein_reference(a: &[u8], b: &[u8]) -> usize {
    let (n, m) = (a.len(), b.len());
    let mut d = vec![vec![0usize; m + 1]; n + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=m {
        d[0][j] = j;
    }
    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
        }
    }
    d[n][m]
}

fn osa_reference(a: &[u8], b: &[u8]) -> usize {
    let (n, m) = (a.len(), b.len());
    let mut d = vec![vec![0usize; m + 1]; n + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=m {
        d[0][j] = j;
    }
    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d[i][j] = d[i][j].min(d[i - 2][j - 2] + 1);
            }
        }
    }
    d[n][m]
}

fn lcs_reference(a: &[u8], b: &[u8]) -> usize {
    let (n, m) = (a.len(), b.len());
    let mut d = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            d[i][j] = if a[i - 1] == b[j - 1] {
                d[i - 1][j - 1] + 1
            } else {
                d[i - 1][j].max(d[i][j - 1])
            };
        }
    }
    d[n][m]
}

fn longest_common_substring_reference(a: &[u8], b: &[u8]) -> usize {
    let mut best = 0;
    for i in 0..a.len() {
        for j in 0..b.len() {
            let run = a[i..].iter().zip(&b[j..]).take_while(|(x, y)| x == y).count();
            best = best.max(run);
        }
    }
    best
}

fn lis_reference(seq: &[i32]) -> usize {
    let mut best = vec![1usize; seq.len()];
    for i in 0..seq.len() {
        for j in 0..i {
            if seq[j] < seq[i] {
                best[i] = best[i].max(best[j] + 1);
            }
        }
    }
    best.into_iter().max().unwrap_or(0)
}

fn las_reference(seq: &[i32]) -> usize {
    let n = seq.len();
    let mut up = vec![1usize; n];
    let mut down = vec![1usize; n];
    for i in 0..n {
        for j in 0..i {
            if seq[j] < seq[i] {
                up[i] = up[i].max(down[j] + 1);
            } else if seq[j] > seq[i] {
                down[i] = down[i].max(up[j] + 1);
            }
        }
    }
    up.into_iter().chain(down).max().unwrap_or(0)
}

fn repeats_reference(s: &[u8]) -> Vec<Range<usize>> {
    let n = s.len();
    let mut out = Vec::new();
    for start in 0..n {
        for half in 1..=(n - start) / 2 {
            if s[start..start + half] == s[start + half..start + 2 * half] {
                out.push(start..start + 2 * half);
            }
        }
    }
    out
}

fn rotation_reference(s: &[u8]) -> usize {
    (0..s.len())
        .min_by(|&a, &b| {
            let ra = s[a..].iter().chain(&s[..a]);
            let rb = s[b..].iter().chain(&s[..b]);
            ra.cmp(rb).then(a.cmp(&b))
        })
        .unwrap_or(0)
}

fn search_reference(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| &text[i..i + pattern.len()] == pattern)
        .collect()
}

// ============================================================================
// Edit distances
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn levenshtein_matches_full_matrix(a in arb_seq(24), b in arb_seq(24)) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein_reference(&a, &b));
    }

    #[test]
    fn levenshtein_bit_parallel_agrees(a in arb_seq(80), b in arb_seq(80)) {
        prop_assert_eq!(levenshtein_bit_parallel(&a, &b), levenshtein(&a, &b));
    }

    #[test]
    fn levenshtein_bounded_agrees(a in arb_seq(20), b in arb_seq(20), k in 0usize..10) {
        let d = levenshtein(&a, &b);
        let expected = (d <= k).then_some(d);
        prop_assert_eq!(levenshtein_bounded(&a, &b, k), expected);
    }

    #[test]
    fn levenshtein_unit_weights_agree(a in arb_seq(20), b in arb_seq(20)) {
        let weighted = levenshtein_weighted(&a, &b, &EditCosts::default()).unwrap();
        prop_assert_eq!(weighted, levenshtein(&a, &b) as f64);
    }

    #[test]
    fn levenshtein_symmetric(a in arb_seq(20), b in arb_seq(20)) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn levenshtein_identity(a in arb_seq(20), b in arb_seq(20)) {
        prop_assert_eq!(levenshtein(&a, &a), 0);
        if levenshtein(&a, &b) == 0 {
            prop_assert_eq!(&a, &b);
        }
    }

    #[test]
    fn levenshtein_triangle_inequality(a in arb_seq(16), b in arb_seq(16), c in arb_seq(16)) {
        prop_assert!(levenshtein(&a, &c) <= levenshtein(&a, &b) + levenshtein(&b, &c));
    }

    #[test]
    fn distance_to_empty_is_length(a in arb_seq(20)) {
        let empty: [u8; 0] = [];
        prop_assert_eq!(levenshtein(&a, &empty), a.len());
        prop_assert_eq!(optimal_string_alignment(&empty, &a), a.len());
        prop_assert_eq!(damerau_levenshtein(&a, &empty), a.len());
        prop_assert_eq!(lcs_distance(&a, &empty), a.len());
    }

    #[test]
    fn osa_matches_full_matrix(a in arb_seq(24), b in arb_seq(24)) {
        prop_assert_eq!(optimal_string_alignment(&a, &b), osa_reference(&a, &b));
    }

    #[test]
    fn osa_bounded_agrees(a in arb_seq(20), b in arb_seq(20), k in 0usize..10) {
        let d = optimal_string_alignment(&a, &b);
        let expected = (d <= k).then_some(d);
        prop_assert_eq!(optimal_string_alignment_bounded(&a, &b, k), expected);
    }

    #[test]
    fn osa_unit_weights_agree(a in arb_seq(20), b in arb_seq(20)) {
        let weighted = optimal_string_alignment_weighted(&a, &b, &EditCosts::default()).unwrap();
        prop_assert_eq!(weighted, optimal_string_alignment(&a, &b) as f64);
    }

    #[test]
    fn damerau_ordering(a in arb_seq(20), b in arb_seq(20)) {
        let dl = damerau_levenshtein(&a, &b);
        let osa = optimal_string_alignment(&a, &b);
        let lev = levenshtein(&a, &b);
        prop_assert!(dl <= osa);
        prop_assert!(osa <= lev);
        prop_assert_eq!(dl, damerau_levenshtein(&b, &a));
    }

    #[test]
    fn damerau_triangle_inequality(a in arb_seq(12), b in arb_seq(12), c in arb_seq(12)) {
        prop_assert!(
            damerau_levenshtein(&a, &c) <= damerau_levenshtein(&a, &b) + damerau_levenshtein(&b, &c)
        );
    }

    #[test]
    fn damerau_unit_weights_agree(a in arb_seq(20), b in arb_seq(20)) {
        let weighted = damerau_levenshtein_weighted(&a, &b, &EditCosts::default()).unwrap();
        prop_assert_eq!(weighted, damerau_levenshtein(&a, &b) as f64);
    }

    #[test]
    fn normalized_scores_in_range(a in arb_seq(20), b in arb_seq(20)) {
        for score in [
            levenshtein_similarity(&a, &b),
            optimal_string_alignment_similarity(&a, &b),
            damerau_levenshtein_similarity(&a, &b),
            lcs_similarity(&a, &b),
            jaro_similarity(&a, &b),
            jaro_winkler_similarity(&a, &b),
            dice_coefficient(&a, &b),
            jaccard_index(&a, &b),
            overlap_coefficient(&a, &b),
        ] {
            prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
        }
    }

    #[test]
    fn jaro_winkler_in_range_for_valid_configs(
        prefix in arb_seq(12),
        a in arb_seq(8),
        b in arb_seq(8),
        prefix_size in 1usize..12,
        prefix_weight in 0.0f64..=0.25,
        boost_threshold in 0.0f64..=1.0,
    ) {
        let config = JaroWinklerConfig::new()
            .with_prefix_size(prefix_size)
            .with_prefix_weight(prefix_weight)
            .with_boost_threshold(boost_threshold);
        let a: Vec<u8> = prefix.iter().chain(&a).copied().collect();
        let b: Vec<u8> = prefix.iter().chain(&b).copied().collect();

        match jaro_winkler_similarity_with(&a, &b, &config) {
            Ok(score) => {
                prop_assert!(prefix_weight * prefix_size as f64 <= 1.0);
                prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
            }
            Err(_) => prop_assert!(prefix_weight * prefix_size as f64 > 1.0),
        }
    }

    #[test]
    fn hamming_counts_mismatches(a in arb_seq(20), b in arb_seq(20)) {
        let n = a.len().min(b.len());
        let (a, b) = (&a[..n], &b[..n]);
        let expected = a.iter().zip(b).filter(|(x, y)| x != y).count();
        prop_assert_eq!(hamming_distance(a, b).unwrap(), expected);
        prop_assert!(levenshtein(a, b) <= expected);
    }
}

// ============================================================================
// Subsequences
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn lcs_length_matches_full_matrix(a in arb_seq(24), b in arb_seq(24)) {
        prop_assert_eq!(lcs_length(&a, &b), lcs_reference(&a, &b));
    }

    #[test]
    fn lcs_symmetric_and_reflexive(a in arb_seq(20), b in arb_seq(20)) {
        prop_assert_eq!(lcs_length(&a, &b), lcs_length(&b, &a));
        prop_assert_eq!(lcs_length(&a, &a), a.len());
        prop_assert_eq!(jaro_winkler_similarity(&a, &a), 1.0);
    }

    #[test]
    fn lcs_sequence_is_common_and_longest(a in arb_seq(20), b in arb_seq(20)) {
        let lcs = longest_common_subsequence(&a, &b);
        prop_assert_eq!(lcs.len(), lcs_reference(&a, &b));
        prop_assert!(is_subsequence(&lcs, &a));
        prop_assert!(is_subsequence(&lcs, &b));
    }

    #[test]
    fn supersequence_contains_both(a in arb_seq(16), b in arb_seq(16)) {
        let scs = shortest_common_supersequence(&a, &b);
        prop_assert_eq!(scs.len(), a.len() + b.len() - lcs_reference(&a, &b));
        prop_assert_eq!(scs.len(), shortest_common_supersequence_length(&a, &b));
        prop_assert!(is_subsequence(&a, &scs));
        prop_assert!(is_subsequence(&b, &scs));
    }

    #[test]
    fn common_substring_matches_brute_force(a in arb_seq(20), b in arb_seq(20)) {
        let expected = longest_common_substring_reference(&a, &b);
        let sub = longest_common_substring(&a, &b);
        prop_assert_eq!(sub.len(), expected);
        prop_assert_eq!(longest_common_substring_length(&a, &b), expected);
        prop_assert!(sub.is_empty() || b.windows(sub.len()).any(|w| w == sub));
    }

    #[test]
    fn lis_is_strictly_increasing_and_longest(seq in arb_values()) {
        let indices = longest_increasing_subsequence_indices_by(&seq, i32::cmp);
        prop_assert_eq!(indices.len(), lis_reference(&seq));
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1] && seq[w[0]] < seq[w[1]]));
    }

    #[test]
    fn las_alternates_and_is_longest(seq in arb_values()) {
        let values = longest_alternating_subsequence(&seq);
        prop_assert_eq!(values.len(), las_reference(&seq));
        prop_assert!(values.windows(2).all(|w| w[0] != w[1]));
        prop_assert!(values
            .windows(3)
            .all(|w| (w[1] - w[0]).signum() * (w[2] - w[1]).signum() == -1));
    }
}

// ============================================================================
// Set similarity
// ============================================================================

proptest! {
    #[test]
    fn set_similarities_ordered_and_symmetric(a in arb_seq(12), b in arb_seq(12)) {
        let jaccard = jaccard_index(&a, &b);
        let dice = dice_coefficient(&a, &b);
        let overlap = overlap_coefficient(&a, &b);
        prop_assert!(jaccard <= dice + 1e-12);
        prop_assert!(dice <= overlap + 1e-12);
        prop_assert_eq!(jaccard, jaccard_index(&b, &a));
        prop_assert_eq!(dice, dice_coefficient(&b, &a));
    }
}

// ============================================================================
// Pattern search
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn searchers_agree(text in arb_seq(40), pattern in arb_seq(5)) {
        let expected = search_reference(&text, &pattern);
        prop_assert_eq!(&knuth_morris_pratt(&text, &pattern), &expected);
        prop_assert_eq!(&boyer_moore_horspool(&text, &pattern), &expected);
        prop_assert_eq!(&rabin_karp(&text, &pattern), &expected);
    }

    #[test]
    fn rabin_karp_small_base_still_exact(text in arb_seq(40), pattern in arb_seq(4)) {
        let searcher = RabinKarp::with_base(2);
        prop_assert_eq!(
            searcher.find_all(&text, &pattern).unwrap(),
            search_reference(&text, &pattern)
        );
    }

    #[test]
    fn z_function_matches_definition(s in arb_seq(30)) {
        let z = z_function(&s);
        for i in 1..s.len() {
            let run = s[i..].iter().zip(&s).take_while(|(x, y)| x == y).count();
            prop_assert_eq!(z[i], run);
        }
    }

    #[test]
    fn prefix_function_matches_definition(s in arb_seq(30)) {
        let pi = prefix_function(&s);
        for i in 0..s.len() {
            let prefix = &s[..=i];
            let border = (0..=i)
                .rev()
                .find(|&k| prefix[..k] == prefix[i + 1 - k..])
                .unwrap_or(0);
            prop_assert_eq!(pi[i], border);
        }
    }

    #[test]
    fn main_lorentz_matches_brute_force(s in prop::collection::vec(0u8..3, 0..30)) {
        prop_assert_eq!(main_lorentz(&s), repeats_reference(&s));
    }

    #[test]
    fn minimal_rotation_matches_brute_force(s in prop::collection::vec(0u8..3, 0..30)) {
        prop_assert_eq!(minimal_rotation(&s), rotation_reference(&s));
    }
}
