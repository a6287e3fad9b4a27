//! Weighted string similarity on a 0 to 100 scale. The plain edit ratio is
//! compared with token order insensitive ratios and, once the lengths
//! differ a lot, with scaled down partial ratios; the best one wins.
use itertools::Itertools;
use std::collections::BTreeSet;

const UNBASE_SCALE: f64 = 0.95;

pub fn ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// Best ratio of the shorter string against every equally long window of
/// the longer one.
fn partial_ratio(a: &str, b: &str) -> f64 {
    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let width = shorter.chars().count();
    if width == 0 {
        return 0.0;
    }
    let longer = longer.chars().collect::<Vec<_>>();
    longer
        .windows(width)
        .map(|window| ratio(shorter, &window.iter().collect::<String>()))
        .fold(0.0, f64::max)
}

fn sorted_tokens(text: &str) -> String {
    text.split_whitespace().sorted().join(" ")
}

fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a = a.split_whitespace().collect::<BTreeSet<_>>();
    let tokens_b = b.split_whitespace().collect::<BTreeSet<_>>();
    let common = tokens_a.intersection(&tokens_b).join(" ");
    let only_a = tokens_a.difference(&tokens_b).join(" ");
    let only_b = tokens_b.difference(&tokens_a).join(" ");

    if !common.is_empty() && (only_a.is_empty() || only_b.is_empty()) {
        return 100.0;
    }

    let with_a = [common.as_str(), only_a.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .join(" ");
    let with_b = [common.as_str(), only_b.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .join(" ");

    [
        ratio(&common, &with_a),
        ratio(&common, &with_b),
        ratio(&with_a, &with_b),
    ]
    .into_iter()
    .fold(0.0, f64::max)
}

fn partial_token_ratio(a: &str, b: &str) -> f64 {
    let tokens_a = a.split_whitespace().collect::<BTreeSet<_>>();
    let tokens_b = b.split_whitespace().collect::<BTreeSet<_>>();
    if tokens_a.intersection(&tokens_b).next().is_some() {
        return 100.0;
    }
    partial_ratio(&sorted_tokens(a), &sorted_tokens(b))
}

pub fn weighted_ratio(a: &str, b: &str) -> f64 {
    let (len_a, len_b) = (a.chars().count(), b.chars().count());
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    let length_ratio = len_a.max(len_b) as f64 / len_a.min(len_b) as f64;
    let plain = ratio(a, b);

    if length_ratio < 1.5 {
        let token = token_sort_ratio(a, b).max(token_set_ratio(a, b));
        return plain.max(token * UNBASE_SCALE);
    }

    let partial_scale = if length_ratio < 8.0 { 0.9 } else { 0.6 };
    plain
        .max(partial_ratio(a, b) * partial_scale)
        .max(partial_token_ratio(a, b) * UNBASE_SCALE * partial_scale)
}
