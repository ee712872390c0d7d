//! Indexed-parameter collection for mixture families.
//!
//! Hyperexponential-style mixtures take two same-length vectors, component
//! rates and component weights, addressed either positionally
//! (`rate, rate, rate` in encounter order) or by explicit index
//! (`rate2, rate0, rate1`, any order). A key is split into a prefix and a
//! maximal trailing digit run; the prefix (with trailing `_`, `-` or space
//! separators stripped) selects the role, the digit run (if any) the
//! explicit index. Keys without a digit run receive role-local sequential
//! implicit indices. The reconstructed index set per role must be dense
//! and duplicate-free on `[0, max]` or collection fails — no silent
//! truncation or padding.

use dk_core::{Error, ParamEntry, Result};

/// Aliases that classify a key prefix as a component rate.
const RATE_ALIASES: &[&str] = &["rate", "rates", "lambda", "lam", "lambdaphase"];

/// Aliases that classify a key prefix as a component weight.
const WEIGHT_ALIASES: &[&str] = &["prob", "probability", "p", "weight", "w"];

/// Dense per-role vectors reconstructed from a parameter bag.
#[derive(Debug, Clone, PartialEq)]
pub struct MixtureVectors {
    /// Component rates, ordered by index. Never empty.
    pub rates: Vec<f64>,
    /// Component weights, ordered by index; `None` when the caller
    /// supplied no weight keys at all.
    pub weights: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Rate,
    Weight,
}

impl Role {
    fn label(self) -> &'static str {
        match self {
            Role::Rate => "rate",
            Role::Weight => "weight",
        }
    }
}

/// Split `key` into a prefix and an optional explicit index.
///
/// The index is the maximal trailing ASCII-digit run; trailing `_`, `-`
/// and space separators are then stripped from the prefix.
fn split_key(key: &str) -> (String, Option<&str>) {
    let digits_at = key
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i);
    let (prefix, digits) = match digits_at {
        Some(i) => (&key[..i], Some(&key[i..])),
        None => (key, None),
    };
    let prefix = prefix.trim_end_matches(['_', '-', ' ']).to_ascii_lowercase();
    (prefix, digits)
}

fn classify(prefix: &str) -> Option<Role> {
    if RATE_ALIASES.contains(&prefix) {
        Some(Role::Rate)
    } else if WEIGHT_ALIASES.contains(&prefix) {
        Some(Role::Weight)
    } else {
        None
    }
}

/// Collapse `(index, value)` pairs into a dense, ordered vector.
fn densify(family: &'static str, role: Role, mut pairs: Vec<(usize, f64)>) -> Result<Vec<f64>> {
    pairs.sort_by_key(|&(i, _)| i);
    for window in pairs.windows(2) {
        if window[0].0 == window[1].0 {
            return Err(Error::InvalidParameter {
                family,
                reason: format!(
                    "duplicate index {} among `{}` parameters",
                    window[0].0,
                    role.label()
                ),
            });
        }
    }
    if let Some(&(max, _)) = pairs.last() {
        if max + 1 != pairs.len() {
            let missing = (0..=max)
                .find(|i| pairs.binary_search_by_key(i, |&(j, _)| j).is_err())
                .unwrap_or(0);
            return Err(Error::InvalidParameter {
                family,
                reason: format!(
                    "gap at index {} among `{}` parameters",
                    missing,
                    role.label()
                ),
            });
        }
    }
    Ok(pairs.into_iter().map(|(_, v)| v).collect())
}

/// Reconstruct mixture rate/weight vectors from a parameter bag.
///
/// Fails on duplicate or gapped indices, on an empty rate vector, or on a
/// weight vector whose length differs from the rate vector's.
pub fn collect(family: &'static str, entries: &[ParamEntry]) -> Result<MixtureVectors> {
    let mut rates: Vec<(usize, f64)> = Vec::new();
    let mut weights: Vec<(usize, f64)> = Vec::new();
    let mut next_implicit = [0usize; 2]; // role-local counters: [rate, weight]
    let mut saw_weight_key = false;

    for entry in entries {
        let (prefix, digits) = split_key(&entry.key);
        let Some(role) = classify(&prefix) else { continue };
        let index = match digits {
            Some(d) => d.parse::<usize>().map_err(|_| Error::InvalidParameter {
                family,
                reason: format!("unparseable index suffix `{}` in key `{}`", d, entry.key),
            })?,
            None => {
                let slot = &mut next_implicit[(role == Role::Weight) as usize];
                let i = *slot;
                *slot += 1;
                i
            }
        };
        match role {
            Role::Rate => rates.push((index, entry.value)),
            Role::Weight => {
                saw_weight_key = true;
                weights.push((index, entry.value));
            }
        }
    }

    let rates = densify(family, Role::Rate, rates)?;
    if rates.is_empty() {
        return Err(Error::MissingParameter { family, name: "rates" });
    }
    let weights = if saw_weight_key {
        let w = densify(family, Role::Weight, weights)?;
        if w.len() != rates.len() {
            return Err(Error::InvalidParameter {
                family,
                reason: format!(
                    "{} weights supplied for {} rates",
                    w.len(),
                    rates.len()
                ),
            });
        }
        Some(w)
    } else {
        None
    };

    Ok(MixtureVectors { rates, weights })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(pairs: &[(&str, f64)]) -> Vec<ParamEntry> {
        pairs.iter().map(|&(k, v)| ParamEntry::new(k, v)).collect()
    }

    #[test]
    fn test_implicit_sequential_indices() {
        let entries = bag(&[("rate", 1.0), ("rate", 2.0), ("rate", 3.0)]);
        let v = collect("hyperexponential", &entries).unwrap();
        assert_eq!(v.rates, vec![1.0, 2.0, 3.0]);
        assert!(v.weights.is_none());
    }

    #[test]
    fn test_explicit_out_of_order() {
        let entries = bag(&[("rate2", 3.0), ("rate0", 1.0), ("rate1", 2.0)]);
        let v = collect("hyperexponential", &entries).unwrap();
        assert_eq!(v.rates, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_separator_and_alias_prefixes() {
        let entries = bag(&[
            ("lambda_0", 4.0),
            ("Lambda_1", 5.0),
            ("weight_0", 0.3),
            ("w1", 0.7),
        ]);
        let v = collect("hyperexponential", &entries).unwrap();
        assert_eq!(v.rates, vec![4.0, 5.0]);
        assert_eq!(v.weights, Some(vec![0.3, 0.7]));
    }

    #[test]
    fn test_gap_fails() {
        let entries = bag(&[("rate0", 1.0), ("rate2", 3.0)]);
        let err = collect("hyperexponential", &entries).unwrap_err();
        assert!(err.to_string().contains("gap at index 1"));
    }

    #[test]
    fn test_duplicate_fails() {
        let entries = bag(&[("rate0", 1.0), ("rate0", 2.0)]);
        let err = collect("hyperexponential", &entries).unwrap_err();
        assert!(err.to_string().contains("duplicate index 0"));
    }

    #[test]
    fn test_implicit_collides_with_explicit() {
        // Implicit assignment starts at 0, so an explicit rate0 collides.
        let entries = bag(&[("rate", 1.0), ("rate0", 2.0)]);
        assert!(collect("hyperexponential", &entries).is_err());
    }

    #[test]
    fn test_missing_rates_fails() {
        let entries = bag(&[("weight", 1.0)]);
        assert!(collect("hyperexponential", &entries).is_err());
    }

    #[test]
    fn test_weight_length_mismatch_fails() {
        let entries = bag(&[("rate", 1.0), ("rate", 2.0), ("weight", 0.5)]);
        let err = collect("hyperexponential", &entries).unwrap_err();
        assert!(err.to_string().contains("1 weights supplied for 2 rates"));
    }

    #[test]
    fn test_unrecognized_prefixes_ignored() {
        let entries = bag(&[("rate", 1.0), ("temperature3", 300.0)]);
        let v = collect("hyperexponential", &entries).unwrap();
        assert_eq!(v.rates, vec![1.0]);
    }
}
