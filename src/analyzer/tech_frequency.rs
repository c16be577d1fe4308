use crate::normalizer::Resolver;
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

/// Canonical label -> occurrence count for one aggregation run.
///
/// First-seen order is tracked alongside the counts so ranking ties break
/// deterministically.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of a label.
    pub fn add(&mut self, label: &str) {
        match self.counts.get_mut(label) {
            Some(count) => *count += 1,
            None => {
                self.order.push(label.to_string());
                self.counts.insert(label.to_string(), 1);
            }
        }
    }

    /// Additively folds another table into this one. Counting is commutative,
    /// so sharded tables can be merged in any order.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for label in &other.order {
            let n = other.counts[label];
            match self.counts.get_mut(label) {
                Some(count) => *count += n,
                None => {
                    self.order.push(label.clone());
                    self.counts.insert(label.clone(), n);
                }
            }
        }
    }

    pub fn count(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Sum of all counts, i.e. how many tags were folded in.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Top `n` labels by count, descending. Equal counts keep first-seen
    /// order. `n` of zero yields an empty list; `n` past the number of
    /// distinct labels yields all of them.
    pub fn top_n(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = self
            .order
            .iter()
            .map(|label| (label.clone(), self.counts[label]))
            .collect();
        // stable sort over first-seen order, so ties stay put
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Trait defining the interface for the tag analyzer.
pub trait Analyzer {
    fn aggregate(&self, raw_tags: &[Value]) -> FrequencyTable;
    fn top_n(&self, table: &FrequencyTable, n: usize) -> Vec<(String, usize)>;
}

/// Implementation of the tag analyzer.
pub struct AnalyzerImpl {
    resolver: Resolver,
}

impl AnalyzerImpl {
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }
}

impl Analyzer for AnalyzerImpl {
    /// Resolves each raw tag and folds it into a frequency table. Non-string
    /// entries are skipped with a warning; one bad item never aborts the batch.
    fn aggregate(&self, raw_tags: &[Value]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for tag in raw_tags {
            match tag.as_str() {
                Some(raw) => table.add(self.resolver.resolve(raw)),
                None => warn!("Skipping non-string tag entry: {}", tag),
            }
        }
        table
    }

    fn top_n(&self, table: &FrequencyTable, n: usize) -> Vec<(String, usize)> {
        table.top_n(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::SynonymTable;
    use serde_json::json;

    fn analyzer() -> AnalyzerImpl {
        AnalyzerImpl::new(Resolver::new(SynonymTable::builtin()))
    }

    fn tags(raw: &[&str]) -> Vec<Value> {
        raw.iter().map(|t| json!(t)).collect()
    }

    #[test]
    fn folds_synonyms_into_canonical_counts() {
        let table = analyzer().aggregate(&tags(&[
            "AWS",
            "aws",
            "Amazon Web Services",
            "k8s",
            "Kubernetes",
        ]));
        assert_eq!(table.count("AWS"), 3);
        assert_eq!(table.count("Kubernetes"), 2);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn counts_are_invariant_under_permutation() {
        let forward = analyzer().aggregate(&tags(&["aws", "Rust", "k8s", "aws", "gke"]));
        let backward = analyzer().aggregate(&tags(&["gke", "aws", "k8s", "Rust", "aws"]));
        assert_eq!(forward.count("AWS"), backward.count("AWS"));
        assert_eq!(forward.count("Kubernetes"), backward.count("Kubernetes"));
        assert_eq!(forward.count("Rust"), backward.count("Rust"));
        assert_eq!(forward.len(), backward.len());
    }

    #[test]
    fn total_equals_input_length() {
        let input = tags(&["aws", "azure", "gcp", "aws", "docker", "Rust"]);
        let table = analyzer().aggregate(&input);
        assert_eq!(table.total(), input.len());
    }

    #[test]
    fn empty_input_yields_empty_table_and_report() {
        let table = analyzer().aggregate(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert!(table.top_n(15).is_empty());
    }

    #[test]
    fn non_string_entries_are_skipped() {
        let table = analyzer().aggregate(&[json!("aws"), json!(42), json!(null), json!("aws")]);
        assert_eq!(table.count("AWS"), 2);
        assert_eq!(table.total(), 2);
    }

    #[test]
    fn top_n_truncates_and_sorts_descending() {
        let table = analyzer().aggregate(&tags(&["aws", "aws", "aws", "k8s", "k8s", "Rust"]));
        assert_eq!(table.top_n(1), vec![("AWS".to_string(), 3)]);
        let top2 = table.top_n(2);
        assert_eq!(top2[0], ("AWS".to_string(), 3));
        assert_eq!(top2[1], ("Kubernetes".to_string(), 2));
    }

    #[test]
    fn top_n_past_table_size_returns_everything() {
        let table = analyzer().aggregate(&tags(&["aws", "aws", "aws", "k8s", "k8s"]));
        let top = table.top_n(5);
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn top_n_zero_is_empty() {
        let table = analyzer().aggregate(&tags(&["aws"]));
        assert!(table.top_n(0).is_empty());
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let mut table = FrequencyTable::new();
        for label in ["Grafana", "Prometheus", "Grafana", "Prometheus", "Datadog"] {
            table.add(label);
        }
        let top = table.top_n(3);
        assert_eq!(top[0], ("Grafana".to_string(), 2));
        assert_eq!(top[1], ("Prometheus".to_string(), 2));
        assert_eq!(top[2], ("Datadog".to_string(), 1));
    }

    #[test]
    fn merge_is_additive() {
        let mut left = FrequencyTable::new();
        left.add("AWS");
        left.add("AWS");
        left.add("Docker");

        let mut right = FrequencyTable::new();
        right.add("AWS");
        right.add("Terraform");

        left.merge(&right);
        assert_eq!(left.count("AWS"), 3);
        assert_eq!(left.count("Docker"), 1);
        assert_eq!(left.count("Terraform"), 1);
        assert_eq!(left.total(), 5);
    }
}
