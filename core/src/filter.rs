//! Pattern-based selection of registered workloads.

use regex::Regex;

use crate::{error::HarnessError, registry::Registry, workload::Workload};

/// Selector narrowing the registry to the workloads whose names match a
/// regular expression.
#[derive(Debug)]
pub struct NameFilter {
    pattern: Regex,
}

impl NameFilter {
    /// Compile `pattern`. An invalid pattern is a configuration error and is
    /// reported before any benchmarking starts.
    pub fn new(pattern: &str) -> Result<Self, HarnessError> {
        let compiled = Regex::new(pattern)
            .map_err(|e| HarnessError::Config(format!("invalid filter pattern '{pattern}': {e}")))?;
        Ok(Self { pattern: compiled })
    }

    pub fn matches(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }

    /// Sub-sequence of registered workloads whose names match, in
    /// registration order. Matching nothing is valid and yields an empty
    /// selection.
    pub fn select<'a>(&self, registry: &'a Registry) -> Vec<&'a dyn Workload> {
        registry.all().filter(|w| self.matches(w.name())).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::workload::Operation;

    struct Named(&'static str);

    impl Workload for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn setup(&self) -> Result<Operation, HarnessError> {
            Ok(Box::new(|| Ok(())))
        }

        fn report(&self, total_ops: u64, _duration: Duration) -> String {
            format!("{total_ops} ops")
        }
    }

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        for name in ["alpha.one", "beta.two", "alpha.three"] {
            registry.register(Box::new(Named(name))).unwrap();
        }
        registry
    }

    #[test]
    fn invalid_pattern_is_a_config_error() {
        let err = NameFilter::new("[").unwrap_err();
        assert!(matches!(err, HarnessError::Config(_)));
    }

    #[test]
    fn select_preserves_registration_order() {
        let registry = sample_registry();
        let filter = NameFilter::new("alpha").unwrap();
        let names: Vec<&str> = filter.select(&registry).iter().map(|w| w.name()).collect();
        assert_eq!(names, ["alpha.one", "alpha.three"]);
    }

    #[test]
    fn zero_matches_is_valid() {
        let registry = sample_registry();
        let filter = NameFilter::new("gamma").unwrap();
        assert!(filter.select(&registry).is_empty());
    }

    #[test]
    fn match_all_selects_everything_in_order() {
        let registry = sample_registry();
        let filter = NameFilter::new(".*").unwrap();
        let names: Vec<&str> = filter.select(&registry).iter().map(|w| w.name()).collect();
        assert_eq!(names, ["alpha.one", "beta.two", "alpha.three"]);
    }
}
