//! Static, ordered collection of uniquely named workloads.

use std::sync::Arc;

use crate::{
    error::HarnessError,
    fixture::TextFixture,
    workload::{self, Workload},
};

/// Insertion-ordered workload registry.
pub struct Registry {
    workloads: Vec<Box<dyn Workload>>,
}

impl Registry {
    pub fn new() -> Self {
        Self { workloads: Vec::new() }
    }

    /// Register a workload. A duplicate name is a configuration error.
    pub fn register(&mut self, workload: Box<dyn Workload>) -> Result<(), HarnessError> {
        if self.workloads.iter().any(|w| w.name() == workload.name()) {
            return Err(HarnessError::Config(format!(
                "workload '{}' is already registered",
                workload.name()
            )));
        }
        self.workloads.push(workload);
        Ok(())
    }

    /// Insertion-ordered view of every registered workload. The iterator can
    /// be restarted as often as needed without side effects.
    pub fn all(&self) -> impl Iterator<Item = &dyn Workload> {
        self.workloads.iter().map(|w| &**w)
    }

    pub fn len(&self) -> usize {
        self.workloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workloads.is_empty()
    }

    /// The built-in payload set, in its fixed registration order.
    pub fn standard(fixture: Arc<TextFixture>) -> Result<Self, HarnessError> {
        let mut registry = Self::new();
        for scan in workload::pattern::match_workloads(Arc::clone(&fixture)) {
            registry.register(scan)?;
        }
        registry.register(Box::new(workload::crypto::EcdsaSign::new()))?;
        registry.register(Box::new(workload::crypto::EcdsaVerify::new()))?;
        registry.register(Box::new(workload::crypto::Sha256Hash::new()))?;
        registry.register(Box::new(workload::escape::HtmlEscape::new(Arc::clone(
            &fixture,
        ))))?;
        registry.register(Box::new(workload::escape::HtmlUnescape::new(Arc::clone(
            &fixture,
        ))))?;
        use workload::compress::Corpus;
        for corpus in [Corpus::Text, Corpus::Digits] {
            registry.register(Box::new(workload::compress::GzipCompress::new(
                Arc::clone(&fixture),
                corpus,
            )))?;
            registry.register(Box::new(workload::compress::GzipDecompress::new(
                Arc::clone(&fixture),
                corpus,
            )?))?;
        }
        Ok(registry)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
