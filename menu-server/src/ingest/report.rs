//! Ingestion summary

use serde::Serialize;
use shared::models::LinkKind;
use thiserror::Error;

/// An option group reached again while it was still being descended.
///
/// Not fatal: the link to it is recorded and the descent is cut there.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("option group {option_group_id} re-entered via {via}")]
pub struct CyclicStructure {
    pub option_group_id: String,
    /// Descent path ending at the re-entered group
    pub via: String,
}

/// Row and link write counts for one run.
///
/// Counts are writes issued, not distinct rows: a group reached from two
/// products is counted twice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IngestReport {
    pub brand_id: String,
    pub categories: usize,
    pub products: usize,
    pub option_groups: usize,
    pub options: usize,
    pub product_option_group_links: usize,
    pub option_option_group_links: usize,
    pub option_group_option_links: usize,
    /// Groups reached again after being fully ingested; not re-descended
    pub skipped_revisits: usize,
    pub cycles: Vec<CyclicStructure>,
}

impl IngestReport {
    pub fn new(brand_id: impl Into<String>) -> Self {
        Self {
            brand_id: brand_id.into(),
            ..Default::default()
        }
    }

    pub fn links(&self, kind: LinkKind) -> usize {
        match kind {
            LinkKind::ProductOptionGroup => self.product_option_group_links,
            LinkKind::OptionOptionGroup => self.option_option_group_links,
            LinkKind::OptionGroupOption => self.option_group_option_links,
        }
    }

    pub(crate) fn record_link(&mut self, kind: LinkKind) {
        match kind {
            LinkKind::ProductOptionGroup => self.product_option_group_links += 1,
            LinkKind::OptionOptionGroup => self.option_option_group_links += 1,
            LinkKind::OptionGroupOption => self.option_group_option_links += 1,
        }
    }
}
