//! Recursive menu ingestion
//!
//! Walks a parsed menu document depth-first and pushes every category,
//! product, option group and option into a [`MenuStore`], together with the
//! links implied by their nesting. Option groups are shared between products
//! and options, so the walk is over a graph: each group is descended at most
//! once per run and a group that reaches itself is cut off and reported.

mod dry_run;
mod report;
mod tracker;

pub use dry_run::DryRunStore;
pub use report::{CyclicStructure, IngestReport};
pub use tracker::{TraversalTracker, Visit};

use shared::models::{Category, LinkKind, MenuOption, OptionGroup, Product};
use thiserror::Error;

use crate::db::{RepoError, RepoResult};
use crate::document::{self, Document, DocumentError, Node};

/// Write side of the menu schema.
///
/// Upserts overwrite every column of an existing row; links are
/// insert-if-absent.
#[allow(async_fn_in_trait)]
pub trait MenuStore {
    async fn upsert_category(&mut self, category: &Category) -> RepoResult<()>;
    async fn upsert_product(&mut self, product: &Product) -> RepoResult<()>;
    async fn upsert_option_group(&mut self, group: &OptionGroup) -> RepoResult<()>;
    async fn upsert_option(&mut self, option: &MenuOption) -> RepoResult<()>;
    async fn ensure_link(&mut self, kind: LinkKind, left_id: &str, right_id: &str)
    -> RepoResult<()>;
}

/// Errors that abort an ingestion run
#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    MalformedDocument(#[from] DocumentError),

    #[error("persistence failed: {0}")]
    Persistence(#[from] RepoError),
}

/// Parent of an option group
#[derive(Debug, Clone, Copy)]
enum Attachment<'a> {
    Product(&'a str),
    Option(&'a str),
}

/// Ingest a whole menu document into `store`.
///
/// Stops at the first malformed node or failed write. The store is left with
/// whatever was written before the failure; callers roll back.
pub async fn ingest_menu<S: MenuStore>(
    store: &mut S,
    doc: &Document<'_>,
) -> Result<IngestReport, IngestError> {
    let brand_id = document::brand_id(doc)?;
    let categories = document::categories(doc)?;
    tracing::info!(brand_id = %brand_id, categories = categories.len(), "Menu ingestion started");

    let mut ingestor = Ingestor {
        store,
        tracker: TraversalTracker::new(),
        report: IngestReport::new(brand_id.clone()),
        brand_id,
    };
    for category in categories {
        ingestor.ingest_category(category).await?;
    }

    let report = ingestor.report;
    tracing::info!(
        brand_id = %report.brand_id,
        categories = report.categories,
        products = report.products,
        option_groups = report.option_groups,
        options = report.options,
        skipped_revisits = report.skipped_revisits,
        cycles = report.cycles.len(),
        "Menu ingestion finished"
    );
    Ok(report)
}

struct Ingestor<'s, S> {
    store: &'s mut S,
    brand_id: String,
    tracker: TraversalTracker,
    report: IngestReport,
}

impl<S: MenuStore> Ingestor<'_, S> {
    async fn ingest_category(&mut self, node: Node<'_, '_>) -> Result<(), IngestError> {
        let category = document::read_category(node, &self.brand_id)?;
        tracing::debug!(category_id = %category.id, "Ingesting category");
        self.store.upsert_category(&category).await?;
        self.report.categories += 1;

        for product in document::products(node) {
            self.ingest_product(product, &category.id).await?;
        }
        Ok(())
    }

    async fn ingest_product(
        &mut self,
        node: Node<'_, '_>,
        category_id: &str,
    ) -> Result<(), IngestError> {
        let product = document::read_product(node, &self.brand_id, category_id)?;
        self.store.upsert_product(&product).await?;
        self.report.products += 1;

        for group in document::modifier_groups(node) {
            self.ingest_option_group(group, Attachment::Product(&product.id))
                .await?;
        }
        Ok(())
    }

    async fn ingest_option_group(
        &mut self,
        node: Node<'_, '_>,
        attachment: Attachment<'_>,
    ) -> Result<(), IngestError> {
        let group = document::read_option_group(node, &self.brand_id)?;

        match self.tracker.begin(&group.id) {
            Visit::Cycle => {
                let cycle = CyclicStructure {
                    via: self.tracker.path_to(&group.id),
                    option_group_id: group.id,
                };
                tracing::warn!(
                    option_group_id = %cycle.option_group_id,
                    via = %cycle.via,
                    "Cyclic option group, not descending"
                );
                self.attach(&cycle.option_group_id, attachment).await?;
                self.report.cycles.push(cycle);
                Ok(())
            }
            Visit::AlreadyProcessed => {
                tracing::trace!(option_group_id = %group.id, "Option group already ingested");
                self.store.upsert_option_group(&group).await?;
                self.report.option_groups += 1;
                self.attach(&group.id, attachment).await?;
                // Options at this position still land; their nested groups do not
                self.ingest_options(node, &group.id, false).await?;
                self.report.skipped_revisits += 1;
                Ok(())
            }
            Visit::Enter => {
                tracing::trace!(
                    option_group_id = %group.id,
                    depth = self.tracker.depth(),
                    "Descending into option group"
                );
                self.store.upsert_option_group(&group).await?;
                self.report.option_groups += 1;
                self.attach(&group.id, attachment).await?;
                self.ingest_options(node, &group.id, true).await?;
                self.tracker.finish(&group.id);
                Ok(())
            }
        }
    }

    async fn ingest_options(
        &mut self,
        group_node: Node<'_, '_>,
        group_id: &str,
        descend: bool,
    ) -> Result<(), IngestError> {
        for option_node in document::options(group_node) {
            let option = document::read_option(option_node, &self.brand_id)?;
            self.store.upsert_option(&option).await?;
            self.report.options += 1;
            self.link(LinkKind::OptionGroupOption, group_id, &option.id)
                .await?;

            if !descend {
                continue;
            }
            for nested in document::modifier_groups(option_node) {
                Box::pin(self.ingest_option_group(nested, Attachment::Option(&option.id))).await?;
            }
        }
        Ok(())
    }

    async fn attach(&mut self, group_id: &str, attachment: Attachment<'_>) -> RepoResult<()> {
        match attachment {
            Attachment::Product(product_id) => {
                self.link(LinkKind::ProductOptionGroup, product_id, group_id)
                    .await
            }
            Attachment::Option(option_id) => {
                self.link(LinkKind::OptionOptionGroup, option_id, group_id)
                    .await
            }
        }
    }

    async fn link(&mut self, kind: LinkKind, left_id: &str, right_id: &str) -> RepoResult<()> {
        self.store.ensure_link(kind, left_id, right_id).await?;
        self.report.record_link(kind);
        Ok(())
    }
}
