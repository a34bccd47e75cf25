//! BatchCategoryCreator: create many siblings from one delimited string.

use super::creator::{CategoryCreator, CreationOutcome};
use crate::catalog::CategoryStore;
use crate::types::CategoryId;
use tracing::info;

/// Progress after one raw piece of input was handled.
#[derive(Debug)]
pub struct BatchProgress<'o> {
    /// 1-based position of the piece just handled
    pub position: usize,
    /// Number of raw pieces, skipped ones included
    pub total: usize,
    /// None when the piece was blank and skipped
    pub outcome: Option<&'o CreationOutcome>,
}

/// Outcomes in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<CreationOutcome>,
    pub skipped: usize,
}

impl BatchReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &CreationOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &CreationOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn created_ids(&self) -> Vec<CategoryId> {
        self.outcomes.iter().filter_map(|o| o.category_id()).collect()
    }
}

/// Split raw input on `separator` and trim each piece. Blank pieces are kept
/// so progress can count them.
pub fn split_names<'r>(raw: &'r str, separator: &str) -> Vec<&'r str> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(separator).map(str::trim).collect()
}

pub struct BatchCategoryCreator<'a, S: CategoryStore + ?Sized> {
    creator: CategoryCreator<'a, S>,
    separator: String,
}

impl<'a, S: CategoryStore + ?Sized> BatchCategoryCreator<'a, S> {
    pub fn new(creator: CategoryCreator<'a, S>, separator: impl Into<String>) -> Self {
        Self {
            creator,
            separator: separator.into(),
        }
    }

    pub fn creator(&self) -> &CategoryCreator<'a, S> {
        &self.creator
    }

    /// Create every non-blank name in `raw` under `parent_id`, in order.
    ///
    /// `on_progress` is called once per raw piece, after that piece was
    /// handled.
    pub fn create_all<F>(&self, raw: &str, parent_id: CategoryId, mut on_progress: F) -> BatchReport
    where
        F: FnMut(&BatchProgress<'_>),
    {
        let names = split_names(raw, &self.separator);
        let total = names.len();
        let mut report = BatchReport::default();

        for (i, name) in names.into_iter().enumerate() {
            if name.is_empty() {
                report.skipped += 1;
                on_progress(&BatchProgress {
                    position: i + 1,
                    total,
                    outcome: None,
                });
                continue;
            }

            report.outcomes.push(self.creator.create(name, Some(parent_id)));
            on_progress(&BatchProgress {
                position: i + 1,
                total,
                outcome: report.outcomes.last(),
            });
        }

        info!(
            parent_id,
            created = report.succeeded().count(),
            failed = report.failed().count(),
            skipped = report.skipped,
            "Batch creation finished"
        );
        report
    }
}
