//! Interactive session loop for `create-category-tree`.

use super::prompt::{NavigatorAction, NavigatorPrompt};
use super::state::CategoryTreeNavigator;
use crate::catalog::CategoryStore;
use crate::category::batch::{BatchCategoryCreator, BatchProgress};
use crate::error::ApiError;
use crate::tooling::output;
use std::io::Write;
use tracing::info;

/// Drives a navigator from prompt decisions until the operator exits.
///
/// Catalog and navigation failures are printed and the loop continues; only
/// prompt and terminal failures end the session early.
pub struct TreeSession<'a, S, P, W>
where
    S: CategoryStore + ?Sized,
    P: NavigatorPrompt,
    W: Write,
{
    navigator: CategoryTreeNavigator<'a, S>,
    batch: BatchCategoryCreator<'a, S>,
    prompt: P,
    out: W,
    separator: String,
    color: bool,
}

impl<'a, S, P, W> TreeSession<'a, S, P, W>
where
    S: CategoryStore + ?Sized,
    P: NavigatorPrompt,
    W: Write,
{
    pub fn new(
        navigator: CategoryTreeNavigator<'a, S>,
        batch: BatchCategoryCreator<'a, S>,
        prompt: P,
        out: W,
        separator: impl Into<String>,
    ) -> Self {
        Self {
            navigator,
            batch,
            prompt,
            out,
            separator: separator.into(),
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn navigator(&self) -> &CategoryTreeNavigator<'a, S> {
        &self.navigator
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until `Exit` is chosen.
    pub fn run(&mut self) -> Result<(), ApiError> {
        info!(
            start = self.navigator.current_id(),
            scope = %self.navigator.scope(),
            "Tree session started"
        );
        loop {
            let current = self.navigator.current()?;
            write!(
                self.out,
                "{}",
                output::format_position(&current.name, current.id, self.color)
            )?;
            writeln!(self.out)?;

            match self.prompt.choose_action()? {
                NavigatorAction::CreateSubCategories => self.create_children()?,
                NavigatorAction::SelectSubCategory => {
                    match self.navigator.descend(&mut self.prompt) {
                        Ok(_) => {}
                        Err(ApiError::Navigation(e)) => {
                            writeln!(self.out, "{}", output::format_error(&e, self.color))?
                        }
                        Err(e) => return Err(e),
                    }
                }
                NavigatorAction::GoUp => {
                    if let Err(e) = self.navigator.ascend() {
                        writeln!(self.out, "{}", output::format_error(&e, self.color))?;
                    }
                }
                NavigatorAction::Exit => {
                    writeln!(self.out, "Exiting")?;
                    break;
                }
            }
        }
        info!(end = self.navigator.current_id(), "Tree session finished");
        Ok(())
    }

    fn create_children(&mut self) -> Result<(), ApiError> {
        write!(
            self.out,
            "{}",
            output::format_section("Mass create sub-categories.", self.color)
        )?;
        writeln!(self.out)?;
        let raw = self.prompt.ask_category_names(&self.separator)?;

        let color = self.color;
        let out = &mut self.out;
        let mut write_result: std::io::Result<()> = Ok(());
        self.navigator.create_children(&self.batch, &raw, |progress| {
            if write_result.is_ok() {
                write_result = write_progress(out, progress, color);
            }
        });
        write_result?;
        Ok(())
    }
}

fn write_progress<W: Write>(
    out: &mut W,
    progress: &BatchProgress<'_>,
    color: bool,
) -> std::io::Result<()> {
    if let Some(outcome) = progress.outcome {
        writeln!(out, "{}", output::format_batch_outcome(outcome, color))?;
    }
    writeln!(out, "{}", output::format_progress(progress))
}
