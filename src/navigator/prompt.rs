//! Operator prompts for the tree navigator.

use crate::catalog::CategoryRecord;
use crate::error::ApiError;
use std::collections::VecDeque;

/// Actions offered at every position in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigatorAction {
    CreateSubCategories,
    SelectSubCategory,
    GoUp,
    Exit,
}

impl NavigatorAction {
    pub const ALL: [NavigatorAction; 4] = [
        NavigatorAction::CreateSubCategories,
        NavigatorAction::SelectSubCategory,
        NavigatorAction::GoUp,
        NavigatorAction::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavigatorAction::CreateSubCategories => "Create sub-categories",
            NavigatorAction::SelectSubCategory => "Select a sub-category",
            NavigatorAction::GoUp => "Go up a category level",
            NavigatorAction::Exit => "Exit",
        }
    }
}

/// Source of operator decisions.
pub trait NavigatorPrompt {
    fn choose_action(&mut self) -> Result<NavigatorAction, ApiError>;

    /// Raw, unsplit list of names to create.
    fn ask_category_names(&mut self, separator: &str) -> Result<String, ApiError>;

    /// Index into `children` of the chosen category. `children` is never empty.
    fn choose_category(&mut self, children: &[CategoryRecord]) -> Result<usize, ApiError>;
}

/// Terminal prompts.
#[derive(Debug, Default)]
pub struct DialoguerPrompt;

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl NavigatorPrompt for DialoguerPrompt {
    fn choose_action(&mut self) -> Result<NavigatorAction, ApiError> {
        use dialoguer::Select;

        let labels: Vec<&str> = NavigatorAction::ALL.iter().map(|a| a.label()).collect();
        let selection = Select::new()
            .with_prompt("Choose an option from the below")
            .items(&labels)
            .default(0)
            .interact()?;
        NavigatorAction::ALL
            .get(selection)
            .copied()
            .ok_or_else(|| ApiError::InputError(format!("Unknown option {}", selection)))
    }

    fn ask_category_names(&mut self, separator: &str) -> Result<String, ApiError> {
        use dialoguer::Input;

        let names: String = Input::new()
            .with_prompt(format!(
                "Enter a '{}' separated list of category names",
                separator
            ))
            .allow_empty(true)
            .interact_text()?;
        Ok(names)
    }

    fn choose_category(&mut self, children: &[CategoryRecord]) -> Result<usize, ApiError> {
        use dialoguer::Select;

        let items: Vec<String> = children
            .iter()
            .map(|c| format!("{} [{}]", c.name, c.id))
            .collect();
        Ok(Select::new()
            .with_prompt("Choose a category from below")
            .items(&items)
            .default(0)
            .interact()?)
    }
}

/// One pre-recorded operator decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    Action(NavigatorAction),
    Names(String),
    /// Pick the child with this id
    Category(crate::types::CategoryId),
}

/// Prompt that replays a fixed list of decisions, for unattended runs and
/// tests. Running out of steps is an input error.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    steps: VecDeque<ScriptStep>,
}

impl ScriptedPrompt {
    pub fn new(steps: impl IntoIterator<Item = ScriptStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    fn next_step(&mut self, expected: &str) -> Result<ScriptStep, ApiError> {
        self.steps
            .pop_front()
            .ok_or_else(|| ApiError::InputError(format!("Script exhausted, expected {}", expected)))
    }
}

impl NavigatorPrompt for ScriptedPrompt {
    fn choose_action(&mut self) -> Result<NavigatorAction, ApiError> {
        match self.next_step("an action")? {
            ScriptStep::Action(action) => Ok(action),
            other => Err(ApiError::InputError(format!(
                "Expected an action, script has {:?}",
                other
            ))),
        }
    }

    fn ask_category_names(&mut self, _separator: &str) -> Result<String, ApiError> {
        match self.next_step("category names")? {
            ScriptStep::Names(names) => Ok(names),
            other => Err(ApiError::InputError(format!(
                "Expected category names, script has {:?}",
                other
            ))),
        }
    }

    fn choose_category(&mut self, children: &[CategoryRecord]) -> Result<usize, ApiError> {
        match self.next_step("a category")? {
            ScriptStep::Category(id) => children
                .iter()
                .position(|c| c.id == id)
                .ok_or_else(|| ApiError::InputError(format!("{} is not a sub-category", id))),
            other => Err(ApiError::InputError(format!(
                "Expected a category, script has {:?}",
                other
            ))),
        }
    }
}
