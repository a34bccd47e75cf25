use quickcreate::catalog::{CategoryStore, InMemoryCatalog, StoreScope};
use quickcreate::category::{BatchCategoryCreator, CategoryCreator};
use quickcreate::config::{CategoryDefaults, QuickCreateConfig};
use quickcreate::error::{ApiError, CatalogError, NavigationError};
use quickcreate::index::PathIndex;
use quickcreate::navigator::{
    CategoryTreeNavigator, NavigatorAction, ScriptStep, ScriptedPrompt, TreeSession,
};
use quickcreate::tooling::cli::CliContext;

use crate::integration::support::{entry, sample_catalog};

#[test]
fn starts_at_store_root() {
    let catalog = sample_catalog();
    let navigator = CategoryTreeNavigator::new(&catalog, StoreScope(1)).unwrap();
    assert_eq!(navigator.current_id(), 2);
}

#[test]
fn unknown_store_cannot_start() {
    let catalog = sample_catalog();
    assert!(matches!(
        CategoryTreeNavigator::new(&catalog, StoreScope(9)),
        Err(CatalogError::UnknownStore(9))
    ));
}

#[test]
fn ascend_at_root_keeps_position() {
    let catalog = sample_catalog();
    let mut navigator = CategoryTreeNavigator::at(&catalog, StoreScope(1), 1);

    let err = navigator.ascend().unwrap_err();
    assert!(matches!(err, NavigationError::NoParent(1)));
    assert_eq!(navigator.current_id(), 1);
}

#[test]
fn ascend_moves_to_live_parent() {
    let catalog = sample_catalog();
    let mut navigator = CategoryTreeNavigator::at(&catalog, StoreScope(1), 4);
    assert_eq!(navigator.ascend().unwrap(), 3);
    assert_eq!(navigator.ascend().unwrap(), 2);
    assert_eq!(navigator.ascend().unwrap(), 1);
    assert!(navigator.ascend().is_err());
    assert_eq!(navigator.current_id(), 1);
}

#[test]
fn descend_on_leaf_reports_no_sub_categories() {
    let catalog = sample_catalog();
    let mut navigator = CategoryTreeNavigator::at(&catalog, StoreScope(1), 4);
    let mut prompt = ScriptedPrompt::new(vec![]);

    let err = navigator.descend(&mut prompt).unwrap_err();
    assert!(matches!(
        err,
        ApiError::Navigation(NavigationError::NoSubCategories(4))
    ));
    assert_eq!(navigator.current_id(), 4);
}

#[test]
fn descend_sees_children_created_after_start() {
    let catalog = sample_catalog();
    let index = PathIndex::build(catalog.list_all(StoreScope::DEFAULT).unwrap());
    let creator = CategoryCreator::new(&catalog, &index, CategoryDefaults::default(), 2);
    let batch = BatchCategoryCreator::new(creator, ",");

    let mut navigator = CategoryTreeNavigator::at(&catalog, StoreScope(1), 5);
    let report = navigator.create_children(&batch, "Tools", |_| {});
    let tools = report.created_ids()[0];
    assert!(index.lookup_by_id(tools).is_none());

    let mut prompt = ScriptedPrompt::new(vec![ScriptStep::Category(tools)]);
    assert_eq!(navigator.descend(&mut prompt).unwrap(), tools);
    assert_eq!(navigator.current_id(), tools);
}

#[test]
fn scripted_session_walks_and_creates() {
    let catalog = sample_catalog();
    let index = PathIndex::build(catalog.list_all(StoreScope::DEFAULT).unwrap());
    let creator = CategoryCreator::new(&catalog, &index, CategoryDefaults::default(), 2);
    let batch = BatchCategoryCreator::new(creator, ",");
    let navigator = CategoryTreeNavigator::new(&catalog, StoreScope(1)).unwrap();

    let prompt = ScriptedPrompt::new(vec![
        ScriptStep::Action(NavigatorAction::SelectSubCategory),
        ScriptStep::Category(3),
        ScriptStep::Action(NavigatorAction::SelectSubCategory),
        ScriptStep::Category(4),
        ScriptStep::Action(NavigatorAction::SelectSubCategory),
        ScriptStep::Action(NavigatorAction::CreateSubCategories),
        ScriptStep::Names("Cases, ,Chargers".to_string()),
        ScriptStep::Action(NavigatorAction::GoUp),
        ScriptStep::Action(NavigatorAction::Exit),
    ]);

    let mut session = TreeSession::new(navigator, batch, prompt, Vec::new(), ",");
    session.run().unwrap();
    assert_eq!(session.navigator().current_id(), 3);
    let output = String::from_utf8(session.into_output()).unwrap();

    assert!(output.contains("You are currently in: Default Category [2]"));
    assert!(output.contains("You are currently in: Phones [4]"));
    assert!(output.contains("Category 4 has no sub-categories."));
    assert!(output.contains("Cases has been created! The category ID is 6"));
    assert!(output.contains("Chargers has been created! The category ID is 7"));
    assert!(output.contains("3/3"));
    assert!(output.trim_end().ends_with("Exiting"));

    let children = catalog.get_children(4, None).unwrap();
    let names: Vec<&str> = children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Cases", "Chargers"]);
}

#[test]
fn session_reports_missing_parent_and_continues() {
    let catalog = InMemoryCatalog::with_entries(
        vec![entry(1, "Root Catalog", &[1]), entry(2, "Default Category", &[1, 2])],
        vec![crate::integration::support::default_store()],
    );
    let context = CliContext::with_store(QuickCreateConfig::default(), catalog);

    let prompt = ScriptedPrompt::new(vec![
        ScriptStep::Action(NavigatorAction::GoUp),
        ScriptStep::Action(NavigatorAction::GoUp),
        ScriptStep::Action(NavigatorAction::Exit),
    ]);
    let output = context.run_tree(prompt, Vec::new()).unwrap();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("You are currently in: Root Catalog [1]"));
    assert!(output.contains("No parent category found for 1."));
}

#[test]
fn exhausted_script_ends_session_with_input_error() {
    let catalog = sample_catalog();
    let context = CliContext::with_store(QuickCreateConfig::default(), catalog);
    let prompt = ScriptedPrompt::new(vec![ScriptStep::Action(NavigatorAction::GoUp)]);
    assert!(matches!(
        context.run_tree(prompt, Vec::new()),
        Err(ApiError::InputError(_))
    ));
}
