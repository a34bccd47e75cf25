use proptest::prelude::*;
use quickcreate::catalog::{CategoryRecord, CategoryStore, StoreScope};
use quickcreate::index::{quote_delimiter, standardize, unquote_delimiter, PathIndex, ESCAPE};
use quickcreate::types::CategoryId;

use crate::integration::support::{record, sample_catalog};

/// Tree under a synthetic root from `(raw name, parent selector)` pairs.
///
/// Names get a unique `n<i>-` prefix so no two fold to the same key. A name
/// ending in the escape character gets a letter appended, since such a name
/// cannot be split back out of a joined path.
fn arbitrary_tree(specs: &[(String, u8)]) -> Vec<CategoryRecord> {
    let mut records = vec![record(1, "Root", &[1])];
    for (i, (raw, selector)) in specs.iter().enumerate() {
        let id = i as CategoryId + 2;
        let mut name = format!("n{i}-{raw}");
        if name.ends_with(ESCAPE) {
            name.push('x');
        }
        let parent = usize::from(*selector) % (i + 1);
        let mut path = records[parent].path.ids().to_vec();
        path.push(id);
        records.push(record(id, &name, &path));
    }
    records
}

proptest! {
    #[test]
    fn escaping_round_trips_any_name(name in ".*") {
        prop_assert_eq!(unquote_delimiter(&quote_delimiter(&name)), name);
    }

    #[test]
    fn escaping_round_trips_names_with_delimiters(parts in proptest::collection::vec("[a-zA-Z \\\\]{0,6}", 1..5)) {
        let name = parts.join("/");
        let quoted = quote_delimiter(&name);
        prop_assert_eq!(quoted.matches("\\/").count(), name.matches('/').count());
        prop_assert_eq!(unquote_delimiter(&quoted), name);
    }

    #[test]
    fn every_indexed_key_resolves_and_denormalizes(
        specs in proptest::collection::vec(("[a-zA-Z/\\\\ ]{0,8}", any::<u8>()), 1..12)
    ) {
        let records = arbitrary_tree(&specs);
        let index = PathIndex::build(records.clone());

        prop_assert!(index.collisions().is_empty());
        prop_assert_eq!(index.path_count(), records.len() - 1);

        for (key, id) in index.paths() {
            prop_assert_eq!(index.lookup_by_path(key), Some(id));

            let record = index.lookup_by_id(id).unwrap();
            let expected: Vec<String> = record.path.ids()[1..]
                .iter()
                .map(|a| index.lookup_by_id(*a).unwrap().name.to_lowercase())
                .collect();
            prop_assert_eq!(PathIndex::denormalize(key), expected);
        }
    }
}

#[test]
fn three_level_catalog_builds_expected_paths() {
    let index = PathIndex::build(vec![
        record(1, "root", &[1]),
        record(2, "Electronics", &[1, 2]),
        record(3, "Phones", &[1, 2, 3]),
    ]);
    assert_eq!(
        index.paths(),
        vec![("electronics", 2), ("electronics/phones", 3)]
    );
}

#[test]
fn every_non_root_record_is_reachable_by_path() {
    let catalog = sample_catalog();
    let records = catalog.list_all(StoreScope::DEFAULT).unwrap();
    let index = PathIndex::build(records.clone());

    for record in records.iter().filter(|r| r.path.len() > 1) {
        let names: Vec<String> = record.path.ids()[1..]
            .iter()
            .map(|id| quote_delimiter(&index.lookup_by_id(*id).unwrap().name))
            .collect();
        let key = standardize(&names.join("/"));
        let found = index.lookup_by_path(&key).unwrap();
        assert_eq!(index.lookup_by_id(found).unwrap().id, record.id);
    }
    assert_eq!(index.path_count(), records.len() - 1);
}

#[test]
fn indexed_keys_denormalize_to_ancestor_names() {
    let index = PathIndex::build(vec![
        record(1, "root", &[1]),
        record(2, "TV/Audio", &[1, 2]),
        record(3, "Cables", &[1, 2, 3]),
    ]);
    for (key, id) in index.paths() {
        let names = PathIndex::denormalize(key);
        let record = index.lookup_by_id(id).unwrap();
        let expected: Vec<String> = record.path.ids()[1..]
            .iter()
            .map(|a| index.lookup_by_id(*a).unwrap().name.to_lowercase())
            .collect();
        assert_eq!(names, expected);
    }
}

#[test]
fn lookups_are_pure() {
    let index = PathIndex::build(vec![
        record(1, "root", &[1]),
        record(2, "Electronics", &[1, 2]),
    ]);
    let first = (index.lookup_by_path("electronics"), index.lookup_by_id(2).cloned());
    let second = (index.lookup_by_path("electronics"), index.lookup_by_id(2).cloned());
    assert_eq!(first, second);
    assert_eq!(index.lookup_by_path("missing"), None);
    assert_eq!(index.lookup_by_path("missing"), None);
    assert_eq!(index.len(), 2);
}
