use quickcreate::catalog::{
    CatalogDocument, CategoryStore, MaterializedPath, NewCategory, SledCatalog, StoreScope,
};
use quickcreate::error::CatalogError;
use tempfile::TempDir;

use crate::integration::support::{entry, SAMPLE_DOCUMENT};

fn seeded_catalog(dir: &TempDir) -> SledCatalog {
    let catalog = SledCatalog::open(&dir.path().join("catalog")).unwrap();
    let document: CatalogDocument = serde_json::from_str(SAMPLE_DOCUMENT).unwrap();
    document.import_into(&catalog).unwrap();
    catalog
}

fn new_under(catalog: &SledCatalog, parent_id: u64, name: &str) -> NewCategory {
    let parent = catalog.get_category(parent_id, None).unwrap();
    NewCategory {
        name: name.to_string(),
        parent_id,
        path: parent.path,
        is_active: true,
        is_anchor: true,
        include_in_menu: true,
    }
}

#[test]
fn create_assigns_increasing_ids_and_extends_path() {
    let dir = TempDir::new().unwrap();
    let catalog = seeded_catalog(&dir);

    let phones = catalog.create_category(&new_under(&catalog, 3, "Phones")).unwrap();
    let cameras = catalog.create_category(&new_under(&catalog, 3, "Cameras")).unwrap();
    assert_eq!(phones, 5);
    assert_eq!(cameras, 6);

    let record = catalog.get_category(phones, None).unwrap();
    assert_eq!(record.path, MaterializedPath::new(vec![1, 2, 3, 5]));
    assert_eq!(record.url_key, "phones");
    assert!(record.created_at.is_some());
}

#[test]
fn duplicate_url_key_under_same_parent_is_rejected() {
    let dir = TempDir::new().unwrap();
    let catalog = seeded_catalog(&dir);

    catalog.create_category(&new_under(&catalog, 3, "Phones")).unwrap();
    let err = catalog
        .create_category(&new_under(&catalog, 3, "PHONES"))
        .unwrap_err();
    assert!(matches!(err, CatalogError::ValidationError(_)));

    // Same name under a different parent is fine.
    assert!(catalog.create_category(&new_under(&catalog, 2, "Phones")).is_ok());
}

#[test]
fn create_under_missing_parent_is_not_found() {
    let dir = TempDir::new().unwrap();
    let catalog = seeded_catalog(&dir);
    let new = NewCategory {
        name: "Lost".to_string(),
        parent_id: 77,
        path: MaterializedPath::new(vec![1, 77]),
        is_active: true,
        is_anchor: true,
        include_in_menu: true,
    };
    assert!(matches!(
        catalog.create_category(&new),
        Err(CatalogError::NotFound(77))
    ));
}

#[test]
fn catalog_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let id = {
        let catalog = seeded_catalog(&dir);
        catalog.create_category(&new_under(&catalog, 2, "Toys")).unwrap()
    };

    let reopened = SledCatalog::open(&dir.path().join("catalog")).unwrap();
    assert_eq!(reopened.get_category(id, None).unwrap().name, "Toys");
    assert_eq!(reopened.root_category_id(StoreScope(1)).unwrap(), 2);
    assert_eq!(reopened.list_all(StoreScope::DEFAULT).unwrap().len(), 5);
}

#[test]
fn children_are_read_live() {
    let dir = TempDir::new().unwrap();
    let catalog = seeded_catalog(&dir);
    assert_eq!(catalog.get_children(3, None).unwrap().len(), 1);
    catalog.create_category(&new_under(&catalog, 3, "Phones")).unwrap();
    let children = catalog.get_children(3, None).unwrap();
    let ids: Vec<u64> = children.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![4, 5]);
}

#[test]
fn create_after_highest_possible_id_is_a_persistence_error() {
    let dir = TempDir::new().unwrap();
    let catalog = seeded_catalog(&dir);
    catalog
        .put_category(&entry(u64::MAX, "Last", &[1, 2, u64::MAX]))
        .unwrap();

    let err = catalog
        .create_category(&new_under(&catalog, 3, "Phones"))
        .unwrap_err();
    assert!(matches!(err, CatalogError::PersistenceError(_)));
    assert_eq!(catalog.get_children(3, None).unwrap().len(), 1);
}
