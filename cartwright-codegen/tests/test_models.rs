//! Model generator materialization tests

use cartwright_codegen::schema;
use cartwright_codegen::writer::models;
use std::fs;

#[test]
fn test_full_run_skips_pivot_tables() {
    let dir = tempfile::tempdir().unwrap();
    let registry = schema::registry();

    let summary = models::generate(registry, dir.path(), &[], false).unwrap();
    let pivots = registry.pivot_tables().len();
    assert_eq!(summary.written, registry.tables().len() - pivots);
    assert_eq!(summary.skipped, pivots);

    assert!(dir.path().join("user.rs").exists());
    assert!(dir.path().join("order_item.rs").exists());
    assert!(!dir.path().join("wishlist.rs").exists());
}

#[test]
fn test_explicitly_requested_pivot_is_still_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let summary = models::generate(
        schema::registry(),
        dir.path(),
        &["wishlists".to_string()],
        false,
    )
    .unwrap();
    assert_eq!(summary.written, 0);
    assert_eq!(summary.skipped, 1);
    assert_eq!(fs::read_dir(dir.path()).map(|d| d.count()).unwrap_or(0), 0);
}

#[test]
fn test_existing_model_is_not_overwritten_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("brand.rs");
    fs::write(&path, "// hand edited\n").unwrap();

    let summary = models::generate(
        schema::registry(),
        dir.path(),
        &["brands".to_string()],
        false,
    )
    .unwrap();
    assert_eq!(summary.written, 0);
    assert_eq!(summary.skipped, 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), "// hand edited\n");

    let summary = models::generate(
        schema::registry(),
        dir.path(),
        &["brands".to_string()],
        true,
    )
    .unwrap();
    assert_eq!(summary.written, 1);
    assert!(fs::read_to_string(&path).unwrap().contains("pub struct Brand;"));
}

#[test]
fn test_unknown_table_filter_generates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let summary = models::generate(
        schema::registry(),
        dir.path(),
        &["not_a_table".to_string()],
        false,
    )
    .unwrap();
    assert_eq!(summary.written, 0);
}

#[test]
fn test_every_generated_model_parses() {
    let dir = tempfile::tempdir().unwrap();
    models::generate(schema::registry(), dir.path(), &[], false).unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let contents = fs::read_to_string(&path).unwrap();
        syn::parse_file(&contents)
            .unwrap_or_else(|err| panic!("{} does not parse: {}", path.display(), err));
    }
}

#[test]
fn test_file_names_are_singular_snake_case() {
    let dir = tempfile::tempdir().unwrap();
    models::generate(
        schema::registry(),
        dir.path(),
        &["categories".to_string(), "addresses".to_string()],
        false,
    )
    .unwrap();
    assert!(dir.path().join("category.rs").exists());
    assert!(dir.path().join("address.rs").exists());
}
