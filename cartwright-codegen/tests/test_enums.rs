//! Enum generator and model synchronization tests

use cartwright_codegen::schema;
use cartwright_codegen::writer::{enums, models};
use std::fs;

#[test]
fn test_orders_scenario_produces_three_enums_and_patches_the_model() {
    let tmp = tempfile::tempdir().unwrap();
    let enums_dir = tmp.path().join("enums");
    let models_dir = tmp.path().join("models");
    let registry = schema::registry();

    models::generate(registry, &models_dir, &["orders".to_string()], false).unwrap();

    let summary = enums::generate(
        registry,
        &enums_dir,
        &models_dir,
        &["orders".to_string()],
        false,
    )
    .unwrap();
    // Three enum files, none skipped because none pre-exist. The model was
    // already rendered from the same registry, so synchronization finds
    // nothing to rewrite.
    assert_eq!(summary.skipped, 0);
    assert!(enums_dir.join("order_status.rs").exists());
    assert!(enums_dir.join("payment_status.rs").exists());
    assert!(enums_dir.join("payment_method.rs").exists());
    assert_eq!(fs::read_dir(&enums_dir).unwrap().count(), 3);

    let order = fs::read_to_string(models_dir.join("order.rs")).unwrap();
    assert_eq!(order.matches("use crate::enums::order_status::OrderStatus;").count(), 1);
    assert_eq!(order.matches("(\"status\", Cast::Enum(\"OrderStatus\")),").count(), 1);
    assert_eq!(order.matches("Cast::Enum").count(), 3);
}

#[test]
fn test_repeated_runs_leave_models_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let enums_dir = tmp.path().join("enums");
    let models_dir = tmp.path().join("models");
    let registry = schema::registry();

    models::generate(registry, &models_dir, &[], false).unwrap();
    enums::generate(registry, &enums_dir, &models_dir, &[], false).unwrap();
    let user_before = fs::read_to_string(models_dir.join("user.rs")).unwrap();

    enums::generate(registry, &enums_dir, &models_dir, &[], false).unwrap();
    let user_after = fs::read_to_string(models_dir.join("user.rs")).unwrap();
    assert_eq!(user_before, user_after);
    assert_eq!(user_after.matches("use crate::enums::gender::Gender;").count(), 1);
    assert_eq!(user_after.matches("(\"gender\", Cast::Enum(\"Gender\")),").count(), 1);
}

#[test]
fn test_stale_model_is_rewritten_from_the_registry() {
    let tmp = tempfile::tempdir().unwrap();
    let enums_dir = tmp.path().join("enums");
    let models_dir = tmp.path().join("models");
    let registry = schema::registry();

    // A model written before the enum bindings existed would lack casts;
    // synchronization replaces it with the canonical render.
    fs::create_dir_all(&models_dir).unwrap();
    fs::write(models_dir.join("shop.rs"), "// stale model\n").unwrap();

    enums::generate(registry, &enums_dir, &models_dir, &["shops".to_string()], false).unwrap();
    let shop = fs::read_to_string(models_dir.join("shop.rs")).unwrap();
    assert!(shop.contains("(\"status\", Cast::Enum(\"ShopStatus\")),"));
}

#[test]
fn test_missing_model_is_a_warning_not_a_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let enums_dir = tmp.path().join("enums");
    let models_dir = tmp.path().join("models");

    let summary = enums::generate(
        schema::registry(),
        &enums_dir,
        &models_dir,
        &["users".to_string()],
        false,
    )
    .unwrap();
    assert_eq!(summary.written, 1);
    assert!(enums_dir.join("gender.rs").exists());
    assert!(!models_dir.exists());
}

#[test]
fn test_existing_enum_is_skipped_without_force() {
    let tmp = tempfile::tempdir().unwrap();
    let enums_dir = tmp.path().join("enums");
    fs::create_dir_all(&enums_dir).unwrap();
    fs::write(enums_dir.join("gender.rs"), "// hand edited\n").unwrap();

    let summary = enums::generate(
        schema::registry(),
        &enums_dir,
        tmp.path(),
        &["users".to_string()],
        false,
    )
    .unwrap();
    assert_eq!(summary.skipped, 1);
    assert_eq!(
        fs::read_to_string(enums_dir.join("gender.rs")).unwrap(),
        "// hand edited\n"
    );
}

#[test]
fn test_full_run_generates_every_enum_and_parses() {
    let tmp = tempfile::tempdir().unwrap();
    let enums_dir = tmp.path().join("enums");
    let registry = schema::registry();

    enums::generate(registry, &enums_dir, tmp.path(), &[], false).unwrap();
    assert_eq!(fs::read_dir(&enums_dir).unwrap().count(), registry.enums().len());

    for entry in fs::read_dir(&enums_dir).unwrap() {
        let path = entry.unwrap().path();
        let contents = fs::read_to_string(&path).unwrap();
        syn::parse_file(&contents)
            .unwrap_or_else(|err| panic!("{} does not parse: {}", path.display(), err));
    }
}
