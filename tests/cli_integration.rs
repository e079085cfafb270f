use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn showroom(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("showroom").unwrap();
    cmd.env("SHOWROOM_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("SHOWROOM_ADMIN_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_first_run_lists_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();

    showroom(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Luxury Fabric Sofa"))
        .stdout(predicate::str::contains("Compact Workstation"))
        .stdout(predicate::str::contains("Rs. 35,000"));

    // Reading never writes.
    assert!(!temp_dir.path().join("showroom_products.json").exists());
}

#[test]
fn test_category_filter() {
    let temp_dir = tempfile::tempdir().unwrap();

    showroom(temp_dir.path())
        .args(["list", "--category", "office"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pro Executive Desk"))
        .stdout(predicate::str::contains("Coffee Table").not());
}

#[test]
fn test_view_missing_product_is_not_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    showroom(temp_dir.path())
        .args(["view", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product not found: nope"));
}

#[test]
fn test_update_without_password_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    showroom(temp_dir.path())
        .args(["update", "h3", "--price", "30000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Admin login required"));
}

#[test]
fn test_update_with_wrong_password_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    showroom(temp_dir.path())
        .args(["update", "h3", "--price", "30000", "-p", "JO-ADMIN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid password"));
}

#[test]
fn test_update_persists_across_sessions() {
    let temp_dir = tempfile::tempdir().unwrap();

    showroom(temp_dir.path())
        .args(["update", "h3", "--price", "30000", "--password", "jo-admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product updated (h3)"));

    showroom(temp_dir.path())
        .args(["view", "h3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Minimalist Walnut Coffee Table"))
        .stdout(predicate::str::contains("Rs. 30,000"));
}

#[test]
fn test_password_from_env() {
    let temp_dir = tempfile::tempdir().unwrap();

    showroom(temp_dir.path())
        .env("SHOWROOM_ADMIN_PASSWORD", "jo-admin")
        .args(["update", "o2", "--title", "Mesh Office Chair"])
        .assert()
        .success();

    showroom(temp_dir.path())
        .args(["route", "/product/o2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mesh Office Chair"));
}

#[test]
fn test_strict_update_miss_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    showroom(temp_dir.path())
        .args(["update", "zz", "--price", "1", "-p", "jo-admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing updated"));

    showroom(temp_dir.path())
        .args(["update", "zz", "--price", "1", "-p", "jo-admin", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product not found: zz"));
}

#[test]
fn test_config_changes_password_and_currency() {
    let temp_dir = tempfile::tempdir().unwrap();

    showroom(temp_dir.path())
        .args(["config", "admin-password", "s3cret"])
        .assert()
        .success();
    showroom(temp_dir.path())
        .args(["config", "currency-symbol", "$"])
        .assert()
        .success();

    showroom(temp_dir.path())
        .args(["update", "h1", "--price", "1299", "-p", "jo-admin"])
        .assert()
        .failure();

    showroom(temp_dir.path())
        .args(["update", "h1", "--price", "1299", "-p", "s3cret"])
        .assert()
        .success();

    showroom(temp_dir.path())
        .args(["view", "h1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$ 1,299"));
}

#[test]
fn test_route_category_heading() {
    let temp_dir = tempfile::tempdir().unwrap();

    showroom(temp_dir.path())
        .args(["route", "/home-furniture"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Home Furniture"))
        .stdout(predicate::str::contains("Velvet Lounge Chair"))
        .stdout(predicate::str::contains("Ergonomic Office Chair").not());
}

#[test]
fn test_unknown_config_key_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    showroom(temp_dir.path())
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}
