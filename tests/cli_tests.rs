//! CLI integration tests.

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `pizza-shop` isolated from the real home directory and environment.
fn pizza_shop(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("pizza-shop");
    cmd.env("HOME", home)
        .env_remove("PIZZA_SHOP_DATABASE")
        .env_remove("RUST_LOG")
        .arg("--color")
        .arg("never");
    cmd
}

/// `pizza-shop` against a database file inside `home`.
fn with_db(home: &TempDir) -> Command {
    let mut cmd = pizza_shop(home.path());
    cmd.arg("--db").arg(home.path().join("orders.db"));
    cmd
}

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    pizza_shop(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pizza-shop"))
        .stdout(predicate::str::contains("place"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("cancel"));
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    pizza_shop(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pizza-shop"));
}

#[test]
fn test_list_empty_database() {
    let home = TempDir::new().unwrap();
    with_db(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No orders yet"));
}

#[test]
fn test_place_list_cancel_flow() {
    let home = TempDir::new().unwrap();

    with_db(&home)
        .args(["place", "Large:Pepperoni, Olives", "Small"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Order #1 placed"));

    with_db(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Order ID"))
        .stdout(predicate::str::contains("Pizza Size"))
        .stdout(predicate::str::contains("Pepperoni, Olives"))
        .stdout(predicate::str::contains("Small"));

    with_db(&home)
        .args(["cancel", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Order #1 has been cancelled"));

    with_db(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No orders yet"));
}

#[test]
fn test_cancel_unknown_order_warns() {
    let home = TempDir::new().unwrap();
    with_db(&home)
        .args(["cancel", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Order #42 not found"));
}

#[test]
fn test_cancel_rejects_invalid_id() {
    let home = TempDir::new().unwrap();
    with_db(&home)
        .args(["cancel", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid order ID"));
}

#[test]
fn test_place_requires_size() {
    let home = TempDir::new().unwrap();
    with_db(&home)
        .args(["place", ":Cheese"])
        .assert()
        .failure();
}

#[test]
fn test_quiet_place_prints_bare_id() {
    let home = TempDir::new().unwrap();
    with_db(&home)
        .args(["-q", "place", "Medium"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_json_output() {
    let home = TempDir::new().unwrap();

    with_db(&home)
        .args(["--json", "place", "Large:Ham"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""command":"orders.place""#))
        .stdout(predicate::str::contains(r#""order_id":1"#));

    with_db(&home)
        .args(["--json", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""command":"orders.list""#))
        .stdout(predicate::str::contains(r#""toppings":["Ham"]"#));

    with_db(&home)
        .args(["--json", "cancel", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""status":"not_found""#));
}

#[test]
fn test_check_reports_counts() {
    let home = TempDir::new().unwrap();
    with_db(&home).args(["place", "Large"]).assert().success();

    with_db(&home)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Orders"))
        .stdout(predicate::str::contains("Connected"));
}

#[test]
fn test_unreachable_database_fails() {
    let home = TempDir::new().unwrap();
    pizza_shop(home.path())
        .arg("--db")
        .arg(home.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("order database"));
}

#[test]
fn test_database_env_override() {
    let home = TempDir::new().unwrap();
    let db = home.path().join("from-env.db");

    pizza_shop(home.path())
        .env("PIZZA_SHOP_DATABASE", &db)
        .args(["place", "Small"])
        .assert()
        .success();

    assert!(db.exists());
}

#[test]
fn test_explicit_missing_config_is_error() {
    let home = TempDir::new().unwrap();
    with_db(&home)
        .arg("--config")
        .arg(home.path().join("missing.toml"))
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn test_config_init_show_validate() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("shop").join("config.toml");

    pizza_shop(home.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    pizza_shop(home.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    pizza_shop(home.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));

    pizza_shop(home.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5000 ms"));
}

#[test]
fn test_config_validate_malformed_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.toml");
    std::fs::write(&config, "[database\npath = 1\n").unwrap();

    pizza_shop(home.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pizza_shop::config"));
}

#[test]
fn test_config_file_is_used() {
    let home = TempDir::new().unwrap();
    let db = home.path().join("configured.db");
    let config = home.path().join("config.toml");
    std::fs::write(
        &config,
        format!("[database]\npath = {:?}\n", db.display().to_string()),
    )
    .unwrap();

    pizza_shop(home.path())
        .arg("--config")
        .arg(&config)
        .args(["place", "Large:Ham"])
        .assert()
        .success();

    assert!(db.exists());
}
