#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use product_catalog::api;
use product_catalog::lifecycle::CatalogSystem;
use std::sync::mpsc;

fn catalog_cmd(base_url: &str) -> Command {
    let mut cmd = Command::new(cargo_bin("catalog"));
    cmd.env_remove("BASE_URL").args(["--base-url", base_url]);
    cmd
}

/// Starts a catalog server on its own runtime thread and returns its base URL.
fn spawn_server() -> String {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async move {
            let system = CatalogSystem::new(16);
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, api::router(system.product_client.clone()))
                .await
                .unwrap();
        });
    });
    format!("http://{}", rx.recv().unwrap())
}

#[test]
fn test_cli_crud_workflow() {
    let base = spawn_server();

    catalog_cmd(&base)
        .args(["health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"ok\""));

    catalog_cmd(&base)
        .args(["create", "--name", "Widget", "--price", "9.99", "--quantity", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 1"))
        .stdout(predicate::str::contains("\"name\": \"Widget\""));

    catalog_cmd(&base)
        .args(["update", "--id", "1", "--name", "Widget", "--price", "7.5", "--quantity", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"price\": 7.5"));

    catalog_cmd(&base)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[\n  {"));

    catalog_cmd(&base)
        .args(["delete", "--id", "1"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Status: 204\n"));

    catalog_cmd(&base)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn test_cli_reports_api_errors_with_exit_1() {
    let base = spawn_server();

    catalog_cmd(&base)
        .args(["get", "--id", "999"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Status: 404"))
        .stdout(predicate::str::contains("Product not found"));

    catalog_cmd(&base)
        .args(["create", "--name", "Bad", "--price", "-1", "--quantity", "1"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Status: 422"))
        .stdout(predicate::str::contains("\"field\": \"price\""));

    catalog_cmd(&base)
        .args(["get", "--id", "-1"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Status: 404"));

    catalog_cmd(&base)
        .args(["delete", "--id", "999"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Status: 404"));
}

#[test]
fn test_cli_unreachable_server_exits_2() {
    catalog_cmd("http://127.0.0.1:1")
        .args(["health"])
        .assert()
        .code(2)
        .stdout(predicate::str::starts_with("Request failed:"));
}

#[test]
fn test_cli_base_url_from_env() {
    let base = spawn_server();

    Command::new(cargo_bin("catalog"))
        .env("BASE_URL", &base)
        .args(["health"])
        .assert()
        .success();
}

#[test]
fn test_cli_rejects_bad_flags() {
    catalog_cmd("http://127.0.0.1:1")
        .args(["get", "--id", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id"));
}
