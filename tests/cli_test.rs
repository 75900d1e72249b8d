//! Integration tests for the ift binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PRODUCTS_SOURCE: &str = r#"class ProductsController
  def index; end
end
__END__
@@ index.html.erb
<h1>Products</h1>
@@ stylesheets/products.css
h1 { color: red; }
#@@ draft.html.erb
never written
"#;

fn setup_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let controllers = temp.path().join("app/controllers");
    fs::create_dir_all(&controllers).unwrap();
    fs::write(controllers.join("products_controller.rb"), PRODUCTS_SOURCE).unwrap();
    temp
}

fn ift(project: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("ift"));
    cmd.current_dir(project).env_remove("IFT_RELOAD_TEMPLATES");
    cmd
}

fn build_products(project: &Path) {
    ift(project)
        .args([
            "build",
            "app/controllers/products_controller.rb",
            "--owner",
            "products",
        ])
        .assert()
        .success();
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ift"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Templates embedded in source files"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ift"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ift"));
    cmd.assert().failure();
    Ok(())
}

#[test]
fn build_writes_templates_and_cache() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();

    ift(temp.path())
        .args([
            "build",
            "app/controllers/products_controller.rb",
            "-o",
            "products",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 template(s) for products"));

    let index = temp.path().join("app/views/products/index.html.erb");
    assert_eq!(fs::read_to_string(&index)?, "<h1>Products</h1>\n");
    assert_eq!(
        fs::read_to_string(temp.path().join("public/stylesheets/products.css"))?,
        "h1 { color: red; }\n"
    );
    assert!(!temp.path().join("app/views/products/draft.html.erb").exists());

    let cache = fs::read_to_string(temp.path().join("config/ift.cache"))?;
    assert!(cache.contains("products:"));
    assert!(cache.contains("index.html.erb"));
    Ok(())
}

#[test]
fn build_twice_is_a_no_op() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    build_products(temp.path());

    ift(temp.path())
        .args([
            "build",
            "app/controllers/products_controller.rb",
            "-o",
            "products",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("already built"));
    Ok(())
}

#[test]
fn build_honors_config_roots() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    fs::create_dir_all(temp.path().join("config"))?;
    fs::write(
        temp.path().join("config/ift.yml"),
        "view_root: templates\nconfig_dir: tmp\n",
    )?;

    build_products(temp.path());

    assert!(temp
        .path()
        .join("templates/products/index.html.erb")
        .exists());
    assert!(temp.path().join("tmp/ift.cache").exists());
    Ok(())
}

#[test]
fn build_reports_unknown_config_keys() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    fs::create_dir_all(temp.path().join("config"))?;
    fs::write(temp.path().join("config/ift.yml"), "views: nope\n")?;

    ift(temp.path())
        .args([
            "build",
            "app/controllers/products_controller.rb",
            "-o",
            "products",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn build_missing_source_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    ift(temp.path())
        .args(["build", "missing.rb", "-o", "products"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.rb"));
    Ok(())
}

#[test]
fn extract_prints_block_content() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();

    ift(temp.path())
        .args([
            "extract",
            "app/controllers/products_controller.rb",
            "index.html.erb",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("<h1>Products</h1>\n"));

    assert!(!temp.path().join("config/ift.cache").exists());
    Ok(())
}

#[test]
fn extract_lists_block_names() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();

    ift(temp.path())
        .args(["extract", "app/controllers/products_controller.rb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("index.html.erb"))
        .stdout(predicate::str::contains("stylesheets/products.css"))
        .stdout(predicate::str::contains("draft").not());
    Ok(())
}

#[test]
fn extract_unknown_block_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();

    ift(temp.path())
        .args([
            "extract",
            "app/controllers/products_controller.rb",
            "show.html.erb",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template show.html.erb not found"))
        .stderr(predicate::str::contains("products_controller.rb"));
    Ok(())
}

#[test]
fn gc_removes_owner_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    build_products(temp.path());

    ift(temp.path())
        .args(["gc", "products"])
        .assert()
        .success();

    assert!(!temp
        .path()
        .join("app/views/products/index.html.erb")
        .exists());
    let cache = fs::read_to_string(temp.path().join("config/ift.cache"))?;
    assert!(!cache.contains("products"));
    Ok(())
}

#[test]
fn list_shows_cache_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    build_products(temp.path());

    let output = ift(temp.path()).args(["list", "--json"]).output()?;
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["products"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[test]
fn clean_removes_everything_and_keeps_cache() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    build_products(temp.path());

    ift(temp.path())
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 generated file(s)"));

    assert!(!temp
        .path()
        .join("app/views/products/index.html.erb")
        .exists());
    assert!(!temp.path().join("public/stylesheets/products.css").exists());
    let cache = fs::read_to_string(temp.path().join("config/ift.cache"))?;
    assert!(cache.contains("products:"));
    Ok(())
}

#[test]
fn clean_with_prune_empties_cache() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    build_products(temp.path());

    ift(temp.path()).args(["clean", "--prune"]).assert().success();

    let cache = fs::read_to_string(temp.path().join("config/ift.cache"))?;
    assert!(!cache.contains("products"));
    Ok(())
}

#[test]
fn clean_reports_cache_corruption() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    build_products(temp.path());
    let index = temp.path().join("app/views/products/index.html.erb");
    fs::remove_file(&index)?;

    ift(temp.path())
        .arg("clean")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Potential cache corruption"))
        .stderr(predicate::str::contains("index.html.erb"))
        .stderr(predicate::str::contains("ift.cache"));
    Ok(())
}

#[test]
fn clean_without_cache_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    ift(temp.path())
        .arg("clean")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load cache"));
    Ok(())
}

#[test]
fn project_flag_overrides_current_dir() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    let elsewhere = TempDir::new()?;

    ift(elsewhere.path())
        .arg("--project")
        .arg(temp.path())
        .args([
            "build",
            "app/controllers/products_controller.rb",
            "-o",
            "products",
        ])
        .assert()
        .success();

    assert!(temp
        .path()
        .join("app/views/products/index.html.erb")
        .exists());
    Ok(())
}

#[test]
fn completions_generate_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ift"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ift"));
    Ok(())
}

#[test]
fn quiet_build_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();

    ift(temp.path())
        .args([
            "-q",
            "build",
            "app/controllers/products_controller.rb",
            "-o",
            "products",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp
        .path()
        .join("app/views/products/index.html.erb")
        .exists());
    Ok(())
}

#[test]
fn quiet_list_keeps_results() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    build_products(temp.path());

    ift(temp.path())
        .args(["-q", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("products (2 file(s))"));
    Ok(())
}

#[test]
fn double_quiet_silences_results_but_not_errors() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    build_products(temp.path());

    ift(temp.path())
        .args(["-qq", "list"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    ift(temp.path())
        .args(["-qq", "extract", "app/controllers/products_controller.rb", "nope.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template nope.html not found"));
    Ok(())
}
