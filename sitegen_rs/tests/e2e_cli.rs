//! End-to-End CLI tests for sitegen.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the sitegen binary
fn sitegen() -> Command {
    cargo_bin_cmd!("sitegen")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        sitegen()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("sitegen"))
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("routes"));
    }

    #[test]
    fn shows_version() {
        sitegen()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod build_command {
    use super::*;

    #[test]
    fn writes_every_route_and_the_manifest() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("dist");

        sitegen()
            .args(["build", "--out"])
            .arg(&out)
            .assert()
            .success();

        for slug in ["hotels-and-restaurants", "residential-societies", "about"] {
            assert!(out.join(slug).join("index.html").exists(), "{slug}");
        }
        assert!(out.join("manifest.json").exists());
    }

    #[test]
    fn pages_are_complete_documents() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("dist");

        sitegen()
            .args(["build", "--out"])
            .arg(&out)
            .assert()
            .success();

        let html =
            std::fs::read_to_string(out.join("residential-societies/index.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Fire Extinguisher For Residential Societies"));
        assert!(html.contains("PARKING"));
        assert!(html.contains("Kanex Fire Solutions Limited"));
    }

    #[test]
    fn manifest_parses_and_counts_pages() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("dist");

        sitegen()
            .args(["build", "--out"])
            .arg(&out)
            .assert()
            .success();

        let manifest: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out.join("manifest.json")).unwrap())
                .unwrap();
        assert_eq!(manifest["page_count"], 3);
        assert_eq!(manifest["pages"].as_array().unwrap().len(), 3);
        assert!(manifest["generated_at"].as_str().unwrap().contains("T"));
    }

    #[test]
    fn rebuild_into_same_directory_succeeds() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("dist");

        sitegen().args(["build", "--out"]).arg(&out).assert().success();
        sitegen().args(["build", "--out"]).arg(&out).assert().success();
    }
}

mod routes_command {
    use super::*;

    #[test]
    fn lists_all_registered_routes() {
        sitegen()
            .arg("routes")
            .assert()
            .success()
            .stdout(predicate::str::contains("hotels-and-restaurants"))
            .stdout(predicate::str::contains("residential-societies"))
            .stdout(predicate::str::contains("about"));
    }

    #[test]
    fn json_output_is_machine_readable() {
        let output = sitegen().args(["routes", "--json"]).output().unwrap();
        assert!(output.status.success());

        let routes: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("routes --json must parse");
        let routes = routes.as_array().unwrap();
        assert_eq!(routes.len(), 3);
        assert!(routes.iter().any(|r| r["slug"] == "about"));
    }
}

mod check_command {
    use super::*;

    #[test]
    fn shipped_content_passes() {
        sitegen().arg("check").assert().success();
    }
}
