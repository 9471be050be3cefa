//! `hbr health`: project-health checker.
//!
//! Missing files, crates or workspace dependencies fail the run; missing
//! optional configuration only warns.

use std::path::Path;

use harbor_config::HarborConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HealthArgs;
use crate::output::output;
use crate::progress::Progress;

const REQUIRED_FILES: &[&str] = &["Cargo.toml", "crates/harbor-cli/src/main.rs"];

const REQUIRED_CRATES: &[&str] = &[
    "harbor-core",
    "harbor-config",
    "harbor-schema",
    "harbor-store",
    "harbor-auth",
    "harbor-dashboard",
    "harbor-flows",
    "harbor-offline",
    "harbor-cli",
];

const REQUIRED_DEPENDENCIES: &[&str] = &[
    "tokio",
    "serde",
    "serde_json",
    "reqwest",
    "clap",
    "figment",
    "thiserror",
    "anyhow",
    "tracing",
    "schemars",
    "jsonschema",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Warn,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct Check {
    name: String,
    status: CheckStatus,
    detail: String,
}

impl Check {
    fn new(name: impl Into<String>, status: CheckStatus, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthReport {
    project_root: String,
    passed: usize,
    warnings: usize,
    failed: usize,
    checks: Vec<Check>,
}

impl HealthReport {
    fn new(project_root: &Path, checks: Vec<Check>) -> Self {
        let count = |status: CheckStatus| checks.iter().filter(|check| check.status == status).count();
        Self {
            project_root: project_root.display().to_string(),
            passed: count(CheckStatus::Pass),
            warnings: count(CheckStatus::Warn),
            failed: count(CheckStatus::Fail),
            checks,
        }
    }
}

pub async fn handle(
    args: &HealthArgs,
    flags: &GlobalFlags,
    config: &HarborConfig,
    project_root: &Path,
) -> anyhow::Result<()> {
    let mut checks = check_files(project_root);
    checks.extend(check_manifest(project_root));
    checks.extend(check_crates(project_root));
    checks.extend(check_config(config));
    checks.push(if args.skip_build {
        Check::new("build", CheckStatus::Skipped, "--skip-build")
    } else {
        check_build(project_root).await
    });

    let report = HealthReport::new(project_root, checks);
    output(&report, flags.format)?;

    if report.failed > 0 {
        anyhow::bail!("{} health check(s) failed", report.failed);
    }
    Ok(())
}

fn check_files(root: &Path) -> Vec<Check> {
    REQUIRED_FILES
        .iter()
        .map(|file| {
            if root.join(file).is_file() {
                Check::new(format!("file:{file}"), CheckStatus::Pass, "present")
            } else {
                Check::new(format!("file:{file}"), CheckStatus::Fail, "missing")
            }
        })
        .collect()
}

fn check_manifest(root: &Path) -> Vec<Check> {
    let path = root.join("Cargo.toml");
    let Ok(text) = std::fs::read_to_string(&path) else {
        return vec![Check::new(
            "manifest",
            CheckStatus::Fail,
            format!("cannot read {}", path.display()),
        )];
    };
    check_manifest_text(&text)
}

/// Verify `[workspace.dependencies]` declares every required dependency.
fn check_manifest_text(text: &str) -> Vec<Check> {
    let manifest = match toml::from_str::<toml::Table>(text) {
        Ok(manifest) => manifest,
        Err(error) => {
            return vec![Check::new(
                "manifest",
                CheckStatus::Fail,
                format!("invalid TOML: {error}"),
            )];
        }
    };

    let declared = manifest
        .get("workspace")
        .and_then(|workspace| workspace.get("dependencies"))
        .and_then(toml::Value::as_table);

    REQUIRED_DEPENDENCIES
        .iter()
        .map(|dep| {
            let name = format!("dependency:{dep}");
            match declared.and_then(|table| table.get(*dep)) {
                Some(entry) => Check::new(name, CheckStatus::Pass, dependency_version(entry)),
                None => Check::new(name, CheckStatus::Fail, "not in [workspace.dependencies]"),
            }
        })
        .collect()
}

fn dependency_version(entry: &toml::Value) -> String {
    match entry {
        toml::Value::String(version) => version.clone(),
        toml::Value::Table(table) => table
            .get("version")
            .and_then(toml::Value::as_str)
            .map_or_else(|| String::from("declared"), String::from),
        _ => String::from("declared"),
    }
}

/// Each required crate has a manifest whose package name matches.
fn check_crates(root: &Path) -> Vec<Check> {
    REQUIRED_CRATES
        .iter()
        .map(|krate| {
            let name = format!("crate:{krate}");
            let manifest = root.join("crates").join(krate).join("Cargo.toml");
            let package = std::fs::read_to_string(&manifest)
                .ok()
                .and_then(|text| toml::from_str::<toml::Table>(&text).ok())
                .and_then(|table| {
                    table
                        .get("package")
                        .and_then(|package| package.get("name"))
                        .and_then(toml::Value::as_str)
                        .map(String::from)
                });
            match package {
                Some(found) if found == *krate => Check::new(name, CheckStatus::Pass, "present"),
                Some(found) => Check::new(
                    name,
                    CheckStatus::Fail,
                    format!("package is named '{found}'"),
                ),
                None => Check::new(name, CheckStatus::Fail, "missing or unreadable Cargo.toml"),
            }
        })
        .collect()
}

fn check_config(config: &HarborConfig) -> Vec<Check> {
    [
        (
            "genai",
            config.genai.is_configured(),
            "HARBOR_GENAI__API_KEY unset; only fallback flows will answer",
        ),
        (
            "backend",
            config.backend.is_configured(),
            "HARBOR_BACKEND__API_KEY/PROJECT_ID unset; mock data will be used",
        ),
    ]
    .into_iter()
    .map(|(section, configured, hint)| {
        if configured {
            Check::new(format!("config:{section}"), CheckStatus::Pass, "configured")
        } else {
            Check::new(format!("config:{section}"), CheckStatus::Warn, hint)
        }
    })
    .collect()
}

async fn check_build(root: &Path) -> Check {
    let progress = Progress::spinner("cargo check --workspace");
    let result = tokio::process::Command::new("cargo")
        .args(["check", "--workspace", "--quiet"])
        .current_dir(root)
        .output()
        .await;
    progress.finish_clear();

    match result {
        Ok(out) if out.status.success() => Check::new("build", CheckStatus::Pass, "cargo check succeeded"),
        Ok(out) => {
            let stderr = String::from_utf8_lossy(&out.stderr);
            let last = stderr
                .lines()
                .rev()
                .find(|line| !line.trim().is_empty())
                .unwrap_or("cargo check failed");
            Check::new("build", CheckStatus::Fail, last.trim().to_string())
        }
        Err(error) => Check::new("build", CheckStatus::Fail, format!("failed to run cargo: {error}")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn failures(checks: &[Check]) -> Vec<&str> {
        checks
            .iter()
            .filter(|check| check.status == CheckStatus::Fail)
            .map(|check| check.name.as_str())
            .collect()
    }

    #[test]
    fn manifest_with_every_dependency_passes() {
        let mut text = String::from("[workspace.dependencies]\n");
        for dep in REQUIRED_DEPENDENCIES {
            text.push_str(&format!("{dep} = \"1\"\n"));
        }
        let checks = check_manifest_text(&text);
        assert!(failures(&checks).is_empty());
        assert_eq!(checks.len(), REQUIRED_DEPENDENCIES.len());
    }

    #[test]
    fn manifest_reports_each_missing_dependency() {
        let text = r#"
            [workspace.dependencies]
            tokio = { version = "1.49", features = ["full"] }
            serde = "1"
        "#;
        let checks = check_manifest_text(text);
        let failed = failures(&checks);
        assert_eq!(failed.len(), REQUIRED_DEPENDENCIES.len() - 2);
        assert!(failed.contains(&"dependency:reqwest"));
        assert_eq!(checks[0].detail, "1.49");
    }

    #[test]
    fn invalid_toml_is_one_failure() {
        let checks = check_manifest_text("[workspace");
        assert_eq!(failures(&checks), vec!["manifest"]);
    }

    #[test]
    fn files_and_crates_are_checked_on_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("Cargo.toml"), "[workspace]\n").expect("write manifest");
        let core = dir.path().join("crates/harbor-core");
        std::fs::create_dir_all(&core).expect("create crate dir");
        std::fs::write(core.join("Cargo.toml"), "[package]\nname = \"harbor-core\"\n")
            .expect("write crate manifest");

        let files = check_files(dir.path());
        assert_eq!(failures(&files), vec!["file:crates/harbor-cli/src/main.rs"]);

        let crates = check_crates(dir.path());
        let failed = failures(&crates);
        assert_eq!(failed.len(), REQUIRED_CRATES.len() - 1);
        assert!(!failed.contains(&"crate:harbor-core"));
    }

    #[test]
    fn missing_config_only_warns() {
        let checks = check_config(&HarborConfig::default());
        assert!(checks.iter().all(|check| check.status == CheckStatus::Warn));

        let report = HealthReport::new(Path::new("."), checks);
        assert_eq!(report.failed, 0);
        assert_eq!(report.warnings, 2);
    }
}
