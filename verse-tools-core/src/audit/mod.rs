// asset audit module - checks folders, required files and manifest declarations

pub mod manifest;
pub mod report;

use crate::config::Config;
use crate::utils::{ensure_dir, read_text};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub use manifest::{
    canonical_example, check_declarations, scan_indentation, Declarations, IndentationFinding,
    IndentationScan, Marker, ScanEntry,
};
pub use report::print_audit;

/// an asset directory and whether this run had to create it
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DirectoryStatus {
    pub label: String,
    pub path: PathBuf,
    pub created: bool,
}

/// one expected asset file; `size` is `None` when the file is missing
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AssetCheck {
    pub name: String,
    pub size: Option<u64>,
}

impl AssetCheck {
    pub fn is_present(&self) -> bool {
        self.size.is_some()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuditReport {
    pub root: PathBuf,
    pub manifest: PathBuf,
    pub directories: Vec<DirectoryStatus>,
    pub images_dir: PathBuf,
    pub images: Vec<AssetCheck>,
    pub icons_dir: PathBuf,
    pub icons: Vec<AssetCheck>,
    pub declarations: Declarations,
    pub indentation: IndentationScan,
}

impl AuditReport {
    pub fn missing_images(&self) -> Vec<&str> {
        missing(&self.images)
    }

    pub fn missing_icons(&self) -> Vec<&str> {
        missing(&self.icons)
    }

    pub fn has_problems(&self) -> bool {
        !self.missing_images().is_empty()
            || !self.missing_icons().is_empty()
            || !self.declarations.all_declared()
            || !self.indentation.is_correct()
    }
}

fn missing(checks: &[AssetCheck]) -> Vec<&str> {
    checks
        .iter()
        .filter(|c| !c.is_present())
        .map(|c| c.name.as_str())
        .collect()
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AuditOutcome {
    /// the manifest is not in the project root; nothing else was checked
    MissingManifest { root: PathBuf, manifest: PathBuf },
    Completed(AuditReport),
}

impl AuditOutcome {
    pub fn has_problems(&self) -> bool {
        match self {
            AuditOutcome::MissingManifest { .. } => true,
            AuditOutcome::Completed(report) => report.has_problems(),
        }
    }
}

/// audit a project root
///
/// creates `assets/`, `assets/images/` and `assets/icons/` when missing, which
/// is the only write this performs.
pub fn audit_project(root: &Path, config: &Config) -> Result<AuditOutcome> {
    let layout = &config.layout;
    let manifest = layout.manifest_path(root);

    if !manifest.is_file() {
        return Ok(AuditOutcome::MissingManifest {
            root: root.to_path_buf(),
            manifest,
        });
    }

    let images_dir = layout.images_path(root);
    let icons_dir = layout.icons_path(root);

    let mut directories = Vec::new();
    for (label, path) in [
        (layout.assets_dir.as_str(), layout.assets_path(root)),
        (layout.images_dir.as_str(), images_dir.clone()),
        (layout.icons_dir.as_str(), icons_dir.clone()),
    ] {
        let created = ensure_dir(&path).context("failed to prepare asset folders")?;
        directories.push(DirectoryStatus {
            label: format!("{}/", label.trim_end_matches('/')),
            path,
            created,
        });
    }

    let images = check_assets(&images_dir, &config.assets.required_images)?;
    let icons = check_assets(&icons_dir, &config.assets.required_icons)?;

    let content = read_text(&manifest).context("failed to read the manifest")?;
    let declarations = check_declarations(&content, layout);
    let indentation = scan_indentation(&content, layout);

    Ok(AuditOutcome::Completed(AuditReport {
        root: root.to_path_buf(),
        manifest,
        directories,
        images_dir,
        images,
        icons_dir,
        icons,
        declarations,
        indentation,
    }))
}

/// look up each expected file in `dir`, recording its size when present
fn check_assets(dir: &Path, names: &[String]) -> Result<Vec<AssetCheck>> {
    names
        .iter()
        .map(|name| {
            let path = dir.join(name);
            let size = if path.exists() {
                let metadata = fs::metadata(&path)
                    .with_context(|| format!("failed to stat {}", path.display()))?;
                Some(metadata.len())
            } else {
                None
            };
            Ok(AssetCheck {
                name: name.clone(),
                size,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const GOOD_MANIFEST: &str = "name: travel_verse\n\nflutter:\n  uses-material-design: true\n\n  assets:\n    - assets/images/\n    - assets/icons/\n";

    fn completed(outcome: AuditOutcome) -> AuditReport {
        match outcome {
            AuditOutcome::Completed(report) => report,
            other => panic!("expected a completed audit, got {other:?}"),
        }
    }

    #[test]
    fn missing_manifest_stops_before_side_effects() {
        let dir = tempdir().unwrap();
        let outcome = audit_project(dir.path(), &Config::default()).unwrap();

        assert!(matches!(outcome, AuditOutcome::MissingManifest { .. }));
        assert!(outcome.has_problems());
        assert!(!dir.path().join("assets").exists());
    }

    #[test]
    fn creates_missing_folders_once() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pubspec.yaml"), GOOD_MANIFEST).unwrap();

        let first = completed(audit_project(dir.path(), &Config::default()).unwrap());
        assert!(first.directories.iter().all(|d| d.created));
        assert!(dir.path().join("assets/images").is_dir());
        assert!(dir.path().join("assets/icons").is_dir());

        let second = completed(audit_project(dir.path(), &Config::default()).unwrap());
        assert!(second.directories.iter().all(|d| !d.created));

        let third = completed(audit_project(dir.path(), &Config::default()).unwrap());
        assert_eq!(second, third);
    }

    #[test]
    fn records_sizes_and_missing_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pubspec.yaml"), GOOD_MANIFEST).unwrap();
        fs::create_dir_all(dir.path().join("assets/images")).unwrap();
        fs::create_dir_all(dir.path().join("assets/icons")).unwrap();
        fs::write(dir.path().join("assets/images/profile.jpg"), vec![0u8; 1234]).unwrap();
        fs::write(dir.path().join("assets/icons/chat.svg"), "<svg/>").unwrap();

        let report = completed(audit_project(dir.path(), &Config::default()).unwrap());

        let profile = report.images.iter().find(|c| c.name == "profile.jpg").unwrap();
        assert_eq!(profile.size, Some(1234));
        assert_eq!(report.missing_images().len(), 7);
        assert!(!report.missing_images().contains(&"profile.jpg"));
        assert_eq!(report.missing_icons(), vec!["calendar.svg", "friendship.svg"]);
        assert!(report.declarations.all_declared());
        assert!(report.indentation.is_correct());
        assert!(report.has_problems());
    }

    #[test]
    fn complete_project_has_no_problems() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pubspec.yaml"), GOOD_MANIFEST).unwrap();
        fs::create_dir_all(dir.path().join("assets/images")).unwrap();
        fs::create_dir_all(dir.path().join("assets/icons")).unwrap();
        let config = Config::default();
        for name in &config.assets.required_images {
            fs::write(dir.path().join("assets/images").join(name), "jpg").unwrap();
        }
        for name in &config.assets.required_icons {
            fs::write(dir.path().join("assets/icons").join(name), "svg").unwrap();
        }

        let outcome = audit_project(dir.path(), &config).unwrap();
        assert!(!outcome.has_problems());
    }

    #[test]
    fn bad_indentation_is_a_problem() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("pubspec.yaml"),
            "flutter:\n   assets:\n     - assets/images/\n     - assets/icons/\n",
        )
        .unwrap();

        let report = completed(audit_project(dir.path(), &Config::default()).unwrap());
        assert!(!report.indentation.is_correct());
        assert!(report.has_problems());
    }
}
