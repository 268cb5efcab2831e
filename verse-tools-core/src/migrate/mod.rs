// null safety migration module - rewrites legacy flutter apis in place

pub mod report;
pub mod rules;

use crate::config::Config;
use crate::error::ToolError;
use crate::utils::{read_text, write_text};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use walkdir::WalkDir;

pub use report::print_migration;
pub use rules::{apply_rules, Rule, APP_BAR_RULES, GENERIC_RULES, SIZE_CONFIG_RULES};

/// files that get their own rule set instead of the generic pass,
/// relative to the source directory
pub const SIZE_CONFIG_FILE: &str = "size_config.dart";
pub const APP_BAR_FILE: &str = "components/app_bar.dart";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Generic,
    SizeConfig,
    AppBar,
}

impl FileKind {
    pub fn rules(self) -> &'static [Rule] {
        match self {
            FileKind::Generic => GENERIC_RULES.as_slice(),
            FileKind::SizeConfig => SIZE_CONFIG_RULES.as_slice(),
            FileKind::AppBar => APP_BAR_RULES.as_slice(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MigrateOptions {
    /// compute changes without writing anything
    pub dry_run: bool,
    /// record per-file failures and continue instead of aborting
    pub keep_going: bool,
    /// show a spinner while walking the tree
    pub progress: bool,
}

/// outcome for one visited file
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileChange {
    pub path: PathBuf,
    pub kind: FileKind,
    pub modified: bool,
}

/// a file that could not be patched in keep-going mode
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MigrationSummary {
    pub root: PathBuf,
    pub source_dir: PathBuf,
    pub dry_run: bool,
    pub changes: Vec<FileChange>,
    pub failures: Vec<FileFailure>,
}

impl MigrationSummary {
    pub fn modified(&self) -> impl Iterator<Item = &FileChange> {
        self.changes.iter().filter(|c| c.modified)
    }

    pub fn modified_count(&self) -> usize {
        self.modified().count()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MigrationOutcome {
    /// there is no source directory under the root; nothing was touched
    MissingSourceDir { root: PathBuf, source_dir: PathBuf },
    Completed(MigrationSummary),
}

impl MigrationOutcome {
    pub fn has_problems(&self) -> bool {
        match self {
            MigrationOutcome::MissingSourceDir { .. } => true,
            MigrationOutcome::Completed(summary) => !summary.failures.is_empty(),
        }
    }
}

/// apply `rules` to one file, writing it back only when the text changed
///
/// returns whether the content changed. in dry-run mode nothing is written.
pub fn patch_file(path: &Path, rules: &[Rule], dry_run: bool) -> Result<bool, ToolError> {
    let original = read_text(path)?;
    let patched = apply_rules(&original, rules);
    if patched == original {
        return Ok(false);
    }
    if !dry_run {
        write_text(path, &patched)?;
    }
    Ok(true)
}

/// migrate every source file under the project's source directory
///
/// the size config and app bar files are handled first with their own rules
/// and excluded from the generic pass. a special file that does not exist is
/// skipped. the remaining files are visited in sorted order.
pub fn migrate_project(
    root: &Path,
    config: &Config,
    options: &MigrateOptions,
) -> Result<MigrationOutcome> {
    let source_dir = config.layout.source_path(root);
    if !source_dir.is_dir() {
        return Ok(MigrationOutcome::MissingSourceDir {
            root: root.to_path_buf(),
            source_dir,
        });
    }

    let spinner = if options.progress {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["🔧 ⠋", "🔧 ⠙", "🔧 ⠹", "🔧 ⠸", "🔧 ⠼", "🔧 ⠴", "🔧 ⠦", "🔧 ⠧", "🔧 ⠇", "🔧 ⠏"])
                .template("{spinner} {msg}")
                .unwrap(),
        );
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner
    } else {
        ProgressBar::hidden()
    };

    let mut summary = MigrationSummary {
        root: root.to_path_buf(),
        source_dir,
        dry_run: options.dry_run,
        changes: Vec::new(),
        failures: Vec::new(),
    };

    let result = walk_sources(config, options, &spinner, &mut summary);
    spinner.finish_and_clear();
    result?;

    Ok(MigrationOutcome::Completed(summary))
}

fn walk_sources(
    config: &Config,
    options: &MigrateOptions,
    spinner: &ProgressBar,
    summary: &mut MigrationSummary,
) -> Result<()> {
    let source_dir = summary.source_dir.clone();
    let size_config = source_dir.join(SIZE_CONFIG_FILE);
    let app_bar = source_dir.join(APP_BAR_FILE);

    for (path, kind) in [(&size_config, FileKind::SizeConfig), (&app_bar, FileKind::AppBar)] {
        if path.is_file() {
            spinner.set_message(format!("patching {}", path.display()));
            visit(path, kind, options, summary)?;
        }
    }

    let extension = config.layout.source_extension.as_str();
    for entry in WalkDir::new(&source_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(source_dir.as_path()).to_path_buf();
                let io = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
                let err = ToolError::filesystem("walk", path.clone(), io);
                if options.keep_going {
                    summary.failures.push(FileFailure {
                        path,
                        error: err.to_string(),
                    });
                    continue;
                }
                return Err(err).context("failed to walk the source directory");
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|e| e.to_str()) != Some(extension)
            || path == size_config
            || path == app_bar
        {
            continue;
        }

        spinner.set_message(format!("patching {}", path.display()));
        visit(path, FileKind::Generic, options, summary)?;
    }

    Ok(())
}

fn visit(
    path: &Path,
    kind: FileKind,
    options: &MigrateOptions,
    summary: &mut MigrationSummary,
) -> Result<()> {
    match patch_file(path, kind.rules(), options.dry_run) {
        Ok(modified) => {
            summary.changes.push(FileChange {
                path: path.to_path_buf(),
                kind,
                modified,
            });
            Ok(())
        }
        Err(e) if options.keep_going => {
            summary.failures.push(FileFailure {
                path: path.to_path_buf(),
                error: e.to_string(),
            });
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("failed to migrate {}", path.display())),
    }
}
