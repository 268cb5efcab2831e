use super::{FileKind, MigrationOutcome, MigrationSummary};
use crate::utils::{display_relative, plural};
use console::style;

const RULE: &str = "==================================================";

pub fn print_migration(outcome: &MigrationOutcome, verbose: bool) {
    println!("{}", style("🚀 verse-tools - null safety migration").cyan().bold());
    println!("{}", style(RULE).dim());

    match outcome {
        MigrationOutcome::MissingSourceDir { source_dir, .. } => {
            println!(
                "{}",
                style(format!("❌ error: '{}' directory not found!", source_dir.display()))
                    .red()
                    .bold()
            );
            println!(
                "{}",
                style("please run this from your flutter project root directory.").yellow()
            );
        }
        MigrationOutcome::Completed(summary) => print_summary(summary, verbose),
    }
}

fn print_summary(summary: &MigrationSummary, verbose: bool) {
    println!("📁 project root: {}", summary.root.display());
    println!("📂 processing files in: {}", summary.source_dir.display());
    if summary.dry_run {
        println!("{}", style("dry run: no files will be written").yellow());
    }
    println!();

    let verb = if summary.dry_run { "would fix" } else { "fixed" };
    for change in &summary.changes {
        let shown = display_relative(&change.path, &summary.root);
        if change.modified {
            println!("{}", style(format!("✅ {verb}: {shown}")).green());
        } else if verbose {
            let note = match change.kind {
                FileKind::Generic => String::new(),
                kind => format!(" ({} rules)", kind_label(kind)),
            };
            println!("{}", style(format!("   unchanged: {shown}{note}")).dim());
        }
    }

    if !summary.failures.is_empty() {
        println!();
        for failure in &summary.failures {
            eprintln!(
                "{} {}",
                style(format!("❌ skipped {}:", display_relative(&failure.path, &summary.root)))
                    .red()
                    .bold(),
                style(&failure.error).red()
            );
        }
    }

    println!();
    println!("{}", style(RULE).dim());
    let count = summary.modified_count();
    if summary.dry_run {
        println!(
            "{}",
            style(format!("✨ dry run complete! {} would change.", plural(count, "file"))).green().bold()
        );
    } else {
        println!(
            "{}",
            style(format!("✨ migration complete! fixed {}.", plural(count, "file"))).green().bold()
        );
    }
    if !summary.failures.is_empty() {
        println!(
            "{}",
            style(format!("⚠️  {} could not be processed.", plural(summary.failures.len(), "file")))
                .yellow()
                .bold()
        );
    }
    if verbose {
        println!("visited {}", plural(summary.changes.len(), "file"));
        for kind in [FileKind::Generic, FileKind::SizeConfig, FileKind::AppBar] {
            let files = summary.changes.iter().filter(|c| c.kind == kind).count();
            if files == 0 {
                continue;
            }
            println!(
                "  {} rules: {} on {}",
                kind_label(kind),
                kind.rules().len(),
                plural(files, "file")
            );
        }
    }

    println!("\nnext steps:");
    println!("1. run: flutter clean");
    println!("2. run: flutter pub get");
    println!("3. run: flutter run");
    println!("\nif you still have errors, check the travel_verse_fixes.md file");
    println!("for manual fixes that may be needed.");
}

fn kind_label(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Generic => "generic",
        FileKind::SizeConfig => "size config",
        FileKind::AppBar => "app bar",
    }
}
