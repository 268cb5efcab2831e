// human-readable rendering of an audit outcome

use super::manifest::{canonical_example, ScanEntry};
use super::{AssetCheck, AuditOutcome, AuditReport};
use crate::config::ProjectLayout;
use crate::utils::plural;
use console::style;

const RULE: &str = "============================================================";

pub fn print_audit(outcome: &AuditOutcome, layout: &ProjectLayout) {
    println!("{}", style("🔍 verse-tools - asset diagnostic").cyan().bold());
    println!("{}", style(RULE).dim());

    match outcome {
        AuditOutcome::MissingManifest { root, manifest } => {
            println!("\n📁 current directory: {}", root.display());
            println!(
                "\n{}",
                style(format!("❌ error: {} not found!", layout.manifest)).red().bold()
            );
            println!(
                "{}",
                style(format!(
                    "   please run this from your project root (looked for {})",
                    manifest.display()
                ))
                .yellow()
            );
        }
        AuditOutcome::Completed(report) => print_report(report, layout),
    }
}

fn print_report(report: &AuditReport, layout: &ProjectLayout) {
    println!("\n📁 current directory: {}", report.root.display());
    println!("{}", style(format!("✅ found {}", layout.manifest)).green());

    println!("\n{}", style("📂 checking folder structure...").cyan());
    for dir in &report.directories {
        if dir.created {
            println!("{}", style(format!("❌ {} folder not found", dir.label)).red());
            println!("   creating it now...");
        } else {
            println!("{}", style(format!("✅ {} folder exists", dir.label)).green());
        }
    }

    println!(
        "\n{}",
        style(format!("🖼️  checking image files in: {}", report.images_dir.display())).cyan()
    );
    print_checks(&report.images, true);

    println!(
        "\n{}",
        style(format!("🎨 checking svg icons in: {}", report.icons_dir.display())).cyan()
    );
    print_checks(&report.icons, false);

    println!("\n{}", style(format!("📄 checking {}...", layout.manifest)).cyan());
    let decl = &report.declarations;
    for (name, declared) in [(&decl.images, decl.images_declared), (&decl.icons, decl.icons_declared)] {
        if declared {
            println!("{}", style(format!("  ✅ {name} is declared in {}", layout.manifest)).green());
        } else {
            println!("{}", style(format!("  ❌ {name} not declared in {}", layout.manifest)).red());
        }
    }

    println!("\n{}", style(format!("🔍 checking {} indentation...", layout.manifest)).cyan());
    for entry in &report.indentation.entries {
        match entry {
            ScanEntry::Section { line } => println!("  line {line}: flutter: ✅"),
            ScanEntry::Indentation(finding) => {
                let label = &finding.text;
                if finding.correct {
                    println!(
                        "{}",
                        style(format!(
                            "  line {}: {label} ✅ ({})",
                            finding.line,
                            plural(finding.observed, "space")
                        ))
                        .green()
                    );
                } else {
                    println!(
                        "{}",
                        style(format!(
                            "  line {}: {label} ❌ ({}, should be {})",
                            finding.line,
                            plural(finding.observed, "space"),
                            finding.expected
                        ))
                        .red()
                    );
                }
            }
        }
    }

    print_summary(report, layout);
}

fn print_checks(checks: &[AssetCheck], show_size: bool) {
    for check in checks {
        match check.size {
            Some(size) if show_size => {
                println!("{}", style(format!("  ✅ {} ({size} bytes)", check.name)).green())
            }
            Some(_) => println!("{}", style(format!("  ✅ {}", check.name)).green()),
            None => println!("{}", style(format!("  ❌ {} - not found", check.name)).red()),
        }
    }
}

fn print_summary(report: &AuditReport, layout: &ProjectLayout) {
    println!("\n{}", style(RULE).dim());
    println!("{}", style("📊 summary:").bold());
    println!("{}", style(RULE).dim());

    let missing_images = report.missing_images();
    let missing_icons = report.missing_icons();

    print_missing(&missing_images, "image", "✅ all required images are present!");
    print_missing(&missing_icons, "icon", "✅ all required icons are present!");

    let indentation_ok = report.indentation.is_correct();
    if !indentation_ok {
        println!(
            "\n{}",
            style(format!("❌ {} has indentation issues!", layout.manifest)).red().bold()
        );
        println!("\n📝 your {} should look like this:", layout.manifest);
        println!("\n{}", style(canonical_example(layout)).yellow());
    }

    println!("\n{}", style("💡 next steps:").cyan().bold());
    if !missing_images.is_empty() || !missing_icons.is_empty() {
        println!("1. add the missing files to the correct folders");
    }
    if !indentation_ok {
        println!("2. fix the indentation in {}", layout.manifest);
    }
    println!("3. run: flutter clean");
    println!("4. run: flutter pub get");
    println!("5. run: flutter run");
}

fn print_missing(missing: &[&str], noun: &str, all_present: &str) {
    if missing.is_empty() {
        println!("\n{}", style(all_present).green());
        return;
    }
    println!(
        "\n{}",
        style(format!("❌ missing {} {noun}(s):", missing.len())).red().bold()
    );
    for name in missing {
        println!("   - {name}");
    }
}
