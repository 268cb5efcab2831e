// placeholder generation module - stub icons plus a guide for the raster images

pub mod guide;
pub mod icons;

use crate::config::Config;
use crate::utils::{display_relative, ensure_dir_all, write_text};
use anyhow::{Context, Result};
use console::style;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub use guide::{preview_svg, render_guide, ImageSpec, GUIDE_FILE_NAME, IMAGES};
pub use icons::Icon;

/// folder under the images directory that receives the svg stand-ins
pub const PREVIEW_DIR_NAME: &str = "previews";

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// also write an svg stand-in for every expected raster image
    pub svg_previews: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenerationReport {
    pub root: PathBuf,
    pub images_dir: PathBuf,
    pub icons_dir: PathBuf,
    pub icons_written: Vec<PathBuf>,
    pub guide: PathBuf,
    pub images_needed: Vec<String>,
    pub previews_written: Vec<PathBuf>,
}

/// write the icon stubs and the image guide, overwriting earlier copies
pub fn generate_placeholders(
    root: &Path,
    config: &Config,
    options: &GenerateOptions,
) -> Result<GenerationReport> {
    let images_dir = config.layout.images_path(root);
    let icons_dir = config.layout.icons_path(root);

    ensure_dir_all(&images_dir).context("failed to create the images folder")?;
    ensure_dir_all(&icons_dir).context("failed to create the icons folder")?;

    let mut icons_written = Vec::with_capacity(Icon::ALL.len());
    for icon in Icon::ALL {
        let path = icons_dir.join(icon.file_name());
        write_text(&path, icon.svg())
            .with_context(|| format!("failed to write icon {}", icon.file_name()))?;
        icons_written.push(path);
    }

    let guide = images_dir.join(GUIDE_FILE_NAME);
    write_text(&guide, &render_guide()).context("failed to write the image guide")?;

    let mut previews_written = Vec::new();
    if options.svg_previews {
        let preview_dir = images_dir.join(PREVIEW_DIR_NAME);
        ensure_dir_all(&preview_dir).context("failed to create the previews folder")?;
        for img in &IMAGES {
            let path = preview_dir.join(format!("{}.svg", img.stem()));
            write_text(&path, &preview_svg(img))
                .with_context(|| format!("failed to write preview for {}", img.name))?;
            previews_written.push(path);
        }
    }

    Ok(GenerationReport {
        root: root.to_path_buf(),
        images_dir,
        icons_dir,
        icons_written,
        guide,
        images_needed: IMAGES.iter().map(|s| s.name.to_string()).collect(),
        previews_written,
    })
}

pub fn print_generation(report: &GenerationReport) {
    println!("{}", style("🎨 verse-tools - asset placeholder generator").cyan().bold());
    println!("{}", style("============================================================").dim());

    println!("\n{}", style(format!("✅ created directory: {}", report.images_dir.display())).green());
    println!("{}", style(format!("✅ created directory: {}", report.icons_dir.display())).green());

    println!("\n{}", style("📦 creating svg icons...").cyan());
    for path in &report.icons_written {
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        println!("{}", style(format!("  ✅ created: {name}")).green());
    }

    println!("\n{}", style("📝 image placeholders needed:").cyan());
    println!("\nyou need to manually add these jpg images to {}:", report.images_dir.display());
    for name in &report.images_needed {
        println!("  📸 {name}");
    }

    if !report.previews_written.is_empty() {
        println!("\n{}", style("🖼️  wrote svg previews:").cyan());
        for path in &report.previews_written {
            println!("  - {}", path.display());
        }
    }

    println!("\n{}", style(format!("✅ created guide: {}", report.guide.display())).green());

    println!("\n{}", style("============================================================").dim());
    println!("{}", style("✨ setup complete!").green().bold());
    println!("\nnext steps:");
    println!("1. navigate to: {}/", display_relative(&report.images_dir, &report.root));
    println!("2. read the README.md file");
    println!("3. add the required jpg images");
    println!("4. run: flutter clean && flutter pub get && flutter run");
    println!(
        "\n{}",
        style("quick fix: run the powershell commands in the README to download placeholders!").yellow()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn bootstraps_folders_and_writes_fixed_files() {
        let dir = tempdir().unwrap();
        let report = generate_placeholders(dir.path(), &Config::default(), &GenerateOptions::default())
            .unwrap();

        let icons_dir = dir.path().join("assets/icons");
        let images_dir = dir.path().join("assets/images");
        assert!(icons_dir.is_dir());
        assert!(images_dir.is_dir());

        let mut icon_files: Vec<_> = fs::read_dir(&icons_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        icon_files.sort();
        assert_eq!(icon_files, vec!["calendar.svg", "chat.svg", "friendship.svg"]);
        assert_eq!(
            fs::read_to_string(icons_dir.join("chat.svg")).unwrap(),
            Icon::Chat.svg()
        );

        let image_files: Vec<_> = fs::read_dir(&images_dir).unwrap().collect();
        assert_eq!(image_files.len(), 1);
        assert_eq!(
            fs::read_to_string(images_dir.join("README.md")).unwrap(),
            include_str!("../../tests/fixtures/README.md")
        );

        assert_eq!(report.icons_written.len(), 3);
        assert_eq!(report.images_needed.len(), 8);
        assert!(report.previews_written.is_empty());
    }

    #[test]
    fn overwrites_existing_files() {
        let dir = tempdir().unwrap();
        let icons_dir = dir.path().join("assets/icons");
        fs::create_dir_all(&icons_dir).unwrap();
        fs::write(icons_dir.join("calendar.svg"), "stale").unwrap();

        generate_placeholders(dir.path(), &Config::default(), &GenerateOptions::default()).unwrap();
        assert_eq!(
            fs::read_to_string(icons_dir.join("calendar.svg")).unwrap(),
            Icon::Calendar.svg()
        );
    }

    #[test]
    fn second_run_produces_identical_bytes() {
        let dir = tempdir().unwrap();
        generate_placeholders(dir.path(), &Config::default(), &GenerateOptions::default()).unwrap();
        let first = fs::read(dir.path().join("assets/images/README.md")).unwrap();
        generate_placeholders(dir.path(), &Config::default(), &GenerateOptions::default()).unwrap();
        let second = fs::read(dir.path().join("assets/images/README.md")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn writes_previews_when_asked() {
        let dir = tempdir().unwrap();
        let options = GenerateOptions { svg_previews: true };
        let report = generate_placeholders(dir.path(), &Config::default(), &options).unwrap();

        assert_eq!(report.previews_written.len(), 8);
        let preview = dir.path().join("assets/images/previews/home_bg.svg");
        let svg = fs::read_to_string(preview).unwrap();
        assert!(svg.contains("width=\"1200\" height=\"800\""));
    }
}
