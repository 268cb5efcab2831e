// instructions for the raster images the user has to supply by hand

use std::fmt::Write;

pub const GUIDE_FILE_NAME: &str = "README.md";

const PLACEHOLDER_SERVICE: &str = "https://via.placeholder.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Profile,
    Destination,
    Background,
}

impl Category {
    const ORDERED: [Category; 3] = [Category::Profile, Category::Destination, Category::Background];

    fn heading(self) -> &'static str {
        match self {
            Category::Profile => "Profile Images (People)",
            Category::Destination => "Travel Destination Images",
            Category::Background => "Background",
        }
    }
}

/// one raster image the app expects, with its recommended placeholder look
#[derive(Debug, Clone, Copy)]
pub struct ImageSpec {
    pub name: &'static str,
    pub category: Category,
    pub width: u32,
    pub height: u32,
    pub color: &'static str,
    pub label: &'static str,
}

impl ImageSpec {
    pub fn stem(&self) -> &'static str {
        self.name.rsplit_once('.').map_or(self.name, |(stem, _)| stem)
    }

    pub fn placeholder_url(&self) -> String {
        format!(
            "{PLACEHOLDER_SERVICE}/{}x{}/{}/FFFFFF?text={}",
            self.width,
            self.height,
            self.color,
            self.label.replace(' ', "+")
        )
    }
}

const fn image(
    name: &'static str,
    category: Category,
    size: (u32, u32),
    color: &'static str,
    label: &'static str,
) -> ImageSpec {
    ImageSpec {
        name,
        category,
        width: size.0,
        height: size.1,
        color,
        label,
    }
}

const PORTRAIT: (u32, u32) = (400, 400);
const LANDSCAPE: (u32, u32) = (800, 600);
const BACKDROP: (u32, u32) = (1200, 800);

/// images in download order
pub const IMAGES: [ImageSpec; 8] = [
    image("profile.jpg", Category::Profile, PORTRAIT, "4A90E2", "Profile"),
    image("james.jpg", Category::Profile, PORTRAIT, "E94B3C", "James"),
    image("marry.jpg", Category::Profile, PORTRAIT, "6AB187", "Marry"),
    image("John.jpg", Category::Profile, PORTRAIT, "F39C12", "John"),
    image("rosy.jpg", Category::Profile, PORTRAIT, "E84393", "Rosy"),
    image("Red_Mountains.jpg", Category::Destination, LANDSCAPE, "8E44AD", "Red Mountains"),
    image("Magical_World.jpg", Category::Destination, LANDSCAPE, "3498DB", "Magical World"),
    image("home_bg.jpg", Category::Background, BACKDROP, "2C3E50", "Home Background"),
];

/// build the instructions document; output depends on nothing but constants
pub fn render_guide() -> String {
    let mut out = String::new();
    out.push_str("# Travel Verse Images\n\n");
    out.push_str("Please add the following images to this folder:\n");

    for category in Category::ORDERED {
        let _ = write!(out, "\n## {}\n", category.heading());
        for img in IMAGES.iter().filter(|s| s.category == category) {
            let _ = writeln!(
                out,
                "- {} ({}x{} px recommended)",
                img.name, img.width, img.height
            );
        }
    }

    out.push_str(SOURCES);

    out.push_str("\n```powershell\n");
    for img in &IMAGES {
        let _ = writeln!(
            out,
            "Invoke-WebRequest -Uri \"{}\" -OutFile \"{}\"",
            img.placeholder_url(),
            img.name
        );
    }
    out.push_str("```\n\nRun these commands from this directory in PowerShell!\n");
    out
}

const SOURCES: &str = "
## Where to get free images:

1. **Unsplash.com** - High quality free photos
   - Search: \"mountain\", \"fantasy landscape\", \"portrait\"

2. **Pexels.com** - Free stock photos
   - Search: \"travel destination\", \"landscape\"

3. **Placeholder Images (Quick Fix)**
   - Visit: https://via.placeholder.com/400x300.jpg
   - Download and rename for each image

## Quick Download Commands:

You can use these PowerShell commands to download placeholder images:
";

/// simple vector stand-in for a raster image
pub fn preview_svg(img: &ImageSpec) -> String {
    format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
    <rect width="100%" height="100%" fill="#{color}"/>
    <text x="50%" y="50%" font-family="Arial" font-size="20" fill="#666666" text-anchor="middle" dominant-baseline="middle">
        {label}
    </text>
</svg>"##,
        width = img.width,
        height = img.height,
        color = img.color,
        label = img.label
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guide_groups_images_by_category() {
        let guide = render_guide();
        let profile = guide.find("## Profile Images (People)").unwrap();
        let destinations = guide.find("## Travel Destination Images").unwrap();
        let background = guide.find("## Background").unwrap();
        assert!(profile < destinations && destinations < background);

        let john = guide.find("- John.jpg (400x400 px recommended)").unwrap();
        assert!(profile < john && john < destinations);
        assert!(guide.contains("- Red_Mountains.jpg (800x600 px recommended)"));
        assert!(guide.contains("- home_bg.jpg (1200x800 px recommended)"));
    }

    #[test]
    fn guide_lists_download_commands_with_colors() {
        let guide = render_guide();
        assert!(guide.contains(
            "Invoke-WebRequest -Uri \"https://via.placeholder.com/800x600/8E44AD/FFFFFF?text=Red+Mountains\" -OutFile \"Red_Mountains.jpg\""
        ));
        assert!(guide.contains(
            "Invoke-WebRequest -Uri \"https://via.placeholder.com/1200x800/2C3E50/FFFFFF?text=Home+Background\" -OutFile \"home_bg.jpg\""
        ));
        assert_eq!(guide.matches("Invoke-WebRequest").count(), IMAGES.len());
        assert!(guide.ends_with("Run these commands from this directory in PowerShell!\n"));
    }

    #[test]
    fn guide_matches_fixture_bytes() {
        assert_eq!(render_guide(), include_str!("../../tests/fixtures/README.md"));
    }

    #[test]
    fn preview_uses_table_dimensions() {
        let svg = preview_svg(&IMAGES[5]);
        assert!(svg.contains("<svg width=\"800\" height=\"600\""));
        assert!(svg.contains("fill=\"#8E44AD\""));
        assert!(svg.contains("Red Mountains"));
        assert_eq!(IMAGES[5].stem(), "Red_Mountains");
    }
}
