// manifest inspection - substring and leading-whitespace heuristics only,
// no yaml parsing

use crate::config::ProjectLayout;
use crate::utils::leading_whitespace;
use serde::Serialize;

/// keyword that opens the framework section of the manifest
pub const SECTION_KEYWORD: &str = "flutter:";

/// marker for the asset list key inside the section
pub const ASSETS_KEY: &str = "assets:";

pub const ASSETS_KEY_INDENT: usize = 2;
pub const IMAGES_ENTRY_INDENT: usize = 4;

/// whether the manifest mentions each asset directory anywhere
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Declarations {
    pub images: String,
    pub images_declared: bool,
    pub icons: String,
    pub icons_declared: bool,
}

impl Declarations {
    pub fn all_declared(&self) -> bool {
        self.images_declared && self.icons_declared
    }
}

pub fn check_declarations(content: &str, layout: &ProjectLayout) -> Declarations {
    let images = layout.images_declaration();
    let icons = layout.icons_declaration();
    Declarations {
        images_declared: content.contains(&images),
        icons_declared: content.contains(&icons),
        images,
        icons,
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    AssetsKey,
    ImagesEntry,
}

/// one indentation check on one manifest line
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IndentationFinding {
    pub line: usize,
    pub marker: Marker,
    pub text: String,
    pub observed: usize,
    pub expected: usize,
    pub correct: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanEntry {
    Section { line: usize },
    Indentation(IndentationFinding),
}

/// result of the line scan, in line order
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct IndentationScan {
    pub entries: Vec<ScanEntry>,
}

impl IndentationScan {
    pub fn section_found(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e, ScanEntry::Section { .. }))
    }

    pub fn findings(&self) -> impl Iterator<Item = &IndentationFinding> {
        self.entries.iter().filter_map(|e| match e {
            ScanEntry::Indentation(finding) => Some(finding),
            ScanEntry::Section { .. } => None,
        })
    }

    /// true unless some checked line had the wrong indentation
    pub fn is_correct(&self) -> bool {
        self.findings().all(|f| f.correct)
    }
}

/// accumulator threaded through the line fold
#[derive(Default)]
struct ScanState {
    in_section: bool,
    scan: IndentationScan,
}

impl ScanState {
    fn feed(mut self, number: usize, line: &str, images_entry: &str) -> Self {
        if line.trim().starts_with(SECTION_KEYWORD) {
            self.in_section = true;
            self.scan.entries.push(ScanEntry::Section { line: number });
        }

        if !self.in_section {
            return self;
        }

        if line.contains(ASSETS_KEY) {
            self.check(number, line, Marker::AssetsKey, ASSETS_KEY, ASSETS_KEY_INDENT);
        }
        if line.contains(images_entry) {
            self.check(number, line, Marker::ImagesEntry, images_entry, IMAGES_ENTRY_INDENT);
        }
        self
    }

    fn check(&mut self, number: usize, line: &str, marker: Marker, text: &str, expected: usize) {
        let observed = leading_whitespace(line);
        self.scan.entries.push(ScanEntry::Indentation(IndentationFinding {
            line: number,
            marker,
            text: text.to_string(),
            observed,
            expected,
            correct: observed == expected,
        }));
    }
}

/// check indentation of the asset declarations below the section keyword
///
/// lines are numbered from 1 and split on `\n` only, so a trailing `\r` never
/// affects the leading whitespace count.
pub fn scan_indentation(content: &str, layout: &ProjectLayout) -> IndentationScan {
    let images_entry = format!("- {}", layout.images_declaration());
    content
        .split('\n')
        .enumerate()
        .fold(ScanState::default(), |state, (i, line)| {
            state.feed(i + 1, line, &images_entry)
        })
        .scan
}

/// the correctly indented manifest block shown when the scan fails
pub fn canonical_example(layout: &ProjectLayout) -> String {
    format!(
        "{SECTION_KEYWORD}\n  uses-material-design: true\n\n  {ASSETS_KEY}\n    - {}\n    - {}\n",
        layout.images_declaration(),
        layout.icons_declaration()
    )
}
