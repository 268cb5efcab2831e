use crate::error::ToolError;
use encoding_rs::UTF_8;
use std::fs;
use std::path::Path;

/// read a text file, rejecting anything that is not valid utf-8
///
/// a leading byte order mark is kept as part of the text so that writing the
/// content back reproduces the file byte for byte.
pub fn read_text(path: &Path) -> Result<String, ToolError> {
    let bytes = fs::read(path).map_err(|e| ToolError::filesystem("read", path, e))?;
    decode_utf8(&bytes).ok_or_else(|| ToolError::Encoding {
        path: path.to_path_buf(),
    })
}

/// strict utf-8 decode; `None` on malformed input instead of replacement chars
pub fn decode_utf8(bytes: &[u8]) -> Option<String> {
    UTF_8
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|cow| cow.into_owned())
}

/// write text to a file, replacing whatever was there
pub fn write_text(path: &Path, contents: &str) -> Result<(), ToolError> {
    fs::write(path, contents.as_bytes()).map_err(|e| ToolError::filesystem("write", path, e))
}

/// create a single directory level if missing, returns true when it was created
pub fn ensure_dir(path: &Path) -> Result<bool, ToolError> {
    if path.is_dir() {
        return Ok(false);
    }
    fs::create_dir(path).map_err(|e| ToolError::filesystem("create directory", path, e))?;
    Ok(true)
}

/// create a directory and any missing parents, returns true when something was created
pub fn ensure_dir_all(path: &Path) -> Result<bool, ToolError> {
    if path.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(path).map_err(|e| ToolError::filesystem("create directory", path, e))?;
    Ok(true)
}

/// number of leading whitespace characters (spaces and tabs count as one each)
pub fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// show a path relative to the project root when possible
pub fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// plural helper for summary lines
pub fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}
