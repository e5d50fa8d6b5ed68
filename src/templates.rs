//! Embedded template asset bundles.
//!
//! Two independent bundles are compiled into the binary: prompt templates
//! and schema documents. Keys are paths relative to the bundle root
//! (`<directive>/<layer>/...`); content is opaque text to the deployer.

use include_dir::{Dir, DirEntry, include_dir};

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");
static SCHEMA_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/schema");

/// A file embedded in a template bundle.
#[derive(Debug, Clone)]
pub struct TemplateAsset {
    /// Path relative to the bundle root.
    pub path: String,
    /// File content as UTF-8 text.
    pub content: &'static str,
}

/// Returns all prompt template assets, sorted by path.
pub fn prompt_assets() -> Vec<TemplateAsset> {
    collect_bundle(&PROMPTS_DIR)
}

/// Returns all schema assets, sorted by path.
pub fn schema_assets() -> Vec<TemplateAsset> {
    collect_bundle(&SCHEMA_DIR)
}

fn collect_bundle(dir: &'static Dir) -> Vec<TemplateAsset> {
    let mut files = Vec::new();
    collect_files(dir, &mut files);
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}

fn collect_files(dir: &'static Dir, files: &mut Vec<TemplateAsset>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                if let Some(content) = file.contents_utf8() {
                    files.push(TemplateAsset {
                        path: file.path().to_string_lossy().to_string(),
                        content,
                    });
                }
            }
            DirEntry::Dir(subdir) => collect_files(subdir, files),
        }
    }
}
