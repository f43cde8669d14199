//! Main build orchestration that ties all generators together.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{EXPORT_FILE_NAME, INDEX_FILE_NAME, PAGE_FILE_NAME};
use crate::error::Result;
use crate::export::generate_export;
use crate::html::{generate_entries, generate_toc};
use crate::index::generate_index;
use crate::normalize::normalize;
use crate::splice::splice_page;
use crate::types::{Corpus, RawEntry};

/// Paths and counts produced by a successful build.
#[derive(Debug)]
pub struct BuildArtifacts {
    /// Spliced page.
    pub page: PathBuf,

    /// Search index JSON.
    pub index: PathBuf,

    /// Markdown export.
    pub export: PathBuf,

    /// Number of entries in the dataset.
    pub entry_count: usize,

    /// Non-fatal warnings from normalization.
    pub warnings: Vec<String>,
}

/// Load raw entries from the canonical JSON data file.
pub fn load_entries(path: &Path) -> Result<Vec<RawEntry>> {
    debug!(path = %path.display(), "loading data file");
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load and normalize without writing anything (the `check` command).
pub fn check_data(path: &Path) -> Result<Corpus> {
    normalize(load_entries(path)?)
}

/// Run the full build pipeline.
///
/// Reads the data file and the page template, generates all artifacts,
/// and writes them under `out_dir`: the spliced page, the search index,
/// and the markdown export.
///
/// # Arguments
/// * `data` - Canonical JSON data file
/// * `template` - Page template carrying the splice markers
/// * `out_dir` - Output directory (created if absent)
/// * `wrap_width` - Wrap width for the markdown export
pub fn build_site(
    data: &Path,
    template: &Path,
    out_dir: &Path,
    wrap_width: usize,
) -> Result<BuildArtifacts> {
    let corpus = check_data(data)?;

    let template_text = fs::read_to_string(template)?;
    let template_name = template
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| template.display().to_string());

    let toc_html = generate_toc(&corpus.entries);
    let entries_html = generate_entries(&corpus.entries);
    let page = splice_page(&template_text, &toc_html, &entries_html, &template_name)?;
    let index = generate_index(&corpus.entries)?;
    let export = generate_export(&corpus.entries, wrap_width);

    fs::create_dir_all(out_dir)?;
    let page_path = out_dir.join(PAGE_FILE_NAME);
    let index_path = out_dir.join(INDEX_FILE_NAME);
    let export_path = out_dir.join(EXPORT_FILE_NAME);

    write_atomic(&page_path, &page)?;
    write_atomic(&index_path, &index)?;
    write_atomic(&export_path, &export)?;

    info!(
        entries = corpus.entries.len(),
        warnings = corpus.warnings.len(),
        out = %out_dir.display(),
        "build complete"
    );

    Ok(BuildArtifacts {
        page: page_path,
        index: index_path,
        export: export_path,
        entry_count: corpus.entries.len(),
        warnings: corpus.warnings,
    })
}

/// Write a file atomically: temp file in the same directory, sync to
/// disk, then rename. Partial writes never corrupt an existing artifact.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    let temp_path = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_path, path)?;

    Ok(())
}
