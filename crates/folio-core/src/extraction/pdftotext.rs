use crate::error::FolioError;
use crate::extraction::table::detect_tables;
use crate::extraction::{check_index, PageContent, PdfBackend, PdfDocument};
use std::path::{Path, PathBuf};
use std::process::Command;

/// PDF extraction backend using pdftotext and pdfinfo (from poppler-utils).
///
/// Uses `pdftotext -layout` to preserve whitespace alignment of tables, one
/// invocation per page.
pub struct PdftotextBackend;

impl PdftotextBackend {
    pub fn new() -> Self {
        PdftotextBackend
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBackend for PdftotextBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, FolioError> {
        let info = run_tool("pdfinfo", Command::new("pdfinfo").arg(path))?;
        let page_count = parse_page_count(&info)?;
        tracing::debug!(path = %path.display(), page_count, "opened with pdfinfo");

        Ok(Box::new(PdftotextDocument {
            path: path.to_path_buf(),
            page_count,
        }))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

pub struct PdftotextDocument {
    path: PathBuf,
    page_count: usize,
}

impl PdfDocument for PdftotextDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn page(&mut self, index: usize) -> Result<PageContent, FolioError> {
        check_index(index, self.page_count)?;
        let n = (index + 1).to_string();
        let n = n.as_str();

        let raw = run_tool(
            "pdftotext",
            Command::new("pdftotext")
                .arg("-layout")
                .args(["-enc", "UTF-8"])
                .args(["-f", n, "-l", n])
                .arg(&self.path)
                .arg("-"), // output to stdout
        )?;

        let text = strip_page_break(&raw).to_string();
        let tables = detect_tables(&text);

        Ok(PageContent { text, tables })
    }
}

impl Drop for PdftotextDocument {
    fn drop(&mut self) {
        tracing::debug!(path = %self.path.display(), "released document");
    }
}

fn run_tool(tool: &'static str, cmd: &mut Command) -> Result<String, FolioError> {
    let output = cmd.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FolioError::PdftotextNotFound { tool }
        } else {
            FolioError::Extraction(format!("{tool} failed: {e}"))
        }
    })?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(FolioError::PdftotextFailed { tool, code, stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Read the `Pages:` line of `pdfinfo` output.
fn parse_page_count(info: &str) -> Result<usize, FolioError> {
    let value = info
        .lines()
        .find_map(|l| l.strip_prefix("Pages:"))
        .ok_or_else(|| FolioError::PdfInfo("no 'Pages:' line".into()))?;

    value
        .trim()
        .parse()
        .map_err(|_| FolioError::PdfInfo(format!("invalid page count '{}'", value.trim())))
}

/// pdftotext terminates every page with a form feed (\x0c).
fn strip_page_break(raw: &str) -> &str {
    raw.strip_suffix('\x0c').unwrap_or(raw)
}
