//! Download of the upstream corpus and dictionary files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use koine_core::books::BookInfo;
use tracing::debug;

const SBLGNT_BASE_URL: &str = "https://raw.githubusercontent.com/morphgnt/sblgnt/master";
pub const STRONGS_URL: &str =
    "https://raw.githubusercontent.com/morphgnt/strongs-dictionary-xml/master/strongsgreek.xml";
pub const STRONGS_FILE: &str = "strongsgreek.xml";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(String),
}

/// Files handled by one [`fetch`] call.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub downloaded: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

pub fn corpus_url(book: &BookInfo) -> String {
    format!("{SBLGNT_BASE_URL}/{}", book.file)
}

/// Every (file name, url) pair a fetch of `books` needs, Strong's last.
pub fn plan(books: &[&BookInfo]) -> Vec<(String, String)> {
    books
        .iter()
        .map(|b| (b.file.to_string(), corpus_url(b)))
        .chain(std::iter::once((STRONGS_FILE.to_string(), STRONGS_URL.to_string())))
        .collect()
}

fn download_file(url: &str, dest: &Path) -> Result<(), FetchError> {
    let body = ureq::get(url)
        .call()
        .map_err(|e| FetchError::Http(format!("{url}: {e}")))?
        .into_body()
        .read_to_vec()
        .map_err(|e| FetchError::Http(format!("{url}: {e}")))?;
    fs::write(dest, &body)?;
    Ok(())
}

/// Download the corpus files of `books` and the Strong's dictionary into
/// `dest`. Files that already exist are left alone.
pub fn fetch(dest: &Path, books: &[&BookInfo]) -> Result<FetchSummary, FetchError> {
    fs::create_dir_all(dest)?;

    let mut summary = FetchSummary::default();
    for (name, url) in plan(books) {
        let path = dest.join(&name);
        if path.exists() {
            eprintln!("  {name} (already exists, skipping)");
            summary.skipped.push(path);
            continue;
        }
        eprintln!("  {name}");
        debug!(url, "downloading");
        download_file(&url, &path)?;
        summary.downloaded.push(path);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> &'static BookInfo {
        BookInfo::from_id("john").unwrap()
    }

    #[test]
    fn test_corpus_url() {
        assert_eq!(
            corpus_url(john()),
            "https://raw.githubusercontent.com/morphgnt/sblgnt/master/64-Jn-morphgnt.txt"
        );
    }

    #[test]
    fn test_plan_ends_with_strongs() {
        let plan = plan(&[john()]);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].0, "64-Jn-morphgnt.txt");
        assert_eq!(plan[1], (STRONGS_FILE.to_string(), STRONGS_URL.to_string()));
    }

    #[test]
    fn test_existing_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(john().file), "040101 P- -------- Ἐν Ἐν ἐν ἐν\n").unwrap();
        fs::write(dir.path().join(STRONGS_FILE), "<entries/>").unwrap();

        let summary = fetch(dir.path(), &[john()]).unwrap();
        assert!(summary.downloaded.is_empty());
        assert_eq!(summary.skipped.len(), 2);
    }
}
