//! Scan command implementation

use crate::manifest::parse_manifest_file;
use crate::settings::{OutputFormat, Settings};
use crate::validation::Validator;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Failed to encode result: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// One line of scan output
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanEntry {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub failed_required: usize,
    pub failed_recommended: usize,
    pub failed_optional: usize,
    pub score: u32,
    pub install_ready: bool,
}

/// Does this file name look like a web app manifest?
pub fn is_manifest_file(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name == "manifest.json")
        || path.extension().is_some_and(|ext| ext == "webmanifest")
}

/// Every manifest under `dir`, sorted by path. Unreadable entries are skipped.
pub fn find_manifests(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.display().to_string()));
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_file() && is_manifest_file(entry.path()) {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}

/// Validate every manifest under `dir`. Returns how many are not install ready.
pub async fn scan(dir: &Path, format: OutputFormat, settings: &Settings) -> Result<usize, ScanError> {
    let validator = Validator::from_settings(&settings.rules);
    let mut entries = Vec::new();

    for path in find_manifests(dir)? {
        let entry = match parse_manifest_file(&path) {
            Ok(manifest) => {
                let report = validator.loop_through_keys(&manifest).await;
                let summary = report.summary();
                ScanEntry {
                    path,
                    error: None,
                    failed_required: summary.required.failed,
                    failed_recommended: summary.recommended.failed,
                    failed_optional: summary.optional.failed,
                    score: report.score(&settings.score).percent(),
                    install_ready: report.is_install_ready(),
                }
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "skipping unreadable manifest");
                ScanEntry {
                    path,
                    error: Some(e.to_string()),
                    failed_required: 0,
                    failed_recommended: 0,
                    failed_optional: 0,
                    score: 0,
                    install_ready: false,
                }
            }
        };
        entries.push(entry);
    }

    let not_ready = entries.iter().filter(|e| !e.install_ready).count();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => print_entries(dir, &entries, not_ready),
    }

    Ok(not_ready)
}

fn print_entries(dir: &Path, entries: &[ScanEntry], not_ready: usize) {
    if entries.is_empty() {
        println!("[{}] No manifests found under {}", crate::APP_NAME, dir.display());
        return;
    }

    println!("[{}] Scanned {} manifest(s) under {}", crate::APP_NAME, entries.len(), dir.display());
    println!();
    for entry in entries {
        match &entry.error {
            Some(error) => println!("  {}  error: {}", entry.path.display(), error),
            None => println!(
                "  {}  {:>3}%  required failed {}, recommended failed {}, optional failed {}",
                entry.path.display(),
                entry.score,
                entry.failed_required,
                entry.failed_recommended,
                entry.failed_optional,
            ),
        }
    }
    println!();
    println!("{} of {} not install ready", not_ready, entries.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn recognizes_manifest_names() {
        assert!(is_manifest_file(Path::new("site/manifest.json")));
        assert!(is_manifest_file(Path::new("app.webmanifest")));
        assert!(!is_manifest_file(Path::new("package.json")));
    }

    #[tokio::test]
    async fn scans_nested_manifests() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(
            dir.path().join("a/manifest.json"),
            r#"{"name": "Webboard", "short_name": "Webboard", "start_url": "/", "icons": [{"src": "a.png", "sizes": "48x48"}]}"#,
        )
        .unwrap();
        fs::write(dir.path().join("a/b/site.webmanifest"), "{ broken").unwrap();
        fs::write(dir.path().join("a/b/package.json"), "{}").unwrap();

        let found = find_manifests(dir.path()).unwrap();
        assert_eq!(found.len(), 2);

        let not_ready = scan(dir.path(), OutputFormat::Json, &Settings::default()).await.unwrap();
        assert_eq!(not_ready, 1);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn walk_errors_do_not_abort_the_scan() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("manifest.json"), "{ broken").unwrap();
        std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("dangling")).unwrap();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("loop")).unwrap();

        let found = find_manifests(dir.path()).unwrap();
        assert_eq!(found, vec![dir.path().join("manifest.json")]);

        let not_ready = scan(dir.path(), OutputFormat::Json, &Settings::default()).await.unwrap();
        assert_eq!(not_ready, 1);
    }

    #[test]
    fn rejects_files() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(find_manifests(file.path()), Err(ScanError::NotADirectory(_))));
    }
}
