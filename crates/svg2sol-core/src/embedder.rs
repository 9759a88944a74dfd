//! The template embedder: payload file in, generated Solidity source out.
//!
//! A run is a single synchronous pass: read the payload file, compose the
//! `data:` URI, render the storage contract template, write the result
//! atomically. The payload is embedded verbatim — no Base64 validation, no
//! trimming, no re-encoding — so the generated constant reproduces the file
//! character-for-character.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::error::{EmbedError, Result};
use crate::templates::{embedded, renderer::TemplateRenderer};

/// One embedding run, fully described.
#[derive(Debug, Clone)]
pub struct EmbedJob {
    /// Path to the Base64 payload file.
    pub payload: PathBuf,
    /// Path the generated Solidity source is written to. Overwritten
    /// without confirmation if it exists.
    pub output: PathBuf,
    /// Solidity contract name.
    pub contract_name: String,
    /// Name of the generated string constant.
    pub constant_name: String,
    /// MIME type for the data URI prefix.
    pub mime: String,
}

impl EmbedJob {
    /// Build a job from a project config.
    pub fn from_config(config: &ProjectConfig) -> Self {
        Self {
            payload: config.payload.clone(),
            output: config.output.clone(),
            contract_name: config.contract.name.clone(),
            constant_name: config.contract.constant.clone(),
            mime: config.contract.mime.clone(),
        }
    }
}

/// Outcome of a successful embedding run.
#[derive(Debug, Clone)]
pub struct EmbedReport {
    /// Path of the generated source file.
    pub output: PathBuf,
    /// Size of the embedded payload in bytes.
    pub payload_bytes: u64,
    /// Contract name emitted in the source.
    pub contract_name: String,
}

/// Run the embedder: read the payload, render the contract, write the output.
///
/// Fails on the first I/O or rendering error with no retry — a missing
/// payload has no fallback, and a failed write leaves any previous output
/// file untouched (the write goes through a temp file in the destination
/// directory followed by a rename).
pub fn run(job: &EmbedJob) -> Result<EmbedReport> {
    let payload =
        std::fs::read_to_string(&job.payload).map_err(|e| EmbedError::PayloadNotFound {
            path: job.payload.clone(),
            source: e,
        })?;
    tracing::debug!(bytes = payload.len(), path = %job.payload.display(), "payload read");

    let data_uri = format!("data:{};base64,{}", job.mime, payload);

    let renderer = TemplateRenderer::new();
    let data = serde_json::json!({
        "contract_name": job.contract_name,
        "constant_name": job.constant_name,
        "data_uri": data_uri,
    });
    let source = renderer.render(embedded::GIF_STORAGE_CONTRACT, &data)?;

    write_atomic(&job.output, &source)?;
    tracing::debug!(path = %job.output.display(), "generated source written");

    Ok(EmbedReport {
        output: job.output.clone(),
        payload_bytes: payload.len() as u64,
        contract_name: job.contract_name.clone(),
    })
}

/// Write `contents` to `path` via a temp file in the destination directory
/// followed by a rename. An interrupted run never leaves a truncated source
/// file at `path`.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| EmbedError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| EmbedError::OutputWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    tmp.persist(path).map_err(|e| EmbedError::OutputWrite {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_in(dir: &Path) -> EmbedJob {
        EmbedJob {
            payload: dir.join("levelTwoGifBackground.txt"),
            output: dir.join("MushroomGifStorage.sol"),
            contract_name: "MushroomGifStorage".into(),
            constant_name: "levelTwoGifBackground".into(),
            mime: "image/gif".into(),
        }
    }

    /// Extract the quoted data URI payload from a generated source file.
    fn extract_payload(source: &str) -> &str {
        let start = source.find("base64,").unwrap() + "base64,".len();
        let end = source.rfind("\";").unwrap();
        &source[start..end]
    }

    #[test]
    fn test_embeds_payload_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let job = job_in(dir.path());
        std::fs::write(&job.payload, "AAAA").unwrap();

        let report = run(&job).unwrap();
        assert_eq!(report.payload_bytes, 4);

        let source = std::fs::read_to_string(&job.output).unwrap();
        assert!(source.contains(
            "    string public constant levelTwoGifBackground = \"data:image/gif;base64,AAAA\";"
        ));
        assert!(source.contains("contract MushroomGifStorage {"));
        assert!(source.contains("pragma solidity ^0.8.21;"));
    }

    #[test]
    fn test_empty_payload_still_generates() {
        let dir = tempfile::tempdir().unwrap();
        let job = job_in(dir.path());
        std::fs::write(&job.payload, "").unwrap();

        run(&job).unwrap();

        let source = std::fs::read_to_string(&job.output).unwrap();
        assert!(source.contains("= \"data:image/gif;base64,\";"));
    }

    #[test]
    fn test_round_trip_arbitrary_payload() {
        // Not valid Base64 at all; the embedder must pass it through
        // untouched, entity-escaping included.
        let payload = "n0t/b@se64==&<>\nsecond line\n";
        let dir = tempfile::tempdir().unwrap();
        let job = job_in(dir.path());
        std::fs::write(&job.payload, payload).unwrap();

        run(&job).unwrap();

        let source = std::fs::read_to_string(&job.output).unwrap();
        assert_eq!(extract_payload(&source), payload);
    }

    #[test]
    fn test_idempotent_rerun() {
        let dir = tempfile::tempdir().unwrap();
        let job = job_in(dir.path());
        std::fs::write(&job.payload, "R0lGODlh").unwrap();

        run(&job).unwrap();
        let first = std::fs::read(&job.output).unwrap();
        run(&job).unwrap();
        let second = std::fs::read(&job.output).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let job = job_in(dir.path());
        std::fs::write(&job.payload, "BBBB").unwrap();
        std::fs::write(&job.output, "stale content").unwrap();

        run(&job).unwrap();

        let source = std::fs::read_to_string(&job.output).unwrap();
        assert!(!source.contains("stale content"));
        assert_eq!(extract_payload(&source), "BBBB");
    }

    #[test]
    fn test_missing_payload_is_fatal_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let job = job_in(dir.path());

        let result = run(&job);
        assert!(matches!(result, Err(EmbedError::PayloadNotFound { .. })));
        assert!(!job.output.exists());
    }

    #[test]
    fn test_unwritable_output_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut job = job_in(dir.path());
        std::fs::write(&job.payload, "AAAA").unwrap();
        job.output = dir.path().join("no_such_dir").join("MushroomGifStorage.sol");

        let result = run(&job);
        assert!(matches!(result, Err(EmbedError::OutputWrite { .. })));
        assert!(!job.output.exists());
    }

    #[test]
    fn test_custom_contract_naming() {
        let dir = tempfile::tempdir().unwrap();
        let mut job = job_in(dir.path());
        job.contract_name = "SporePrintStorage".into();
        job.constant_name = "sporePrint".into();
        job.mime = "image/png".into();
        std::fs::write(&job.payload, "CCCC").unwrap();

        run(&job).unwrap();

        let source = std::fs::read_to_string(&job.output).unwrap();
        assert!(source.contains("contract SporePrintStorage {"));
        assert!(source
            .contains("string public constant sporePrint = \"data:image/png;base64,CCCC\";"));
    }
}
