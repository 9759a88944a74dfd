use std::path::{Path, PathBuf};

use anyhow::Result;
use sha2::{Digest, Sha256};

use svg2sol_core::config::ProjectConfig;
use svg2sol_core::embedder::{self, EmbedJob};

use crate::output;

/// Generate the storage contract source from the payload file.
///
/// Loads the project config if one exists at `config_path` (built-in
/// defaults otherwise), applies any CLI overrides, and runs the embedder.
/// With no config file and no flags this reproduces the original pipeline:
/// `levelTwoGifBackground.txt` → `MushroomGifStorage.sol`.
pub fn run(
    config_path: &Path,
    payload: Option<PathBuf>,
    output: Option<PathBuf>,
    contract: Option<String>,
    constant: Option<String>,
    mime: Option<String>,
) -> Result<()> {
    output::print_header("svg2sol embed");

    let config = if config_path.exists() {
        tracing::debug!(path = %config_path.display(), "loading project config");
        ProjectConfig::load(config_path)?
    } else {
        ProjectConfig::default()
    };

    let mut job = EmbedJob::from_config(&config);
    if let Some(p) = payload {
        job.payload = p;
    }
    if let Some(o) = output {
        job.output = o;
    }
    if let Some(c) = contract {
        job.contract_name = c;
    }
    if let Some(c) = constant {
        job.constant_name = c;
    }
    if let Some(m) = mime {
        job.mime = m;
    }

    output::print_key_value("Payload", &job.payload.display().to_string());
    output::print_key_value("Contract", &job.contract_name);

    let report = embedder::run(&job)?;

    // Digest of the raw payload, for verifying the asset once it is on-chain.
    let digest = Sha256::digest(std::fs::read(&job.payload)?);

    output::print_success(&format!(
        "Generated {} ({} payload bytes)",
        report.output.display(),
        report.payload_bytes
    ));
    output::print_key_value("Constant", &job.constant_name);
    output::print_key_value("Payload sha256", &hex::encode(digest));

    Ok(())
}
