//! Project directory scaffolding for the `init` command.
//!
//! ## Directory layout
//!
//! ```text
//! <project>/
//! ├── svg2sol.config.json          # ProjectConfig
//! ├── levelTwoGifBackground.txt    # starter payload (1x1 transparent GIF)
//! └── assets/                      # per-layer asset files for the pipeline
//! ```

use std::path::Path;

use crate::config::{ProjectConfig, CONFIG_FILE};
use crate::error::{EmbedError, Result};
use crate::templates::embedded;

/// Create the project directory structure.
pub fn create_project_dirs(project_dir: &Path) -> Result<()> {
    if project_dir.exists() {
        return Err(EmbedError::ProjectExists(project_dir.to_path_buf()));
    }

    std::fs::create_dir_all(project_dir)?;
    std::fs::create_dir_all(project_dir.join("assets"))?;

    Ok(())
}

/// Write the config file and starter payload into the project directory.
pub fn write_starter_files(project_dir: &Path, config: &ProjectConfig) -> Result<()> {
    config.save(&project_dir.join(CONFIG_FILE))?;
    std::fs::write(project_dir.join(&config.payload), embedded::STARTER_PAYLOAD)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedder::{self, EmbedJob};

    #[test]
    fn test_scaffold_layout() {
        let dir = tempfile::tempdir().unwrap();
        let project_dir = dir.path().join("shroom");

        create_project_dirs(&project_dir).unwrap();
        let config = ProjectConfig::default();
        write_starter_files(&project_dir, &config).unwrap();

        assert!(project_dir.join(CONFIG_FILE).is_file());
        assert!(project_dir.join("levelTwoGifBackground.txt").is_file());
        assert!(project_dir.join("assets").is_dir());
    }

    #[test]
    fn test_existing_dir_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let result = create_project_dirs(dir.path());
        assert!(matches!(result, Err(EmbedError::ProjectExists(_))));
    }

    #[test]
    fn test_starter_payload_embeds() {
        let dir = tempfile::tempdir().unwrap();
        let project_dir = dir.path().join("shroom");
        create_project_dirs(&project_dir).unwrap();
        let config = ProjectConfig::default();
        write_starter_files(&project_dir, &config).unwrap();

        let mut job = EmbedJob::from_config(&config);
        job.payload = project_dir.join(&config.payload);
        job.output = project_dir.join(&config.output);
        let report = embedder::run(&job).unwrap();

        assert!(report.payload_bytes > 0);
        let source = std::fs::read_to_string(&job.output).unwrap();
        assert!(source.contains("data:image/gif;base64,R0lGODlh"));
    }
}
