use std::path::Path;

use anyhow::Result;

use svg2sol_core::config::ProjectConfig;
use svg2sol_core::project;

use crate::output;

/// Initialize a new embedding project.
///
/// Creates the directory structure and writes the default config plus a
/// starter payload (a 1x1 transparent GIF), so `embed` works immediately
/// after scaffolding. Refuses to touch an existing directory.
pub fn run(name: &str) -> Result<()> {
    output::print_header(&format!("svg2sol init: {name}"));

    let project_dir = Path::new(name);

    output::print_step(1, 2, &format!("Creating project directory: {name}/"));
    project::create_project_dirs(project_dir)?;

    output::print_step(2, 2, "Writing config and starter payload");
    let config = ProjectConfig {
        name: name.to_string(),
        ..ProjectConfig::default()
    };
    project::write_starter_files(project_dir, &config)?;

    output::print_success(&format!("Project '{name}' created"));
    println!();
    println!("  Next steps:");
    println!("    cd {name}");
    println!("    svg2sol embed");
    println!();

    Ok(())
}
