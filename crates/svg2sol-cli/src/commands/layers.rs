use svg2sol_core::layers;

use crate::output;

/// Print the default layer identifier table.
///
/// These are the identifiers the composition pipeline keys per-layer asset
/// files by, listed in paint order, plus the number of art levels.
pub fn run() {
    output::print_header("Default layer identifiers");

    for (i, name) in layers::ALL.iter().enumerate() {
        output::print_key_value(&format!("{:2}", i + 1), name);
    }

    println!();
    output::print_key_value("Levels", &layers::LEVELS.to_string());
}
