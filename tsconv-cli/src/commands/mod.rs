//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// InfoWriter log to EDL, with the interactive editing menu.
pub mod edl;
/// Prints the markers of a file.
pub mod list;
/// EDL to YouTube chapter list.
pub mod youtube;

use std::fs;
use std::path::{Path, PathBuf};

use tsconv_core::{CoreError, TargetFormat};

use crate::error::CliResult;

/// Picks the output path (explicit, or derived from the input) and refuses
/// one that points back at the input file.
pub(crate) fn output_path_for(
    input: &Path,
    explicit: Option<PathBuf>,
    target: TargetFormat,
) -> CliResult<PathBuf> {
    let output = explicit.unwrap_or_else(|| target.default_output_path(input));
    let same = output == input
        || matches!(
            (fs::canonicalize(input), fs::canonicalize(&output)),
            (Ok(a), Ok(b)) if a == b
        );
    if same {
        return Err(CoreError::Validation(format!(
            "Output file {} is the input file, pass a different one with --output",
            output.display()
        )));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_output_path_replaces_extension() {
        let out = output_path_for(Path::new("logs/match.txt"), None, TargetFormat::Edl).unwrap();
        assert_eq!(out, PathBuf::from("logs/match.edl"));
    }

    #[test]
    fn test_output_matching_input_is_rejected() {
        let err = output_path_for(Path::new("markers.txt"), None, TargetFormat::YouTube);
        assert!(matches!(err, Err(CoreError::Validation(_))));

        let err = output_path_for(Path::new("log.edl"), None, TargetFormat::Edl);
        assert!(matches!(err, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_output_reaching_input_through_another_path_is_rejected() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("markers.edl");
        std::fs::write(&input, "").unwrap();
        let roundabout = dir.path().join(".").join("markers.edl");

        let err = output_path_for(&input, Some(roundabout), TargetFormat::YouTube);
        assert!(matches!(err, Err(CoreError::Validation(_))));
    }
}
