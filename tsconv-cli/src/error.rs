// ============================================================================
// tsconv-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: File Context for Core Errors
//
// Commands report which file they were reading or writing when something
// fails. Only I/O errors need that context added: every other core error
// already names its line or path, and keeps its variant so the menu can tell
// a recoverable mistake from a fatal one.
//
// KEY COMPONENTS:
// - CliResult: Type alias for CLI operations
// - FileContext: attaches the file path to I/O failures
//
// AI-ASSISTANT-INFO: CLI error handling utilities

use std::io;
use std::path::Path;

use tsconv_core::{CoreError, CoreResult};

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// What the command was doing with a file when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Read,
    Write,
}

impl FileAction {
    fn verb(self) -> &'static str {
        match self {
            FileAction::Read => "read",
            FileAction::Write => "write",
        }
    }
}

/// Adds the file being read or written to I/O errors.
pub trait FileContext<T> {
    fn for_file(self, action: FileAction, path: &Path) -> CliResult<T>;
}

impl<T> FileContext<T> for CoreResult<T> {
    fn for_file(self, action: FileAction, path: &Path) -> CliResult<T> {
        self.map_err(|e| match e {
            // Kind is kept so callers can still match on it.
            CoreError::Io(source) => CoreError::Io(io::Error::new(
                source.kind(),
                format!("could not {} '{}': {}", action.verb(), path.display(), source),
            )),
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_io_error_gains_path_and_keeps_kind() {
        let res: CoreResult<()> = Err(CoreError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            "No such file or directory",
        )));
        match res.for_file(FileAction::Write, Path::new("out/markers.edl")) {
            Err(CoreError::Io(e)) => {
                assert_eq!(e.kind(), io::ErrorKind::NotFound);
                assert!(e.to_string().starts_with("could not write 'out/markers.edl'"));
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_other_errors_pass_through_unchanged() {
        let path = Path::new("markers.edl");

        let res: CoreResult<()> = Err(CoreError::Validation("bad".into()));
        let err = res.for_file(FileAction::Read, path).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ref m) if m == "bad"));
        assert!(err.is_recoverable());

        let res: CoreResult<()> = Err(CoreError::OutputExists(PathBuf::from("markers.edl")));
        assert!(matches!(
            res.for_file(FileAction::Write, path),
            Err(CoreError::OutputExists(_))
        ));

        let res: CoreResult<()> = Err(CoreError::InvalidClock("1:2".into()));
        assert!(matches!(
            res.for_file(FileAction::Read, path),
            Err(CoreError::InvalidClock(_))
        ));
    }
}
