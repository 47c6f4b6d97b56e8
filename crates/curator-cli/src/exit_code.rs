//! Process exit codes, one per failure class.
//!
//! Code 2 is left to clap for usage errors.

use curator_core::errors::{CuratorError, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CliExitCode {
    Success = 0,
    Internal = 1,
    EmptyCollection = 3,
    Exhausted = 4,
    NotFound = 5,
    CorruptSnapshot = 6,
    InvalidInput = 7,
}

impl From<ErrorKind> for CliExitCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::EmptyCollection => Self::EmptyCollection,
            ErrorKind::ExhaustedCollection => Self::Exhausted,
            ErrorKind::NotFound => Self::NotFound,
            ErrorKind::CorruptSnapshot => Self::CorruptSnapshot,
            ErrorKind::InvalidInput => Self::InvalidInput,
            ErrorKind::Internal => Self::Internal,
        }
    }
}

/// Map an error onto its exit code. Errors that did not come from the core
/// (argument files that fail to parse, for instance) count as invalid input.
pub fn exit_code_for_error(err: &anyhow::Error) -> CliExitCode {
    if let Some(core) = err.downcast_ref::<CuratorError>() {
        return core.kind().into();
    }
    if err.downcast_ref::<serde_json::Error>().is_some()
        || err.downcast_ref::<std::io::Error>().is_some()
    {
        return CliExitCode::InvalidInput;
    }
    CliExitCode::Internal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_kinds_get_distinct_codes() {
        let cases = [
            (CuratorError::EmptyCollection, CliExitCode::EmptyCollection),
            (
                CuratorError::ExhaustedCollection { total: 4 },
                CliExitCode::Exhausted,
            ),
            (CuratorError::UnknownItem { id: 9 }, CliExitCode::NotFound),
            (
                CuratorError::QuestionNotFound { id: 9 },
                CliExitCode::NotFound,
            ),
            (
                CuratorError::ShapeMismatch {
                    features: 3,
                    items: 4,
                },
                CliExitCode::InvalidInput,
            ),
            (
                CuratorError::LockPoisoned { resource: "engine" },
                CliExitCode::Internal,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(exit_code_for_error(&anyhow::Error::new(err)), expected);
        }
    }

    #[test]
    fn context_does_not_hide_the_kind() {
        let err = anyhow::Error::new(CuratorError::UnknownItem { id: 1 }).context("label");
        assert_eq!(exit_code_for_error(&err), CliExitCode::NotFound);
    }

    #[test]
    fn bad_json_input_is_invalid_input() {
        let parse = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert_eq!(
            exit_code_for_error(&anyhow::Error::new(parse)),
            CliExitCode::InvalidInput
        );
    }

    #[test]
    fn codes_are_unique() {
        let codes = [
            CliExitCode::Success,
            CliExitCode::Internal,
            CliExitCode::EmptyCollection,
            CliExitCode::Exhausted,
            CliExitCode::NotFound,
            CliExitCode::CorruptSnapshot,
            CliExitCode::InvalidInput,
        ];
        let mut seen: Vec<i32> = codes.iter().map(|c| *c as i32).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), codes.len());
        assert!(!seen.contains(&2));
    }
}
