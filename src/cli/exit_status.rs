use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command did what was asked
/// - `Failure` (1): Command refused (config already exists, unknown extension)
/// - `Error` (2): Command failed (unreadable phrase file, invalid config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
