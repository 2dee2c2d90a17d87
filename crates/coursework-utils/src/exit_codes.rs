//! Exit code constants for the coursework CLI.
//!
//! # Exit Code Table
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | `SUCCESS` | Operation completed successfully |
//! | 1 | `INTERNAL` | General/internal failure |
//! | 2 | `CLI_ARGS` | Invalid CLI arguments or configuration |
//! | 3 | `INVALID_STRING` | Unpack input was malformed |
//! | 4 | `MALFORMED_RECORD` | Domain statistics input was malformed |
//! | 5 | `CONNECTION_FAILED` | Telnet connection failed or dropped |
//! | 6 | `CONNECTION_TIMEOUT` | Telnet dial timed out |

/// Exit codes matching the documented exit code table.
///
/// Use the named constants, or [`as_i32()`](Self::as_i32) to get the numeric
/// value for `std::process::exit()`.
///
/// ```rust
/// use coursework_utils::exit_codes::ExitCode;
///
/// assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
/// assert_eq!(ExitCode::INVALID_STRING, ExitCode::from_i32(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Success - operation completed successfully
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// Internal error - general failure
    pub const INTERNAL: ExitCode = ExitCode(1);

    /// CLI arguments error - invalid arguments or configuration
    pub const CLI_ARGS: ExitCode = ExitCode(2);

    /// Unpack input rejected
    pub const INVALID_STRING: ExitCode = ExitCode(3);

    /// A JSON-lines record could not be parsed
    pub const MALFORMED_RECORD: ExitCode = ExitCode(4);

    /// Connection refused, reset, or otherwise failed
    pub const CONNECTION_FAILED: ExitCode = ExitCode(5);

    /// Dial did not complete within the configured timeout
    pub const CONNECTION_TIMEOUT: ExitCode = ExitCode(6);

    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<i32> for ExitCode {
    fn from(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values_are_stable() {
        assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
        assert_eq!(ExitCode::INTERNAL.as_i32(), 1);
        assert_eq!(ExitCode::CLI_ARGS.as_i32(), 2);
        assert_eq!(ExitCode::INVALID_STRING.as_i32(), 3);
        assert_eq!(ExitCode::MALFORMED_RECORD.as_i32(), 4);
        assert_eq!(ExitCode::CONNECTION_FAILED.as_i32(), 5);
        assert_eq!(ExitCode::CONNECTION_TIMEOUT.as_i32(), 6);
    }

    #[test]
    fn test_exit_code_conversions() {
        let code: ExitCode = 3.into();
        assert_eq!(code, ExitCode::INVALID_STRING);
        let raw: i32 = ExitCode::CONNECTION_TIMEOUT.into();
        assert_eq!(raw, 6);
    }
}
