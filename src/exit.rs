// src/exit.rs
//! Process exit codes for `techtree`.
//!
//! Scripts piping the DOT output into a renderer only need to tell success
//! from failure, so there are exactly two codes.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum TechTreeExit {
    /// The graph was rendered to stdout.
    Success = 0,
    /// A fatal error aborted the run before anything was written.
    Error = 1,
}

impl TechTreeExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for TechTreeExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(TechTreeExit::Success.code(), 0);
        assert_eq!(TechTreeExit::Error.code(), 1);
    }
}
