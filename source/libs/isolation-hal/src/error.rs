// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Error kinds surfaced by boundary operations and their ABI status words
//! OWNERS: @kernel-isolation-team
//! INVARIANTS: Success is 0; error status words are stable ABI and must not be renumbered

/// Status word reported to the SPM for a successful operation.
pub const STATUS_SUCCESS: i32 = 0;

/// Result type returned by boundary operations.
pub type HalResult<T> = core::result::Result<T, HalError>;

/// Errors produced by the isolation HAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HalError {
    /// A required argument was malformed (e.g. an access mode without read).
    #[error("invalid input")]
    InvalidInput,
    /// Configuration failure: missing descriptor or slot, rejected named
    /// MMIO asset, or a failed fabric setup step.
    #[error("generic configuration failure")]
    Generic,
    /// The protection oracle denied the requested access.
    #[error("memory fault")]
    MemFault,
}

impl HalError {
    /// Returns the status word the SPM ABI uses for this error.
    pub const fn status(self) -> i32 {
        match self {
            HalError::MemFault => -128,
            HalError::InvalidInput => -124,
            HalError::Generic => -122,
        }
    }
}

/// Folds a result into the SPM status word.
pub const fn status_of(result: HalResult<()>) -> i32 {
    match result {
        Ok(()) => STATUS_SUCCESS,
        Err(err) => err.status(),
    }
}

#[cfg(test)]
mod tests {
    use super::{status_of, HalError, STATUS_SUCCESS};

    #[test]
    fn status_words_are_distinct_and_negative() {
        let all = [HalError::InvalidInput, HalError::Generic, HalError::MemFault];
        for (i, a) in all.iter().enumerate() {
            assert!(a.status() < 0);
            for b in &all[i + 1..] {
                assert_ne!(a.status(), b.status());
            }
        }
    }

    #[test]
    fn status_of_maps_success_to_zero() {
        assert_eq!(status_of(Ok(())), STATUS_SUCCESS);
        assert_eq!(status_of(Err(HalError::MemFault)), -128);
    }

    #[test]
    fn display_is_human_readable() {
        assert_eq!(HalError::MemFault.to_string(), "memory fault");
        assert_eq!(HalError::InvalidInput.to_string(), "invalid input");
    }
}
