// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Typed polar day/night outcomes.

use thiserror::Error;

/// The sun does not cross the requested zenith threshold on that date at
/// that location.
///
/// This is a computation outcome, not a system failure: at high latitudes
/// the local hour-angle cosine leaves `[-1, 1]` and no event instant
/// exists. The variant is tagged by the requested direction, so callers
/// can branch programmatically while `Display` still renders the
/// human-readable text.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NoEventError {
    /// Polar geometry on the sunrise direction: no sunrise instant exists.
    #[error("the sun never rises on the given date at the given location")]
    NeverRises,

    /// Polar geometry on the sunset direction: no sunset instant exists.
    #[error("the sun never sets on the given date at the given location")]
    NeverSets,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text() {
        assert_eq!(
            NoEventError::NeverRises.to_string(),
            "the sun never rises on the given date at the given location"
        );
        assert_eq!(
            NoEventError::NeverSets.to_string(),
            "the sun never sets on the given date at the given location"
        );
    }

    #[test]
    fn test_variants_are_distinguishable() {
        assert_ne!(NoEventError::NeverRises, NoEventError::NeverSets);
    }
}
