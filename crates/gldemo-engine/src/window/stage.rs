use std::fmt;

use anyhow::{ensure, Result};

/// Lifecycle of the main window and its context.
///
/// Transitions only move forward:
/// `Uninitialized -> Registered -> Created -> ContextPending -> ContextReady
/// -> Closing -> Destroyed`. `Destroyed` is reachable from any stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Stage {
    Uninitialized,
    /// The window descriptor exists; no window yet.
    Registered,
    /// A hidden window exists without a context.
    Created,
    /// A surface config was chosen; the window is being recreated for it.
    ContextPending,
    /// Context is current and the window is visible.
    ContextReady,
    /// A close was observed. Resources are still alive.
    Closing,
    Destroyed,
}

impl Stage {
    /// Fails unless `self` is one of `allowed`.
    pub(crate) fn require(self, op: &str, allowed: &[Stage]) -> Result<()> {
        ensure!(allowed.contains(&self), "cannot {op} while the window is {}", self);
        Ok(())
    }

    /// Whether an OS window currently exists.
    pub fn has_window(self) -> bool {
        matches!(
            self,
            Stage::Created | Stage::ContextPending | Stage::ContextReady | Stage::Closing
        )
    }

    /// Stage after a close request. Only stages with a window can close.
    pub fn on_close(self) -> Stage {
        if self.has_window() { Stage::Closing } else { self }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Uninitialized => "uninitialized",
            Stage::Registered => "registered",
            Stage::Created => "created",
            Stage::ContextPending => "waiting for a context",
            Stage::ContextReady => "ready",
            Stage::Closing => "closing",
            Stage::Destroyed => "destroyed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_accepts_listed_stages() {
        assert!(Stage::Created.require("create the context", &[Stage::Created]).is_ok());
    }

    #[test]
    fn require_names_operation_and_stage() {
        let err = Stage::Destroyed
            .require("present", &[Stage::ContextReady])
            .unwrap_err();
        assert_eq!(err.to_string(), "cannot present while the window is destroyed");
    }

    #[test]
    fn close_only_applies_to_live_windows() {
        assert_eq!(Stage::ContextReady.on_close(), Stage::Closing);
        assert_eq!(Stage::Created.on_close(), Stage::Closing);
        assert_eq!(Stage::Closing.on_close(), Stage::Closing);
        assert_eq!(Stage::Registered.on_close(), Stage::Registered);
        assert_eq!(Stage::Destroyed.on_close(), Stage::Destroyed);
    }

    #[test]
    fn stages_are_ordered_by_lifecycle() {
        assert!(Stage::Uninitialized < Stage::Registered);
        assert!(Stage::ContextPending < Stage::ContextReady);
        assert!(Stage::Closing < Stage::Destroyed);
    }
}
