//! Monotonic tags for in-flight fetches.
//!
//! Overlapping loads are never aborted; instead each fetch is tagged when
//! issued and its completion message carries the tag back. The gate accepts
//! a result only if no later-issued fetch has already committed, giving
//! last-issued-wins semantics without corrupting the cache when a slow
//! response lands late.

/// One gate per cached list (or report). The issuing update arm is the only
/// writer of the guarded cache.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeqGate {
    issued: u64,
    committed: u64,
}

impl SeqGate {
    /// Tags a new fetch. Tags are strictly increasing, starting at 1.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Returns true and advances the commit watermark if `seq` is newer
    /// than everything committed so far; a stale `seq` is refused.
    pub fn try_commit(&mut self, seq: u64) -> bool {
        if seq > self.committed {
            self.committed = seq;
            true
        } else {
            false
        }
    }

    /// True when `seq` is the most recently issued fetch, i.e. nothing
    /// newer is in flight. Failures are surfaced only for the latest
    /// fetch; a superseded failure has nothing current to report.
    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.issued
    }
}

/// What a panel should surface after a gated fetch completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The result was committed; render it.
    Committed,
    /// A newer fetch superseded this one; nothing to surface.
    Stale,
    /// The latest fetch failed; show the error state.
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commits_in_issue_order() {
        let mut gate = SeqGate::default();
        let first = gate.issue();
        let second = gate.issue();
        assert!(gate.try_commit(first));
        assert!(gate.try_commit(second));
    }

    #[test]
    fn late_stale_response_is_refused() {
        let mut gate = SeqGate::default();
        let first = gate.issue();
        let second = gate.issue();
        // The later-issued fetch resolves first.
        assert!(gate.try_commit(second));
        assert!(!gate.try_commit(first));
    }

    #[test]
    fn only_the_newest_issue_is_latest() {
        let mut gate = SeqGate::default();
        let first = gate.issue();
        assert!(gate.is_latest(first));
        let second = gate.issue();
        assert!(!gate.is_latest(first));
        assert!(gate.is_latest(second));
        // Committing does not change which issue is the latest.
        assert!(gate.try_commit(second));
        assert!(gate.is_latest(second));
    }

    #[test]
    fn double_commit_of_same_tag_is_refused() {
        let mut gate = SeqGate::default();
        let seq = gate.issue();
        assert!(gate.try_commit(seq));
        assert!(!gate.try_commit(seq));
    }
}
