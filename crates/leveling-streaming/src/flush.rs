//! Explicit flush control.

/// Flush policy for streaming responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlushPolicy {
    /// Flush once the shell is sent, then only when the stream completes.
    AfterShell,
    /// Flush after every chunk.
    #[default]
    AfterEachChunk,
    /// Buffer until at least this many bytes are pending.
    Buffered(usize),
}

impl FlushPolicy {
    /// Check if should flush after shell.
    pub fn flush_after_shell(&self) -> bool {
        !matches!(self, Self::Buffered(_))
    }
}

/// Tracks pending bytes against a flush policy.
#[derive(Debug, Default)]
pub struct FlushController {
    policy: FlushPolicy,
    pending: Vec<u8>,
}

impl FlushController {
    /// Create a new flush controller with given policy.
    pub fn new(policy: FlushPolicy) -> Self {
        Self {
            policy,
            pending: Vec::new(),
        }
    }

    /// Buffer a chunk.
    pub fn push(&mut self, chunk: &str) {
        self.pending.extend_from_slice(chunk.as_bytes());
    }

    /// Check whether buffered bytes should be flushed after a section chunk.
    pub fn should_flush(&self) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        match self.policy {
            FlushPolicy::AfterShell => false,
            FlushPolicy::AfterEachChunk => true,
            FlushPolicy::Buffered(limit) => self.pending.len() >= limit,
        }
    }

    /// Bytes currently buffered.
    pub fn pending_bytes(&self) -> usize {
        self.pending.len()
    }

    /// Take the buffered bytes, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.pending)
    }

    /// Get current policy.
    pub fn policy(&self) -> FlushPolicy {
        self.policy
    }
}
