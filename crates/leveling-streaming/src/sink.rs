//! Order-enforcing streaming sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use leveling_core::RenderError;

use crate::flush::{FlushController, FlushPolicy};
use crate::section::SectionSlot;

/// State of the streaming sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// Shell not yet sent.
    Initial,
    /// Shell sent, sections and swaps may follow.
    ShellSent,
    /// Shell closed, nothing more may be sent.
    Completed,
}

/// Streaming sink that enforces shell-first, placeholder-then-swap order.
///
/// Generic over any `Sink<Vec<u8>>` so the same page code streams into an
/// HTTP body, stdout, or a `Vec` in tests.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: StreamState,
    flush: FlushController,
    sections_sent: Vec<String>,
    pending_swaps: Vec<String>,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink that flushes after every chunk.
    pub fn new(sink: S) -> Self {
        Self::with_policy(sink, FlushPolicy::default())
    }

    /// Create a new streaming sink with a flush policy.
    pub fn with_policy(sink: S, policy: FlushPolicy) -> Self {
        Self {
            inner: sink,
            state: StreamState::Initial,
            flush: FlushController::new(policy),
            sections_sent: Vec::new(),
            pending_swaps: Vec::new(),
        }
    }

    /// Send the shell opening. Must be called before any section.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), RenderError> {
        if self.state != StreamState::Initial {
            return Err(RenderError::StreamError(
                "Shell already sent or sink completed".to_string(),
            ));
        }

        self.flush.push(html);
        if self.flush.policy().flush_after_shell() {
            self.flush_now().await?;
        }
        self.state = StreamState::ShellSent;
        Ok(())
    }

    /// Send a section's final content into its slot.
    pub async fn send_section(&mut self, slot: &SectionSlot, html: &str) -> Result<(), RenderError> {
        self.ensure_open()?;
        self.push_chunk(&slot.wrap(html)).await?;
        self.sections_sent.push(slot.name.clone());
        Ok(())
    }

    /// Send a placeholder into a slot; a later `send_swap` replaces it.
    pub async fn send_placeholder(
        &mut self,
        slot: &SectionSlot,
        html: &str,
    ) -> Result<(), RenderError> {
        self.ensure_open()?;
        self.push_chunk(&slot.wrap(html)).await?;
        self.sections_sent.push(slot.name.clone());
        self.pending_swaps.push(slot.name.clone());
        Ok(())
    }

    /// Replace a previously sent placeholder. Each placeholder swaps at most once.
    pub async fn send_swap(&mut self, slot: &SectionSlot, html: &str) -> Result<(), RenderError> {
        self.ensure_open()?;
        let position = self
            .pending_swaps
            .iter()
            .position(|name| *name == slot.name)
            .ok_or_else(|| RenderError::UnknownSection(slot.name.clone()))?;

        self.push_chunk(&slot.swap(html)).await?;
        self.pending_swaps.remove(position);
        Ok(())
    }

    /// Send the shell closing and flush everything.
    pub async fn complete(&mut self, closing: &str) -> Result<(), RenderError> {
        self.ensure_open()?;
        self.flush.push(closing);
        self.flush_now().await?;
        self.state = StreamState::Completed;
        Ok(())
    }

    /// Names of slots sent, in order.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Placeholders still waiting for a swap.
    pub fn pending_swaps(&self) -> &[String] {
        &self.pending_swaps
    }

    /// Current state.
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn ensure_open(&self) -> Result<(), RenderError> {
        match self.state {
            StreamState::Initial => Err(RenderError::ShellNotSent),
            StreamState::Completed => {
                Err(RenderError::StreamError("Sink already completed".to_string()))
            }
            StreamState::ShellSent => Ok(()),
        }
    }

    async fn push_chunk(&mut self, chunk: &str) -> Result<(), RenderError> {
        self.flush.push(chunk);
        if self.flush.should_flush() {
            self.flush_now().await?;
        }
        Ok(())
    }

    async fn flush_now(&mut self) -> Result<(), RenderError> {
        let bytes = self.flush.take();
        if bytes.is_empty() {
            return Ok(());
        }
        tracing::trace!(bytes = bytes.len(), "flushing stream chunk");
        self.inner
            .send(bytes)
            .await
            .map_err(|e| RenderError::StreamError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use futures::executor::block_on;

    use super::*;

    fn sink() -> StreamingSink<Vec<Vec<u8>>, Infallible> {
        StreamingSink::new(Vec::new())
    }

    fn body(chunks: Vec<Vec<u8>>) -> String {
        String::from_utf8(chunks.concat()).unwrap()
    }

    #[test]
    fn test_section_before_shell_fails() {
        let mut s = sink();
        let err = block_on(s.send_section(&SectionSlot::new("hero"), "x")).unwrap_err();
        assert!(matches!(err, RenderError::ShellNotSent));
    }

    #[test]
    fn test_shell_twice_fails() {
        let mut s = sink();
        block_on(s.send_shell("<html>")).unwrap();
        assert!(block_on(s.send_shell("<html>")).is_err());
    }

    #[test]
    fn test_placeholder_then_swap() {
        let mut s = sink();
        let slot = SectionSlot::new("featured");

        block_on(async {
            s.send_shell("<body>").await.unwrap();
            s.send_placeholder(&slot, "<div class=\"h-96\"></div>").await.unwrap();
            assert_eq!(s.pending_swaps(), ["featured".to_string()]);
            s.send_swap(&slot, "<section>grid</section>").await.unwrap();
            s.complete("</body>").await.unwrap();
        });

        assert!(s.pending_swaps().is_empty());
        assert_eq!(s.state(), StreamState::Completed);
        let html = body(s.into_inner());
        let placeholder_at = html.find("h-96").unwrap();
        let swap_at = html.find("data-swap=\"featured\"").unwrap();
        assert!(placeholder_at < swap_at);
        assert!(html.ends_with("</body>"));
    }

    #[test]
    fn test_swap_without_placeholder_fails() {
        let mut s = sink();
        let slot = SectionSlot::new("footer");
        block_on(s.send_shell("<body>")).unwrap();
        block_on(s.send_section(&slot, "<footer></footer>")).unwrap();

        let err = block_on(s.send_swap(&slot, "<footer>again</footer>")).unwrap_err();
        assert!(matches!(err, RenderError::UnknownSection(name) if name == "footer"));
    }

    #[test]
    fn test_swap_only_once() {
        let mut s = sink();
        let slot = SectionSlot::new("footer");
        block_on(async {
            s.send_shell("<body>").await.unwrap();
            s.send_placeholder(&slot, "").await.unwrap();
            s.send_swap(&slot, "a").await.unwrap();
        });
        assert!(block_on(s.send_swap(&slot, "b")).is_err());
    }

    #[test]
    fn test_send_after_complete_fails() {
        let mut s = sink();
        block_on(s.send_shell("<body>")).unwrap();
        block_on(s.complete("</body>")).unwrap();
        assert!(block_on(s.send_section(&SectionSlot::new("late"), "x")).is_err());
    }

    #[test]
    fn test_buffered_policy_coalesces_chunks() {
        let mut s: StreamingSink<Vec<Vec<u8>>, Infallible> =
            StreamingSink::with_policy(Vec::new(), FlushPolicy::Buffered(1024));
        block_on(async {
            s.send_shell("<body>").await.unwrap();
            s.send_section(&SectionSlot::new("a"), "1").await.unwrap();
            s.send_section(&SectionSlot::new("b"), "2").await.unwrap();
            s.complete("</body>").await.unwrap();
        });

        let chunks = s.into_inner();
        assert_eq!(chunks.len(), 1);
        assert_eq!(count_slots(&body(chunks)), 2);
    }

    fn count_slots(html: &str) -> usize {
        html.matches("data-slot=").count()
    }
}
