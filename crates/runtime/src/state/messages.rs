use decon_core::MessageSink;

/// Buffered message window.
///
/// Lines accumulate until the host drains them for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageLog {
    lines: Vec<String>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Removes and returns all pending lines.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl MessageSink for MessageLog {
    fn add(&mut self, text: String) {
        tracing::trace!("message: {}", text);
        self.lines.push(text);
    }
}
