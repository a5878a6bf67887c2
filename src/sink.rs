//! Display sink boundary.
//!
//! The engine writes every composed title through a [`TitleSink`] and reads
//! the surface exactly once at startup to capture the pre-takeover value,
//! which serves as the ultimate fallback when no prefix or suffix is
//! configured.

/// A display surface showing one title string.
///
/// Implementations wrap whatever the host exposes — an OS window handle, a
/// terminal tab, a browser document. Writing the title is the only I/O the
/// engine performs.
pub trait TitleSink {
    /// Current value of the surface. Read once, at engine construction.
    fn read_display_title(&self) -> String;

    /// Replace the displayed title.
    fn write_display_title(&mut self, title: &str);
}

/// In-memory sink recording every write.
///
/// Useful for tests and for hosts that apply the title later (e.g. a TUI
/// that repaints the terminal tab on its next frame).
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    current: String,
    writes: Vec<String>,
}

impl MemorySink {
    /// Create a sink whose surface currently shows `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: initial.into(),
            writes: Vec::new(),
        }
    }

    /// The title currently shown by the surface.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Every write in order, oldest first.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl TitleSink for MemorySink {
    fn read_display_title(&self) -> String {
        self.current.clone()
    }

    fn write_display_title(&mut self, title: &str) {
        self.current = title.to_string();
        self.writes.push(title.to_string());
    }
}
