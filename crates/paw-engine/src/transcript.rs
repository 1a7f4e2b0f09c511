//! The narrated transcript of a season.

/// Accumulates narration lines during a season.
///
/// Day narration is day-prefixed and honors the retention cap; terminal
/// summary lines (finale shares, medals, winner, seed echo) always append,
/// so a capped transcript still ends with its verdict.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
    max_lines: Option<usize>,
}

impl Transcript {
    /// Create a transcript with an optional retention cap for day lines.
    pub fn new(max_lines: Option<usize>) -> Self {
        Self {
            lines: Vec::new(),
            max_lines,
        }
    }

    /// Append a day-prefixed narration line, unless the cap is reached.
    pub fn narrate(&mut self, day: u32, text: impl AsRef<str>) {
        if self.max_lines.is_none_or(|max| self.lines.len() < max) {
            self.lines.push(format!("[Day {day}] {}", text.as_ref()));
        }
    }

    /// Append a terminal line, ignoring the cap.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// All lines recorded so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the transcript, yielding its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
