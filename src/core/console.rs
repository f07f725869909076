use crate::domain::ports::Console;
use crate::utils::error::{CatalogError, Result};
use std::collections::VecDeque;

/// 把輸出記錄在記憶體中的 Console，測試與嵌入使用
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    lines: Vec<String>,
    pending: String,
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answers<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }

    /// Full transcript, including any text written after the last newline.
    pub fn transcript(&self) -> String {
        let mut out = self.lines.join("\n");
        if !self.pending.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&self.pending);
        }
        out
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle)) || self.pending.contains(needle)
    }

    pub fn position(&self, needle: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.contains(needle))
    }
}

impl Console for BufferConsole {
    fn print(&mut self, line: &str) {
        let mut full = std::mem::take(&mut self.pending);
        full.push_str(line);
        self.lines.push(full);
    }

    fn write(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    fn prompt(&mut self, question: &str) -> Result<String> {
        self.prompts.push(question.to_string());
        match self.answers.pop_front() {
            Some(answer) => {
                self.write(question);
                self.print(&answer);
                Ok(answer)
            }
            None => Err(CatalogError::InputExhausted {
                prompt: question.trim().to_string(),
            }),
        }
    }

    fn lines_printed(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_joins_with_next_print() {
        let mut console = BufferConsole::new();
        console.write(".");
        console.write(".");
        console.print("Login success");
        console.print("next");

        assert_eq!(console.lines(), ["..Login success", "next"]);
        assert_eq!(console.lines_printed(), 2);
    }

    #[test]
    fn test_prompt_records_and_echoes() {
        let mut console = BufferConsole::with_answers(["42"]);
        assert_eq!(console.prompt("Count: ").unwrap(), "42");
        assert_eq!(console.lines(), ["Count: 42"]);
        assert_eq!(console.prompts(), ["Count: "]);

        let err = console.prompt("Again: ").unwrap_err();
        assert!(matches!(err, CatalogError::InputExhausted { .. }));
    }

    #[test]
    fn test_transcript_keeps_pending_text() {
        let mut console = BufferConsole::new();
        console.print("a");
        console.write("b");
        assert_eq!(console.transcript(), "a\nb");
        assert!(console.contains("b"));
    }
}
