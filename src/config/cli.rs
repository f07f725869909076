use crate::domain::ports::Console;
use crate::utils::error::{CatalogError, Result};
use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, Write};

/// stdout / stdin 版本的 Console
pub struct TerminalConsole {
    out: Box<dyn Write>,
    answers: VecDeque<String>,
    lines: usize,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self::with_answers(Vec::new())
    }

    /// Answers are served to prompts first; stdin is read once they run out.
    pub fn with_answers(answers: Vec<String>) -> Self {
        Self::with_writer(Box::new(io::stdout()), answers)
    }

    pub fn with_writer(out: Box<dyn Write>, answers: Vec<String>) -> Self {
        Self {
            out,
            answers: answers.into(),
            lines: 0,
        }
    }

    fn emit(&mut self, text: &str, newline: bool) -> io::Result<()> {
        if newline {
            writeln!(self.out, "{}", text)?;
        } else {
            write!(self.out, "{}", text)?;
        }
        self.out.flush()
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TerminalConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalConsole")
            .field("answers", &self.answers)
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}

impl Console for TerminalConsole {
    fn print(&mut self, line: &str) {
        // 寫不出去的行不計入
        match self.emit(line, true) {
            Ok(()) => self.lines += 1,
            Err(e) => tracing::warn!("⚠️ Failed to write to stdout: {}", e),
        }
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = self.emit(text, false) {
            tracing::warn!("⚠️ Failed to write to stdout: {}", e);
        }
    }

    fn prompt(&mut self, question: &str) -> Result<String> {
        self.write(question);

        if let Some(answer) = self.answers.pop_front() {
            tracing::debug!("⌨️ Answer from --input: {}", answer);
            self.print(&answer);
            return Ok(answer);
        }

        let mut answer = String::new();
        let read = io::stdin().lock().read_line(&mut answer)?;
        if read == 0 {
            self.print("");
            return Err(CatalogError::InputExhausted {
                prompt: question.trim().to_string(),
            });
        }
        self.lines += 1;

        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }

    fn lines_printed(&self) -> usize {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_writes_are_not_counted() {
        let mut console = TerminalConsole::with_writer(Box::new(ClosedPipe), Vec::new());
        console.print("lost");
        console.write("also lost");
        assert_eq!(console.lines_printed(), 0);
    }

    #[test]
    fn test_scripted_answer_is_echoed() {
        let buffer = SharedBuffer::default();
        let mut console =
            TerminalConsole::with_writer(Box::new(buffer.clone()), vec!["42".to_string()]);

        assert_eq!(console.prompt("Count: ").unwrap(), "42");
        console.print("done");

        let written = String::from_utf8(buffer.0.borrow().clone()).unwrap();
        assert_eq!(written, "Count: 42\ndone\n");
        assert_eq!(console.lines_printed(), 2);
    }
}
