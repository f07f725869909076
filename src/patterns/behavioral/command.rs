use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

/// Byte offset of the `index`-th character, clamped to the end of `text`.
fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

fn char_range(text: &str, start: usize, end: usize) -> (usize, usize) {
    let start = byte_offset(text, start);
    let end = byte_offset(text, end).max(start);
    (start, end)
}

/// Receiver: the text component the commands act on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    selected_text: String,
    caret: usize,
    selection_start: usize,
    selection_end: usize,
}

impl TextField {
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn select_text(&mut self, start: usize, end: usize) {
        let (from, to) = char_range(&self.text, start, end);
        self.selected_text = self.text[from..to].to_string();
        self.selection_start = start;
        self.selection_end = end;
    }

    pub fn selected_text(&self) -> &str {
        &self.selected_text
    }

    pub fn selection(&self) -> (usize, usize) {
        (self.selection_start, self.selection_end)
    }

    pub fn insert_text(&mut self, clipboard: &str, offset: usize) {
        let at = byte_offset(&self.text, offset);
        self.text.insert_str(at, clipboard);
        self.caret = offset;
    }

    pub fn remove_range(&mut self, start: usize, end: usize) {
        let (from, to) = char_range(&self.text, start, end);
        self.text.replace_range(from..to, "");
        self.caret = start;
    }

    pub fn set_caret_position(&mut self, offset: usize) {
        self.caret = offset;
    }

    pub fn caret_position(&self) -> usize {
        self.caret
    }
}

/// What commands may touch: the text field and the clipboard.
#[derive(Debug, Default)]
pub struct EditorState {
    pub text_field: TextField,
    pub clipboard: String,
}

pub trait EditorCommand {
    /// Returns true when the editor state changed and the command belongs in
    /// the history.
    fn execute(&mut self, state: &mut EditorState) -> bool;
    fn undo(&self, state: &mut EditorState);
}

pub struct CopyCommand;

impl EditorCommand for CopyCommand {
    fn execute(&mut self, state: &mut EditorState) -> bool {
        state.clipboard = state.text_field.selected_text().to_string();
        false
    }

    fn undo(&self, _state: &mut EditorState) {}
}

#[derive(Default)]
pub struct PasteCommand {
    backup: String,
}

impl EditorCommand for PasteCommand {
    fn execute(&mut self, state: &mut EditorState) -> bool {
        if state.clipboard.is_empty() {
            return false;
        }
        self.backup = state.text_field.text().to_string();
        let offset = state.text_field.caret_position();
        state.text_field.insert_text(&state.clipboard, offset);
        true
    }

    fn undo(&self, state: &mut EditorState) {
        state.text_field.set_text(self.backup.clone());
    }
}

#[derive(Default)]
pub struct CutCommand {
    backup: String,
}

impl EditorCommand for CutCommand {
    fn execute(&mut self, state: &mut EditorState) -> bool {
        if state.text_field.selected_text().is_empty() {
            return false;
        }
        self.backup = state.text_field.text().to_string();
        state.clipboard = state.text_field.selected_text().to_string();
        let (start, end) = state.text_field.selection();
        state.text_field.remove_range(start, end);
        true
    }

    fn undo(&self, state: &mut EditorState) {
        state.text_field.set_text(self.backup.clone());
    }
}

/// Sender: turns key strokes into commands and keeps the undo history.
#[derive(Default)]
pub struct Editor {
    state: EditorState,
    history: Vec<Box<dyn EditorCommand>>,
}

impl Editor {
    pub fn text_field(&self) -> &TextField {
        &self.state.text_field
    }

    pub fn clipboard(&self) -> &str {
        &self.state.clipboard
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn execute_command(&mut self, mut command: Box<dyn EditorCommand>) {
        if command.execute(&mut self.state) {
            self.history.push(command);
        }
    }

    pub fn typing_text(&mut self, text: &str) {
        self.state.text_field.set_text(text);
    }

    pub fn ctrl_c(&mut self, start: usize, end: usize) {
        self.state.text_field.select_text(start, end);
        self.execute_command(Box::new(CopyCommand));
    }

    pub fn ctrl_v(&mut self, offset: usize) {
        self.state.text_field.set_caret_position(offset);
        self.execute_command(Box::new(PasteCommand::default()));
    }

    pub fn ctrl_x(&mut self, start: usize, end: usize) {
        self.state.text_field.select_text(start, end);
        self.execute_command(Box::new(CutCommand::default()));
    }

    /// Returns false when there was nothing to undo.
    pub fn ctrl_z(&mut self) -> bool {
        match self.history.pop() {
            Some(command) => {
                command.undo(&mut self.state);
                true
            }
            None => false,
        }
    }
}

fn section(ctx: &mut DemoContext<'_>, title: &str, lines: &[String]) {
    ctx.say(title);
    ctx.say("-------------------");
    for line in lines {
        ctx.say(line);
    }
    ctx.say("-------------------");
}

pub struct EditorCommandDemo;

impl Demo for EditorCommandDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "command-editor",
            pattern: "Command",
            category: Category::Behavioral,
            summary: "Copy, cut and paste become command objects with undo history",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let mut editor = Editor::default();
        editor.typing_text("Hi my name is Rafael Cassau!");

        editor.ctrl_c(13, 28);
        editor.ctrl_v(28);
        section(
            ctx,
            "Ctrl+C Ctrl+V:",
            &[
                format!("Text copied: {}", editor.text_field().selected_text()),
                format!("Text pasted, new text: {}", editor.text_field().text()),
            ],
        );

        editor.ctrl_z();
        section(
            ctx,
            "Ctrl+Z:",
            &[format!("undo, new text: {}", editor.text_field().text())],
        );

        editor.ctrl_x(13, 28);
        let after_cut = editor.text_field().text().to_string();
        editor.ctrl_v(0);
        section(
            ctx,
            "Ctrl+X + Ctrl+V:",
            &[
                format!("Text cut: {}", editor.clipboard()),
                format!("Text left after cut: {}", after_cut),
                format!("Text pasted, new text: {}", editor.text_field().text()),
            ],
        );

        editor.ctrl_z();
        section(
            ctx,
            "Ctrl+Z:",
            &[format!("undo, new text: {}", editor.text_field().text())],
        );
        Ok(())
    }
}

// 螢幕剪貼

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    text: String,
    clipboard: String,
}

impl Screen {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            clipboard: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cut(&mut self, start: usize, end: usize) {
        let (from, to) = char_range(&self.text, start, end);
        self.clipboard = self.text[from..to].to_string();
        self.text.replace_range(from..to, "");
    }

    pub fn paste(&mut self, offset: usize) {
        let at = byte_offset(&self.text, offset);
        self.text.insert_str(at, &self.clipboard);
    }

    pub fn clear_clipboard(&mut self) {
        self.clipboard.clear();
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

pub trait ScreenCommand {
    fn execute(&self, screen: &mut Screen);
    fn undo(&self, screen: &mut Screen);
}

/// 建構時記下當下的文字，undo 時還原
pub struct ScreenCutCommand {
    previous_state: String,
    start: usize,
    end: usize,
}

impl ScreenCutCommand {
    pub fn new(screen: &Screen, start: usize, end: usize) -> Self {
        Self {
            previous_state: screen.text().to_string(),
            start,
            end,
        }
    }
}

impl ScreenCommand for ScreenCutCommand {
    fn execute(&self, screen: &mut Screen) {
        screen.cut(self.start, self.end);
    }

    fn undo(&self, screen: &mut Screen) {
        screen.clear_clipboard();
        screen.text = self.previous_state.clone();
    }
}

pub struct ScreenPasteCommand {
    previous_state: String,
    offset: usize,
}

impl ScreenPasteCommand {
    pub fn new(screen: &Screen, offset: usize) -> Self {
        Self {
            previous_state: screen.text().to_string(),
            offset,
        }
    }
}

impl ScreenCommand for ScreenPasteCommand {
    fn execute(&self, screen: &mut Screen) {
        screen.paste(self.offset);
    }

    fn undo(&self, screen: &mut Screen) {
        screen.clear_clipboard();
        screen.text = self.previous_state.clone();
    }
}

#[derive(Default)]
pub struct ScreenInvoker {
    history: Vec<Box<dyn ScreenCommand>>,
}

impl ScreenInvoker {
    pub fn store_and_execute(&mut self, command: Box<dyn ScreenCommand>, screen: &mut Screen) {
        command.execute(screen);
        self.history.push(command);
    }

    pub fn undo_last(&mut self, screen: &mut Screen) {
        if let Some(last) = self.history.pop() {
            last.undo(screen);
        }
    }
}

pub struct ScreenCommandDemo;

impl Demo for ScreenCommandDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "command-screen",
            pattern: "Command",
            category: Category::Behavioral,
            summary: "An invoker stores screen commands and undoes them in reverse",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let mut invoker = ScreenInvoker::default();
        let mut screen = Screen::new("Hello world");
        ctx.say(screen.text());

        let cut = ScreenCutCommand::new(&screen, 5, 11);
        invoker.store_and_execute(Box::new(cut), &mut screen);
        ctx.say(screen.text());

        let paste = ScreenPasteCommand::new(&screen, 0);
        invoker.store_and_execute(Box::new(paste), &mut screen);
        ctx.say(screen.text());

        invoker.undo_last(&mut screen);
        ctx.say(screen.text());

        invoker.undo_last(&mut screen);
        ctx.say(screen.text());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_is_not_recorded() {
        let mut editor = Editor::default();
        editor.typing_text("abcdef");
        editor.ctrl_c(0, 3);

        assert_eq!(editor.clipboard(), "abc");
        assert_eq!(editor.text_field().text(), "abcdef");
        assert_eq!(editor.history_len(), 0);
        assert!(!editor.ctrl_z());
    }

    #[test]
    fn test_cut_removes_selection_and_undo_restores() {
        let mut editor = Editor::default();
        editor.typing_text("Hi my name is Rafael Cassau!");
        editor.ctrl_x(13, 28);

        assert_eq!(editor.text_field().text(), "Hi my name is");
        assert_eq!(editor.clipboard(), " Rafael Cassau!");

        editor.ctrl_v(0);
        assert_eq!(editor.text_field().text(), " Rafael Cassau!Hi my name is");
        assert_eq!(editor.history_len(), 2);

        editor.ctrl_z();
        editor.ctrl_z();
        assert_eq!(editor.text_field().text(), "Hi my name is Rafael Cassau!");
    }

    #[test]
    fn test_paste_with_empty_clipboard_does_nothing() {
        let mut editor = Editor::default();
        editor.typing_text("text");
        editor.ctrl_v(2);
        assert_eq!(editor.history_len(), 0);
        assert_eq!(editor.text_field().text(), "text");
    }

    #[test]
    fn test_screen_ranges_are_clamped() {
        let mut screen = Screen::new("héllo");
        screen.cut(1, 99);
        assert_eq!(screen.text(), "h");
        screen.paste(5);
        assert_eq!(screen.text(), "héllo");
        assert_eq!(screen.len(), 5);
    }
}
