mod command;
pub mod tokenize;
pub mod vars;

use crate::error::ShellError;
use crate::highlight::SyntaxHighlighter;
use crate::input::{LineEditor, RawMode};
use crate::process::CommandExecutor;

use command::CommandHandler;
use vars::VariableTable;

pub struct Shell {
    pub(crate) editor: LineEditor,
    pub(crate) vars: VariableTable,
    pub(crate) executor: CommandExecutor,
    pub(crate) highlighter: SyntaxHighlighter,
    // Held for the whole process lifetime; dropping it restores the
    // terminal on every normal exit path.
    _raw_mode: RawMode,
}

impl Shell {
    pub fn new() -> Result<Self, ShellError> {
        let raw_mode = RawMode::enable(libc::STDIN_FILENO)?;

        Ok(Shell {
            editor: LineEditor::new(),
            vars: VariableTable::new(),
            executor: CommandExecutor::new(),
            highlighter: SyntaxHighlighter::new(),
            _raw_mode: raw_mode,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let line = match self.editor.read_line() {
                Some(line) => line,
                // input closed
                None => break,
            };

            // Both freshly typed and recalled lines are recorded, so a
            // re-submitted recall is promoted to most recent.
            self.editor.add_history(&line);

            if let Err(e) = self.dispatch_line(&line) {
                eprintln!("{}", self.highlighter.highlight_error(&e.to_string()));
            }
        }
        Ok(())
    }
}
