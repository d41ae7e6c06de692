use crate::error::ShellError;
use crate::highlight::SyntaxHighlighter;
use crate::shell::tokenize::tokenize;
use crate::shell::vars::VariableTable;

const SET_USAGE: &str = "Usage: set $variablename=value";

pub(crate) trait CommandHandler {
    fn dispatch_line(&mut self, line: &str) -> Result<(), ShellError>;
}

impl CommandHandler for super::Shell {
    fn dispatch_line(&mut self, line: &str) -> Result<(), ShellError> {
        let mut args = tokenize(line);
        if args.is_empty() {
            return Ok(());
        }

        // `set` is handled in-process; everything else is substituted and
        // handed to the executor.
        if args[0] == "set" {
            return process_set(&args, &mut self.vars, &self.highlighter);
        }

        substitute(&mut args, &self.vars);
        self.executor.run(&args)?;
        Ok(())
    }
}

fn process_set(
    args: &[String],
    vars: &mut VariableTable,
    highlighter: &SyntaxHighlighter,
) -> Result<(), ShellError> {
    match args.len() {
        1 => {
            println!("{}", highlighter.highlight_hint(SET_USAGE));
            Ok(())
        }
        2 => match parse_assignment(&args[1]) {
            Some((name, value)) => {
                vars.set(name, value)?;
                Ok(())
            }
            None => Err(ShellError::InvalidCommand),
        },
        _ => Err(ShellError::InvalidCommand),
    }
}

// `$name=value`: the name must be non-empty and the first `=` splits name
// from value, so the value itself may contain `=` or be empty.
fn parse_assignment(arg: &str) -> Option<(&str, &str)> {
    let rest = arg.strip_prefix('$')?;
    let (name, value) = rest.split_once('=')?;
    if name.is_empty() {
        return None;
    }
    Some((name, value))
}

// Every `$` token is looked up independently, the command name included.
// Tokens that match nothing stay as literal text.
fn substitute(args: &mut [String], vars: &VariableTable) {
    for arg in args.iter_mut() {
        if let Some(name) = arg.strip_prefix('$') {
            if let Some(value) = vars.get(name) {
                *arg = value.to_string();
            }
        }
    }
}
