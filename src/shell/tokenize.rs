// Splits on single spaces; runs of spaces yield no empty tokens. The
// argument array handed to exec is null-terminated by the executor, so
// the token count alone never has to mark the end.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_spaces() {
        assert_eq!(tokenize("echo hello world"), ["echo", "hello", "world"]);
    }

    #[test]
    fn test_runs_of_spaces_yield_no_empty_tokens() {
        assert_eq!(tokenize("  ls   -l  "), ["ls", "-l"]);
    }

    #[test]
    fn test_empty_line_yields_nothing() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_all_space_line_yields_nothing() {
        assert!(tokenize("     ").is_empty());
    }
}
