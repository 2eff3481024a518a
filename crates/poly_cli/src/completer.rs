use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

pub struct PolyHelper {
    commands: Vec<String>,
}

impl PolyHelper {
    pub fn new() -> Self {
        Self {
            commands: vec![
                "insert".to_string(),
                "set".to_string(),
                "show".to_string(),
                "add".to_string(),
                "sub".to_string(),
                "mul".to_string(),
                "eval".to_string(),
                "clear".to_string(),
                "config show".to_string(),
                "config save".to_string(),
                "config restore".to_string(),
                "help".to_string(),
                "quit".to_string(),
                "exit".to_string(),
            ],
        }
    }
}

impl Completer for PolyHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let (start, word) = extract_word(line, pos);
        let matches = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(word))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((start, matches))
    }
}

impl Hinter for PolyHelper {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for PolyHelper {}

impl Validator for PolyHelper {}

impl Helper for PolyHelper {}

fn extract_word(line: &str, pos: usize) -> (usize, &str) {
    let line = &line[..pos];
    if line.is_empty() {
        return (0, "");
    }

    let mut start = pos;
    for (i, c) in line.char_indices().rev() {
        if c.is_whitespace() {
            break;
        }
        start = i;
    }
    (start, &line[start..pos])
}
