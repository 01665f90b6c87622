use crate::engine::solver::Solver;
use crate::types::{Field, Outcome};
use crate::ui::form::Form;
use crate::ui::keypad::{self, Key};

pub const HELP: &str = "\
commands:
  <enter> | =         derive the blank field
  c | clear           empty all fields
  ra|aa|rb|ab [val]   focus a field, optionally replacing its text
  k <keys>            keypad into the focused field (0-9 . and < for backspace)
  tab                 focus the next field
  show                print the fields
  help | ?            this text
  q | quit | exit     leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Calculate,
    Clear,
    Focus(Field),
    Set(Field, String),
    Keys(Vec<Key>),
    Tab,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Unknown(String),
    BadKey(char),
    NoKeys,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Unknown(s) => write!(f, "unknown command `{}` (try `help`)", s),
            ParseError::BadKey(c) => write!(f, "no keypad key `{}`", c),
            ParseError::NoKeys => f.write_str("`k` needs keys, e.g. `k 1.8`"),
        }
    }
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, ParseError> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((h, r)) => (h, r.trim()),
            None => (line, ""),
        };

        if let Some(field) = Field::from_label(head) {
            return Ok(if rest.is_empty() {
                Command::Focus(field)
            } else {
                Command::Set(field, rest.to_string())
            });
        }

        match head {
            "" | "=" => Ok(Command::Calculate),
            "c" | "clear" => Ok(Command::Clear),
            "k" => {
                let keys = rest
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| Key::from_char(c).ok_or(ParseError::BadKey(c)))
                    .collect::<Result<Vec<_>, _>>()?;
                if keys.is_empty() {
                    return Err(ParseError::NoKeys);
                }
                Ok(Command::Keys(keys))
            }
            "tab" => Ok(Command::Tab),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Board(String),
    Text(String),
    Quit,
}

/// Form plus the focused field. Focus is passed to the keypad on every keystroke.
pub struct Session {
    form: Form,
    focus: Field,
    solver: Solver,
    show_board: bool,
}

impl Session {
    pub fn new(solver: Solver, show_board: bool) -> Self {
        Self { form: Form::default(), focus: Field::RatioA, solver, show_board }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn board(&self) -> String {
        self.form.render(self.focus)
    }

    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        self.solver.stats.inc_command();
        match Command::parse(line) {
            Ok(cmd) => self.apply(cmd),
            Err(e) => {
                tracing::debug!(line = %line.trim(), error = %e, "bad command");
                Some(Reply::Text(e.to_string()))
            }
        }
    }

    pub fn apply(&mut self, cmd: Command) -> Option<Reply> {
        match cmd {
            Command::Calculate => {
                if let Outcome::Updated(u) = self.form.calculate(&self.solver) {
                    self.focus = u.field;
                }
            }
            Command::Clear => {
                self.form.clear();
                self.focus = Field::RatioA;
                self.solver.stats.inc_clear();
            }
            Command::Focus(f) => self.focus = f,
            Command::Set(f, text) => {
                self.focus = f;
                self.form.set_text(f, text);
            }
            Command::Keys(keys) => {
                self.solver.stats.add_keystrokes(keys.len() as u64);
                for k in keys {
                    keypad::press(&mut self.form, self.focus, k);
                }
            }
            Command::Tab => self.focus = self.focus.next(),
            Command::Show => return Some(Reply::Board(self.board())),
            Command::Help => return Some(Reply::Text(HELP.to_string())),
            Command::Quit => return Some(Reply::Quit),
        }

        if self.show_board {
            Some(Reply::Board(self.board()))
        } else {
            None
        }
    }
}
