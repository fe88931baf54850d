use logos::Logos;

/// Represents a command word in an input line.
///
/// Matching ignores ASCII case, so `add`, `ADD` and `Add` all produce
/// [`Command::Add`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    /// `add`
    #[token("add", ignore(ascii_case))]
    Add,
    /// `mul`
    #[token("mul", ignore(ascii_case))]
    Mul,
    /// `sub`
    #[token("sub", ignore(ascii_case))]
    Sub,
    /// `div`
    #[token("div", ignore(ascii_case))]
    Div,
}

impl Command {
    /// Recognizes a whole word as a command.
    ///
    /// The word must consist of exactly one command token, so `address` or
    /// `addadd` are rejected even though they start with `add`.
    ///
    /// # Returns
    /// - `Some(Command)`: The recognized command.
    /// - `None`: If the word is empty or is not a single command token.
    ///
    /// # Example
    /// ```
    /// use chaincalc::interpreter::lexer::Command;
    ///
    /// assert_eq!(Command::from_word("Mul"), Some(Command::Mul));
    /// assert_eq!(Command::from_word("pow"), None);
    /// assert_eq!(Command::from_word("addadd"), None);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        let mut lexer = Self::lexer(word);
        match (lexer.next(), lexer.next()) {
            (Some(Ok(command)), None) => Some(command),
            _ => None,
        }
    }

    /// Applies the command to two operands.
    ///
    /// Division follows IEEE 754: dividing by zero yields an infinity or
    /// `NaN` rather than an error.
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Mul => left * right,
            Self::Sub => left - right,
            Self::Div => left / right,
        }
    }
}
