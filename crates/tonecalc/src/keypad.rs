//! Keypad layout shared by the terminal and DOM front-ends
//!
//! Layout:
//! ```text
//! [ C ] [ ⌫ ] [ % ] [ / ]
//! [ 7 ] [ 8 ] [ 9 ] [ * ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0 ] [ . ] [ = ]
//! ```

use crate::core::{Operator, Token};

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The token this button produces
    pub token: Token,
    /// Element id, e.g. `btn-7` or `btn-plus`
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(token: Token, row: usize, col: usize) -> Self {
        Self {
            token,
            id: button_id(token),
            row,
            col,
        }
    }

    /// Text shown on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.token.label()
    }

    /// Button token carried in `data-value`
    #[must_use]
    pub fn value(&self) -> String {
        self.token.button_value()
    }
}

/// Element id for the button producing `token`
#[must_use]
pub fn button_id(token: Token) -> String {
    match token {
        Token::Digit(d) => format!("btn-{d}"),
        Token::Decimal => "btn-decimal".to_string(),
        Token::Operator(op) => format!("btn-{}", op.name()),
        Token::Equals => "btn-equals".to_string(),
        Token::Clear => "btn-clear".to_string(),
        Token::Backspace => "btn-backspace".to_string(),
        Token::Percent => "btn-percent".to_string(),
    }
}

/// Calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButtonDef>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let layout: [&[Token]; 5] = [
            &[
                Token::Clear,
                Token::Backspace,
                Token::Percent,
                Token::Operator(Operator::Divide),
            ],
            &[
                Token::Digit(7),
                Token::Digit(8),
                Token::Digit(9),
                Token::Operator(Operator::Multiply),
            ],
            &[
                Token::Digit(4),
                Token::Digit(5),
                Token::Digit(6),
                Token::Operator(Operator::Subtract),
            ],
            &[
                Token::Digit(1),
                Token::Digit(2),
                Token::Digit(3),
                Token::Operator(Operator::Add),
            ],
            &[Token::Digit(0), Token::Decimal, Token::Equals],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, tokens)| {
                tokens
                    .iter()
                    .enumerate()
                    .map(move |(col, &token)| KeypadButtonDef::new(token, row, col))
            })
            .collect();

        Self {
            buttons,
            rows: layout.len(),
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Buttons of one row
    pub fn row(&self, row: usize) -> impl Iterator<Item = &KeypadButtonDef> {
        self.buttons.iter().filter(move |b| b.row == row)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button producing a token
    #[must_use]
    pub fn find_by_token(&self, token: Token) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.token == token)
    }
}
