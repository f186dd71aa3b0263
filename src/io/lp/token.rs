//! # Tokens used in LP files
//!
//! The lexer works line by line. Every line ends with a `Newline` token, the input with a single
//! `EndOfFile` token.
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::io::error::{ParseError, ParseResult};

/// Indicates the start of a comment, which runs until the end of the line.
pub const COMMENT_INDICATOR: char = '%';

/// Marks the objective function as one to be maximized.
pub const MAXIMIZE: &str = "#maximize";

/// Marks the objective function as one to be minimized.
pub const MINIMIZE: &str = "#minimize";

/// Arithmetic operators.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum Operator {
    Plus,
    Minus,
    Times,
    Divide,
}

/// Smallest element of the format.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) enum Token<'a> {
    /// Non-negative decimal number, either part may be empty but not both.
    Number {
        integer: &'a str,
        fraction: &'a str,
    },
    Identifier(&'a str),
    Operator(Operator),
    Relation(ConstraintType),
    Objective(Objective),
    LeftParenthesis,
    RightParenthesis,
    Newline,
    EndOfFile,
}

impl Token<'_> {
    /// How the token should be referred to in an error message.
    pub(super) fn describe(&self) -> String {
        match self {
            Token::Number { integer, fraction } if fraction.is_empty() => format!("number \"{}\"", integer),
            Token::Number { integer, fraction } => format!("number \"{}.{}\"", integer, fraction),
            Token::Identifier(name) => format!("variable \"{}\"", name),
            Token::Operator(operator) => format!("operator \"{}\"", match operator {
                Operator::Plus => "+",
                Operator::Minus => "-",
                Operator::Times => "*",
                Operator::Divide => "/",
            }),
            Token::Relation(relation) => format!("relation \"{}\"", relation),
            Token::Objective(objective) => format!("\"{}\"", objective),
            Token::LeftParenthesis => "\"(\"".to_string(),
            Token::RightParenthesis => "\")\"".to_string(),
            Token::Newline => "end of line".to_string(),
            Token::EndOfFile => "end of file".to_string(),
        }
    }
}

/// Place of a token in the input, both counting from 1.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) struct Position {
    pub line: u64,
    pub column: usize,
}

/// Split a program into tokens.
///
/// # Arguments
///
/// * `program`: The complete input.
///
/// # Return value
///
/// All tokens with their position, ending with `Token::EndOfFile`.
///
/// # Errors
///
/// If a character is found that can't start a token.
pub(super) fn tokenize(program: &str) -> ParseResult<Vec<(Token<'_>, Position)>> {
    let mut tokens = Vec::new();

    let mut last_line = 0;
    for (index, line) in program.lines().enumerate() {
        let line_number = index as u64 + 1;
        let content = match line.find(COMMENT_INDICATOR) {
            Some(start) => &line[..start],
            None => line,
        };

        tokenize_line(content, line_number, &mut tokens)
            .map_err(|(column, description)| {
                ParseError::with_file_location(description, (line_number, column, line))
            })?;

        tokens.push((Token::Newline, Position { line: line_number, column: content.len() + 1 }));
        last_line = line_number;
    }
    tokens.push((Token::EndOfFile, Position { line: last_line + 1, column: 1 }));

    Ok(tokens)
}

/// Tokenize a single line without comment.
///
/// Only advances over ASCII characters, such that every index is a character boundary.
///
/// # Errors
///
/// The column and a description of the first character that doesn't fit.
fn tokenize_line<'a>(
    line: &'a str,
    line_number: u64,
    tokens: &mut Vec<(Token<'a>, Position)>,
) -> Result<(), (usize, String)> {
    let bytes = line.as_bytes();

    let mut start = 0;
    while start < bytes.len() {
        let (token, end) = match bytes[start] {
            b' ' | b'\t' | b'\r' => {
                start += 1;
                continue;
            },
            b'0'..=b'9' | b'.' => {
                let integer_end = scan(bytes, start, u8::is_ascii_digit);
                let (fraction, end) = if bytes.get(integer_end) == Some(&b'.') {
                    let fraction_end = scan(bytes, integer_end + 1, u8::is_ascii_digit);
                    (&line[integer_end + 1..fraction_end], fraction_end)
                } else {
                    ("", integer_end)
                };
                let integer = &line[start..integer_end];
                if integer.is_empty() && fraction.is_empty() {
                    return Err((start + 1, "Expected digits around the decimal point".to_string()));
                }

                (Token::Number { integer, fraction }, end)
            },
            b'a'..=b'z' | b'A'..=b'Z' => {
                let end = scan(bytes, start + 1, |&byte| byte.is_ascii_alphanumeric() || byte == b'_');
                (Token::Identifier(&line[start..end]), end)
            },
            b'#' => {
                let end = scan(bytes, start + 1, u8::is_ascii_alphabetic);
                let objective = match &line[start..end] {
                    MAXIMIZE => Objective::Maximize,
                    MINIMIZE => Objective::Minimize,
                    other => return Err((
                        start + 1,
                        format!("Unknown objective \"{}\", expected \"{}\" or \"{}\"", other, MAXIMIZE, MINIMIZE),
                    )),
                };

                (Token::Objective(objective), end)
            },
            b'<' | b'>' => {
                if bytes.get(start + 1) != Some(&b'=') {
                    return Err((start + 1, "Strict inequalities are not supported, use \"<=\" or \">=\"".to_string()));
                }
                let relation = if bytes[start] == b'<' { ConstraintType::Less } else { ConstraintType::Greater };

                (Token::Relation(relation), start + 2)
            },
            b'=' => (Token::Relation(ConstraintType::Equal), start + 1),
            b'+' => (Token::Operator(Operator::Plus), start + 1),
            b'-' => (Token::Operator(Operator::Minus), start + 1),
            b'*' => (Token::Operator(Operator::Times), start + 1),
            b'/' => (Token::Operator(Operator::Divide), start + 1),
            b'(' => (Token::LeftParenthesis, start + 1),
            b')' => (Token::RightParenthesis, start + 1),
            _ => {
                let character = line[start..].chars().next().unwrap_or_default();
                return Err((start + 1, format!("Unexpected character '{}'", character)));
            },
        };

        tokens.push((token, Position { line: line_number, column: start + 1 }));
        start = end;
    }

    Ok(())
}

/// Index of the first byte from `start` on that doesn't satisfy the predicate.
fn scan(bytes: &[u8], start: usize, predicate: impl Fn(&u8) -> bool) -> usize {
    bytes[start..].iter()
        .position(|byte| !predicate(byte))
        .map_or(bytes.len(), |length| start + length)
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::{ConstraintType, Objective};
    use crate::io::lp::token::{Operator, Position, tokenize, Token};

    #[test]
    fn constraint() {
        let tokens = tokenize("2.5*x_1 + y1 >= .5").unwrap()
            .into_iter()
            .map(|(token, _)| token)
            .collect::<Vec<_>>();

        assert_eq!(tokens, vec![
            Token::Number { integer: "2", fraction: "5" },
            Token::Operator(Operator::Times),
            Token::Identifier("x_1"),
            Token::Operator(Operator::Plus),
            Token::Identifier("y1"),
            Token::Relation(ConstraintType::Greater),
            Token::Number { integer: "", fraction: "5" },
            Token::Newline,
            Token::EndOfFile,
        ]);
    }

    #[test]
    fn positions_and_comments() {
        let tokens = tokenize("% header\n  x = 3 % trailing\n#minimize x").unwrap();

        assert_eq!(tokens[0], (Token::Newline, Position { line: 1, column: 1 }));
        assert_eq!(tokens[1], (Token::Identifier("x"), Position { line: 2, column: 3 }));
        assert_eq!(tokens[2], (Token::Relation(ConstraintType::Equal), Position { line: 2, column: 5 }));
        assert_eq!(tokens[3].0, Token::Number { integer: "3", fraction: "" });
        assert_eq!(tokens[4].0, Token::Newline);
        assert_eq!(tokens[5], (Token::Objective(Objective::Minimize), Position { line: 3, column: 1 }));
        assert_eq!(tokens.last().map(|(token, _)| token), Some(&Token::EndOfFile));
    }

    #[test]
    fn unexpected_character() {
        let error = tokenize("x <= 1\nx + $y <= 2\n#maximize x").unwrap_err();
        assert_eq!(error.location(), Some((2, 5)));
    }

    #[test]
    fn strict_inequality() {
        assert_eq!(tokenize("x < 1").unwrap_err().location(), Some((1, 3)));
    }

    #[test]
    fn unknown_objective() {
        assert_eq!(tokenize("#optimize x").unwrap_err().location(), Some((1, 1)));
    }

    #[test]
    fn lone_decimal_point() {
        assert!(tokenize("x <= .").is_err());
    }
}
