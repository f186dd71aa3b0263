//! # Parsing LP files
//!
//! A recursive descent parser over the tokens of `token`. Expressions are collected as flat lists
//! of (coefficient, variable) terms, which are combined per variable once a constraint or the
//! objective function is complete.
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use num_traits::Zero;

use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::number_types::traits::OrderedField;
use crate::io::error::{ParseError, ParseResult};
use crate::io::lp::token::{Operator, Position, tokenize, Token};

/// Deepest nesting of parentheses and unary minus signs that is accepted.
const MAX_NESTING_DEPTH: usize = 100;

/// Uncombined linear expression, a constant is a term without variable.
type RawTerm<'a, F> = Vec<(F, Option<&'a str>)>;

/// A constraint `terms <relation> rhs`, with every variable appearing at most once.
#[derive(Debug, Eq, PartialEq)]
pub(super) struct ParsedConstraint<'a, F> {
    pub terms: Vec<(&'a str, F)>,
    pub relation: ConstraintType,
    pub rhs: F,
}

/// All information in an LP file, variables still referred to by name.
#[derive(Debug, Eq, PartialEq)]
pub(super) struct ParsedProgram<'a, F> {
    pub constraints: Vec<ParsedConstraint<'a, F>>,
    pub objective: Objective,
    pub cost: Vec<(&'a str, F)>,
    pub constant: F,
}

pub(super) struct Parser<'a> {
    tokens: Vec<(Token<'a>, Position)>,
    current: usize,
    /// Number of parentheses and unary minus signs currently open.
    depth: usize,
    lines: Vec<&'a str>,
}

impl<'a> Parser<'a> {
    /// Tokenize the program.
    ///
    /// # Errors
    ///
    /// If the program contains characters that can't form a token.
    pub fn new(program: &'a str) -> ParseResult<Self> {
        Ok(Self {
            tokens: tokenize(program)?,
            current: 0,
            depth: 0,
            lines: program.lines().collect(),
        })
    }

    /// Parse a complete program: constraints followed by the objective function.
    ///
    /// Newlines only separate, constraints are usually written one per line but may share one.
    pub fn program<F: OrderedField>(mut self) -> ParseResult<ParsedProgram<'a, F>> {
        let mut constraints = Vec::new();

        self.skip_newlines();
        let objective = loop {
            match self.peek() {
                Token::Objective(objective) => {
                    self.advance();
                    break objective;
                },
                Token::EndOfFile => return Err(self.unexpected("a constraint or an objective function")),
                _ => {
                    let constraint = self.constraint()
                        .map_err(|error| {
                            ParseError::with_cause(format!("Invalid constraint {}", constraints.len() + 1), error)
                        })?;
                    constraints.push(constraint);
                    self.skip_newlines();
                },
            }
        };

        let (cost, constant) = self.sum_term()
            .map(simplify)
            .map_err(|error| ParseError::with_cause("Invalid objective function", error))?;

        self.skip_newlines();
        if self.peek() != Token::EndOfFile {
            return Err(self.unexpected("end of file after the objective function"));
        }

        Ok(ParsedProgram { constraints, objective, cost, constant })
    }

    /// Constraint ::= SumTerm Relation SumTerm
    ///
    /// Everything is moved to the left-hand side, except for the constant.
    fn constraint<F: OrderedField>(&mut self) -> ParseResult<ParsedConstraint<'a, F>> {
        let mut terms = self.sum_term()?;
        let relation = match self.peek() {
            Token::Relation(relation) => relation,
            _ => return Err(self.unexpected("\"<=\", \">=\" or \"=\"")),
        };
        self.advance();
        terms.extend(negate(self.sum_term()?));

        let (terms, constant) = simplify(terms);
        Ok(ParsedConstraint { terms, relation, rhs: -constant })
    }

    /// SumTerm ::= MulTerm (('+' | '-') MulTerm)*
    fn sum_term<F: OrderedField>(&mut self) -> ParseResult<RawTerm<'a, F>> {
        let mut terms = self.mul_term()?;
        loop {
            match self.peek() {
                Token::Operator(Operator::Plus) => {
                    self.advance();
                    terms.extend(self.mul_term()?);
                },
                Token::Operator(Operator::Minus) => {
                    self.advance();
                    terms.extend(negate(self.mul_term()?));
                },
                _ => break Ok(terms),
            }
        }
    }

    /// MulTerm ::= NegTerm (('*' | '/') NegTerm)*
    fn mul_term<F: OrderedField>(&mut self) -> ParseResult<RawTerm<'a, F>> {
        let mut terms = self.neg_term()?;
        loop {
            match self.peek() {
                Token::Operator(Operator::Times) => {
                    let position = self.advance();
                    let factor = self.neg_term()?;
                    terms = multiply(terms, factor).ok_or_else(|| {
                        self.error_at("Product of two variables, only linear terms are supported", position)
                    })?;
                },
                Token::Operator(Operator::Divide) => {
                    let position = self.advance();
                    let denominator = to_number(self.neg_term()?).ok_or_else(|| {
                        self.error_at("Division by a variable, only division by a constant is supported", position)
                    })?;
                    if denominator.is_zero() {
                        return Err(self.error_at("Division by zero", position));
                    }
                    terms = terms.into_iter()
                        .map(|(coefficient, variable)| (coefficient / &denominator, variable))
                        .collect();
                },
                _ => break Ok(terms),
            }
        }
    }

    /// NegTerm ::= '-' NegTerm | Term
    fn neg_term<F: OrderedField>(&mut self) -> ParseResult<RawTerm<'a, F>> {
        if self.peek() == Token::Operator(Operator::Minus) {
            let position = self.advance();
            let terms = self.nested(position, Self::neg_term)?;
            Ok(negate(terms))
        } else {
            self.term()
        }
    }

    /// Term ::= Number | Identifier | '(' SumTerm ')'
    fn term<F: OrderedField>(&mut self) -> ParseResult<RawTerm<'a, F>> {
        match self.peek() {
            Token::LeftParenthesis => {
                let position = self.advance();
                let terms = self.nested(position, Self::sum_term)?;
                if self.peek() != Token::RightParenthesis {
                    return Err(self.unexpected("\")\""));
                }
                self.advance();

                Ok(terms)
            },
            Token::Number { integer, fraction } => {
                let position = self.advance();
                let value = F::from_decimal_digits(integer, fraction)
                    .ok_or_else(|| self.error_at("Invalid number", position))?;

                Ok(vec![(value, None)])
            },
            Token::Identifier(name) => {
                self.advance();
                Ok(vec![(F::one(), Some(name))])
            },
            _ => Err(self.unexpected("a number, a variable or \"(\"")),
        }
    }

    /// Parse one level deeper, failing instead of recursing without bound.
    fn nested<T>(
        &mut self,
        position: Position,
        parse: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error_at(
                format!("Expression nested deeper than {} levels", MAX_NESTING_DEPTH),
                position,
            ));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;

        result
    }

    fn peek(&self) -> Token<'a> {
        self.tokens[self.current].0.clone()
    }

    /// Move to the next token, but never past the end of the file.
    ///
    /// # Return value
    ///
    /// The position of the token that was current.
    fn advance(&mut self) -> Position {
        let position = self.tokens[self.current].1;
        if self.current + 1 < self.tokens.len() {
            self.current += 1;
        }

        position
    }

    fn skip_newlines(&mut self) {
        while self.peek() == Token::Newline {
            self.advance();
        }
    }

    fn error_at(&self, description: impl Into<String>, position: Position) -> ParseError {
        let line = usize::try_from(position.line - 1).ok()
            .and_then(|index| self.lines.get(index))
            .copied()
            .unwrap_or("");

        ParseError::with_file_location(description, (position.line, position.column, line))
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        let (token, position) = &self.tokens[self.current];
        self.error_at(format!("Unexpected {}, expected {}", token.describe(), expected), *position)
    }
}

fn negate<F: OrderedField>(terms: RawTerm<'_, F>) -> RawTerm<'_, F> {
    terms.into_iter()
        .map(|(coefficient, variable)| (-coefficient, variable))
        .collect()
}

/// The value of an expression without variables.
fn to_number<F: OrderedField>(terms: RawTerm<'_, F>) -> Option<F> {
    terms.into_iter()
        .try_fold(F::zero(), |total, (coefficient, variable)| match variable {
            None => Some(total + coefficient),
            Some(_) => None,
        })
}

/// Distribute a product, `None` if the result would not be linear.
fn multiply<'a, F: OrderedField>(left: RawTerm<'a, F>, right: RawTerm<'a, F>) -> Option<RawTerm<'a, F>> {
    let mut product = Vec::with_capacity(left.len() * right.len());
    for (left_coefficient, left_variable) in &left {
        for (right_coefficient, right_variable) in &right {
            let variable = match (left_variable, right_variable) {
                (Some(_), Some(_)) => return None,
                (variable, None) | (None, variable) => *variable,
            };
            product.push((left_coefficient.clone() * right_coefficient, variable));
        }
    }

    Some(product)
}

/// Combine the coefficients of each variable.
///
/// # Return value
///
/// The variables in order of first appearance with their coefficient, and the constant.
fn simplify<'a, F: OrderedField>(terms: RawTerm<'a, F>) -> (Vec<(&'a str, F)>, F) {
    let mut constant = F::zero();
    let mut combined: Vec<(&'a str, F)> = Vec::new();
    let mut index = HashMap::new();

    for (coefficient, variable) in terms {
        match variable {
            None => constant += coefficient,
            Some(name) => match index.entry(name) {
                Entry::Occupied(entry) => combined[*entry.get()].1 += coefficient,
                Entry::Vacant(entry) => {
                    entry.insert(combined.len());
                    combined.push((name, coefficient));
                },
            },
        }
    }

    (combined, constant)
}

#[cfg(test)]
mod test {
    use relp_num::{RationalBig, RB};

    use crate::data::linear_program::elements::{ConstraintType, Objective};
    use crate::io::lp::parse::{ParsedConstraint, ParsedProgram, Parser};

    fn parse(program: &str) -> ParsedProgram<'_, RationalBig> {
        Parser::new(program).unwrap().program().unwrap()
    }

    #[test]
    fn textbook() {
        let program = parse("x + y <= 4\nx + 3*y <= 6\n#maximize 3*x + 2*y\n");

        assert_eq!(program, ParsedProgram {
            constraints: vec![
                ParsedConstraint { terms: vec![("x", RB!(1)), ("y", RB!(1))], relation: ConstraintType::Less, rhs: RB!(4) },
                ParsedConstraint { terms: vec![("x", RB!(1)), ("y", RB!(3))], relation: ConstraintType::Less, rhs: RB!(6) },
            ],
            objective: Objective::Maximize,
            cost: vec![("x", RB!(3)), ("y", RB!(2))],
            constant: RB!(0),
        });
    }

    #[test]
    fn both_sides_are_collected() {
        let program = parse("2*x + 1 >= y - 3 + x\n#minimize 4 - (x + y) / 2");

        assert_eq!(program.constraints, vec![ParsedConstraint {
            terms: vec![("x", RB!(1)), ("y", RB!(-1))],
            relation: ConstraintType::Greater,
            rhs: RB!(-4),
        }]);
        assert_eq!(program.objective, Objective::Minimize);
        assert_eq!(program.cost, vec![("x", RB!(-1, 2)), ("y", RB!(-1, 2))]);
        assert_eq!(program.constant, RB!(4));
    }

    #[test]
    fn precedence() {
        // 2 * -(x - 3) - -y / 4
        let program = parse("#maximize 2 * -(x - 3) - -y / 4");
        assert!(program.constraints.is_empty());
        assert_eq!(program.cost, vec![("x", RB!(-2)), ("y", RB!(1, 4))]);
        assert_eq!(program.constant, RB!(6));
    }

    #[test]
    fn decimals() {
        let program = parse("0.5*x + 1.25 = 3.\n#maximize .75*x");
        assert_eq!(program.constraints[0].terms, vec![("x", RB!(1, 2))]);
        assert_eq!(program.constraints[0].rhs, RB!(7, 4));
        assert_eq!(program.cost, vec![("x", RB!(3, 4))]);
    }

    #[test]
    fn blank_lines_and_comments() {
        let program = parse("\n% a comment\n\nx <= 1 % bound\n\n#maximize x\n\n");
        assert_eq!(program.constraints.len(), 1);
        assert_eq!(program.cost, vec![("x", RB!(1))]);
    }

    fn error_location(program: &str) -> Option<(u64, usize)> {
        Parser::new(program).unwrap().program::<RationalBig>().unwrap_err().location()
    }

    #[test]
    fn nonlinear() {
        assert_eq!(error_location("x * y <= 1\n#maximize x"), Some((1, 3)));
        assert_eq!(error_location("x <= 1\n#maximize (x + 1) * (y + 1)"), Some((2, 19)));
    }

    #[test]
    fn division() {
        assert_eq!(error_location("x / y <= 1\n#maximize x"), Some((1, 3)));
        assert_eq!(error_location("x / (2 - 2) <= 1\n#maximize x"), Some((1, 3)));
        assert_eq!(error_location("x / (y - y) <= 1\n#maximize x"), Some((1, 3)));
    }

    #[test]
    fn missing_objective() {
        assert_eq!(error_location("x <= 1\n"), Some((2, 1)));
    }

    #[test]
    fn missing_relation() {
        assert_eq!(error_location("x + y\n#maximize x"), Some((1, 6)));
    }

    #[test]
    fn constraint_after_objective() {
        assert_eq!(error_location("#maximize x\nx <= 1"), Some((2, 1)));
    }

    #[test]
    fn constraints_share_a_line() {
        let program = parse("x <= 1 y <= 2 #maximize x + y");
        assert_eq!(program.constraints, vec![
            ParsedConstraint { terms: vec![("x", RB!(1))], relation: ConstraintType::Less, rhs: RB!(1) },
            ParsedConstraint { terms: vec![("y", RB!(1))], relation: ConstraintType::Less, rhs: RB!(2) },
        ]);
        assert_eq!(program.cost, vec![("x", RB!(1)), ("y", RB!(1))]);
    }

    #[test]
    fn nesting() {
        let nested = format!("x <= {}1{}\n#maximize x", "(".repeat(100), ")".repeat(100));
        assert_eq!(parse(&nested).constraints[0].rhs, RB!(1));
        let negated = format!("#maximize {}x", "-".repeat(100));
        assert_eq!(parse(&negated).cost, vec![("x", RB!(1))]);

        let too_deep = format!("x <= {}1{}\n#maximize x", "(".repeat(101), ")".repeat(101));
        assert_eq!(error_location(&too_deep), Some((1, 106)));
        let way_too_deep = format!("#maximize {}x", "(".repeat(100_000));
        assert_eq!(error_location(&way_too_deep), Some((1, 111)));
        assert!(error_location(&format!("#maximize {}x", "-".repeat(100_000))).is_some());
    }

    #[test]
    fn unbalanced_parentheses() {
        assert_eq!(error_location("(x + 1 <= 2\n#maximize x"), Some((1, 8)));
        assert_eq!(error_location("x <= 1\n#maximize )"), Some((2, 11)));
    }
}
