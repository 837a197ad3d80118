/*!
A recursive descent parser from tokens to a formula.

With one token of lookahead, a formula is one of:
- `[`, a formula, one of `and`, `or`, `implies`, or `iff`, a formula, and `]`.
- `not` followed by a formula.
- Any other token, as an atom, excluding `]` and the binary connectives.

The parser consumes tokens only as far as some formula is found, and so a check that no tokens remain is made by [parse_formula](super::parse_formula) rather than here.

# Nesting

Each negation and bracket is a level of nesting, and at most [NESTING_LIMIT] levels are parsed.
As parsing, checking, evaluating, and dropping a formula each recurse through the levels of the formula, the limit bounds the stack used by each of these.
*/

use crate::{
    misc::log::targets::{self},
    structures::formula::{Connective, Formula},
    types::err::{self},
};

use super::tokenizer::Tokenizer;

/// The maximum count of nested negations and brackets in a parsed formula.
pub const NESTING_LIMIT: usize = 512;

pub struct Parser<'i> {
    tokens: Tokenizer<'i>,
}

impl<'i> Parser<'i> {
    pub fn new(tokens: Tokenizer<'i>) -> Self {
        Parser { tokens }
    }

    /// The tokenizer of the parser, positioned after any formula parsed.
    pub fn tokens(&self) -> &Tokenizer<'i> {
        &self.tokens
    }

    pub fn into_tokens(self) -> Tokenizer<'i> {
        self.tokens
    }

    /// Parses a formula from the tokens at the cursor of the tokenizer.
    pub fn parse(&mut self) -> Result<Formula, err::ParseError> {
        self.parse_at(0)
    }

    /// Parses a formula found within `depth` negations and brackets.
    fn parse_at(&mut self, depth: usize) -> Result<Formula, err::ParseError> {
        let token = self.tokens.next_token();
        log::trace!(target: targets::PARSE, "Token '{token}' at {}", self.tokens.position());

        if depth == NESTING_LIMIT && matches!(token, "[" | "not") {
            log::debug!(target: targets::PARSE, "Nesting limit reached at {}", self.tokens.position());
            return Err(err::ParseError::TooDeep(NESTING_LIMIT));
        }

        match token {
            "" => Err(err::ParseError::UnexpectedEnd),

            "[" => {
                let left = self.parse_at(depth + 1)?;

                let connective = match self.tokens.next_token() {
                    "" => return Err(err::ParseError::UnexpectedEnd),
                    word => match Connective::binary_from_word(word) {
                        Some(connective) => connective,
                        None => return Err(err::ParseError::MissingConnective(word.to_string())),
                    },
                };

                let right = self.parse_at(depth + 1)?;

                match self.tokens.next_token() {
                    "]" => Ok(Formula::binary(connective, left, right)),
                    "" => Err(err::ParseError::UnexpectedEnd),
                    other => Err(err::ParseError::MissingClose(other.to_string())),
                }
            }

            "not" => Ok(Formula::negation(self.parse_at(depth + 1)?)),

            "]" | "and" | "or" | "implies" | "iff" => {
                Err(err::ParseError::UnexpectedToken(token.to_string()))
            }

            atom => Ok(Formula::atom(atom)),
        }
    }
}
