/*!
Parsing text to a formula.

```rust
# use prop_witness::parse::parse_formula;
# use prop_witness::structures::formula::{Connective, Formula};
# use prop_witness::types::err::ParseError;
let formula = parse_formula("[ P(a) and not Q(b) ]");
let expected = Formula::binary(
    Connective::And,
    Formula::atom("P(a)"),
    Formula::negation(Formula::atom("Q(b)")),
);
assert_eq!(formula, Ok(expected));

assert_eq!(parse_formula("[ P(a) and ]"), Err(ParseError::UnexpectedToken("]".to_string())));
assert_eq!(parse_formula("P(a) Q(b)"), Err(ParseError::TrailingInput("Q(b)".to_string())));
```
*/

pub mod formula;
pub mod tokenizer;

use crate::{
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::{self},
};

use formula::Parser;
use tokenizer::Tokenizer;

/// Parses the whole of `text` as a single formula.
///
/// Text is a formula only if some formula is found and no tokens remain after the formula.
pub fn parse_formula(text: &str) -> Result<Formula, err::ParseError> {
    let tokens = Tokenizer::new(text);
    if tokens.is_exhausted() {
        return Err(err::ParseError::Empty);
    }

    let mut parser = Parser::new(tokens);
    let formula = parser.parse()?;

    let mut tokens = parser.into_tokens();
    match tokens.next_token() {
        "" => {
            log::debug!(target: targets::PARSE, "Parsed: {formula}");
            Ok(formula)
        }
        trailing => {
            log::debug!(target: targets::PARSE, "Trailing input from {}", tokens.position());
            Err(err::ParseError::TrailingInput(trailing.to_string()))
        }
    }
}
