/*!
Checks on whether a formula is well-formed.

A formula is well-formed with respect to a [symbol table](SymbolTable) when:
- Each negation and binary connective has the subformulas required, which is ensured by the representation of a formula, and no binary connective is negation.
- Each atom is not a reserved word and is a well-formed predicate application.

# Predicate applications

An atom is read as `Name(arg1,...,argN)` or as a bare `Name`, where the name is everything before the first `(`.
If the name is declared with arity *k*:
- For *k* = 0, the atom must be the bare name.
- For *k* > 0, the name must be followed by exactly *k* arguments, separated by commas and closed by `)`, with each argument a declared constant.
  Only whitespace may follow the `)`.

```rust
# use prop_witness::procedures::validate::check_atom;
# use prop_witness::structures::symbols::{Predicate, SymbolTable};
# use prop_witness::types::err::SyntaxError;
let mut symbols = SymbolTable::default();
symbols.add_constant("a");
symbols.add_predicate(Predicate::new("P", 2));
symbols.add_predicate(Predicate::new("p", 0));

assert!(check_atom("P(a,a)", &symbols).is_ok());
assert!(check_atom("p", &symbols).is_ok());

assert_eq!(check_atom("P(a,b)", &symbols), Err(SyntaxError::UnknownConstant("b".to_string())));
assert!(matches!(check_atom("P(a)", &symbols), Err(SyntaxError::ArityMismatch { .. })));
assert!(matches!(check_atom("p()", &symbols), Err(SyntaxError::ArityMismatch { .. })));
```
*/

use crate::{
    misc::log::targets::{self},
    parse::tokenizer::is_whitespace,
    structures::{
        formula::{Formula, RESERVED_WORDS},
        symbols::SymbolTable,
    },
    types::err::{self},
};

/// Whether `formula` is well-formed with respect to `symbols`.
pub fn is_well_formed(formula: &Formula, symbols: &SymbolTable) -> bool {
    match check_formula(formula, symbols) {
        Ok(()) => true,
        Err(e) => {
            log::debug!(target: targets::SYNTAX, "Not well-formed: {e}");
            false
        }
    }
}

/// Checks `formula` is well-formed with respect to `symbols`, returning the first issue found, from left to right.
pub fn check_formula(formula: &Formula, symbols: &SymbolTable) -> Result<(), err::SyntaxError> {
    match formula {
        Formula::Atom(text) => {
            if RESERVED_WORDS.contains(&text.as_str()) {
                return Err(err::SyntaxError::ReservedWord(text.to_owned()));
            }
            check_atom(text, symbols)
        }

        Formula::Not(sub) => check_formula(sub, symbols),

        Formula::Binary(connective, left, right) => {
            if !connective.is_binary() {
                return Err(err::SyntaxError::MisplacedConnective);
            }
            check_formula(left, symbols)?;
            check_formula(right, symbols)
        }
    }
}

/// Checks `text` is a well-formed predicate application with respect to `symbols`.
pub fn check_atom(text: &str, symbols: &SymbolTable) -> Result<(), err::SyntaxError> {
    let (name, arguments) = match text.split_once('(') {
        Some((name, arguments)) => (name, Some(arguments)),
        None => (text, None),
    };

    let Some(arity) = symbols.find_predicate(name) else {
        return Err(err::SyntaxError::UnknownPredicate(name.to_owned()));
    };

    let arity_mismatch = || err::SyntaxError::ArityMismatch {
        predicate: name.to_owned(),
        expected: arity,
    };

    let mut rest = match (arity, arguments) {
        (0, None) => return Ok(()),
        (0, Some(_)) | (_, None) => return Err(arity_mismatch()),
        (_, Some(arguments)) => arguments,
    };

    for index in 0..arity {
        let Some(end) = rest.find([',', ')']) else {
            return Err(err::SyntaxError::UnclosedApplication(text.to_owned()));
        };

        let argument = &rest[..end];
        let delimiter = &rest[end..end + 1];
        rest = &rest[end + 1..];

        if argument.is_empty() {
            return Err(err::SyntaxError::EmptyArgument(text.to_owned()));
        }

        let last = index + 1 == arity;
        match (delimiter, last) {
            (")", false) | (",", true) => return Err(arity_mismatch()),
            _ => {}
        }

        if !symbols.is_declared_constant(argument) {
            return Err(err::SyntaxError::UnknownConstant(argument.to_owned()));
        }
    }

    match rest.trim_start_matches(is_whitespace) {
        "" => Ok(()),
        _ => Err(err::SyntaxError::TrailingCharacters(text.to_owned())),
    }
}
