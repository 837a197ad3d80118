/*!
Reading symbol tables and interpretations, and writing witnesses.

Each reader takes anything which implements [BufRead], and so may be used with files, compressed files, or strings.
Input is read line by line, and each line is split on space, tab, carriage return, and newline, so declarations may be spread over any number of lines.

- Constants are given by name, e.g. `alice bob`.
- Predicates are given as `name/arity`, e.g. `Likes/2 Happy/1`.
- True atoms are given as written in a formula, e.g. `Likes(alice,bob)`.

```rust
# use prop_witness::io::{read_constants, read_predicates};
# use prop_witness::structures::symbols::SymbolTable;
let mut symbols = SymbolTable::default();

assert_eq!(read_constants("alice bob\ncarol".as_bytes(), &mut symbols), Ok(3));
assert_eq!(read_predicates("Likes/2\n\nHappy/1\n".as_bytes(), &mut symbols), Ok(2));

assert_eq!(symbols.find_predicate("Likes"), Some(2));
assert!(symbols.is_declared_constant("carol"));
```
*/

use std::io::{BufRead, Write};

use crate::{
    misc::log::targets::{self},
    parse::tokenizer::is_whitespace,
    structures::{
        interpretation::Interpretation,
        symbols::{Predicate, SymbolTable},
        witness::Witness,
    },
    types::err::{self},
};

/// Calls `f` on each whitespace separated token of `reader`, with the line number of the token.
///
/// Whitespace is as [understood by the tokenizer](is_whitespace), so any atom of a formula may be read as a single token.
fn for_each_token(
    mut reader: impl BufRead,
    mut f: impl FnMut(&str, usize) -> Result<(), err::ReadError>,
) -> Result<(), err::ReadError> {
    let mut buffer = String::with_capacity(1024);
    let mut line_counter = 0;

    loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ReadError::Io(line_counter + 1)),
        }

        for token in buffer.split(is_whitespace).filter(|token| !token.is_empty()) {
            f(token, line_counter)?;
        }
    }

    Ok(())
}

/// Reads constants into `symbols`, returning a count of the constants added.
///
/// Constants which were already declared are skipped.
pub fn read_constants(reader: impl BufRead, symbols: &mut SymbolTable) -> Result<usize, err::ReadError> {
    let mut added = 0;
    for_each_token(reader, |token, _| {
        if symbols.add_constant(token) {
            added += 1;
        }
        Ok(())
    })?;

    log::info!(target: targets::SYMBOLS, "Read {added} constants");
    Ok(added)
}

/// Parses a predicate declaration of the form `name/arity`.
pub fn parse_predicate(declaration: &str, line: usize) -> Result<Predicate, err::ReadError> {
    let Some((name, arity)) = declaration.split_once('/') else {
        return Err(err::ReadError::PredicateDeclaration(line));
    };

    if name.is_empty() {
        return Err(err::ReadError::PredicateDeclaration(line));
    }

    match arity.parse::<usize>() {
        Ok(arity) => Ok(Predicate::new(name, arity)),
        Err(_) => Err(err::ReadError::Arity(line)),
    }
}

/// Reads predicate declarations into `symbols`, returning a count of the predicates added.
///
/// If a predicate is declared more than once, the first declaration is kept.
pub fn read_predicates(reader: impl BufRead, symbols: &mut SymbolTable) -> Result<usize, err::ReadError> {
    let mut added = 0;
    for_each_token(reader, |token, line| {
        let predicate = parse_predicate(token, line)?;
        let name = predicate.name.clone();
        match symbols.add_predicate(predicate) {
            true => added += 1,
            false => log::warn!(target: targets::SYMBOLS, "Predicate '{name}' redeclared on line {line}"),
        }
        Ok(())
    })?;

    log::info!(target: targets::SYMBOLS, "Read {added} predicates");
    Ok(added)
}

/// Reads true atoms into `interpretation`, returning a count of the atoms added.
pub fn read_interpretation(
    reader: impl BufRead,
    interpretation: &mut Interpretation,
) -> Result<usize, err::ReadError> {
    let mut added = 0;
    for_each_token(reader, |token, _| {
        if interpretation.insert(token) {
            added += 1;
        }
        Ok(())
    })?;

    log::info!(target: targets::SYMBOLS, "Read {added} true atoms");
    Ok(added)
}

/// Writes `witness` to `writer`, one atom per line.
pub fn write_witness(mut writer: impl Write, witness: &Witness) -> std::io::Result<()> {
    write!(writer, "{witness}")?;
    writer.flush()
}
