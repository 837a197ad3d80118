/*!
The context, which holds a vocabulary and an interpretation, and within which formulas are parsed, checked, evaluated, and satisfied.

A context owns:
- A [configuration](crate::config).
- A [symbol table](SymbolTable) of declared predicates and constants.
- An [interpretation](Interpretation).

The symbol table and interpretation are built once, and are then only borrowed by the procedures called through the context.

# Example
```rust
# use prop_witness::config::Config;
# use prop_witness::context::Context;
# use prop_witness::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.read_constants("a".as_bytes()).is_ok());
assert!(the_context.read_predicates("P/1".as_bytes()).is_ok());

let formula = the_context.parse_formula("not P(a)").unwrap();
assert!(the_context.is_well_formed(&formula));
assert!(the_context.evaluate(&formula));
assert_eq!(the_context.report(&formula), Ok(Report::True));

assert!(the_context.read_interpretation("P(a)".as_bytes()).is_ok());
assert!(!the_context.evaluate(&formula));
assert_eq!(the_context.report(&formula), Ok(Report::Satisfiable));
```
*/

use std::io::BufRead;

use crate::{
    config::Config,
    io,
    parse,
    procedures::{evaluate, validate, witness},
    reports::Report,
    structures::{
        formula::Formula, interpretation::Interpretation, symbols::SymbolTable, witness::Witness,
    },
    types::err::{self},
};

pub struct Context {
    pub config: Config,
    pub symbols: SymbolTable,
    pub interpretation: Interpretation,
}

impl Context {
    /// A context with the given configuration, no declared symbols, and an empty interpretation.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            symbols: SymbolTable::default(),
            interpretation: Interpretation::default(),
        }
    }

    /// Reads constants into the symbol table of the context, returning a count of the constants added.
    pub fn read_constants(&mut self, reader: impl BufRead) -> Result<usize, err::ErrorKind> {
        Ok(io::read_constants(reader, &mut self.symbols)?)
    }

    /// Reads predicate declarations into the symbol table of the context, returning a count of the predicates added.
    pub fn read_predicates(&mut self, reader: impl BufRead) -> Result<usize, err::ErrorKind> {
        Ok(io::read_predicates(reader, &mut self.symbols)?)
    }

    /// Reads true atoms into the interpretation of the context, returning a count of the atoms added.
    pub fn read_interpretation(&mut self, reader: impl BufRead) -> Result<usize, err::ErrorKind> {
        Ok(io::read_interpretation(reader, &mut self.interpretation)?)
    }

    pub fn parse_formula(&self, text: &str) -> Result<Formula, err::ErrorKind> {
        Ok(parse::parse_formula(text)?)
    }

    pub fn check_formula(&self, formula: &Formula) -> Result<(), err::ErrorKind> {
        Ok(validate::check_formula(formula, &self.symbols)?)
    }

    pub fn is_well_formed(&self, formula: &Formula) -> bool {
        validate::is_well_formed(formula, &self.symbols)
    }

    /// The value of `formula` in the interpretation of the context.
    pub fn evaluate(&self, formula: &Formula) -> bool {
        evaluate::evaluate(formula, &self.interpretation)
    }

    /// A satisfying assignment to the atoms of `formula` with the fewest true atoms, if any, bounded by the configured atom limit.
    pub fn find_minimal_witness(&self, formula: &Formula) -> Result<Option<Witness>, err::ErrorKind> {
        Ok(witness::find_minimal_witness(
            formula,
            self.config.atom_limit.value,
        )?)
    }

    /// A report on `formula`, after checking the formula is well-formed.
    ///
    /// A search for a witness is only made if the formula is false in the interpretation of the context.
    pub fn report(&self, formula: &Formula) -> Result<Report, err::ErrorKind> {
        self.check_formula(formula)?;

        if self.evaluate(formula) {
            return Ok(Report::True);
        }

        match self.find_minimal_witness(formula)? {
            Some(_) => Ok(Report::Satisfiable),
            None => Ok(Report::Unsatisfiable),
        }
    }
}
