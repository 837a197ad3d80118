//! A library for checking and satisfying propositional formulas over a declared vocabulary of predicates and constants.
//!
//! Formulas are written in a bracketed notation, where binary connectives are infix and negation is prefix:
//!
//! ```text
//! [ P(a) implies [ not Q(a,b) or R ] ]
//! ```
//!
//! Each leaf of a formula is an atom, either a bare symbol or a predicate applied to constants.
//! Given a [symbol table](structures::symbols::SymbolTable) of declared predicates and constants, the library can:
//! - [Parse](parse::parse_formula) text to a [formula](structures::formula::Formula).
//! - [Check](procedures::validate) a formula is well-formed with respect to the symbol table.
//! - [Evaluate](procedures::evaluate) a formula against an [interpretation](structures::interpretation::Interpretation) (a closed-world set of true atoms).
//! - [Search](procedures::witness) for a satisfying assignment to the atoms of a formula which makes the fewest atoms true.
//!
//! # Orientation
//!
//! As with the [context] of a solver, a context here owns a configuration, a symbol table, and an interpretation, and each of the operations above is available as a method of the context.
//! Though, each operation is also a free function over borrowed structures, and the context is only a convenience.
//!
//! # Examples
//!
//! ```rust
//! # use prop_witness::config::Config;
//! # use prop_witness::context::Context;
//! # use prop_witness::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert!(the_context.read_constants("a b".as_bytes()).is_ok());
//! assert!(the_context.read_predicates("P/1".as_bytes()).is_ok());
//!
//! let formula = the_context.parse_formula("[ P(a) or P(b) ]").unwrap();
//! assert!(the_context.is_well_formed(&formula));
//! assert!(!the_context.evaluate(&formula));
//!
//! let witness = the_context.find_minimal_witness(&formula).unwrap().unwrap();
//! assert_eq!(witness.atoms(), &["P(a)"]);
//! assert_eq!(the_context.report(&formula), Ok(Report::Satisfiable));
//! ```
//!
//! # Scaling
//!
//! The search for a witness is brute force, over each of the 2^n assignments to the n distinct atoms of a formula.
//! Assignments are represented as bitmasks, and so the number of distinct atoms is bounded by the [atom limit](config::Config::atom_limit), at most [ATOM_LIMIT_MAX](structures::assignment::ATOM_LIMIT_MAX).
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/), logs of the search can be found with `RUST_LOG=witness …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod config;
pub mod context;
pub mod io;
pub mod misc;
pub mod parse;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
