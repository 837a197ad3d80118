//! Error types used in the library.
//!
//! - Parse errors note why some text is not a formula.
//! - Syntax errors note why a formula is not well-formed with respect to some symbol table.
//! - Witness errors note why a search for a witness could not take place.
//! - Read errors note why some symbol table or interpretation could not be loaded.
//!
//! Each of these are wrapped by [ErrorKind], and where a caller is only interested in whether some operation succeeded the distinct causes may be ignored.
//!
//! Names of the error enums, for the most part, overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
    Read(ReadError),
    Syntax(SyntaxError),
    Witness(WitnessError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Read(e) => write!(f, "Read error: {e}"),
            Self::Syntax(e) => write!(f, "Syntax error: {e}"),
            Self::Witness(e) => write!(f, "Witness error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when parsing text to a formula.
///
/// Any of these indicate the text is not a formula, and no part of the text is available as a formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// No formula was found, as the input contained no tokens.
    Empty,

    /// The input ended where some token was required.
    UnexpectedEnd,

    /// A token which cannot begin a formula was found where a formula was expected.
    UnexpectedToken(String),

    /// Some token other than a binary connective followed the first subformula of a bracket.
    MissingConnective(String),

    /// Some token other than a closing bracket followed the second subformula of a bracket.
    MissingClose(String),

    /// A formula was found, though some input remained.
    TrailingInput(String),

    /// Negations and brackets were nested beyond the given limit.
    TooDeep(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no formula was found"),
            Self::UnexpectedEnd => write!(f, "the input ended early"),
            Self::UnexpectedToken(token) => write!(f, "'{token}' cannot begin a formula"),
            Self::MissingConnective(token) => write!(f, "expected a connective, found '{token}'"),
            Self::MissingClose(token) => write!(f, "expected ']', found '{token}'"),
            Self::TrailingInput(token) => write!(f, "unexpected input after formula, from '{token}'"),
            Self::TooDeep(limit) => write!(f, "nesting exceeds the limit of {limit}"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when checking a formula is well-formed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SyntaxError {
    /// A connective word was used as an atom.
    ReservedWord(String),

    /// Negation was used as a binary connective.
    MisplacedConnective,

    /// The name of a predicate application is not a declared predicate.
    UnknownPredicate(String),

    /// An argument of a predicate application is not a declared constant.
    UnknownConstant(String),

    /// A predicate was applied to the wrong number of arguments.
    ArityMismatch { predicate: String, expected: usize },

    /// An argument was empty, e.g. `P(a,,b)`.
    EmptyArgument(String),

    /// The arguments of a predicate application were never closed.
    UnclosedApplication(String),

    /// Something other than whitespace followed the arguments of a predicate application.
    TrailingCharacters(String),
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReservedWord(word) => write!(f, "'{word}' is reserved and cannot be an atom"),
            Self::MisplacedConnective => write!(f, "'not' is not a binary connective"),
            Self::UnknownPredicate(name) => write!(f, "'{name}' is not a declared predicate"),
            Self::UnknownConstant(name) => write!(f, "'{name}' is not a declared constant"),
            Self::ArityMismatch {
                predicate,
                expected,
            } => write!(f, "'{predicate}' requires {expected} arguments"),
            Self::EmptyArgument(atom) => write!(f, "'{atom}' has an empty argument"),
            Self::UnclosedApplication(atom) => write!(f, "'{atom}' is missing a ')'"),
            Self::TrailingCharacters(atom) => write!(f, "'{atom}' continues after ')'"),
        }
    }
}

impl From<SyntaxError> for ErrorKind {
    fn from(e: SyntaxError) -> Self {
        ErrorKind::Syntax(e)
    }
}

/// Errors when searching for a witness.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WitnessError {
    /// The formula contains more distinct atoms than can be represented by an assignment.
    AtomCapacityExceeded { atoms: usize, limit: usize },
}

impl std::fmt::Display for WitnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomCapacityExceeded { atoms, limit } => {
                write!(f, "{atoms} distinct atoms exceeds the limit of {limit}")
            }
        }
    }
}

impl From<WitnessError> for ErrorKind {
    fn from(e: WitnessError) -> Self {
        ErrorKind::Witness(e)
    }
}

/// Errors when reading a symbol table or interpretation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReadError {
    /// Reading failed at the given line.
    Io(usize),

    /// A predicate declaration at the given line was not of the form `name/arity`.
    PredicateDeclaration(usize),

    /// The arity of a predicate declaration at the given line was not a non-negative integer.
    Arity(usize),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(line) => write!(f, "failed to read line {line}"),
            Self::PredicateDeclaration(line) => {
                write!(f, "expected a declaration 'name/arity' on line {line}")
            }
            Self::Arity(line) => write!(f, "invalid arity on line {line}"),
        }
    }
}

impl From<ReadError> for ErrorKind {
    fn from(e: ReadError) -> Self {
        ErrorKind::Read(e)
    }
}
