/*!
Formulas, as trees of connectives over atoms.

A formula is one of:
- An atom, given by some text such as `P(a,b)` or `p`.
- The negation of a formula.
- Two formulas joined by a binary connective.

Written as text, binary connectives are infix and enclosed in brackets, while negation is prefix.

```rust
# use prop_witness::structures::formula::{Connective, Formula};
let formula = Formula::binary(
    Connective::Implies,
    Formula::atom("P(a)"),
    Formula::negation(Formula::atom("Q")),
);

assert_eq!(formula.to_string(), "[ P(a) implies not Q ]");
assert_eq!(formula.arity(), 2);
assert_eq!(formula.atoms().collect::<Vec<_>>(), vec!["P(a)", "Q"]);
```

Nothing prevents the construction of a binary negation, as the connectives of a formula are a single type.
Such a formula is not [well-formed](crate::procedures::validate).
*/

/// The words used for connectives, none of which may be used as an atom.
pub const RESERVED_WORDS: [&str; 5] = ["and", "or", "implies", "iff", "not"];

/// A connective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connective {
    Not,
    And,
    Or,
    Implies,
    Iff,
}

impl Connective {
    /// The connective written as `word`, if any.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "not" => Some(Self::Not),
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            "implies" => Some(Self::Implies),
            "iff" => Some(Self::Iff),
            _ => None,
        }
    }

    /// The binary connective written as `word`, if any.
    pub fn binary_from_word(word: &str) -> Option<Self> {
        Self::from_word(word).filter(|connective| connective.is_binary())
    }

    pub fn word(&self) -> &'static str {
        match self {
            Self::Not => "not",
            Self::And => "and",
            Self::Or => "or",
            Self::Implies => "implies",
            Self::Iff => "iff",
        }
    }

    pub fn is_binary(&self) -> bool {
        !matches!(self, Self::Not)
    }

    /// Applies the connective to the values of its arguments.
    /// For negation, only the left value is used.
    pub fn apply(&self, left: bool, right: bool) -> bool {
        match self {
            Self::Not => !left,
            Self::And => left && right,
            Self::Or => left || right,
            Self::Implies => !(left && !right),
            Self::Iff => (left && right) || (!left && !right),
        }
    }
}

impl std::fmt::Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.word())
    }
}

/// A formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Formula {
    /// An atom, given by its text.
    Atom(String),

    /// The negation of some formula.
    Not(Box<Formula>),

    /// Some pair of formulas, joined by a (binary) connective.
    Binary(Connective, Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn atom(text: impl Into<String>) -> Self {
        Self::Atom(text.into())
    }

    pub fn negation(formula: Formula) -> Self {
        Self::Not(Box::new(formula))
    }

    pub fn binary(connective: Connective, left: Formula, right: Formula) -> Self {
        Self::Binary(connective, Box::new(left), Box::new(right))
    }

    /// The count of immediate subformulas.
    pub fn arity(&self) -> usize {
        match self {
            Self::Atom(_) => 0,
            Self::Not(_) => 1,
            Self::Binary(..) => 2,
        }
    }

    /// The main connective of the formula, if the formula is not an atom.
    pub fn connective(&self) -> Option<Connective> {
        match self {
            Self::Atom(_) => None,
            Self::Not(_) => Some(Connective::Not),
            Self::Binary(connective, _, _) => Some(*connective),
        }
    }

    /// The text of the formula, if the formula is an atom.
    pub fn atom_text(&self) -> Option<&str> {
        match self {
            Self::Atom(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn left(&self) -> Option<&Formula> {
        match self {
            Self::Atom(_) => None,
            Self::Not(sub) | Self::Binary(_, sub, _) => Some(sub.as_ref()),
        }
    }

    pub fn right(&self) -> Option<&Formula> {
        match self {
            Self::Binary(_, _, sub) => Some(sub.as_ref()),
            _ => None,
        }
    }

    /// An iterator over the text of each atom in the formula, in a depth-first, left-to-right, traversal.
    ///
    /// Repeated atoms are returned on each occurrence.
    pub fn atoms(&self) -> Atoms<'_> {
        Atoms { stack: vec![self] }
    }
}

/// A depth-first, left-to-right, traversal of the atoms of a formula.
pub struct Atoms<'f> {
    stack: Vec<&'f Formula>,
}

impl<'f> Iterator for Atoms<'f> {
    type Item = &'f str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(formula) = self.stack.pop() {
            match formula {
                Formula::Atom(text) => return Some(text.as_str()),
                Formula::Not(sub) => self.stack.push(sub.as_ref()),
                Formula::Binary(_, left, right) => {
                    // Right first, so the left is examined first.
                    self.stack.push(right.as_ref());
                    self.stack.push(left.as_ref());
                }
            }
        }
        None
    }
}

/// The canonical representation of a formula, from which the formula can be recovered by [parsing](crate::parse::parse_formula).
impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom(text) => write!(f, "{text}"),
            Self::Not(sub) => write!(f, "not {sub}"),
            Self::Binary(connective, left, right) => write!(f, "[ {left} {connective} {right} ]"),
        }
    }
}
