/*!
Reports for the context.
*/

/// High-level reports regarding a (well-formed) formula.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula is true in the interpretation of the context.
    True,

    /// The formula is false in the interpretation of the context, though some assignment satisfies the formula.
    Satisfiable,

    /// No assignment satisfies the formula.
    Unsatisfiable,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "True"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}
