/*!
An interpretation, as a set of atoms which are true.

Interpretations are closed-world: any atom not in the set is false.
Membership is by exact match on the text of an atom, and so `P(a,b)` and `P(a, b)` are distinct atoms.
*/

use std::collections::HashSet;

use super::valuation::Valuation;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Interpretation {
    true_atoms: HashSet<String>,
}

impl Interpretation {
    /// Adds an atom to the true atoms, returning false if the atom was already true.
    pub fn insert(&mut self, atom: impl Into<String>) -> bool {
        self.true_atoms.insert(atom.into())
    }

    pub fn contains(&self, atom: &str) -> bool {
        self.true_atoms.contains(atom)
    }

    /// A count of the true atoms.
    pub fn len(&self) -> usize {
        self.true_atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.true_atoms.is_empty()
    }

    /// The true atoms, in no particular order.
    pub fn true_atoms(&self) -> impl Iterator<Item = &str> {
        self.true_atoms.iter().map(|atom| atom.as_str())
    }
}

impl<S: Into<String>> FromIterator<S> for Interpretation {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Interpretation {
            true_atoms: iter.into_iter().map(|atom| atom.into()).collect(),
        }
    }
}

impl Valuation for Interpretation {
    fn value_of(&self, atom: &str) -> bool {
        self.contains(atom)
    }
}
