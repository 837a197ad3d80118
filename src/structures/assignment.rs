/*!
Assignments of truth values to the atoms of a formula, for use when searching for a witness.

An assignment is built from a formula, and pairs:
- The distinct atoms of the formula, in order of first occurrence in a depth-first, left-to-right, traversal.
- A [Truth] bitmask, where bit *i* is the value of the *i*th atom.

```rust
# use prop_witness::structures::assignment::Assignment;
# use prop_witness::structures::formula::{Connective, Formula};
# use prop_witness::structures::valuation::Valuation;
let formula = Formula::binary(
    Connective::Or,
    Formula::atom("q"),
    Formula::binary(Connective::And, Formula::atom("p"), Formula::atom("q")),
);

let mut assignment = Assignment::from_formula(&formula);
assert_eq!(assignment.atoms(), &["q", "p"]);

assignment.set_truth(0b10);
assert!(assignment.value_of("p"));
assert!(!assignment.value_of("q"));
assert_eq!(assignment.true_atoms().collect::<Vec<_>>(), vec!["p"]);
```

# Capacity

As every assignment to *n* atoms is enumerated by counting from 0 to 2^*n*, the count of atoms is bounded by [ATOM_LIMIT_MAX], so that 2^*n* is a [Truth].
Checks on the count of atoms are made by the [search](crate::procedures::witness), rather than on construction of an assignment.
*/

use std::collections::HashMap;

use super::{formula::Formula, valuation::Valuation};

/// The representation of an assignment of truth values, as a bitmask.
pub type Truth = u64;

/// The maximum count of atoms an assignment may be searched over.
pub const ATOM_LIMIT_MAX: usize = Truth::BITS as usize - 1;

#[derive(Clone, Debug)]
pub struct Assignment<'f> {
    atoms: Vec<&'f str>,

    /// A map from an atom to its index in `atoms`.
    indices: HashMap<&'f str, usize>,

    truth: Truth,
}

impl<'f> Assignment<'f> {
    /// An assignment over the distinct atoms of `formula`, with each atom false.
    pub fn from_formula(formula: &'f Formula) -> Self {
        let mut atoms = Vec::default();
        let mut indices = HashMap::default();

        for atom in formula.atoms() {
            if !indices.contains_key(atom) {
                indices.insert(atom, atoms.len());
                atoms.push(atom);
            }
        }

        Assignment {
            atoms,
            indices,
            truth: 0,
        }
    }

    /// The atoms of the assignment, in order of discovery.
    pub fn atoms(&self) -> &[&'f str] {
        &self.atoms
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn index_of(&self, atom: &str) -> Option<usize> {
        self.indices.get(atom).copied()
    }

    pub fn truth(&self) -> Truth {
        self.truth
    }

    pub fn set_truth(&mut self, truth: Truth) {
        self.truth = truth;
    }

    /// A count of the atoms which are true.
    pub fn weight(&self) -> u32 {
        self.truth.count_ones()
    }

    /// The atoms which are true under the given bitmask, in order of discovery.
    pub fn true_atoms_of(&self, truth: Truth) -> impl Iterator<Item = &'f str> + '_ {
        self.atoms
            .iter()
            .enumerate()
            .filter(move |(index, _)| truth & (1 << *index) != 0)
            .map(|(_, atom)| *atom)
    }

    /// The atoms which are true, in order of discovery.
    pub fn true_atoms(&self) -> impl Iterator<Item = &'f str> + '_ {
        self.true_atoms_of(self.truth)
    }
}

impl Valuation for Assignment<'_> {
    /// The value of `atom` under the assignment.
    ///
    /// # Panics
    /// If `atom` is not an atom of the formula the assignment was built from.
    fn value_of(&self, atom: &str) -> bool {
        match self.index_of(atom) {
            Some(index) => self.truth & (1 << index) != 0,
            None => panic!("! Atom '{atom}' is not part of the assignment"),
        }
    }
}
