/*!
A witness to the satisfiability of a formula.

A witness is reported as the atoms which must be true, with any other atom of the formula false.
Atoms are in order of discovery, and the [Display] of a witness writes one atom per line, which is the format of a witness file.
*/

use super::assignment::Truth;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Witness {
    atoms: Vec<String>,
    truth: Truth,
}

impl Witness {
    pub fn new(atoms: Vec<String>, truth: Truth) -> Self {
        Witness { atoms, truth }
    }

    /// The true atoms of the witness, in order of discovery.
    pub fn atoms(&self) -> &[String] {
        &self.atoms
    }

    /// The bitmask of the witness, with respect to the assignment the witness was found with.
    pub fn truth(&self) -> Truth {
        self.truth
    }

    /// A count of the true atoms of the witness.
    pub fn weight(&self) -> usize {
        self.atoms.len()
    }

    pub fn into_atoms(self) -> Vec<String> {
        self.atoms
    }
}

impl std::fmt::Display for Witness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for atom in &self.atoms {
            writeln!(f, "{atom}")?;
        }
        Ok(())
    }
}
