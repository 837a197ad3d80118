/*!
A function from atoms to truth values.

Both an [interpretation](super::interpretation::Interpretation) and an [assignment](super::assignment::Assignment) are valuations, and [evaluation](crate::procedures::evaluate) of a formula is generic over any valuation.

An interpretation is total, as any atom without some explicit value is false.
An assignment is only defined on the atoms it was built from, and asking for the value of any other atom is a mistake.
*/

/// A valuation is something which can provide the value of an atom.
pub trait Valuation {
    /// The value of `atom` under the valuation.
    fn value_of(&self, atom: &str) -> bool;
}
