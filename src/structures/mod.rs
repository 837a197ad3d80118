/*!
Structures used to represent formulas, the vocabulary they are written in, and the ways of assigning them truth values.

- A [formula](formula) is a tree whose leaves are atoms.
- A [symbol table](symbols) declares which predicates and constants may be used to write an atom.
- An [interpretation](interpretation) and an [assignment](assignment) are each a [valuation](valuation), a way of giving atoms truth values.
- A [witness](witness) is the result of a successful search for a satisfying assignment.
*/

pub mod assignment;
pub mod formula;
pub mod interpretation;
pub mod symbols;
pub mod valuation;
pub mod witness;
