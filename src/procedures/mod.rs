/*!
Procedures on formulas.

- [validate] checks a formula is well-formed with respect to a symbol table.
- [evaluate] determines the value of a formula on some valuation.
- [witness] searches for a minimal satisfying assignment to the atoms of a formula.

Each procedure is pure, and takes any structures required by reference.
*/

pub mod evaluate;
pub mod validate;
pub mod witness;
