/*!
Evaluation of a formula on a [valuation](Valuation).

The value of a formula follows the usual two-valued semantics:

| Formula         | Value                          |
|-----------------|--------------------------------|
| atom            | the value of the atom          |
| `not A`         | `!a`                           |
| `[ A and B ]`   | `a && b`                       |
| `[ A or B ]`    | `a \|\| b`                     |
| `[ A implies B ]` | `!(a && !b)`                 |
| `[ A iff B ]`   | `(a && b) \|\| (!a && !b)`     |

Evaluation has no side effects, and so both subformulas of a binary connective are evaluated.

```rust
# use prop_witness::parse::parse_formula;
# use prop_witness::procedures::evaluate::evaluate;
# use prop_witness::structures::interpretation::Interpretation;
let formula = parse_formula("[ P(a) implies Q(a) ]").unwrap();

let interpretation = Interpretation::from_iter(["P(a)"]);
assert!(!evaluate(&formula, &interpretation));

let interpretation = Interpretation::from_iter(["P(a)", "Q(a)"]);
assert!(evaluate(&formula, &interpretation));
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        assignment::Assignment, formula::Formula, interpretation::Interpretation,
        valuation::Valuation,
    },
};

/// The value of `formula` on `valuation`.
///
/// A binary negation, which is not well-formed, takes the negated value of its left subformula.
pub fn evaluate_on(formula: &Formula, valuation: &impl Valuation) -> bool {
    match formula {
        Formula::Atom(text) => valuation.value_of(text),

        Formula::Not(sub) => !evaluate_on(sub, valuation),

        Formula::Binary(connective, left, right) => {
            let left_value = evaluate_on(left, valuation);
            let right_value = evaluate_on(right, valuation);
            connective.apply(left_value, right_value)
        }
    }
}

/// The value of `formula` in `interpretation`, where an atom is true only if the atom is a member of the interpretation.
pub fn evaluate(formula: &Formula, interpretation: &Interpretation) -> bool {
    let value = evaluate_on(formula, interpretation);
    log::trace!(target: targets::EVALUATION, "{formula} is {value} on {} true atoms", interpretation.len());
    value
}

/// The value of `formula` on `assignment`.
///
/// # Panics
/// If the assignment was not built from some formula containing each atom of `formula`.
pub fn evaluate_with_assignment(formula: &Formula, assignment: &Assignment) -> bool {
    evaluate_on(formula, assignment)
}
