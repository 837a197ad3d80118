/*!
A search for a minimal witness to the satisfiability of a formula.

# Overview

Given a formula with *n* distinct atoms, the search:
1. Builds an [assignment](Assignment) over the atoms of the formula, in order of first occurrence.
2. Evaluates the formula on each assignment 0, 1, …, 2^*n* - 1 in turn.
3. Keeps the first satisfying assignment with the fewest true atoms.

As assignments are examined in increasing order, of the satisfying assignments with the fewest true atoms the one kept is that with the lowest bitmask.
For example, given `[ P(a) or P(b) ]` the witness is `P(a)`, as `P(a)` is discovered first and so corresponds to the lowest bit.

```rust
# use prop_witness::parse::parse_formula;
# use prop_witness::procedures::witness::find_minimal_witness;
# use prop_witness::structures::assignment::ATOM_LIMIT_MAX;
let formula = parse_formula("[ P(a) or P(b) ]").unwrap();
let witness = find_minimal_witness(&formula, ATOM_LIMIT_MAX).unwrap();
assert_eq!(witness.unwrap().atoms(), &["P(a)"]);

let formula = parse_formula("[ P(a) and not P(a) ]").unwrap();
assert_eq!(find_minimal_witness(&formula, ATOM_LIMIT_MAX), Ok(None));
```

# Scaling

The search is brute force, and examines up to 2^*n* assignments.
So, the search is only suitable for formulas with few distinct atoms, and formulas with more than a given limit of distinct atoms are rejected rather than searched.

Still, as no assignment has fewer true atoms than the assignment 0, if the assignment 0 satisfies a formula the search stops immediately.
*/

use crate::{
    misc::log::targets::{self},
    procedures::evaluate::evaluate_with_assignment,
    structures::{
        assignment::{Assignment, Truth, ATOM_LIMIT_MAX},
        formula::Formula,
        witness::Witness,
    },
    types::err::{self},
};

/// The satisfying bitmask of `assignment` with fewest true atoms for `formula`, lowest first, if any.
///
/// The truth of the assignment is left at the last bitmask examined.
/// Fails, without examining any bitmask, if the assignment has more than [ATOM_LIMIT_MAX] atoms.
///
/// # Panics
/// If the assignment was not built from `formula`.
pub fn minimal_truth(
    formula: &Formula,
    assignment: &mut Assignment,
) -> Result<Option<Truth>, err::WitnessError> {
    let atoms = assignment.atom_count();
    if atoms > ATOM_LIMIT_MAX {
        return Err(err::WitnessError::AtomCapacityExceeded {
            atoms,
            limit: ATOM_LIMIT_MAX,
        });
    }
    let bound: Truth = 1 << atoms;

    let mut minimal: Option<(u32, Truth)> = None;

    for truth in 0..bound {
        assignment.set_truth(truth);
        if !evaluate_with_assignment(formula, assignment) {
            continue;
        }

        let weight = assignment.weight();
        match minimal {
            Some((minimal_weight, _)) if minimal_weight <= weight => {}
            _ => {
                log::trace!(target: targets::WITNESS, "Witness {truth:b} of weight {weight}");
                minimal = Some((weight, truth));
            }
        }

        if weight == 0 {
            break;
        }
    }

    Ok(minimal.map(|(_, truth)| truth))
}

/// A satisfying assignment to the atoms of `formula` with the fewest true atoms, if any.
///
/// Fails if the count of distinct atoms in the formula exceeds `atom_limit`, or [ATOM_LIMIT_MAX] if lower.
pub fn find_minimal_witness(
    formula: &Formula,
    atom_limit: usize,
) -> Result<Option<Witness>, err::WitnessError> {
    let limit = atom_limit.min(ATOM_LIMIT_MAX);

    let mut assignment = Assignment::from_formula(formula);
    let atoms = assignment.atom_count();

    if atoms > limit {
        log::info!(target: targets::WITNESS, "{atoms} atoms exceeds the limit of {limit}");
        return Err(err::WitnessError::AtomCapacityExceeded { atoms, limit });
    }

    log::info!(target: targets::WITNESS, "Searching {} assignments to {atoms} atoms", (1 as Truth) << atoms);

    let witness = minimal_truth(formula, &mut assignment)?.map(|truth| {
        let atoms = assignment
            .true_atoms_of(truth)
            .map(|atom| atom.to_owned())
            .collect();
        Witness::new(atoms, truth)
    });

    match &witness {
        Some(witness) => log::info!(target: targets::WITNESS, "Witness of weight {}", witness.weight()),
        None => log::info!(target: targets::WITNESS, "No witness"),
    }

    Ok(witness)
}

/// Whether some assignment to the atoms of `formula` satisfies the formula.
pub fn is_satisfiable(formula: &Formula, atom_limit: usize) -> Result<bool, err::WitnessError> {
    Ok(find_minimal_witness(formula, atom_limit)?.is_some())
}
