/*!
Declarations of the predicates and constants which may be used to write atoms.

A symbol table preserves the order in which symbols were declared, and supports lookup by name.

```rust
# use prop_witness::structures::symbols::{Predicate, SymbolTable};
let mut symbols = SymbolTable::default();
symbols.add_constant("a");
symbols.add_predicate(Predicate::new("Likes", 2));

assert_eq!(symbols.find_predicate("Likes"), Some(2));
assert!(symbols.is_declared_constant("a"));
assert!(!symbols.is_declared_constant("b"));
```
*/

use std::collections::{HashMap, HashSet};

/// A predicate, given by a name and the count of arguments the predicate requires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Predicate {
    pub name: String,
    pub arity: usize,
}

impl Predicate {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Predicate {
            name: name.into(),
            arity,
        }
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    constants: Vec<String>,
    constant_set: HashSet<String>,

    predicates: Vec<Predicate>,
    /// A map from the name of a predicate to its index in `predicates`.
    predicate_map: HashMap<String, usize>,
}

impl SymbolTable {
    /// Declares a constant, returning false if the constant was already declared.
    pub fn add_constant(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        match self.constant_set.insert(name.clone()) {
            true => {
                self.constants.push(name);
                true
            }
            false => false,
        }
    }

    /// Declares a predicate, returning false if some predicate with the same name was already declared.
    ///
    /// Names of predicates are unique, and so on a repeated name the earlier declaration is kept.
    pub fn add_predicate(&mut self, predicate: Predicate) -> bool {
        if self.predicate_map.contains_key(&predicate.name) {
            return false;
        }
        self.predicate_map
            .insert(predicate.name.clone(), self.predicates.len());
        self.predicates.push(predicate);
        true
    }

    /// The arity of the predicate `name`, if declared.
    pub fn find_predicate(&self, name: &str) -> Option<usize> {
        self.predicate_map
            .get(name)
            .map(|index| self.predicates[*index].arity)
    }

    pub fn is_declared_constant(&self, name: &str) -> bool {
        self.constant_set.contains(name)
    }

    /// The declared constants, in order of declaration.
    pub fn constants(&self) -> &[String] {
        &self.constants
    }

    /// The declared predicates, in order of declaration.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }
}
