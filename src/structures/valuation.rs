/*!
A (partial) function from atoms to truth values.

The canonical representation of a valuation is an ordered map from atoms to booleans, where an atom without an entry has no value.

```rust
# use dpll_sat::structures::valuation::{CValuation, Valuation};
let mut valuation = CValuation::default();
valuation.insert(2, true);

assert_eq!(valuation.value_of(1), None);
assert_eq!(valuation.value_of(2), Some(true));
```

The trait is also implemented for slices of optional booleans, where the value of atom *a* is found at index *a*.
The zero index is unused, as `0` is not an atom.
This representation is convenient when enumerating every valuation of some small collection of atoms.

```rust
# use dpll_sat::structures::valuation::Valuation;
let valuation = vec![None, Some(false), None];

assert_eq!(valuation.value_of(1), Some(false));
assert_eq!(valuation.value_of(7), None);
```
*/

use std::collections::BTreeMap;

use super::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = BTreeMap<Atom, bool>;

/// A valuation is something which may store some value of an atom.
pub trait Valuation {
    /// The value of an atom under the valuation, if the atom has a value.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// An iterator through all (Atom, Value) pairs where the atom has a value, in ascending atom order.
    fn valued_atoms(&self) -> impl Iterator<Item = (Atom, bool)>;
}

impl Valuation for CValuation {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(&atom).copied()
    }

    fn valued_atoms(&self) -> impl Iterator<Item = (Atom, bool)> {
        self.iter().map(|(atom, value)| (*atom, *value))
    }
}

impl Valuation for [Option<bool>] {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied().flatten()
    }

    fn valued_atoms(&self) -> impl Iterator<Item = (Atom, bool)> {
        self.iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, value)| value.map(|v| (atom as Atom, v)))
    }
}

impl Valuation for Vec<Option<bool>> {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.as_slice().value_of(atom)
    }

    fn valued_atoms(&self) -> impl Iterator<Item = (Atom, bool)> {
        self.as_slice().valued_atoms()
    }
}
