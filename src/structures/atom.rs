/*!
(The representation of) an atom (aka. a 'variable').

Each atom is a positive u32, and the same integer is used when reading a formula and when reporting a valuation.

```rust
# use dpll_sat::structures::atom::{Atom, ATOM_MAX};
let atom: Atom = 97;
assert!(atom <= ATOM_MAX);
```

# Notes
- `0` is not an atom, as `0` terminates a clause in the DIMACS format.
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Bounded by the positive range of an [IntLiteral](crate::structures::literal::IntLiteral).
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
