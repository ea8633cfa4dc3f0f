//! A log of changes to the clause and assignment databases.
//!
//! Each change is recorded relative to the databases at the time of the change, and so changes are undone in the reverse order of their recording.
//! A position on the trail (its length) is a checkpoint, and rewinding to a checkpoint restores both databases to exactly their state at the checkpoint.
//!
//! Restoration takes time proportional to the size of the changes undone, rather than the size of the formula.

use crate::structures::{atom::Atom, clause::CClause, literal::CLiteral};

/// A change to the clause or assignment database.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Change {
    /// Clauses removed as satisfied, paired with their position prior to removal, in ascending order of position.
    Removed(Vec<(usize, CClause)>),

    /// Every occurrence of `literal` removed from some clauses.
    ///
    /// Each entry pairs the position of a clause with the positions the literal occupied in the clause, in ascending order.
    Stripped {
        literal: CLiteral,
        from: Vec<(usize, Vec<usize>)>,
    },

    /// Clauses reordered, such that the clause at position *i* was previously at position `order[i]`.
    Reordered(Vec<usize>),

    /// An atom was given a value.
    Valued(Atom),
}

/// The trail of changes.
#[derive(Debug, Default)]
pub struct Trail {
    changes: Vec<Change>,
}

impl Trail {
    /// Records a change.
    pub fn push(&mut self, change: Change) {
        self.changes.push(change);
    }

    /// Removes and returns the most recent change, if one exists.
    pub fn pop(&mut self) -> Option<Change> {
        self.changes.pop()
    }

    /// A checkpoint at the current position of the trail.
    pub fn checkpoint(&self) -> usize {
        self.changes.len()
    }

    /// The count of changes on the trail.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
