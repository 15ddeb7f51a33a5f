//! Parent-scoped identifier allocation.
//!
//! # Responsibility
//! - Allocate integer ids that are unique among siblings of one parent.
//! - Provide id lookups over ordered sibling collections.
//!
//! # Invariants
//! - Ids are positive; `0` is never allocated.
//! - Allocation returns the smallest positive id not used by any sibling,
//!   so a freed id is reused before a new one is minted.

use std::collections::HashSet;

/// Integer identifier scoped to the immediate parent collection.
///
/// Journey ids are scoped to the whole load-set instead.
pub type EntityId = u32;

/// Entity addressable by a parent-scoped id.
///
/// Identity is `id()` within the parent; `==` on entities is structural
/// and compares every field.
pub trait Identified {
    /// Returns the id of this entity within its parent scope.
    fn id(&self) -> EntityId;
}

/// Returns the smallest positive id not present in `used`.
///
/// Input order and duplicates do not matter.
pub fn next_free_id<I>(used: I) -> EntityId
where
    I: IntoIterator<Item = EntityId>,
{
    let mut taken: Vec<EntityId> = used.into_iter().filter(|id| *id > 0).collect();
    taken.sort_unstable();
    taken.dedup();

    let mut candidate: EntityId = 1;
    for id in taken {
        if id != candidate {
            break;
        }
        candidate += 1;
    }
    candidate
}

/// Allocates the next id for a new sibling of `siblings`.
pub fn allocate_id<T: Identified>(siblings: &[T]) -> EntityId {
    next_free_id(siblings.iter().map(Identified::id))
}

/// Finds one sibling by id.
pub fn find_by_id<T: Identified>(siblings: &[T], id: EntityId) -> Option<&T> {
    siblings.iter().find(|item| item.id() == id)
}

/// Finds one sibling by id for mutation.
pub fn find_by_id_mut<T: Identified>(siblings: &mut [T], id: EntityId) -> Option<&mut T> {
    siblings.iter_mut().find(|item| item.id() == id)
}

/// Two siblings of one parent share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateSiblingId {
    /// Kind of the colliding siblings (`"country"`, `"activity"`, ...).
    pub scope: &'static str,
    pub id: EntityId,
}

/// Verifies that no two siblings share an id.
pub(crate) fn ensure_unique_ids<T: Identified>(
    scope: &'static str,
    siblings: &[T],
) -> Result<(), DuplicateSiblingId> {
    let mut seen = HashSet::new();
    match siblings
        .iter()
        .map(Identified::id)
        .find(|id| !seen.insert(*id))
    {
        Some(id) => Err(DuplicateSiblingId { scope, id }),
        None => Ok(()),
    }
}
