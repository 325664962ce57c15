use std::ops::{Index, IndexMut};

use indextree::{Arena, NodeId};
use log::trace;

use crate::Pair;

/// Handle to a [`Pair`] stored in a [`PairArena`].
///
/// Handles don't own the pair; the arena does. A handle is only meaningful
/// for the arena that issued it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct PairId(NodeId);

/// Owns the pairs built during a parse.
///
/// `list` and `next` links between pairs are [`PairId`] handles into the
/// arena, so chains can be built, shared and relinked freely. Pairs are
/// dropped together with the arena.
///
/// Chains are not checked for cycles: traversing a cyclic chain doesn't
/// terminate.
#[derive(Debug, Default)]
pub struct PairArena {
    arena: Arena<Pair>,
}

impl PairArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    /// Store a pair and return its handle.
    pub fn add(&mut self, pair: Pair) -> PairId {
        PairId(self.arena.new_node(pair))
    }

    pub fn get(&self, id: PairId) -> Option<&Pair> {
        self.arena.get(id.0).map(|node| node.get())
    }

    pub fn get_mut(&mut self, id: PairId) -> Option<&mut Pair> {
        self.arena.get_mut(id.0).map(|node| node.get_mut())
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Make `id` the head of the chain starting at `head`.
    ///
    /// Returns the new head, which is `id`. This is how binding stacks are
    /// pushed: later bindings shadow earlier ones in [`PairArena::find_prefix`].
    pub fn push(&mut self, head: Option<PairId>, id: PairId) -> PairId {
        trace!("push {:?} onto {:?}", id, head);
        self[id].next = head;
        id
    }

    /// Set or clear the next link of a pair.
    pub fn set_next(&mut self, id: PairId, next: Option<PairId>) {
        trace!("next of {:?} -> {:?}", id, next);
        self[id].next = next;
    }

    /// Set or clear the list link of a pair.
    pub fn set_list(&mut self, id: PairId, list: Option<PairId>) {
        trace!("list of {:?} -> {:?}", id, list);
        self[id].list = list;
    }

    /// Iterate over the chain starting at `start`, following `next` links.
    pub fn chain(&self, start: Option<PairId>) -> Chain<'_> {
        Chain {
            arena: self,
            current: start,
        }
    }

    /// Iterate over the chain the `list` link of `id` points to.
    pub fn list(&self, id: PairId) -> Chain<'_> {
        self.chain(self[id].list)
    }

    /// Find the first pair in a chain with exactly this packed name.
    pub fn find_name(&self, start: Option<PairId>, qname: &[char]) -> Option<PairId> {
        self.chain(start).find(|id| self[*id].eqname(qname))
    }

    /// Find the first pair in a chain with the prefix of this packed name.
    pub fn find_prefix(&self, start: Option<PairId>, qname: &[char]) -> Option<PairId> {
        self.chain(start).find(|id| self[*id].eqpref(qname))
    }
}

impl Index<PairId> for PairArena {
    type Output = Pair;

    fn index(&self, id: PairId) -> &Pair {
        self.arena[id.0].get()
    }
}

impl IndexMut<PairId> for PairArena {
    fn index_mut(&mut self, id: PairId) -> &mut Pair {
        self.arena[id.0].get_mut()
    }
}

/// Iterator over a chain of pairs, see [`PairArena::chain`].
pub struct Chain<'a> {
    arena: &'a PairArena,
    current: Option<PairId>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = PairId;

    fn next(&mut self) -> Option<PairId> {
        let id = self.current?;
        self.current = self.arena[id].next;
        Some(id)
    }
}
