/*! Storage for the nodes of node lists.

    Nodes are allocated in a [`NodeArena`] and addressed by [`NodeId`]s; a node list is a chain
    of successor links starting at its head. The payload type `N` (boxes, glue, characters, ...)
    is up to the interpreter.
*/

use std::fmt::{Debug, Formatter};

/// A stable handle to a node in a [`NodeArena`].
#[derive(Copy,Clone,PartialEq,Eq,Hash,PartialOrd,Ord)]
pub struct NodeId(u32);
impl NodeId {
    #[inline(always)]
    pub fn index(self) -> usize { self.0 as usize }
}
impl Debug for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f,"#{}",self.0)
    }
}

#[derive(Clone,Debug)]
struct Slot<N> {
    value:N,
    link:Option<NodeId>
}

/// Append-only node storage. Handles stay valid for the lifetime of the arena.
#[derive(Clone,Debug)]
pub struct NodeArena<N> {
    slots:Vec<Slot<N>>
}
impl<N> Default for NodeArena<N> {
    fn default() -> Self { NodeArena { slots:Vec::new() } }
}

impl<N> NodeArena<N> {
    pub fn new() -> Self { Self::default() }

    /// Stores `value` as an unlinked node.
    pub fn alloc(&mut self,value:N) -> NodeId {
        let id = NodeId(self.slots.len() as u32);
        self.slots.push(Slot { value, link:None });
        id
    }
    pub fn len(&self) -> usize { self.slots.len() }
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }

    pub fn get(&self,id:NodeId) -> Option<&N> {
        self.slots.get(id.index()).map(|s| &s.value)
    }
    pub fn get_mut(&mut self,id:NodeId) -> Option<&mut N> {
        self.slots.get_mut(id.index()).map(|s| &mut s.value)
    }
    /// The node following `id` in its list.
    pub fn successor(&self,id:NodeId) -> Option<NodeId> {
        self.slots.get(id.index()).and_then(|s| s.link)
    }
    /// Relinks `id`; returns `false` if `id` is not a node of this arena.
    pub fn set_successor(&mut self,id:NodeId,next:Option<NodeId>) -> bool {
        match self.slots.get_mut(id.index()) {
            Some(s) => { s.link = next; true }
            None => false
        }
    }

    /// Walks the list starting at `head` along the successor links.
    pub fn list(&self,head:Option<NodeId>) -> ListIter<'_,N> {
        ListIter { arena:self, next:head }
    }
}

/// Iterator over a node list; see [`NodeArena::list`].
pub struct ListIter<'a,N> {
    arena:&'a NodeArena<N>,
    next:Option<NodeId>
}
impl<'a,N> Iterator for ListIter<'a,N> {
    type Item = (NodeId,&'a N);
    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let slot = self.arena.slots.get(id.index())?;
        self.next = slot.link;
        Some((id,&slot.value))
    }
}
