/*! The lists under construction.

A [`RenderState`] holds the current [`Frame`] (head and tail of the list being built plus
some bookkeeping), the frames of all enclosing groups, and the current [`TeXMode`]. Nodes
live in a [`NodeArena`] owned by the render state; lists are chains of [`NodeId`]s.

Popping a frame hands it back to the caller, which is responsible for doing something with
its list (usually packaging it into a single node and appending that to the enclosing list):

```rust
use tex_engine::engine::state::render::RenderState;

let mut rs = RenderState::<&str>::new();
let outer = rs.alloc("outer");
rs.append(outer);
rs.push();
rs.clear();
let inner = rs.alloc("inner");
rs.append(inner);
let done = rs.pop().unwrap();
assert_eq!(done.head,Some(inner));
assert_eq!(rs.head(),Some(outer));
```
*/

use log::warn;
use crate::engine::state::modes::TeXMode;
use crate::tex::nodes::{ListIter, NodeArena, NodeId};
use crate::tex::word::Word;

/// The state of one list under construction. `head` is `None` iff `tail` is.
#[derive(Copy,Clone,PartialEq,Eq,Debug,Default)]
pub struct Frame {
    pub head:Option<NodeId>,
    pub tail:Option<NodeId>,
    /// Number of lines of the most recent paragraph.
    pub prev_graf:u32,
    /// Interpreter-defined, e.g. `\prevdepth` or `\spacefactor`.
    pub aux:Word
}

#[derive(Clone,Debug)]
pub struct RenderState<N> {
    nodes:NodeArena<N>,
    current:Frame,
    stack:Vec<Frame>,
    mode:TeXMode
}

impl<N> Default for RenderState<N> {
    fn default() -> Self {
        RenderState {
            nodes:NodeArena::new(),
            current:Frame::default(),
            stack:Vec::new(),
            mode:TeXMode::NoMode
        }
    }
}

impl<N> RenderState<N> {
    pub fn new() -> Self { Self::default() }

    pub fn head(&self) -> Option<NodeId> { self.current.head }
    pub fn tail(&self) -> Option<NodeId> { self.current.tail }
    pub fn prev_graf(&self) -> u32 { self.current.prev_graf }
    pub fn aux(&self) -> Word { self.current.aux }

    pub fn set_head(&mut self,head:Option<NodeId>) { self.current.head = head }
    pub fn set_tail(&mut self,tail:Option<NodeId>) { self.current.tail = tail }
    pub fn set_prev_graf(&mut self,prev_graf:u32) { self.current.prev_graf = prev_graf }
    pub fn set_aux(&mut self,aux:Word) { self.current.aux = aux }

    /// A copy of the current frame.
    pub fn frame(&self) -> Frame { self.current }

    /// Starts a fresh list in the current frame, keeping `prev_graf`.
    pub fn clear(&mut self) {
        self.current.head = None;
        self.current.tail = None;
        self.current.aux = Word::ZERO;
    }

    /// Links `node` to the end of the current list. `node` must not already be part of a list.
    pub fn append(&mut self,node:NodeId) {
        debug_assert!(self.nodes.get(node).is_some(),"{:?} is not a node of this render state",node);
        match self.current.tail {
            None => {
                self.current.head = Some(node);
            }
            Some(tail) => {
                let linked = self.nodes.set_successor(tail,Some(node));
                debug_assert!(linked,"tail {:?} is not a node of this render state",tail);
            }
        }
        self.current.tail = Some(node);
    }

    pub fn empty(&self) -> bool { self.current.head.is_none() }

    /// Saves a copy of the current frame; the current frame itself is unchanged.
    pub fn push(&mut self) {
        self.stack.push(self.current);
    }

    /// Restores the innermost saved frame and returns the one it replaces.
    /// Without an enclosing frame nothing changes and `None` is returned.
    pub fn pop(&mut self) -> Option<Frame> {
        match self.stack.pop() {
            Some(saved) => Some(std::mem::replace(&mut self.current,saved)),
            None => {
                warn!("Render state popped without an enclosing frame");
                None
            }
        }
    }

    /// Number of saved frames.
    pub fn depth(&self) -> usize { self.stack.len() }

    pub fn mode(&self) -> TeXMode { self.mode }
    pub fn set_mode(&mut self,mode:TeXMode) { self.mode = mode }

    pub fn alloc(&mut self,node:N) -> NodeId { self.nodes.alloc(node) }
    pub fn node(&self,id:NodeId) -> Option<&N> { self.nodes.get(id) }
    pub fn node_mut(&mut self,id:NodeId) -> Option<&mut N> { self.nodes.get_mut(id) }
    pub fn successor(&self,id:NodeId) -> Option<NodeId> { self.nodes.successor(id) }
    pub fn set_successor(&mut self,id:NodeId,next:Option<NodeId>) -> bool {
        self.nodes.set_successor(id,next)
    }
    /// The nodes of the list starting at `head`.
    pub fn list(&self,head:Option<NodeId>) -> ListIter<'_,N> { self.nodes.list(head) }
    pub fn nodes(&self) -> &NodeArena<N> { &self.nodes }
}
