/*! Utility types.*/

use std::rc::Rc;

pub mod errors;

/// A [`HashMap`](std::collections::HashMap) with [`rustc_hash::FxHasher`] as hasher.
pub type HMap<A,B> = rustc_hash::FxHashMap<A,B>;
/// The reference counting pointer type used throughout the kernel.
pub type Ptr<A> = Rc<A>;
