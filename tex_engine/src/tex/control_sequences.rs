/*! A control sequence is a named command (usually written `\foo`). The kernel only stores
    what a name currently stands for: a [`CategoryCode`] marking its class and an opaque [`Word`]
    payload whose interpretation belongs to the interpreter.

    [`CommandSequenceTable`] is a chained hash table with a capacity fixed at construction;
    it never rehashes, so chains simply grow once the table holds more names than buckets.
*/

use std::hash::{Hash, Hasher};
use log::trace;
use rustc_hash::FxHasher;
use crate::tex::catcodes::CategoryCode;
use crate::tex::word::Word;

/// Number of buckets of a [`CommandSequenceTable`] unless configured otherwise.
pub const CS_TABLE_SIZE: usize = 4098;

/// What a control sequence name currently means.
#[derive(Clone,PartialEq,Eq,Debug)]
pub struct CommandSequence {
    pub name:Box<str>,
    pub code:CategoryCode,
    pub payload:Word
}
impl CommandSequence {
    pub fn new<S:Into<Box<str>>,W:Into<Word>>(name:S,code:CategoryCode,payload:W) -> Self {
        CommandSequence { name:name.into(), code, payload:payload.into() }
    }
}

/// Maps control sequence names to [`CommandSequence`]s. Names are never removed.
#[derive(Clone,Debug)]
pub struct CommandSequenceTable {
    buckets:Vec<Vec<CommandSequence>>,
    entries:usize
}

impl Default for CommandSequenceTable {
    fn default() -> Self { Self::new(CS_TABLE_SIZE) }
}

impl CommandSequenceTable {
    /// A table with `capacity` buckets (at least one).
    pub fn new(capacity:usize) -> Self {
        CommandSequenceTable {
            buckets:vec![Vec::new();capacity.max(1)],
            entries:0
        }
    }

    pub fn capacity(&self) -> usize { self.buckets.len() }

    /// The number of distinct names ever [`set`](Self::set).
    pub fn entries(&self) -> usize { self.entries }

    /// The bucket `name` is chained into.
    pub fn bucket_of(&self,name:&str) -> usize {
        let mut hasher = FxHasher::default();
        name.hash(&mut hasher);
        (hasher.finish() % self.buckets.len() as u64) as usize
    }

    pub fn get(&self,name:&str) -> Option<&CommandSequence> {
        self.buckets[self.bucket_of(name)].iter().find(|cs| &*cs.name == name)
    }

    pub fn get_mut(&mut self,name:&str) -> Option<&mut CommandSequence> {
        let bucket = self.bucket_of(name);
        self.buckets[bucket].iter_mut().find(|cs| &*cs.name == name)
    }

    /// Stores `cs` under its name. An existing entry for that name is updated in place;
    /// otherwise `cs` is put at the front of its bucket's chain.
    pub fn set(&mut self,cs:CommandSequence) {
        let bucket = self.bucket_of(&cs.name);
        let chain = &mut self.buckets[bucket];
        match chain.iter_mut().find(|old| old.name == cs.name) {
            Some(old) => {
                trace!("Redefining \\{} as {} {:?}",cs.name,cs.code,cs.payload);
                old.code = cs.code;
                old.payload = cs.payload;
            }
            None => {
                trace!("Defining \\{} as {} {:?} (bucket {})",cs.name,cs.code,cs.payload,bucket);
                chain.insert(0,cs);
                self.entries += 1;
            }
        }
    }

    /// All stored command sequences, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item=&CommandSequence> {
        self.buckets.iter().flatten()
    }
}
