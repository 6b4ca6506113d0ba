/*! An opaque 32-bit value. */

/** A 32-bit word whose meaning is owned by whoever stores it: a font index in a command
sequence, a space factor in a [`Frame`](crate::engine::state::render::Frame)'s `aux`, etc.
*/
#[derive(Copy,Clone,PartialEq,Eq,Hash,Debug,Default)]
pub struct Word(pub u32);

impl Word {
    pub const ZERO: Word = Word(0);

    #[inline(always)]
    pub const fn from_i32(i:i32) -> Self { Word(i as u32) }
    #[inline(always)]
    pub const fn as_i32(self) -> i32 { self.0 as i32 }
    #[inline(always)]
    pub const fn as_u32(self) -> u32 { self.0 }
    #[inline(always)]
    pub const fn as_usize(self) -> usize { self.0 as usize }
}

impl From<u32> for Word {
    fn from(value: u32) -> Self { Word(value) }
}
impl From<i32> for Word {
    fn from(value: i32) -> Self { Word::from_i32(value) }
}
