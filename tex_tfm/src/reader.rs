/*! A minimal random-access reader for binary files.

    [`decode`](crate::decode) only relies on the [`BinaryReader`] trait; [`ByteReader`] implements it
    for anything that can be viewed as a byte slice.
*/

use std::path::Path;

/// Byte order used by the fixed-width reads of a [`BinaryReader`].
#[derive(Copy,Clone,PartialEq,Eq,Debug,Default)]
pub enum Endian {
    #[default]
    Big,
    Little
}

/// A read or seek went past the end of the stream.
#[derive(Copy,Clone,PartialEq,Eq,Debug,thiserror::Error)]
#[error("unexpected end of stream at offset {offset}")]
pub struct EndOfStream {
    /// The offset at which the failing operation started.
    pub offset:usize
}

/** Random access to a stream of bytes of known size.

Every read either succeeds completely and advances the offset, or fails with [`EndOfStream`]
and leaves the offset where it was.
*/
pub trait BinaryReader {
    fn endian(&self) -> Endian;
    fn set_endian(&mut self,endian:Endian);
    /// Total size of the stream in bytes.
    fn size(&self) -> usize;
    /// Current position in bytes from the start of the stream.
    fn offset(&self) -> usize;
    /// Moves to an absolute position; seeking to exactly [`size`](Self::size) is allowed.
    fn seek(&mut self,offset:usize) -> Result<(),EndOfStream>;
    /// Fills `buf` completely.
    fn read_bytes(&mut self,buf:&mut [u8]) -> Result<(),EndOfStream>;

    fn read_u8(&mut self) -> Result<u8,EndOfStream> {
        let mut b = [0u8;1];
        self.read_bytes(&mut b)?;
        Ok(b[0])
    }
    fn read_u16(&mut self) -> Result<u16,EndOfStream> {
        let mut b = [0u8;2];
        self.read_bytes(&mut b)?;
        Ok(match self.endian() {
            Endian::Big => u16::from_be_bytes(b),
            Endian::Little => u16::from_le_bytes(b)
        })
    }
    fn read_u32(&mut self) -> Result<u32,EndOfStream> {
        let mut b = [0u8;4];
        self.read_bytes(&mut b)?;
        Ok(match self.endian() {
            Endian::Big => u32::from_be_bytes(b),
            Endian::Little => u32::from_le_bytes(b)
        })
    }
}

/// A [`BinaryReader`] over an in-memory buffer.
#[derive(Clone,Debug)]
pub struct ByteReader<B:AsRef<[u8]>> {
    data:B,
    pos:usize,
    endian:Endian
}
impl<B:AsRef<[u8]>> ByteReader<B> {
    /// A big-endian reader positioned at the start of `data`.
    pub fn new(data:B) -> Self {
        ByteReader { data, pos:0, endian:Endian::Big }
    }
    pub fn into_inner(self) -> B { self.data }
}
impl ByteReader<Vec<u8>> {
    /// Reads the whole file into memory.
    pub fn open<P:AsRef<Path>>(path:P) -> std::io::Result<Self> {
        Ok(Self::new(std::fs::read(path)?))
    }
}

impl<B:AsRef<[u8]>> BinaryReader for ByteReader<B> {
    #[inline(always)]
    fn endian(&self) -> Endian { self.endian }
    #[inline(always)]
    fn set_endian(&mut self, endian: Endian) { self.endian = endian }
    #[inline(always)]
    fn size(&self) -> usize { self.data.as_ref().len() }
    #[inline(always)]
    fn offset(&self) -> usize { self.pos }
    fn seek(&mut self, offset: usize) -> Result<(), EndOfStream> {
        if offset > self.size() {
            return Err(EndOfStream { offset })
        }
        self.pos = offset;
        Ok(())
    }
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), EndOfStream> {
        let end = self.pos + buf.len();
        match self.data.as_ref().get(self.pos..end) {
            Some(src) => {
                buf.copy_from_slice(src);
                self.pos = end;
                Ok(())
            }
            None => Err(EndOfStream { offset:self.pos })
        }
    }
}
