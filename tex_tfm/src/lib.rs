/*! Decoding of TeX font metric (`.tfm`) files.

A `.tfm` file is a big-endian sequence of 32-bit words: twelve 16-bit counts, an optional
header, one [`CharInfo`] word per character and the dimension tables. [`decode`] validates
the declared sizes against each other and against the actual length of the stream before
anything is allocated, and returns a [`Diagnostic`] instead of a partially filled record.

The ligature/kerning program, the extensible recipes and the `\fontdimen` parameters are
size-checked but not decoded; see [`TableSizes`].

# Example
```rust
use tex_tfm::{FontMetrics, FixWord};

let mut bytes = vec![0u8;24];
bytes[1] = 6;   // lf: six words, i.e. just the counts
bytes[5] = 1;   // bc = 1, ec = 0: no characters
let font = FontMetrics::from_bytes(&bytes).unwrap();
assert_eq!(font.char_count(),0);
assert_eq!(font.design_size(),FixWord::ZERO);
```
*/
#![forbid(unsafe_code)]

pub mod fixword;
pub mod reader;
pub mod errors;
pub mod metrics;
mod parsing;

#[cfg(any(test,feature="testing"))]
#[doc(hidden)]
pub mod testing;

pub use fixword::FixWord;
pub use errors::{Check, Diagnostic, DiagnosticKind};
pub use metrics::{CharDimensions, CharInfo, FontMetrics, TableSizes};
pub use parsing::decode;
pub use reader::{BinaryReader, ByteReader, Endian, EndOfStream};
