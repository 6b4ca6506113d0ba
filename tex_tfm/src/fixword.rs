/*! The fixed-point numbers used throughout `.tfm` files. */

use std::fmt::{Debug, Display, Formatter};

const FRACTION_BITS: u32 = 20;
const ONE: i64 = 1 << FRACTION_BITS;
const FRACTION_MASK: u64 = (1 << FRACTION_BITS) - 1;
/// Number of decimal places [`Display`] produces; `2^-20` has exactly 20 of them.
const DECIMAL_DIGITS: usize = 20;

/** A signed 32-bit fixed-point number with 20 fractional bits, i.e. `raw / 2^20`.

Design sizes and all character dimensions of a font are stored this way. The [`Display`]
implementation renders the exact decimal value with 20 places:

```rust
use tex_tfm::FixWord;
assert_eq!(FixWord::ZERO.to_string(),"0.00000000000000000000");
assert_eq!(FixWord::from_raw(-(1 << 20)).to_string(),"-1.00000000000000000000");
assert_eq!(FixWord::from_raw(1 << 19).to_string(),"0.50000000000000000000");
```
*/
#[derive(Copy,Clone,PartialEq,Eq,PartialOrd,Ord,Hash,Default)]
pub struct FixWord(i32);

impl FixWord {
    pub const ZERO: FixWord = FixWord(0);
    pub const UNITY: FixWord = FixWord(1 << FRACTION_BITS);

    #[inline(always)]
    pub const fn from_raw(raw:i32) -> Self { FixWord(raw) }
    /// Reinterprets a big-endian word as read from the file.
    #[inline(always)]
    pub const fn from_word(word:u32) -> Self { FixWord(word as i32) }
    #[inline(always)]
    pub const fn raw(self) -> i32 { self.0 }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / ONE as f64
    }

    /// Converts to TeX's scaled points (16 fractional bits), truncating towards negative infinity.
    pub const fn to_scaled(self) -> i32 {
        self.0 >> (FRACTION_BITS - 16)
    }
}

impl Display for FixWord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let raw = self.0 as i64;
        if raw < 0 { f.write_str("-")?; }
        let abs = raw.unsigned_abs();
        write!(f,"{}.",abs >> FRACTION_BITS)?;
        let mut rest = abs & FRACTION_MASK;
        for _ in 0..DECIMAL_DIGITS {
            rest *= 10;
            let digit = rest >> FRACTION_BITS;
            rest -= digit << FRACTION_BITS;
            write!(f,"{}",digit)?;
        }
        Ok(())
    }
}
impl Debug for FixWord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f,"FixWord({})",self)
    }
}
