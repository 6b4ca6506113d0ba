/*! Dimensions in scaled points. */

use std::fmt::{Debug, Display, Formatter};
use tex_tfm::FixWord;

/// A dimension in scaled points: `1pt = 65536sp`.
#[derive(Copy,Clone,PartialEq,Eq,PartialOrd,Ord,Hash,Default)]
pub struct Scaled(pub i32);

/// Units a [`Scaled`] can be given in, as a ratio to points.
#[derive(Copy,Clone,PartialEq,Eq,Debug)]
pub enum Unit {
    Pt,
    /// `1in = 72.27pt`
    In,
    /// `1pc = 12pt`
    Pc,
    /// `1bp = 1/72in`
    Bp
}
impl Unit {
    /// `(numerator,denominator)` converting to points.
    pub const fn ratio(self) -> (i64,i64) {
        match self {
            Unit::Pt => (1,1),
            Unit::In => (7227,100),
            Unit::Pc => (12,1),
            Unit::Bp => (7227,7200)
        }
    }
}

impl Scaled {
    pub const ZERO: Scaled = Scaled(0);
    pub const UNITY: Scaled = Scaled(1 << 16);
    /// The largest dimension TeX allows, `16383.99998pt`.
    pub const MAX: Scaled = Scaled(0x3FFF_FFFF);

    pub const fn from_pt(pt:i32) -> Self { Scaled(pt << 16) }

    /// `sp` is the quantity in `unit` with 16 fractional bits, e.g. `6.5in` is
    /// `from_unit(0x68000,Unit::In)`.
    pub fn from_unit(sp:i32,unit:Unit) -> Self {
        let (n,d) = unit.ratio();
        Scaled((sp as i64 * n / d) as i32)
    }

    /// Scales a design-size-relative [`FixWord`] by this size, as TeX does for character dimensions.
    pub fn scale(self,fw:FixWord) -> Scaled {
        Scaled(((self.0 as i64 * fw.raw() as i64) >> 20) as i32)
    }

    /// Saturates at [`MAX`](Self::MAX) in either direction.
    pub fn clamped(sp:i64) -> Self {
        Scaled(sp.clamp(-(Self::MAX.0 as i64),Self::MAX.0 as i64) as i32)
    }

    pub fn to_pt(self) -> f64 { self.0 as f64 / 65536.0 }
}

impl Display for Scaled {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f,"{}pt",self.to_pt())
    }
}
impl Debug for Scaled {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f,"{}sp",self.0)
    }
}
