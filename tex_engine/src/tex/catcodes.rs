/*!
    Category codes for characters, implemented as the enum [`CategoryCode`]. A [`CategoryCodeTable`]
    maps each of the first 128 code points to a [`CategoryCode`]; every code point beyond that
    is [`Invalid`](CategoryCode::Invalid).
*/

use std::fmt::Formatter;
use lazy_static::lazy_static;

/** The category code of a character, or the class a command sequence is marked with.

The first sixteen are the classic TeX category codes; [`ParEnd`](CategoryCode::ParEnd),
[`Stop`](CategoryCode::Stop) and [`SetFont`](CategoryCode::SetFont) never occur in a
[`CategoryCodeTable`] but mark the command sequences `\par`, `\end` and font selectors.

To convert between [`CategoryCode`]s and their numerical values (as [`u8`]), use [`CategoryCode::try_from`]
and [`CategoryCode::into`], respectively.

# Example
```rust
use tex_engine::tex::catcodes::CategoryCode;

let cat = CategoryCode::BeginGroup;
let num : u8 = cat.into();
assert_eq!(num,1);
let cat2 = CategoryCode::try_from(1).unwrap();
assert_eq!(cat2,cat);
```
 */
#[derive(Copy,PartialEq,Eq,Hash,Clone,Default)]
pub enum CategoryCode {
    /// Escape character (0); usually `\`
    Escape,
    /// Begin group character (1); usually `{`
    BeginGroup,
    /// End group character (2); usually `}`
    EndGroup,
    /// Math shift character (3); usually `$`
    MathShift,
    /// Alignment tab character (4); usually `&`
    AlignmentTab,
    /// End of line character (5); `\r` and `\n`
    CarriageReturn,
    /// Parameter character (6); usually `#`
    Parameter,
    /// Superscript character (7); usually `^`
    Superscript,
    /// Subscript character (8); usually `_`
    Subscript,
    /// Ignored character (9); usually `NUL`
    Ignore,
    /// Space character (10); usually ` `
    Spacer,
    /// Letter character (11), usually a-z and A-Z
    Letter,
    /// Other character (12), usually e.g. `@`, `!`, `?`, etc.
    #[default]
    Other,
    /// Active character (13); usually `~`
    Active,
    /// Comment character (14); usually `%`
    Comment,
    /// Invalid character (15); usually `DEL`
    Invalid,
    /// Marks `\par`
    ParEnd,
    /// Marks `\end`
    Stop,
    /// Marks a command sequence selecting a font
    SetFont
}

impl std::fmt::Debug for CategoryCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self,f)
    }
}
impl std::fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use CategoryCode::*;
        write!(f,"{}",match self {
            Escape => "Escape",
            BeginGroup => "BeginGroup",
            EndGroup => "EndGroup",
            MathShift => "MathShift",
            AlignmentTab => "AlignmentTab",
            CarriageReturn => "CarriageReturn",
            Parameter => "Parameter",
            Superscript => "Superscript",
            Subscript => "Subscript",
            Ignore => "Ignore",
            Spacer => "Spacer",
            Letter => "Letter",
            Other => "Other",
            Active => "Active",
            Comment => "Comment",
            Invalid => "Invalid",
            ParEnd => "ParEnd",
            Stop => "Stop",
            SetFont => "SetFont"
        })
    }
}

impl From<CategoryCode> for u8 {
    fn from(cc: CategoryCode) -> u8 {
        use CategoryCode::*;
        match cc {
            Escape => 0,
            BeginGroup => 1,
            EndGroup => 2,
            MathShift => 3,
            AlignmentTab => 4,
            CarriageReturn => 5,
            Parameter => 6,
            Superscript => 7,
            Subscript => 8,
            Ignore => 9,
            Spacer => 10,
            Letter => 11,
            Other => 12,
            Active => 13,
            Comment => 14,
            Invalid => 15,
            ParEnd => 16,
            Stop => 17,
            SetFont => 18
        }
    }
}

impl TryFrom<u8> for CategoryCode {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use CategoryCode::*;
        Ok(match value {
            0 => Escape,
            1 => BeginGroup,
            2 => EndGroup,
            3 => MathShift,
            4 => AlignmentTab,
            5 => CarriageReturn,
            6 => Parameter,
            7 => Superscript,
            8 => Subscript,
            9 => Ignore,
            10 => Spacer,
            11 => Letter,
            12 => Other,
            13 => Active,
            14 => Comment,
            15 => Invalid,
            16 => ParEnd,
            17 => Stop,
            18 => SetFont,
            _ => return Err(())
        })
    }
}

/// Number of code points with a stored classification.
pub const TABLE_SIZE: usize = 128;

lazy_static! {
    /**
    The classification every [`Kernel`](crate::engine::state::Kernel) starts with.

    All characters have [`CategoryCode::Other`] (12) except for:

    | Character    | Category Code   |
    |--------------|-----------------
    | ` `          | [`Spacer`](CategoryCode::Spacer)|
    | a-z, A-Z     | [`Letter`](CategoryCode::Letter) |
    | `\`          | [`Escape`](CategoryCode::Escape)  |
    | `\r`, `\n`   | [`CarriageReturn`](CategoryCode::CarriageReturn) |
    | `%`          | [`Comment`](CategoryCode::Comment)|
    | `NUL`        | [`Ignore`](CategoryCode::Ignore)|
    | `DEL`        | [`Invalid`](CategoryCode::Invalid)|

    Treating `\n` as end of line deviates from TeX.
    */
    pub static ref STARTING_SCHEME : [CategoryCode;TABLE_SIZE] = {
        let mut catcodes = [CategoryCode::Other;TABLE_SIZE];
        for i in 65..91 { catcodes[i] = CategoryCode::Letter}
        for i in 97..123 { catcodes[i] = CategoryCode::Letter}
        catcodes[0x00] = CategoryCode::Ignore;
        catcodes[0x20] = CategoryCode::Spacer;
        catcodes[0x5C] = CategoryCode::Escape;
        catcodes[0x25] = CategoryCode::Comment;
        catcodes[0x7F] = CategoryCode::Invalid;
        catcodes[0x0A] = CategoryCode::CarriageReturn;
        catcodes[0x0D] = CategoryCode::CarriageReturn;
        catcodes
    };
}

/** Maps code points to [`CategoryCode`]s. Only the first [`TABLE_SIZE`] are stored; all others
are [`Invalid`](CategoryCode::Invalid).

```rust
use tex_engine::tex::catcodes::{CategoryCode, CategoryCodeTable};

let table = CategoryCodeTable::default();
assert_eq!(table.classify('\\'),CategoryCode::Escape);
assert_eq!(table.classify(b'x'),CategoryCode::Letter);
assert_eq!(table.classify('é'),CategoryCode::Invalid);
```
*/
#[derive(Clone,PartialEq,Eq,Debug)]
pub struct CategoryCodeTable([CategoryCode;TABLE_SIZE]);

impl Default for CategoryCodeTable {
    fn default() -> Self { CategoryCodeTable(*STARTING_SCHEME) }
}

impl CategoryCodeTable {
    #[inline(always)]
    pub fn classify<C:Into<u32>>(&self,c:C) -> CategoryCode {
        match self.0.get(c.into() as usize) {
            Some(cc) => *cc,
            None => CategoryCode::Invalid
        }
    }
    /// Changes the class of a code point below [`TABLE_SIZE`]; returns `false` (and changes nothing) otherwise.
    pub fn set<C:Into<u32>>(&mut self,c:C,cc:CategoryCode) -> bool {
        match self.0.get_mut(c.into() as usize) {
            Some(old) => { *old = cc; true }
            None => false
        }
    }
    pub fn as_slice(&self) -> &[CategoryCode] { &self.0 }
}
