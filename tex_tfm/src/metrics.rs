/*! The in-memory representation of a decoded font metric file. */

use std::path::Path;
use crate::errors::Diagnostic;
use crate::fixword::FixWord;
use crate::reader::ByteReader;

/** The packed character information word of one character.

| byte | contents |
|------|----------|
| 0    | width index |
| 1    | height index (high 4 bits), depth index (low 4 bits) |
| 2    | italic correction index (high 6 bits), tag (low 2 bits) |
| 3    | remainder |
*/
#[derive(Copy,Clone,PartialEq,Eq,Debug,Default)]
pub struct CharInfo {
    pub width_index:u8,
    pub height_index:u8,
    pub depth_index:u8,
    pub italic_index:u8,
    /// 0: none, 1: ligature/kern program, 2: next larger character, 3: extensible recipe
    pub tag:u8,
    /// Meaning depends on [`tag`](Self::tag); not interpreted here.
    pub remainder:u8
}
impl CharInfo {
    pub fn from_bytes([width,height_depth,italic_tag,remainder]:[u8;4]) -> Self {
        CharInfo {
            width_index:width,
            height_index:height_depth >> 4,
            depth_index:height_depth & 0x0F,
            italic_index:italic_tag >> 2,
            tag:italic_tag & 0x03,
            remainder
        }
    }
    /// A width index of 0 marks a code in `bc..=ec` for which the font has no glyph.
    #[inline(always)]
    pub fn exists(&self) -> bool { self.width_index != 0 }
}

/// The dimensions of one character, in design-size units.
#[derive(Copy,Clone,PartialEq,Eq,Debug,Default)]
pub struct CharDimensions {
    pub width:FixWord,
    pub height:FixWord,
    pub depth:FixWord,
    pub italic_correction:FixWord
}

/// Sizes (in words) of the tables that are validated but not decoded.
#[derive(Copy,Clone,PartialEq,Eq,Debug,Default)]
pub struct TableSizes {
    pub lig_kern:u16,
    pub kern:u16,
    pub extensible:u16,
    pub params:u16
}

/** A decoded font metric file.

Only ever produced complete: either [`decode`](crate::decode) validated and read every part
described here, or it returned a [`Diagnostic`].
*/
#[derive(Clone,PartialEq,Eq,Debug)]
pub struct FontMetrics {
    pub(crate) checksum:u32,
    pub(crate) design_size:FixWord,
    pub(crate) coding_scheme:String,
    pub(crate) font_identifier:String,
    pub(crate) face:u8,
    pub(crate) seven_bit_safe:bool,
    pub(crate) char_lower:u16,
    pub(crate) char_upper:u16,
    pub(crate) char_infos:Vec<CharInfo>,
    pub(crate) widths:Vec<FixWord>,
    pub(crate) heights:Vec<FixWord>,
    pub(crate) depths:Vec<FixWord>,
    pub(crate) italics:Vec<FixWord>,
    pub(crate) table_sizes:TableSizes
}

impl Default for FontMetrics {
    fn default() -> Self { Self::null() }
}

impl FontMetrics {
    /// The empty font: no characters (range `1..=0`), no tables, zero design size.
    pub fn null() -> Self {
        Self::empty(1,0)
    }

    pub(crate) fn empty(char_lower:u16,char_upper:u16) -> Self {
        FontMetrics {
            checksum:0,
            design_size:FixWord::ZERO,
            coding_scheme:String::new(),
            font_identifier:String::new(),
            face:0,
            seven_bit_safe:false,
            char_lower,char_upper,
            char_infos:Vec::new(),
            widths:Vec::new(),
            heights:Vec::new(),
            depths:Vec::new(),
            italics:Vec::new(),
            table_sizes:TableSizes::default()
        }
    }

    /// Decodes an in-memory `.tfm` file.
    pub fn from_bytes(bytes:&[u8]) -> Result<Self,Diagnostic> {
        crate::decode(&mut ByteReader::new(bytes))
    }

    /// Reads and decodes a `.tfm` file in one blocking read.
    pub fn from_file<P:AsRef<Path>>(path:P) -> Result<Self,Diagnostic> {
        let path = path.as_ref();
        let mut reader = ByteReader::open(path)
            .map_err(|e| Diagnostic::io(&e,&path.display().to_string()))?;
        crate::decode(&mut reader)
    }

    #[inline(always)]
    pub fn checksum(&self) -> u32 { self.checksum }
    #[inline(always)]
    pub fn design_size(&self) -> FixWord { self.design_size }
    /// e.g. `TeX text`; empty if the header is too short to contain it.
    pub fn coding_scheme(&self) -> &str { &self.coding_scheme }
    /// e.g. `CMR`; empty if the header is too short to contain it.
    pub fn font_identifier(&self) -> &str { &self.font_identifier }
    #[inline(always)]
    pub fn face(&self) -> u8 { self.face }
    #[inline(always)]
    pub fn seven_bit_safe(&self) -> bool { self.seven_bit_safe }

    /// Smallest character code covered (`bc`).
    #[inline(always)]
    pub fn char_lower(&self) -> u16 { self.char_lower }
    /// Largest character code covered (`ec`); smaller than [`char_lower`](Self::char_lower) if the font is empty.
    #[inline(always)]
    pub fn char_upper(&self) -> u16 { self.char_upper }
    pub fn char_count(&self) -> usize { self.char_infos.len() }
    pub fn char_infos(&self) -> &[CharInfo] { &self.char_infos }

    pub fn widths(&self) -> &[FixWord] { &self.widths }
    pub fn heights(&self) -> &[FixWord] { &self.heights }
    pub fn depths(&self) -> &[FixWord] { &self.depths }
    pub fn italics(&self) -> &[FixWord] { &self.italics }
    pub fn table_sizes(&self) -> TableSizes { self.table_sizes }

    /// The info word of `code`, if `code` lies in `bc..=ec`.
    pub fn char_info(&self,code:u8) -> Option<&CharInfo> {
        let idx = (code as u16).checked_sub(self.char_lower)?;
        self.char_infos.get(idx as usize)
    }

    /// Resolves the table indices of `code`. `None` if the font has no glyph for it.
    pub fn dimensions(&self,code:u8) -> Option<CharDimensions> {
        let info = self.char_info(code).filter(|i| i.exists())?;
        fn at(table:&[FixWord],idx:u8) -> FixWord {
            table.get(idx as usize).copied().unwrap_or_default()
        }
        Some(CharDimensions {
            width:at(&self.widths,info.width_index),
            height:at(&self.heights,info.height_index),
            depth:at(&self.depths,info.depth_index),
            italic_correction:at(&self.italics,info.italic_index)
        })
    }
}
