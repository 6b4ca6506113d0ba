/*! The [`Kernel`]: all interpreter-wide state of one engine run. */

pub mod modes;
pub mod render;

use log::{debug, info};
use crate::engine::config::KernelConfig;
use crate::engine::filesystem::FontSource;
use crate::engine::fontsystem::{Font, FontTable};
use crate::engine::state::modes::TeXMode;
use crate::engine::state::render::RenderState;
use crate::tex::catcodes::{CategoryCode, CategoryCodeTable};
use crate::tex::control_sequences::{CommandSequence, CommandSequenceTable};
use crate::tex::numerics::{Scaled, Unit};
use crate::tex::word::Word;
use crate::utils::errors::KernelError;

/// Payload of the `\par` primitive.
pub const PAR_PAYLOAD: Word = Word(0);
/// Payload of the `\end` primitive.
pub const END_PAYLOAD: Word = Word(0);

/// The dimension parameters the kernel starts out with, in scaled points.
#[derive(Copy,Clone,PartialEq,Eq,Debug)]
pub struct DimenParameters {
    pub left_skip:Scaled,
    pub right_skip:Scaled,
    pub hsize:Scaled,
    pub vsize:Scaled,
    pub par_indent:Scaled,
    pub baseline_skip:Scaled,
    pub split_top_skip:Scaled
}
impl Default for DimenParameters {
    fn default() -> Self {
        DimenParameters {
            left_skip:Scaled::ZERO,
            right_skip:Scaled::ZERO,
            hsize:Scaled::from_unit(0x67FFF,Unit::In),
            vsize:Scaled::from_unit(Scaled::from_pt(9).0,Unit::In),
            par_indent:Scaled::from_pt(18),
            baseline_skip:Scaled::from_pt(12),
            split_top_skip:Scaled::from_pt(12)
        }
    }
}

/** The state of an engine run, built by [`Kernel::new`] and passed by reference to the
scanner and interpreter. Node payloads have type `N`.

```rust
use tex_engine::prelude::*;

let kernel = Kernel::<()>::new(&KernelConfig::bare(),&mut VirtualFontSource::new()).unwrap();
assert_eq!(kernel.catcodes.classify('%'),CategoryCode::Comment);
assert_eq!(kernel.commands.get("par").map(|cs| cs.code),Some(CategoryCode::ParEnd));
assert_eq!(kernel.fonts.len(),1);
assert_eq!(kernel.render.mode(),TeXMode::Vertical);
```
*/
#[derive(Clone,Debug)]
pub struct Kernel<N> {
    pub catcodes:CategoryCodeTable,
    pub commands:CommandSequenceTable,
    pub fonts:FontTable,
    pub render:RenderState<N>,
    pub params:DimenParameters,
    current_font:usize
}

impl<N> Kernel<N> {
    /// Sets up the tables and loads the configured built-in fonts from `source`.
    /// The first built-in font becomes the current font.
    pub fn new<S:FontSource + ?Sized>(config:&KernelConfig,source:&mut S) -> Result<Self,KernelError> {
        let mut kernel = Kernel {
            catcodes:CategoryCodeTable::default(),
            commands:CommandSequenceTable::new(config.cs_table_size),
            fonts:FontTable::new(),
            render:RenderState::new(),
            params:DimenParameters::default(),
            current_font:0
        };
        for (i,font) in config.builtin_fonts.iter().enumerate() {
            let index = kernel.load_font(source,&font.file,&font.name,font.at)?;
            if i == 0 { kernel.current_font = index }
        }
        kernel.primitive("par",CategoryCode::ParEnd,PAR_PAYLOAD);
        kernel.primitive("end",CategoryCode::Stop,END_PAYLOAD);
        kernel.render.set_mode(TeXMode::Vertical);
        info!("Kernel initialized: {} fonts, {} command sequences in {} buckets",
            kernel.fonts.len(),kernel.commands.entries(),kernel.commands.capacity());
        Ok(kernel)
    }

    /// Loads a font and defines `\name` to select it. Returns the new font index.
    pub fn load_font<S:FontSource + ?Sized>(&mut self,source:&mut S,file:&str,name:&str,at:i32) -> Result<usize,KernelError> {
        let index = self.fonts.load(source,file,name,at).map_err(|e| KernelError::FontLoad {
            file:file.to_string(),
            name:name.to_string(),
            source:e
        })?;
        self.primitive(name,CategoryCode::SetFont,Word(index as u32));
        Ok(index)
    }

    /// Defines (or redefines) `\name`.
    pub fn primitive<W:Into<Word>>(&mut self,name:&str,code:CategoryCode,payload:W) {
        self.commands.set(CommandSequence::new(name,code,payload));
    }

    pub fn select_font(&mut self,index:usize) -> Result<(),KernelError> {
        if index >= self.fonts.len() {
            return Err(KernelError::FontIndex { index, len:self.fonts.len() })
        }
        debug!("Selecting font #{}",index);
        self.current_font = index;
        Ok(())
    }

    pub fn current_font_index(&self) -> usize { self.current_font }

    pub fn current_font(&self) -> &Font {
        self.fonts.font(self.current_font).unwrap_or_else(|| self.fonts.null())
    }
}
