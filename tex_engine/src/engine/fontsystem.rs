/*! The table of loaded fonts.

    Fonts are identified by their index into the [`FontTable`]; index `0` is the null font,
    present from the start. Fonts are only ever appended, so indices stay valid for the whole run.
    Decoded metrics are cached by file id, so loading `cmr10` at two sizes decodes it once.
*/

use log::debug;
use tex_tfm::{Diagnostic, FontMetrics};
use crate::engine::filesystem::FontSource;
use crate::tex::numerics::Scaled;
use crate::utils::{HMap, Ptr};

/// A loaded font: metrics plus the size it was requested at.
#[derive(Clone,Debug)]
pub struct Font {
    pub file:String,
    pub name:String,
    /// `< 0`: `-at/1000` times the design size; `> 0`: explicit size in scaled points; `0`: design size.
    pub at:i32,
    pub metrics:Ptr<FontMetrics>
}
impl Font {
    /// The effective size, at most [`Scaled::MAX`].
    pub fn size(&self) -> Scaled {
        let design = self.metrics.design_size().to_scaled();
        match self.at {
            0 => Scaled(design),
            at if at > 0 => Scaled(at),
            at => Scaled::clamped(design as i64 * -(at as i64) / 1000)
        }
    }
}

#[derive(Clone,Debug)]
pub struct FontTable {
    fonts:Vec<Font>,
    files:HMap<String,Ptr<FontMetrics>>
}

impl Default for FontTable {
    fn default() -> Self {
        FontTable {
            fonts:vec!(Font {
                file:String::new(),
                name:"nullfont".to_string(),
                at:0,
                metrics:Ptr::new(FontMetrics::null())
            }),
            files:HMap::default()
        }
    }
}

impl FontTable {
    /// A table holding only the null font.
    pub fn new() -> Self { Self::default() }

    /// Reads and decodes `file` (unless already decoded) and appends it as a new font.
    /// Returns the new index; on failure the table is unchanged.
    pub fn load<S:FontSource + ?Sized>(&mut self,source:&mut S,file:&str,name:&str,at:i32) -> Result<usize,Diagnostic> {
        let (metrics,cached) = match self.files.get(file) {
            Some(m) => (m.clone(),true),
            None => {
                let bytes = source.read(file).map_err(|e| Diagnostic::io(&e,&source.locate(file)))?;
                let m = Ptr::new(FontMetrics::from_bytes(&bytes)?);
                self.files.insert(file.to_string(),m.clone());
                (m,false)
            }
        };
        let index = self.fonts.len();
        debug!("Font \\{}={} loaded as #{} (cached: {})",name,file,index,cached);
        self.fonts.push(Font { file:file.to_string(), name:name.to_string(), at, metrics });
        Ok(index)
    }

    /// The metrics of font `index`.
    pub fn get(&self,index:usize) -> Option<&FontMetrics> {
        self.fonts.get(index).map(|f| &*f.metrics)
    }
    pub fn font(&self,index:usize) -> Option<&Font> { self.fonts.get(index) }
    /// Font `0`.
    pub fn null(&self) -> &Font { &self.fonts[0] }
    pub fn len(&self) -> usize { self.fonts.len() }
    /// Never true; the null font is always present.
    pub fn is_empty(&self) -> bool { self.fonts.is_empty() }
    pub fn iter(&self) -> impl Iterator<Item=&Font> { self.fonts.iter() }
}
