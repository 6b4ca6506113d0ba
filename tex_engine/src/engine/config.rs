/*! Startup configuration of a [`Kernel`](crate::engine::state::Kernel). */

use crate::tex::control_sequences::CS_TABLE_SIZE;

/// A font the kernel loads during startup.
#[derive(Clone,PartialEq,Eq,Debug)]
pub struct BuiltinFont {
    /// File id handed to the [`FontSource`](crate::engine::filesystem::FontSource), e.g. `cmr10`.
    pub file:String,
    /// Control sequence name selecting the font, e.g. `rm`.
    pub name:String,
    /// Requested size; see [`Font::size`](crate::engine::fontsystem::Font::size).
    pub at:i32
}
impl BuiltinFont {
    pub fn new<S1:Into<String>,S2:Into<String>>(file:S1,name:S2,at:i32) -> Self {
        BuiltinFont { file:file.into(), name:name.into(), at }
    }
}

/** How a [`Kernel`](crate::engine::state::Kernel) is set up.

The default loads Computer Modern roman, italic, bold and typewriter at their design sizes
as `\rm`, `\it`, `\bf` and `\tt`:

```rust
use tex_engine::engine::config::KernelConfig;

let config = KernelConfig::default();
assert_eq!(config.builtin_fonts.len(),4);
assert_eq!(config.builtin_fonts[0].file,"cmr10");
let bare = KernelConfig::bare().with_cs_table_size(17);
assert!(bare.builtin_fonts.is_empty());
```
*/
#[derive(Clone,PartialEq,Eq,Debug)]
pub struct KernelConfig {
    /// Number of buckets of the command sequence table; it is never resized.
    pub cs_table_size:usize,
    pub builtin_fonts:Vec<BuiltinFont>
}

impl Default for KernelConfig {
    fn default() -> Self {
        KernelConfig {
            cs_table_size:CS_TABLE_SIZE,
            builtin_fonts:vec!(
                BuiltinFont::new("cmr10","rm",-1000),
                BuiltinFont::new("cmti10","it",-1000),
                BuiltinFont::new("cmbx10","bf",-1000),
                BuiltinFont::new("cmtt10","tt",-1000),
            )
        }
    }
}

impl KernelConfig {
    /// No built-in fonts; only the null font is loaded.
    pub fn bare() -> Self {
        KernelConfig { builtin_fonts:Vec::new(), ..Self::default() }
    }
    pub fn with_cs_table_size(mut self,size:usize) -> Self {
        self.cs_table_size = size;
        self
    }
    pub fn with_font(mut self,font:BuiltinFont) -> Self {
        self.builtin_fonts.push(font);
        self
    }
    pub fn with_fonts(mut self,fonts:Vec<BuiltinFont>) -> Self {
        self.builtin_fonts = fonts;
        self
    }
}
