/*! This module contains additional documentation.

# What is in the kernel?

TeX has no separate tokenization and parsing phases: whether `\catcode` is one token or eight
characters depends on the current category codes, which the document itself can change at any time.
Scanner and interpreter therefore share one mutable state, and this crate provides it:

- [`CategoryCodeTable`](crate::tex::catcodes::CategoryCodeTable): the lexical class of every code point.
  Only the first 128 are stored; anything above is [`Invalid`](crate::tex::catcodes::CategoryCode::Invalid).
- [`CommandSequenceTable`](crate::tex::control_sequences::CommandSequenceTable): what every control
  sequence name currently stands for, as a category code plus an opaque [`Word`](crate::tex::word::Word).
  The table has a fixed number of buckets and never rehashes.
- [`FontTable`](crate::engine::fontsystem::FontTable): every font loaded so far, decoded from `.tfm`
  files by [`tex_tfm`]. Font `0` is the null font; fonts are never removed.
- [`RenderState`](crate::engine::state::render::RenderState): the node list under construction,
  saved and restored as groups are entered and left, plus the current [`TeXMode`](crate::engine::state::modes::TeXMode).

All of these are owned by a [`Kernel`](crate::engine::state::Kernel), which is constructed once
per run from a [`KernelConfig`](crate::engine::config::KernelConfig) and a
[`FontSource`](crate::engine::filesystem::FontSource).

# Booting a kernel

```rust
use tex_engine::prelude::*;

let mut fonts = DirectoryFontSource::new("/usr/share/texmf/fonts/tfm/public/cm");
match Kernel::<()>::new(&KernelConfig::default(),&mut fonts) {
    Ok(kernel) => {
        assert_eq!(kernel.fonts.len(),5);
        assert_eq!(kernel.current_font().name,"rm");
    }
    // no TeX installation here
    Err(KernelError::FontLoad { file, .. }) => assert_eq!(file,"cmr10"),
    Err(e) => panic!("{}",e)
}
```

# Groups

Entering a group saves the current frame; the interpreter then starts a fresh list. Leaving
the group hands the finished frame back, and it is up to the interpreter to turn its list into
something (an `\hbox`, a paragraph) and append that to the restored list:

```rust
use tex_engine::prelude::*;

#[derive(Debug)]
enum Node { Glyph(char), HBox(Option<NodeId>) }

let mut kernel = Kernel::<Node>::new(&KernelConfig::bare(),&mut VirtualFontSource::new()).unwrap();
let rs = &mut kernel.render;
rs.push();
rs.clear();
rs.set_mode(TeXMode::InternalHorizontal);
for c in "box".chars() {
    let n = rs.alloc(Node::Glyph(c));
    rs.append(n);
}
let inner = rs.pop().unwrap();
rs.set_mode(TeXMode::Vertical);
let hbox = rs.alloc(Node::HBox(inner.head));
rs.append(hbox);
assert_eq!(rs.list(inner.head).count(),3);
assert_eq!(rs.head(),Some(hbox));
```
*/
