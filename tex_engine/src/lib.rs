/*! The runtime kernel of a TeX-like typesetting engine.

    The [`Kernel`](engine::state::Kernel) bundles the state a scanner and interpreter consult
    and mutate while a document is converted into node lists:

    - the [`CategoryCodeTable`](tex::catcodes::CategoryCodeTable) classifying the first 128 code points,
    - the [`CommandSequenceTable`](tex::control_sequences::CommandSequenceTable) mapping control sequence names to payloads,
    - the [`FontTable`](engine::fontsystem::FontTable) of decoded font metrics,
    - the [`RenderState`](engine::state::render::RenderState) tracking the list under construction across groups.

    See [`doc`] for how these fit together.
*/
#![forbid(unsafe_code)]

pub mod utils;
pub mod engine;
pub mod tex;
pub mod doc;

#[doc(hidden)]
pub mod tests;

pub mod prelude {
    pub use crate::tex::catcodes::{CategoryCode, CategoryCodeTable};
    pub use crate::tex::control_sequences::{CommandSequence, CommandSequenceTable};
    pub use crate::tex::nodes::{NodeArena, NodeId};
    pub use crate::tex::numerics::Scaled;
    pub use crate::tex::word::Word;
    pub use crate::engine::config::{BuiltinFont, KernelConfig};
    pub use crate::engine::filesystem::{DirectoryFontSource, FontSource, VirtualFontSource};
    pub use crate::engine::fontsystem::{Font, FontTable};
    pub use crate::engine::state::Kernel;
    pub use crate::engine::state::modes::TeXMode;
    pub use crate::engine::state::render::{Frame, RenderState};
    pub use crate::utils::errors::KernelError;
}
