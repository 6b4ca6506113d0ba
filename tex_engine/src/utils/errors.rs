/*! Errors reported by the [`Kernel`](crate::engine::state::Kernel). */

use thiserror::Error;
use tex_tfm::Diagnostic;

#[derive(Error,Debug,Clone,PartialEq,Eq)]
pub enum KernelError {
    /// Reading or decoding a font metric file failed; the font table is unchanged.
    #[error("! Font \\{name}={file} not loadable: {source}")]
    FontLoad {
        file:String,
        name:String,
        #[source]
        source:Diagnostic
    },
    #[error("Font index {index} out of range (only {len} fonts loaded)")]
    FontIndex {
        index:usize,
        len:usize
    }
}
