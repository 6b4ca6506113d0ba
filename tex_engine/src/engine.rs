//! Components of the kernel: the [`Kernel`](state::Kernel) itself, its [`FontTable`](fontsystem::FontTable),
//! the [`FontSource`](filesystem::FontSource)s fonts are read from and its [`KernelConfig`](config::KernelConfig).

pub mod config;
pub mod filesystem;
pub mod fontsystem;
pub mod state;
