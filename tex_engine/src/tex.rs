/*! Core data structures, such as [`CategoryCode`](catcodes::CategoryCode)s and [`CommandSequence`](control_sequences::CommandSequence)s.*/
pub mod catcodes;
pub mod control_sequences;
pub mod nodes;
pub mod numerics;
pub mod word;
