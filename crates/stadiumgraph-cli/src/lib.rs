//! Stadium graph CLI library.
//!
//! Output formatting shared by the `stadiumgraph` binary's subcommands.

pub mod output;
