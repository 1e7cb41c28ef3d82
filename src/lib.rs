//! Tablut client (workspace facade crate).
//!
//! This package keeps the `tablut::{adapter,core,engine,supervisor,types}`
//! public API stable while the implementation lives in dedicated crates
//! under `crates/`.

pub use tablut_adapter as adapter;
pub use tablut_core as core;
pub use tablut_engine as engine;
pub use tablut_supervisor as supervisor;
pub use tablut_types as types;
