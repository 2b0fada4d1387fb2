//! # vbench-resolve
//!
//! Static, best-effort dependency resolution for Verilog testbenches.
//!
//! Given a testbench file, [`resolve`] proposes the closed set of `.v` files
//! it needs to compile, discovered by scanning for module-instantiation
//! syntax — no build manifest required. The scan is deliberately not a
//! Verilog parser: it is a line-anchored pattern match that can both over-
//! and under-detect (see [`scan`]). The returned set is a *proposal*; callers
//! present it for confirmation before feeding it to the toolchain.

mod closure;
mod discover;
mod error;
pub mod scan;

pub use closure::{DependencySet, resolve};
pub use discover::{list_modules, list_testbenches};
pub use error::ResolveError;
