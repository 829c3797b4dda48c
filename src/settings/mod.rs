//! Configuration loading and resolution.
//!
//! Sources are merged with the `config` crate, deserialized into a
//! [`raw::RawConfig`], overridden by CLI flags and finally validated into a
//! [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
