// SPDX-License-Identifier: MPL-2.0
//! Key-value storage adapters implementing [`KeyValueStore`].
//!
//! [`KeyValueStore`]: crate::application::port::KeyValueStore

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
