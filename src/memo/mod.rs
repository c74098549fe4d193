// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! MEMO data (immutable, precomputed).
//!
//! Everything in this module is computed once before the search starts and is
//! only read afterwards. It is `Sync`, so worker threads processing different
//! lengths can share a single instance by reference.

pub mod powers;

pub use powers::PowerCache;
