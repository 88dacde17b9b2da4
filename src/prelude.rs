//! Prelude module: `geom::prelude` re-exports all `geom` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use geom::prelude::*;
//! ```
//!

// re-exports
pub use crate::floats::*;
pub use crate::matrices::*;
pub use crate::shapes::*;
pub use crate::vectors::*;
