//! # geom
//!
//! **geom** - vector and matrix types for real-time graphics: [`Vec2`](vectors::Vec2),
//! [`Vec3`](vectors::Vec3), [`Rectangle`](shapes::Rectangle) and [`Mat4`](matrices::Mat4).
//!
//! # Prelude
//! `geom` prelude can be imported with `use geom::prelude::*`.
//!
//! # Model
//! Vectors are small immutable values: every operation returns a new vector.
//! Matrices are built in place: builder functions overwrite the destination matrix and accept
//! that same matrix as a source, which is how transforms are accumulated.
//!
//! Matrices are stored row-major and vectors are row vectors (`v' = v * M`), so translation
//! lives in the last row. [`Mat4::floats`](matrices::Mat4::floats) exposes the 16 elements
//! as a contiguous buffer for a graphics API.
//!
//! Degenerate input (zero-length vectors, division by zero, parallel look-at axes) never
//! panics; it propagates IEEE-754 infinities and NaN to the caller.
//!
//! # Example
//! ```rust
//! use geom::prelude::*;
//!
//! let mut projection: Mat4 = Mat4::ZERO;
//! let _ = projection.set_perspective(rad(60.0), 16.0 / 9.0, 0.1, 100.0);
//!
//! let mut view: Mat4 = Mat4::ZERO;
//! let _ = view.set_look_at(vec3(0.0, 2.0, 5.0), Vec3::ZERO, Vec3::UNIT_Y);
//!
//! let view_projection: Mat4 = view * projection;
//! let buffer: &[f32; 16] = view_projection.floats();
//! assert_eq!(buffer.len(), 16);
//! ```
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

pub mod floats;
pub mod matrices;
pub mod shapes;
pub mod vectors;

// prelude
pub mod prelude;
