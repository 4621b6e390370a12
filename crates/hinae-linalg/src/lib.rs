//! Generic linear algebra types for the Hinae renderer.
//!
//! # Motivation
//!
//! Rendering code deals with a small, fixed set of geometric objects: 2D and 3D vectors and
//! points, 4x4 transformation matrices, axis-aligned boxes, rays and triangles. This library
//! provides exactly those, generic over the element type, so that the same code works with
//! [`f32`], [`f64`] and integer coordinates (eg. for pixel or voxel grids).
//!
//! # Goals & Non-Goals
//!
//! - Keep points and vectors apart. [`Point`] only supports the affine operations (`point - point`
//!   is a [`Vector`], `point + vector` is a [`Point`]), so mixing them up is a type error.
//! - Write component-wise operations once. The free functions [`min`], [`max`], [`clamp`],
//!   [`abs`], [`ceil`], [`floor`], [`pow`], [`lerp`] and [`cast`] work for every type implementing
//!   [`Components`].
//! - Treat degenerate inputs as bugs. Dividing by zero, indexing out of range and inverting a
//!   singular matrix panic with a [`MathError`]. Where callers may reasonably want to probe for
//!   these conditions, a `checked_*` method returns the [`MathError`] instead.
//! - Don't support dynamically-sized vectors and matrices, or anything beyond 4 dimensions.
//! - Don't try to be fast through SIMD. Everything is plain scalar code the compiler is free to
//!   vectorize.
//!
//! # Layout
//!
//! [`Matrix4`] is row-major and acts on column vectors, so `a * b * p` applies `b` first. The
//! [`transform`] module builds the usual scaling, rotation, view and projection matrices.

pub mod scalar;
pub mod transform;

mod approx_impls;
mod axis;
mod bounds;
mod components;
mod display;
mod error;
mod matrix;
mod point;
mod quat;
mod ray;
mod triangle;
mod vector;
mod view;

pub use axis::*;
pub use bounds::*;
pub use components::*;
pub use error::MathError;
pub use matrix::*;
pub use point::*;
pub use quat::*;
pub use ray::*;
pub use scalar::{
    Abs, Bounded, CastFrom, Float, FloatConst, MinMax, Number, One, Pow, Round, Signed, Sqrt,
    Trig, Zero,
};
pub use triangle::*;
pub use vector::*;
