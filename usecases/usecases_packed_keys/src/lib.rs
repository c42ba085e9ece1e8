//! Use Cases Layer: Packed Keys
//!
//! Operations over packed multi-dimensional byte keys.
//!
//! ## Overview
//!
//! A packed key is `num_dims` consecutive fields of `bytes_per_dim` bytes,
//! each holding one dimension's order-preserving encoding. At this layer a
//! field is simply an unsigned big-endian integer; signedness was already
//! folded into the bytes by the encoder that produced them.
//!
//! ## Operations
//!
//! - **[`arithmetic`](arithmetic/index.html)**: [`add`] and [`subtract`] of one
//!   dimension's fields, failing instead of wrapping on overflow or underflow.
//!
//! - **[`containment`](containment/index.html)**: [`contains`], deciding whether
//!   one axis-aligned hyperrectangle contains another using only byte
//!   comparisons.
//!
//! - **[`layout`](layout/index.html)**: [`PackedLayout`], a validated
//!   `(num_dims, bytes_per_dim)` pair with field accessors and the operations
//!   above bound to its width.
//!
//! ## Architecture
//!
//! Depends on the Entities layer for the unsigned byte comparison shared with
//! the encoders.

pub mod arithmetic;
pub mod containment;
pub mod layout;

pub use arithmetic::{add, subtract, ArithmeticError};
pub use containment::contains;
pub use layout::{LayoutError, PackedLayout};
