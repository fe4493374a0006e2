//! Two-dimensional `f64` vector for the geometry stack.
//!
//! [`Float2`] is a plain mutable value with two public components. Most
//! operations come in two shapes:
//!
//! - in-place mutators that return `&mut Self`, so calls chain fluently;
//! - pure forms (`std::ops` impls and `*ed` helpers) that return a new value.
//!
//! Binary operations accept any [`HasXY`] point, so tuples, arrays and
//! `glam::DVec2` mix freely with [`Float2`].
//!
//! ```rust
//! use float2::vec;
//!
//! let mut v = vec(1.0, 2.0);
//! v.add(vec(3.0, 4.0)).scale(0.5);
//! assert!(v.equals((2.0, 3.0)));
//! assert_eq!(v.to_string(), "2,3");
//! ```
//!
//! Non-finite components are never rejected on construction; validation is
//! opt-in through [`Float2::is_ok`] and the `assert_*` methods.

pub mod error;
pub mod float2;
pub mod format;
pub mod functions;
pub mod point;

pub use error::{Float2Error, Float2Result};
pub use float2::Float2;
pub use functions::*;
pub use point::HasXY;

pub use config::constants::{Float2Config, EPSILON};
