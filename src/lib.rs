//! Circular-arc fitting through three points and **equal-division** point
//! sampling, built around a fit → resolve → divide pipeline: fit the unique
//! circle through three 2D points, resolve which of the two arcs (and which
//! rotational direction) the ordered points describe, then place evenly
//! spaced interior points along it by count or by arc-length spacing.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//!
//! # Example
//! ```
//! use arcdiv::{SamplingRequest, compute_arc};
//! use nalgebra::Point2;
//!
//! let division = compute_arc(
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(2.0, 0.0),
//!     SamplingRequest::ByCount(2),
//! )
//! .unwrap();
//! assert_eq!(division.points.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod arc;
pub mod circle;
pub mod divide;
pub mod errors;
pub mod float_types;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use arc::{Arc, Direction};
pub use circle::Circle;
pub use divide::{ArcDivision, SamplingRequest, compute_arc, divide};
pub use errors::ArcError;
