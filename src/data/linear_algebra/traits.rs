//! # Element type abstraction
//!
//! All matrix algorithms are generic over the floating point element type. Double precision is
//! the recommended choice because it reduces the chance that a pivot which should be exactly zero
//! is detected as nonzero, or the reverse.
use std::fmt::{Debug, Display};
use std::iter::Sum;

use num_traits::{Float, NumAssign};

/// Element type of a [`Matrix`](crate::data::linear_algebra::matrix::Matrix).
///
/// A floating point number that can be copied, compared, accumulated and printed. `f64` is the
/// intended implementation; `f32` works but makes zero pivot detection considerably more
/// fragile.
pub trait Element: Float + NumAssign + Sum + Display + Debug + Send + Sync + 'static {}

impl<T: Float + NumAssign + Sum + Display + Debug + Send + Sync + 'static> Element for T {}
