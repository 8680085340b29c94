//! polylab prelude.
//!
//! This module contains the most used types, traits, and functions that
//! you can import easily as a group.
//!
//! ```
//! use polylab::prelude::*;
//!
//! ```

#[doc(no_inline)]
pub use crate::analysis::{analyze, Analysis, Domain};

#[doc(no_inline)]
pub use crate::critical::{report, report_from_derivative, CriticalPoint};

#[doc(no_inline)]
pub use crate::error::AnalysisError;

#[doc(no_inline)]
pub use crate::interval::Interval;

#[doc(no_inline)]
pub use crate::minimize::{
    Bracket, BracketOptions, Brent, Golden, MinimizerError, ObjFn, PolyFn, SingleDimFn,
};

#[doc(no_inline)]
pub use crate::polynomial::Polynomial;

#[doc(no_inline)]
pub use crate::range::RangeDescription;

#[doc(no_inline)]
pub use crate::poly;
