//! Content schemas and the validator walk.
//!
//! Each block declares its document shape once as a [`Schema`] of
//! [`Field`]s; [`check`] walks a raw document against it, collecting every
//! violation in one pass instead of stopping at the first.

mod descriptor;
mod validate;

pub use descriptor::{Field, Kind, Schema};
pub use validate::check;
