//! Dataset model and I/O.
//!
//! Raw rows ([`RawRecord`], [`RawBatch`]) hold untyped cells as loaded from
//! the sources. After the dedup stage every row is a [`Record`] with a text
//! comment, a boolean label and a [`FeatureVector`](crate::features::FeatureVector).

pub mod batch;
pub mod csv;
pub mod field_value;
pub mod record;

pub use batch::{Batch, RawBatch};
pub use field_value::FieldValue;
pub use record::{RawRecord, Record};
