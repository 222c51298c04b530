//! Conversions from external data into [`ObservationRow`](crate::ObservationRow)s.

pub mod archive;
pub mod frame;
