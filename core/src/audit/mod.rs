//! Audit trail for channel operations.

pub mod record;
pub mod sink;

pub use record::*;
pub use sink::*;
