//! Table data model

mod column;
mod record;
mod record_serde;
mod value;

pub use column::*;
pub use record::*;
pub use value::*;
