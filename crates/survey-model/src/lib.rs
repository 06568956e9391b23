pub mod error;
pub mod labels;
pub mod record;

pub use error::{ModelError, Result};
pub use labels::{AgeBand, GenderLabel, RelationshipLabel};
pub use record::{NormalizedRecord, RawRecord};
