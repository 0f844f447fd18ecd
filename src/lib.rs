pub mod error;
pub mod header;
pub mod input;
pub mod report;
pub mod resolve;
pub mod tables;
pub mod verify;

pub use error::{Result, VerifyError};
pub use header::{ColumnIndices, HeaderMatch};
pub use resolve::{PostedTo, RowResolution, NOT_FOUND};
pub use tables::{HeaderVocabulary, LocationMap};
pub use verify::{verify_file, verify_rows, Report, VerifyConfig};
