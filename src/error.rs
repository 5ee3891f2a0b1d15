use thiserror::Error;

use crate::checker::errors::CheckError;
use crate::source::errors::SourceError;
use crate::table::errors::TableError;

#[derive(Debug, Error)]
pub enum DupError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Check(#[from] CheckError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Output error: {0}.")]
    Output(String),

    #[error("While reading '{path}': {source}")]
    InSource {
        path: String,
        #[source]
        source: Box<DupError>,
    },
}
