use crate::core::models::architecture::ArchitectureError;
use crate::core::models::ids::SseId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid architecture: {0}")]
    Architecture(#[from] ArchitectureError),

    #[error("Graph construction requires an absolute architecture")]
    RelativeArchitecture,

    #[error("Architecture has {count} elements, above the enumeration guard of {limit}")]
    TooManyElements { count: usize, limit: usize },

    #[error("Ordering references unknown element '{0}'")]
    UnknownElement(SseId),

    #[error("Ordering must visit every element exactly once ({got} of {want} listed)")]
    IncompleteOrdering { got: usize, want: usize },

    #[error("Elements '{a}' and '{b}' are not adjacent in the sketch graph")]
    NotAdjacent { a: SseId, b: SseId },

    #[error("Motif reference '{motif}.{segment}' for element '{sse}' not found")]
    MissingMotif {
        sse: SseId,
        motif: String,
        segment: String,
    },

    #[error(
        "Motif segment '{motif}.{segment}' supplies {got} atoms but element '{sse}' needs {want}"
    )]
    MotifSizeMismatch {
        sse: SseId,
        motif: String,
        segment: String,
        got: usize,
        want: usize,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
