use thiserror::Error;

/// Top-level error type for polygon meshing.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to the input geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("polygon has {count} vertices, at least 3 are required")]
    TooFewVertices { count: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error(
        "ear clipping stopped after producing {produced} of {expected} triangles \
         ({remaining} vertices left)"
    )]
    Incomplete {
        produced: usize,
        expected: usize,
        remaining: usize,
    },
}

/// Convenience type alias for results using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;
