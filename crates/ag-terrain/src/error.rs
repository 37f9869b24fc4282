use ag_core::Coordinate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerrainError {
    #[error("terrain parse error: {0}")]
    Parse(String),

    #[error("unknown plant type {0:?}")]
    UnknownPlantType(String),

    #[error("coordinate {coordinate} lies outside the {width}x{height} grid")]
    OutOfBounds {
        coordinate: Coordinate,
        width:      u32,
        height:     u32,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TerrainResult<T> = Result<T, TerrainError>;
