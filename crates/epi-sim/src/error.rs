use epi_core::EpiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("population_size must be positive")]
    EmptyPopulation,

    #[error("simulation has not been initialized; call initialize() first")]
    NotInitialized,

    #[error("simulation is already initialized")]
    AlreadyInitialized,

    #[error(transparent)]
    Core(#[from] EpiError),
}

pub type SimResult<T> = Result<T, SimError>;
