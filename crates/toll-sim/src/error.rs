use thiserror::Error;

use toll_account::AccountError;
use toll_core::{CoreError, UserId};
use toll_mobility::MobilityError;
use toll_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("no flat fee configured for user {0}")]
    NoFlatFee(UserId),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("account error: {0}")]
    Account(#[from] AccountError),

    #[error("mobility error: {0}")]
    Mobility(#[from] MobilityError),
}

pub type SimResult<T> = Result<T, SimError>;
