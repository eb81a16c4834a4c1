use thiserror::Error;

use crate::payment::types::PaymentError;
use crate::squad::SquadError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),
    #[error("Squad error: {0}")]
    Squad(#[from] SquadError),
    #[error("Config error: {0}")]
    Config(String),
}

pub type InternalResult<T> = Result<T, Error>;
