use thiserror::Error;

use toll_core::UserId;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("user {0} not found in account ledger")]
    UnknownUser(UserId),

    #[error("user {0} appears more than once in account ledger")]
    DuplicateUser(UserId),

    #[error("invalid charge of {amount} for user {user}: must be finite and non-negative")]
    InvalidCharge { user: UserId, amount: f64 },

    #[error("user {user} has invalid {field}: {value}")]
    InvalidAccount {
        user:  UserId,
        field: &'static str,
        value: f64,
    },
}

pub type AccountResult<T> = Result<T, AccountError>;
