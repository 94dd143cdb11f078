//! The `AccountLedger` — all user accounts for a run.

use std::collections::BTreeMap;

use toll_core::UserId;

use crate::{AccountError, AccountResult, UserAccount};

/// Holds every user account, keyed by `UserId`.
///
/// Accounts are fixed at construction: none are added or removed during a
/// run.  Lookups of unknown ids are errors, since they can only come from a
/// misconfigured scenario.
#[derive(Clone, Debug, Default)]
pub struct AccountLedger {
    accounts: BTreeMap<UserId, UserAccount>,
}

impl AccountLedger {
    /// Validate and index `accounts`.
    ///
    /// # Errors
    ///
    /// Duplicate ids, non-finite balances, and negative or non-finite trip
    /// lengths are rejected.
    pub fn new(accounts: Vec<UserAccount>) -> AccountResult<Self> {
        let mut map = BTreeMap::new();
        for account in accounts {
            if !account.balance.is_finite() {
                return Err(AccountError::InvalidAccount {
                    user:  account.id,
                    field: "balance",
                    value: account.balance,
                });
            }
            if !account.trip_km.is_finite() || account.trip_km < 0.0 {
                return Err(AccountError::InvalidAccount {
                    user:  account.id,
                    field: "trip_km",
                    value: account.trip_km,
                });
            }
            let id = account.id;
            if map.insert(id, account).is_some() {
                return Err(AccountError::DuplicateUser(id));
            }
        }
        Ok(Self { accounts: map })
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Accounts in ascending `UserId` order.
    pub fn iter(&self) -> impl Iterator<Item = &UserAccount> {
        self.accounts.values()
    }

    pub fn get(&self, user: UserId) -> AccountResult<&UserAccount> {
        self.accounts.get(&user).ok_or(AccountError::UnknownUser(user))
    }

    /// Current balance of `user`.
    pub fn balance(&self, user: UserId) -> AccountResult<f64> {
        self.get(user).map(|a| a.balance)
    }

    /// Deduct `amount` from `user` and return the resulting balance.
    ///
    /// Balances may go negative; the ledger records the debt and logs a
    /// warning the first time it happens rather than refusing the charge.
    pub fn charge(&mut self, user: UserId, amount: f64) -> AccountResult<f64> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(AccountError::InvalidCharge { user, amount });
        }
        let account = self
            .accounts
            .get_mut(&user)
            .ok_or(AccountError::UnknownUser(user))?;

        let before = account.balance;
        account.balance -= amount;
        if before >= 0.0 && account.balance < 0.0 {
            log::warn!("user {} balance went negative: {:.2}", user.0, account.balance);
        }
        Ok(account.balance)
    }
}
