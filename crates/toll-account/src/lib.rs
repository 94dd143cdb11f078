//! `toll-account` — user accounts and the ledger that tolls are charged to.
//!
//! The ledger is owned by the simulation driver.  Vehicles only hold a
//! [`UserId`][toll_core::UserId] handle; every balance mutation goes through
//! [`AccountLedger::charge`], so there is exactly one place where money
//! moves.
//!
//! ```rust
//! use toll_account::{AccountLedger, UserAccount};
//! use toll_core::{UserId, VehicleKind};
//!
//! let mut ledger = AccountLedger::new(vec![
//!     UserAccount::new(UserId(1), 6000.0, VehicleKind::Truck, 8.0),
//! ])
//! .unwrap();
//!
//! assert_eq!(ledger.charge(UserId(1), 60.0).unwrap(), 5940.0);
//! assert!(ledger.charge(UserId(2), 1.0).is_err());
//! ```

pub mod account;
pub mod error;
pub mod ledger;


pub use account::UserAccount;
pub use error::{AccountError, AccountResult};
pub use ledger::AccountLedger;
