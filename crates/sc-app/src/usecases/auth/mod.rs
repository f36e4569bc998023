//! Authentication use cases: login, logout and account activation.

mod activate_account;
mod login;
mod logout;

pub use activate_account::{ActivateAccount, ActivationError};
pub use login::{LoginError, LoginUser};
pub use logout::Logout;
