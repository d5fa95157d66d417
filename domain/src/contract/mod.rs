//! Response contract
//!
//! Checks that a successful backend payload has the shape the rest of the
//! engine relies on. Language and style are left to the backend.

mod validator;

pub use validator::{ContractError, MATRIX_ROWS, ResponseContract};
