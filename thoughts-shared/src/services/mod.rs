/// Business operations
///
/// - `accounts`: signup and login
/// - `thoughts`: thought CRUD, like and list
/// - `validation`: input checks shared by both
/// - `error`: the `ServiceError` taxonomy returned by every operation

pub mod accounts;
pub mod error;
pub mod thoughts;
pub mod validation;

pub use error::{ServiceError, ServiceResult};
