//! Services for the `/_security` administrative endpoints.
//!
//! Every operation follows the same lifecycle: obtain a service builder from
//! [`Client`], set its parameters through chained setters, then call
//! `execute` with a [`crate::context::Context`]. Required fields are checked
//! just before the request is sent; all missing fields are reported in a
//! single error and nothing hits the wire.

use std::sync::Arc;

use crate::transport::Transport;

mod change_password;
mod delete_user;
mod disable_user;
mod enable_user;
mod get_user;
mod put_user;

pub use change_password::ChangePasswordService;
pub use delete_user::DeleteUserService;
pub use disable_user::DisableUserService;
pub use enable_user::EnableUserService;
pub use get_user::GetUserService;
pub use put_user::PutUserService;

pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Creates or updates a user.
    pub fn put_user(&self) -> PutUserService {
        PutUserService::new(Arc::clone(&self.transport))
    }

    /// Retrieves one user, or every user when no username is set.
    pub fn get_user(&self) -> GetUserService {
        GetUserService::new(Arc::clone(&self.transport))
    }

    /// Removes a user.
    pub fn delete_user(&self) -> DeleteUserService {
        DeleteUserService::new(Arc::clone(&self.transport))
    }

    /// Changes a user's password, or the caller's own when no username is
    /// set.
    pub fn change_password(&self) -> ChangePasswordService {
        ChangePasswordService::new(Arc::clone(&self.transport))
    }

    /// Re-enables a disabled user.
    pub fn enable_user(&self) -> EnableUserService {
        EnableUserService::new(Arc::clone(&self.transport))
    }

    /// Disables a user without removing it.
    pub fn disable_user(&self) -> DisableUserService {
        DisableUserService::new(Arc::clone(&self.transport))
    }
}
