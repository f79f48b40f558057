use pagecraft_core::UserId;

/// Authenticated session identity for a request.
///
/// Inserted by the auth middleware; portal routes require it, checkout
/// reads it opportunistically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    user_id: UserId,
    email: String,
}

impl SessionContext {
    pub fn new(user_id: UserId, email: String) -> Self {
        Self { user_id, email }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
