use anythink_auth::JwtClaims;
use anythink_core::UserId;

/// Principal context for a request (authenticated marketplace user).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    user_id: UserId,
    username: String,
}

impl PrincipalContext {
    pub fn new(user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }

    pub fn from_claims(claims: JwtClaims) -> Self {
        Self::new(claims.sub, claims.username)
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Principal for routes where authentication is optional.
///
/// `None` means the request carried no credentials at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionalPrincipal(pub Option<PrincipalContext>);
