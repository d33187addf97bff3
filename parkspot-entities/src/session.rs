use crate::id::Id;

/// An authenticated session as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: Id,
    pub email: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubscriptionStatus {
    pub active: bool,
    pub plan: Option<String>,
}
