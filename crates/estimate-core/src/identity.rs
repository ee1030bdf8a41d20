//! Access to the current authenticated identity.

use crate::history::UserId;

/// Read-only view of the auth collaborator.
///
/// The pipeline only ever asks "who is signed in, if anyone"; sign-in and
/// sign-out live with the auth provider itself.
pub trait IdentityProvider: Send + Sync {
    /// The signed-in user, or `None` for anonymous calls.
    fn current_user(&self) -> Option<UserId>;
}

/// An identity fixed at construction time.
///
/// The web layer builds one per request from the authenticated header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticIdentity {
    user: Option<UserId>,
}

impl StaticIdentity {
    /// An identity for the given user.
    pub fn user(user: UserId) -> Self {
        Self { user: Some(user) }
    }

    /// No signed-in user.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Build from an optional raw id; blank ids are anonymous.
    pub fn from_raw(raw: Option<&str>) -> Self {
        Self {
            user: raw.and_then(UserId::new),
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<UserId> {
        self.user.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_identity() {
        let user = UserId::new("user-1").unwrap();
        assert_eq!(StaticIdentity::user(user.clone()).current_user(), Some(user));
        assert_eq!(StaticIdentity::anonymous().current_user(), None);
        assert_eq!(StaticIdentity::from_raw(Some("  ")).current_user(), None);
        assert_eq!(
            StaticIdentity::from_raw(Some("user-2")).current_user(),
            UserId::new("user-2")
        );
    }
}
