// ============================================================================
// SESSION STORE - Identidad del usuario para toda la app
// ============================================================================
// Estado puro; la persistencia en localStorage la hace el provider
// ============================================================================

use crate::models::{Role, Session};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionStore {
    pub session: Option<Session>,
}

impl SessionStore {
    pub fn with_session(session: Option<Session>) -> Self {
        Self { session }
    }

    pub fn login(&mut self, session: Session) {
        self.session = Some(session);
    }

    pub fn logout(&mut self) {
        self.session = None;
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn role(&self) -> Option<&Role> {
        self.session.as_ref().map(|s| &s.role)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            email: "a@b.com".into(),
            token: "jwt".into(),
            role: Role::Cliente,
            user_id: None,
            display_name: None,
        }
    }

    #[test]
    fn starts_without_session() {
        let store = SessionStore::default();
        assert!(!store.is_authenticated());
        assert_eq!(store.role(), None);
    }

    #[test]
    fn login_then_logout() {
        let mut store = SessionStore::default();
        store.login(session());
        assert_eq!(store.role(), Some(&Role::Cliente));
        assert_eq!(store.token(), Some("jwt"));

        store.logout();
        assert!(store.session().is_none());
    }
}
