// ============================================================================
// ROUTE GUARD - Autorización por rol (decisión pura + redirect)
// ============================================================================

use yew_router::prelude::*;

use crate::models::{Role, Session};
use crate::routes::{ClienteRoute, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToUnauthorized,
}

pub fn authorize(session: Option<&Session>, permitted: &[Role]) -> GuardDecision {
    match session {
        None => GuardDecision::RedirectToLogin,
        Some(session) if permitted.contains(&session.role) => GuardDecision::Allow,
        Some(_) => GuardDecision::RedirectToUnauthorized,
    }
}

/// Destino después del login según el rol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    AdminDashboard,
    ClientMenu,
    Unauthorized,
}

impl Landing {
    pub fn for_role(role: &Role) -> Self {
        match role {
            Role::Admin => Landing::AdminDashboard,
            Role::Cliente => Landing::ClientMenu,
            Role::Unknown(_) => Landing::Unauthorized,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Landing::AdminDashboard => Route::AdminRoot.to_path(),
            Landing::ClientMenu => ClienteRoute::Menu.to_path(),
            Landing::Unauthorized => Route::Unauthorized.to_path(),
        }
    }

    pub fn navigate(&self, navigator: &Navigator) {
        log::info!("➡️ Redirigiendo a {}", self.path());
        match self {
            Landing::AdminDashboard => navigator.push(&Route::AdminRoot),
            Landing::ClientMenu => navigator.push(&ClienteRoute::Menu),
            Landing::Unauthorized => navigator.push(&Route::Unauthorized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session {
            email: "a@b.com".into(),
            token: "jwt".into(),
            role,
            user_id: None,
            display_name: None,
        }
    }

    #[test]
    fn every_role_and_session_combination() {
        let roles = [
            Role::Admin,
            Role::Cliente,
            Role::Unknown("EMPLEADO".into()),
        ];
        let permitted_sets: [&[Role]; 3] = [&[Role::Admin], &[Role::Cliente], &[Role::Admin, Role::Cliente]];

        for permitted in permitted_sets {
            assert_eq!(authorize(None, permitted), GuardDecision::RedirectToLogin);

            for role in &roles {
                let session = session(role.clone());
                let expected = if permitted.contains(role) {
                    GuardDecision::Allow
                } else {
                    GuardDecision::RedirectToUnauthorized
                };
                assert_eq!(authorize(Some(&session), permitted), expected);
            }
        }
    }

    #[test]
    fn unknown_role_is_never_allowed() {
        let session = session(Role::Unknown("ADMIN ".into()));
        assert_eq!(
            authorize(Some(&session), &[Role::Admin]),
            GuardDecision::RedirectToUnauthorized
        );
    }

    #[test]
    fn login_redirects_by_role() {
        assert_eq!(Landing::for_role(&Role::parse("ADMIN")).path(), "/dashboard/admin");
        assert_eq!(Landing::for_role(&Role::parse("CLIENTE")).path(), "/dashboard/cliente/menu");
        assert_eq!(Landing::for_role(&Role::parse("OTRO")).path(), "/unauthorized");
    }

    #[test]
    fn lowercase_or_padded_roles_are_refused() {
        assert_eq!(Landing::for_role(&Role::parse("admin")).path(), "/unauthorized");
        assert_eq!(Landing::for_role(&Role::parse(" CLIENTE ")).path(), "/unauthorized");

        let session = session(Role::parse("admin"));
        assert_eq!(
            authorize(Some(&session), &[Role::Admin]),
            GuardDecision::RedirectToUnauthorized
        );
    }
}
