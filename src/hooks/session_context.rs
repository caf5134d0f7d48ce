// ============================================================================
// SESSION CONTEXT - Compartir la sesión entre componentes
// ============================================================================
// Un único provider en la raíz de la app; login/logout son los únicos
// mutadores. La sesión se guarda en localStorage para sobrevivir recargas.
// ============================================================================

use yew::prelude::*;

use crate::models::Session;
use crate::services::ApiClient;
use crate::stores::SessionStore;
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_SESSION};

#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub state: UseStateHandle<SessionStore>,
    pub login: Callback<Session>,
    pub logout: Callback<()>,
}

impl SessionHandle {
    pub fn session(&self) -> Option<&Session> {
        self.state.session()
    }

    /// Cliente API con el token de la sesión actual (anónimo si no hay)
    pub fn api(&self) -> ApiClient {
        match self.state.token() {
            Some(token) => ApiClient::with_token(token),
            None => ApiClient::new(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Provider que envuelve la app y expone `SessionHandle`
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_state(|| {
        let restored = load_from_storage::<Session>(STORAGE_KEY_SESSION);
        if let Some(session) = &restored {
            log::info!("✅ Sesión restaurada: {} ({})", session.email, session.role);
        }
        SessionStore::with_session(restored)
    });

    let login = {
        let state = state.clone();
        Callback::from(move |session: Session| {
            if let Err(e) = save_to_storage(STORAGE_KEY_SESSION, &session) {
                log::warn!("⚠️ No se pudo guardar la sesión: {}", e);
            }
            let mut store = (*state).clone();
            store.login(session);
            state.set(store);
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            log::info!("👋 Logout");
            remove_from_storage(STORAGE_KEY_SESSION);
            let mut store = (*state).clone();
            store.logout();
            state.set(store);
        })
    };

    let handle = SessionHandle { state, login, logout };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}

/// Sesión actual. Fuera de un `SessionProvider` devuelve un handle
/// aislado sin sesión (y lo registra como error).
#[hook]
pub fn use_session() -> SessionHandle {
    let context = use_context::<SessionHandle>();
    let detached = use_state(SessionStore::default);

    context.unwrap_or_else(|| {
        log::error!("❌ use_session() llamado fuera de SessionProvider");
        let login = {
            let detached = detached.clone();
            Callback::from(move |session: Session| {
                detached.set(SessionStore::with_session(Some(session)))
            })
        };
        let logout = {
            let detached = detached.clone();
            Callback::from(move |_| detached.set(SessionStore::default()))
        };
        SessionHandle { state: detached, login, logout }
    })
}
