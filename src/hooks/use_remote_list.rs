// ============================================================================
// USE REMOTE LIST - Fetch de una colección atado a una dependencia
// ============================================================================
// - Cada cambio de `key` limpia la lista y vuelve a pedir
// - Las respuestas de un `key` anterior se descartan (RequestTracker)
// - Los errores solo se loguean: la lista queda vacía
// ============================================================================

use std::fmt::Debug;
use std::future::Future;

use yew::prelude::*;

use crate::booking::RequestTracker;
use crate::error::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct RemoteList<T> {
    pub items: Vec<T>,
    pub loading: bool,
}

impl<T> RemoteList<T> {
    pub fn pending() -> Self {
        Self { items: Vec::new(), loading: true }
    }

    pub fn loaded(items: Vec<T>) -> Self {
        Self { items, loading: false }
    }
}

#[hook]
pub fn use_remote_list<K, T, F, Fut>(key: K, fetch: F) -> RemoteList<T>
where
    K: PartialEq + Clone + Debug + 'static,
    T: Clone + PartialEq + 'static,
    F: FnOnce(K) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    // La lista guarda el `key` que la produjo
    let state = use_state(|| None::<(K, RemoteList<T>)>);
    let tracker = use_memo((), |_| RequestTracker::new());

    {
        let state = state.clone();
        let tracker = (*tracker).clone();
        use_effect_with(key.clone(), move |key| {
            let ticket = tracker.begin();
            state.set(None);

            let key = key.clone();
            let request = fetch(key.clone());
            let in_flight = tracker.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = request.await;
                if !in_flight.is_current(ticket) {
                    log::debug!("⏭️ Respuesta descartada para {:?}", key);
                    return;
                }
                match result {
                    Ok(items) => {
                        log::info!("📋 {} elementos cargados para {:?}", items.len(), key);
                        state.set(Some((key, RemoteList::loaded(items))));
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando {:?}: {}", key, e);
                        state.set(Some((key, RemoteList::loaded(Vec::new()))));
                    }
                }
            });

            move || tracker.invalidate()
        });
    }

    visible(&state, &key)
}

/// Lo que se muestra para `key`. Hasta que el efecto corra, lo cargado
/// puede pertenecer al `key` anterior y se trata como pendiente.
fn visible<K: PartialEq, T: Clone>(stored: &Option<(K, RemoteList<T>)>, key: &K) -> RemoteList<T> {
    match stored {
        Some((loaded_for, list)) if loaded_for == key => list.clone(),
        _ => RemoteList::pending(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_loaded_yet_is_pending() {
        let stored: Option<(i64, RemoteList<&str>)> = None;
        assert_eq!(visible(&stored, &1), RemoteList::pending());
    }

    #[test]
    fn data_for_the_previous_service_is_never_shown() {
        let stored = Some((1_i64, RemoteList::loaded(vec!["Calle 1", "Calle 2"])));
        let shown = visible(&stored, &2);
        assert!(shown.loading);
        assert!(shown.items.is_empty());
    }

    #[test]
    fn data_for_the_current_key_is_shown() {
        let stored = Some((1_i64, RemoteList::loaded(vec!["Calle 1"])));
        assert_eq!(visible(&stored, &1), RemoteList::loaded(vec!["Calle 1"]));
    }

    #[test]
    fn empty_result_for_the_current_key_is_loaded_not_pending() {
        let stored: Option<(i64, RemoteList<&str>)> = Some((3, RemoteList::loaded(Vec::new())));
        let shown = visible(&stored, &3);
        assert!(!shown.loading);
    }
}
