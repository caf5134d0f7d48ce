use std::cell::Cell;
use std::rc::Rc;

/// Marca de una petición en vuelo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Descarta respuestas viejas cuando la dependencia cambia antes de que
/// llegue la respuesta anterior (p. ej. cambiar de servicio rápido).
/// Cada `begin` invalida los tickets emitidos antes.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Rc<Cell<u64>>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestTicket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        RequestTicket(next)
    }

    /// Invalida cualquier petición en vuelo (desmontaje del componente)
    pub fn invalidate(&self) {
        self.latest.set(self.latest.get().wrapping_add(1));
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.get() == ticket.0
    }
}

impl PartialEq for RequestTracker {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.latest, &other.latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_invalidates_older_ones() {
        let tracker = RequestTracker::new();
        let first = tracker.begin();
        assert!(tracker.is_current(first));

        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn invalidate_drops_the_request_in_flight() {
        let tracker = RequestTracker::new();
        let ticket = tracker.begin();
        tracker.invalidate();
        assert!(!tracker.is_current(ticket));
    }

    #[test]
    fn clones_share_the_same_counter() {
        let tracker = RequestTracker::new();
        let in_future = tracker.clone();
        let ticket = in_future.begin();
        tracker.begin();
        assert!(!in_future.is_current(ticket));
    }
}
