//! Generation counter for discarding stale fetch responses.
//!
//! The caller bumps the generation each time it starts a fetch for a new
//! handle and keeps the returned ticket with the in-flight request. When
//! the response arrives, `Ticket::is_current` tells the caller whether the
//! result may still be applied or belongs to an abandoned request.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

#[derive(Debug, Clone, Default)]
pub struct Generation {
    latest: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct Ticket {
    latest: Arc<AtomicU64>,
    id: u64,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch generation, invalidating all earlier tickets.
    pub fn next(&self) -> Ticket {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            latest: self.latest.clone(),
            id,
        }
    }
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn latest_ticket_is_current() {
        let gen = Generation::new();
        let ticket = gen.next();
        assert!(ticket.is_current());
    }

    #[test]
    fn next_generation_invalidates_older_tickets() {
        let gen = Generation::new();
        let slow_response_for_a = gen.next();
        let current_for_b = gen.next();

        // The slow response for handle A must not overwrite B's state.
        assert!(!slow_response_for_a.is_current());
        assert!(current_for_b.is_current());
    }

    #[test]
    fn tickets_survive_cloning_the_generation() {
        let gen = Generation::new();
        let ticket = gen.next();
        let gen2 = gen.clone();
        assert!(ticket.is_current());
        gen2.next();
        assert!(!ticket.is_current());
    }
}
