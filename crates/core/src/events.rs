// Session event bus
// Front ends and loggers subscribe here instead of polling the session

use std::sync::{Arc, Mutex};

use crate::pattern::Pattern;

type Listener = Box<dyn Fn(&StrumEvent) + Send + Sync>;

/// Things that happen during a practice session
#[derive(Debug, Clone, PartialEq)]
pub enum StrumEvent {
    /// A fresh pattern was generated
    PatternGenerated(Pattern),

    /// Muted strums were switched on
    MutingEnabled,

    /// The user quit
    SessionEnded,
}

/// A simple listener-list event bus
pub struct EventBus {
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register a listener, returning its id
    pub fn subscribe<F>(&self, listener: F) -> usize
    where
        F: Fn(&StrumEvent) + Send + Sync + 'static,
    {
        let mut listeners = self.lock();
        let id = listeners.len();
        listeners.push(Box::new(listener));
        id
    }

    /// Deliver an event to every listener in subscription order
    pub fn emit(&self, event: StrumEvent) {
        let listeners = self.lock();
        for listener in listeners.iter() {
            listener(&event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.lock().len()
    }

    // Poisoning is ignored: the list is only ever pushed to
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Listener>> {
        self.listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A reference counted, thread-safe event bus
pub type SharedEventBus = Arc<EventBus>;

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_event_bus() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        let counter_clone = Arc::clone(&counter);
        bus.subscribe(move |event| {
            if let StrumEvent::PatternGenerated(_) = event {
                counter_clone.fetch_add(1, Ordering::SeqCst);
            }
        });

        let pattern = Pattern::new([Symbol::Pause; 8]);
        bus.emit(StrumEvent::PatternGenerated(pattern));
        bus.emit(StrumEvent::MutingEnabled);
        bus.emit(StrumEvent::PatternGenerated(pattern));

        // Only PatternGenerated events are counted
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_cloned_bus_shares_listeners() {
        let bus = EventBus::new();
        let clone = bus.clone();
        clone.subscribe(|_| {});
        assert_eq!(bus.listener_count(), 1);
    }
}
