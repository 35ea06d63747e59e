//! Event system for store notifications.
//!
//! ## Learning: Observer Pattern in Rust
//!
//! Rust's ownership model makes traditional observer patterns tricky.
//! We use `tokio::sync::broadcast` for a safe, async-friendly event bus:
//! events are values, subscribers receive clones, and nobody holds a
//! reference into the store.

use tokio::sync::broadcast;

use crate::field::FieldId;

/// Something that changed in the form.
///
/// Every successful store action emits exactly one event. The `revision`
/// is the snapshot revision after the change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field was appended (and selected)
    FieldAdded { id: FieldId, revision: u64 },
    /// A field's attributes changed
    FieldUpdated { id: FieldId, revision: u64 },
    /// A field was removed
    FieldDeleted { id: FieldId, revision: u64 },
    /// The field order changed
    FieldsReordered { revision: u64 },
    /// The selection pointer moved
    SelectionChanged {
        selected: Option<FieldId>,
        revision: u64,
    },
    /// Form-level settings changed
    SettingsChanged { revision: u64 },
    /// The form title changed
    TitleChanged { revision: u64 },
}

impl FormEvent {
    /// Returns the snapshot revision this event refers to.
    pub fn revision(&self) -> u64 {
        match self {
            FormEvent::FieldAdded { revision, .. }
            | FormEvent::FieldUpdated { revision, .. }
            | FormEvent::FieldDeleted { revision, .. }
            | FormEvent::FieldsReordered { revision }
            | FormEvent::SelectionChanged { revision, .. }
            | FormEvent::SettingsChanged { revision }
            | FormEvent::TitleChanged { revision } => *revision,
        }
    }
}

/// Event bus for broadcasting form events.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<FormEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    pub fn new() -> Self {
        // Capacity of 256 events in the buffer
        let (sender, _) = broadcast::channel(256);
        Self { sender }
    }

    /// Emits an event to all subscribers.
    pub fn emit(&self, event: FormEvent) {
        // No receivers is fine
        let _ = self.sender.send(event);
    }

    /// Subscribes to events.
    ///
    /// Returns a receiver that will get all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<FormEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper for processing events asynchronously.
///
/// ## Example
///
/// ```ignore
/// let mut handler = EventHandler::new(store.subscribe());
///
/// tokio::spawn(async move {
///     while let Some(event) = handler.next().await {
///         if let FormEvent::FieldAdded { id, .. } = event {
///             tracing::info!("added {id}");
///         }
///     }
/// });
/// ```
pub struct EventHandler {
    receiver: broadcast::Receiver<FormEvent>,
}

impl EventHandler {
    /// Creates a new event handler.
    pub fn new(receiver: broadcast::Receiver<FormEvent>) -> Self {
        Self { receiver }
    }

    /// Waits for the next event.
    pub async fn next(&mut self) -> Option<FormEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!("Event handler lagged, missed {} events", n);
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Returns the next buffered event without waiting.
    pub fn try_next(&mut self) -> Option<FormEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    tracing::warn!("Event handler lagged, missed {} events", n);
                    continue;
                }
                Err(_) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_bus() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.emit(FormEvent::SettingsChanged { revision: 1 });

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, FormEvent::SettingsChanged { revision: 1 }));
    }

    #[tokio::test]
    async fn test_multiple_subscribers() {
        let bus = EventBus::new();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.emit(FormEvent::TitleChanged { revision: 3 });

        assert_eq!(rx1.recv().await.unwrap().revision(), 3);
        assert_eq!(rx2.recv().await.unwrap().revision(), 3);
    }

    #[tokio::test]
    async fn test_handler_ends_when_bus_dropped() {
        let bus = EventBus::new();
        let mut handler = EventHandler::new(bus.subscribe());

        bus.emit(FormEvent::FieldsReordered { revision: 2 });
        drop(bus);

        assert_eq!(handler.next().await, Some(FormEvent::FieldsReordered { revision: 2 }));
        assert_eq!(handler.next().await, None);
    }

    #[test]
    fn test_try_next_does_not_block() {
        let bus = EventBus::new();
        let mut handler = EventHandler::new(bus.subscribe());
        assert_eq!(handler.try_next(), None);

        bus.emit(FormEvent::SettingsChanged { revision: 1 });
        assert_eq!(handler.try_next(), Some(FormEvent::SettingsChanged { revision: 1 }));
    }
}
