//! Append-only, in-process record of applied events.

use crate::event::Event;

/// Ordered audit trail of events.
///
/// Owned by the caller rather than shared: operations hand back the events they
/// produced and the caller decides whether to keep them.
#[derive(Debug, Clone)]
pub struct Journal<E> {
    entries: Vec<E>,
}

impl<E: Event> Journal<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: E) {
        self.entries.push(event);
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Events of a given type, in recording order.
    pub fn of_type<'a>(&'a self, event_type: &'a str) -> impl Iterator<Item = &'a E> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.event_type() == event_type)
    }
}

impl<E: Event + core::fmt::Display> Journal<E> {
    /// Human-readable audit lines, one per event.
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl<E> Default for Journal<E> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<E: Event> Extend<E> for Journal<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a, E> IntoIterator for &'a Journal<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
