//! Event System
//!
//! The simulation reports what happened through event queues instead of
//! calling the presentation layer directly. The app drains them once per
//! frame (currently just to log them).

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    /// Player dropped below the bottom of the screen
    FellOff,
    /// Countdown hit zero
    TimeUp,
}

/// Things the lifecycle reports to the presentation loop
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A level instance was (re)built. `index` is already wrapped.
    LevelLoaded { index: usize },
    /// One or more coins picked up in a single tick
    CoinsCollected { count: usize, score: u32 },
    /// The last coin of the level was taken
    LevelCompleted { index: usize, score: u32 },
    GameOver { cause: GameOverCause, score: u32 },
}

/// Container for all game events
#[derive(Debug, Default)]
pub struct Events {
    pub game: EventQueue<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self { game: EventQueue::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue() {
        let mut queue: EventQueue<i32> = EventQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.iter().count(), 3);

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_events_container() {
        let mut events = Events::new();
        events.game.send(GameEvent::LevelLoaded { index: 0 });
        events.game.send(GameEvent::CoinsCollected { count: 2, score: 2 });
        assert_eq!(events.game.len(), 2);

        // One drain per frame leaves nothing behind for the next
        let drained: Vec<_> = events.game.drain().collect();
        assert_eq!(drained[1], GameEvent::CoinsCollected { count: 2, score: 2 });
        assert!(events.game.is_empty());
    }
}
