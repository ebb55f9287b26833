//! The event-source contract the present loop polls.

/// Source of termination requests from the outside world.
///
/// Implementations must not block: a poll drains whatever input is
/// pending and reports whether any of it asked the program to quit.
pub trait EventSource {
    /// Drains pending events and returns true if a quit was requested.
    fn poll_quit_requested(&mut self) -> bool;
}
