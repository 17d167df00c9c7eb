//! Shared pulse count and signal latches.
//!
//! [`QuadratureCounter`] is the state both edge handlers write to. All of it
//! sits behind one [`critical_section::Mutex`], so a handler for channel A
//! that is interrupted by the handler for channel B can never lose or tear
//! an update, and the main context can read the count on targets whose word
//! size is narrower than `i32`.

use core::cell::Cell;

use critical_section::Mutex;

use crate::state::{decode, Channel, Edge, Level};

#[derive(Clone, Copy)]
struct Shared {
    count: i32,
    levels: [Level; 2],
}

/// Signed pulse counter for a two-channel quadrature encoder.
///
/// The counter is usually placed in a `static` and shared by reference with
/// the code that services the two interrupt lines:
///
/// ```
/// use quadrature_counter::{Channel, QuadratureCounter};
///
/// static COUNTER: QuadratureCounter = QuadratureCounter::new();
///
/// // Inside the channel A and channel B handlers:
/// COUNTER.on_edge(Channel::A);
/// COUNTER.on_edge(Channel::B);
///
/// // Anywhere else:
/// assert_eq!(COUNTER.count(), -2);
/// ```
pub struct QuadratureCounter {
    shared: Mutex<Cell<Shared>>,
}

impl Default for QuadratureCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadratureCounter {
    /// Count of zero, both channels latched low (armed for rising edges).
    pub const fn new() -> Self {
        Self {
            shared: Mutex::new(Cell::new(Shared {
                count: 0,
                levels: [Level::Low; 2],
            })),
        }
    }

    // -----------------------------------------------------------------------
    // Count access
    // -----------------------------------------------------------------------

    /// Current signed pulse count.
    pub fn count(&self) -> i32 {
        critical_section::with(|cs| self.shared.borrow(cs).get().count)
    }

    /// Overwrite the count. Subsequent edges apply on top of `value`.
    pub fn set_count(&self, value: i32) {
        critical_section::with(|cs| {
            let cell = self.shared.borrow(cs);
            let mut shared = cell.get();
            shared.count = value;
            cell.set(shared);
        });
    }

    /// Shorthand for `set_count(0)`.
    pub fn reset_count(&self) {
        self.set_count(0);
    }

    /// Return the count and zero it in one critical section.
    ///
    /// Edges that land after the call are counted towards the next one, so
    /// summing successive results never loses a pulse.
    pub fn take_count(&self) -> i32 {
        critical_section::with(|cs| {
            let cell = self.shared.borrow(cs);
            let mut shared = cell.get();
            let count = shared.count;
            shared.count = 0;
            cell.set(shared);
            count
        })
    }

    // -----------------------------------------------------------------------
    // Channel state
    // -----------------------------------------------------------------------

    /// Last latched level of `channel`.
    pub fn level(&self, channel: Channel) -> Level {
        critical_section::with(|cs| self.shared.borrow(cs).get().levels[channel.index()])
    }

    /// Seed both latches from the lines' real levels.
    ///
    /// Call before arming when the encoder may rest with a channel high
    /// (pull-up wiring), otherwise the first edge on that channel is missed.
    /// The count is left untouched.
    pub fn sync_levels(&self, a: Level, b: Level) {
        critical_section::with(|cs| {
            let cell = self.shared.borrow(cs);
            let mut shared = cell.get();
            shared.levels = [a, b];
            cell.set(shared);
        });
    }

    /// Edge `channel` is currently waiting for.
    pub fn armed_edge(&self, channel: Channel) -> Edge {
        self.level(channel).armed_edge()
    }

    // -----------------------------------------------------------------------
    // Edge handling
    // -----------------------------------------------------------------------

    /// Record that `channel` saw the edge it was armed for.
    ///
    /// Flips the channel's latch, decodes the direction against the other
    /// channel's latch and applies the ±1 delta. Returns the edge the
    /// channel must be re-armed for.
    ///
    /// Must be called once per delivered edge and never concurrently for the
    /// same channel; the caller masks the channel's own interrupt line while
    /// this runs.
    pub fn on_edge(&self, channel: Channel) -> Edge {
        let (edge, _count) = critical_section::with(|cs| {
            let cell = self.shared.borrow(cs);
            let mut shared = cell.get();

            let edge = shared.levels[channel.index()].armed_edge();
            shared.levels[channel.index()] = edge.level_after();

            let other = shared.levels[channel.other().index()];
            let direction = decode(channel, edge, other);
            shared.count = shared.count.wrapping_add(direction.delta());

            cell.set(shared);
            (edge, shared.count)
        });

        #[cfg(feature = "defmt")]
        defmt::trace!("{} {}: count={}", channel, edge, _count);

        edge.opposite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(counter: &QuadratureCounter, edges: &[Channel]) {
        for &channel in edges {
            counter.on_edge(channel);
        }
    }

    #[test]
    fn starts_at_zero_armed_for_rising() {
        let counter = QuadratureCounter::new();
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.armed_edge(Channel::A), Edge::Rising);
        assert_eq!(counter.armed_edge(Channel::B), Edge::Rising);
    }

    #[test]
    fn forward_cycle_counts_down_four() {
        // A rises (B low), B rises (A high), A falls (B high), B falls (A low).
        let counter = QuadratureCounter::new();
        feed(&counter, &[Channel::A, Channel::B, Channel::A, Channel::B]);
        assert_eq!(counter.count(), -4);
        assert_eq!(counter.level(Channel::A), Level::Low);
        assert_eq!(counter.level(Channel::B), Level::Low);
    }

    #[test]
    fn reverse_cycle_counts_up_four() {
        // B leads: B rises (A low), A rises (B high), B falls (A high), A falls (B low).
        let counter = QuadratureCounter::new();
        feed(&counter, &[Channel::B, Channel::A, Channel::B, Channel::A]);
        assert_eq!(counter.count(), 4);
    }

    #[test]
    fn each_forward_edge_moves_by_one() {
        let counter = QuadratureCounter::new();
        let mut expected = 0;
        for channel in [Channel::A, Channel::B, Channel::A, Channel::B, Channel::A] {
            counter.on_edge(channel);
            expected -= 1;
            assert_eq!(counter.count(), expected);
        }
    }

    #[test]
    fn chatter_on_one_channel_nets_zero() {
        let counter = QuadratureCounter::new();
        feed(&counter, &[Channel::A, Channel::A, Channel::A, Channel::A]);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn direction_reversal_mid_cycle() {
        let counter = QuadratureCounter::new();
        // Two forward steps, then back the way we came.
        feed(&counter, &[Channel::A, Channel::B]);
        assert_eq!(counter.count(), -2);
        feed(&counter, &[Channel::B, Channel::A]);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn on_edge_returns_opposite_edge_and_updates_latch() {
        let counter = QuadratureCounter::new();
        assert_eq!(counter.on_edge(Channel::A), Edge::Falling);
        assert_eq!(counter.level(Channel::A), Level::High);
        assert_eq!(counter.armed_edge(Channel::A), Edge::Falling);
        assert_eq!(counter.level(Channel::B), Level::Low);

        assert_eq!(counter.on_edge(Channel::A), Edge::Rising);
        assert_eq!(counter.level(Channel::A), Level::Low);
    }

    #[test]
    fn reset_count_returns_zero() {
        let counter = QuadratureCounter::new();
        feed(&counter, &[Channel::A, Channel::B, Channel::A]);
        counter.reset_count();
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn set_count_then_forward_edge() {
        let counter = QuadratureCounter::new();
        counter.set_count(42);
        counter.on_edge(Channel::A);
        assert_eq!(counter.count(), 41);
    }

    #[test]
    fn set_count_keeps_latches() {
        let counter = QuadratureCounter::new();
        counter.on_edge(Channel::A);
        counter.set_count(7);
        assert_eq!(counter.level(Channel::A), Level::High);
        // B rising with A high is forward.
        counter.on_edge(Channel::B);
        assert_eq!(counter.count(), 6);
    }

    #[test]
    fn sync_levels_rearms_channels() {
        let counter = QuadratureCounter::new();
        counter.sync_levels(Level::High, Level::High);
        assert_eq!(counter.armed_edge(Channel::A), Edge::Falling);
        assert_eq!(counter.armed_edge(Channel::B), Edge::Falling);

        // From the high detent, A falling while B is high is forward.
        assert_eq!(counter.on_edge(Channel::A), Edge::Rising);
        assert_eq!(counter.count(), -1);
    }

    #[test]
    fn take_count_zeroes() {
        let counter = QuadratureCounter::new();
        feed(&counter, &[Channel::B, Channel::A, Channel::B]);
        assert_eq!(counter.take_count(), 3);
        assert_eq!(counter.count(), 0);
        counter.on_edge(Channel::A);
        assert_eq!(counter.take_count(), 1);
    }

    #[test]
    fn count_wraps_instead_of_overflowing() {
        let counter = QuadratureCounter::new();
        counter.set_count(i32::MIN);
        counter.on_edge(Channel::A);
        assert_eq!(counter.count(), i32::MAX);
    }

    #[test]
    fn usable_from_static() {
        static COUNTER: QuadratureCounter = QuadratureCounter::new();
        COUNTER.on_edge(Channel::B);
        assert_eq!(COUNTER.count(), 1);
    }
}
