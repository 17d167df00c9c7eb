//! Signal levels, edges and the quadrature truth table.
//!
//! Each channel is a two-state machine: while its latch reads
//! [`Level::Low`] it is armed for a [`Edge::Rising`] edge, while it reads
//! [`Level::High`] it is armed for a [`Edge::Falling`] edge. Firing an edge
//! flips the latch and therefore re-arms the channel for the opposite edge.

/// One of the two encoder phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    A,
    B,
}

impl Channel {
    /// The opposite phase.
    pub const fn other(self) -> Self {
        match self {
            Channel::A => Channel::B,
            Channel::B => Channel::A,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Channel::A => 0,
            Channel::B => 1,
        }
    }
}

/// Last-known level of a channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    #[default]
    Low,
    High,
}

impl From<bool> for Level {
    /// `true` is [`Level::High`].
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl Level {
    /// The edge a channel sitting at this level is waiting for.
    pub const fn armed_edge(self) -> Edge {
        match self {
            Level::Low => Edge::Rising,
            Level::High => Edge::Falling,
        }
    }
}

/// Signal transition a channel can be armed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Rising,
    Falling,
}

impl Edge {
    /// Level of the line once this edge has happened.
    pub const fn level_after(self) -> Level {
        match self {
            Edge::Rising => Level::High,
            Edge::Falling => Level::Low,
        }
    }

    /// The edge to watch for after this one.
    pub const fn opposite(self) -> Self {
        match self {
            Edge::Rising => Edge::Falling,
            Edge::Falling => Edge::Rising,
        }
    }
}

/// Rotation sense of a single edge.
///
/// Forward rotation counts down, reverse rotation counts up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// Amount this direction adds to the pulse count.
    pub const fn delta(self) -> i32 {
        match self {
            Direction::Forward => -1,
            Direction::Reverse => 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Truth table
// ---------------------------------------------------------------------------
//
// One rule per handler. The sign differs per transition, so each rule is kept
// separate rather than folded into a parity expression.

/// Channel A went high; `b` is the latched level of channel B.
pub const fn a_rising(b: Level) -> Direction {
    match b {
        Level::Low => Direction::Forward,
        Level::High => Direction::Reverse,
    }
}

/// Channel A went low; `b` is the latched level of channel B.
pub const fn a_falling(b: Level) -> Direction {
    match b {
        Level::High => Direction::Forward,
        Level::Low => Direction::Reverse,
    }
}

/// Channel B went high; `a` is the latched level of channel A.
pub const fn b_rising(a: Level) -> Direction {
    match a {
        Level::High => Direction::Forward,
        Level::Low => Direction::Reverse,
    }
}

/// Channel B went low; `a` is the latched level of channel A.
pub const fn b_falling(a: Level) -> Direction {
    match a {
        Level::Low => Direction::Forward,
        Level::High => Direction::Reverse,
    }
}

/// Dispatch an edge on `channel` to its rule.
///
/// `other` is the latched level of the opposite channel.
pub const fn decode(channel: Channel, edge: Edge, other: Level) -> Direction {
    match (channel, edge) {
        (Channel::A, Edge::Rising) => a_rising(other),
        (Channel::A, Edge::Falling) => a_falling(other),
        (Channel::B, Edge::Rising) => b_rising(other),
        (Channel::B, Edge::Falling) => b_falling(other),
    }
}
