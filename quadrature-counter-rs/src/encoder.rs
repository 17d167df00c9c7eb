//! Interrupt-driven front end for [`QuadratureCounter`].
//!
//! [`EncoderChannel`] is the body of one channel's interrupt handler: it
//! masks its own line, records the edge, and re-arms the line for the
//! opposite edge. [`QuadratureEncoder`] bundles the two channels for setup.

use crate::counter::QuadratureCounter;
use crate::error::EncoderError;
use crate::state::{Channel, Edge};

/// One external interrupt line, armable for a single edge at a time.
///
/// Implement this for the HAL's GPIO interrupt API. `enable` replaces any
/// previously armed edge; `disable` masks the line until the next `enable`.
pub trait InterruptLine {
    type Error;

    /// Unmask the line, triggering on `edge`.
    fn enable(&mut self, edge: Edge) -> Result<(), Self::Error>;

    /// Mask the line.
    fn disable(&mut self) -> Result<(), Self::Error>;
}

/// Handler state for a single encoder channel.
///
/// Owns the channel's interrupt line and borrows the shared counter, so the
/// two channels can be moved into separate interrupt contexts.
pub struct EncoderChannel<'a, L> {
    line: L,
    channel: Channel,
    counter: &'a QuadratureCounter,
}

impl<'a, L> EncoderChannel<'a, L>
where
    L: InterruptLine,
{
    pub fn new(line: L, channel: Channel, counter: &'a QuadratureCounter) -> Self {
        Self {
            line,
            channel,
            counter,
        }
    }

    /// Arm the line for the edge the channel is currently waiting for.
    pub fn arm(&mut self) -> Result<(), EncoderError<L::Error>> {
        let edge = self.counter.armed_edge(self.channel);
        self.enable(edge)
    }

    /// Service one interrupt on this channel.
    ///
    /// Call from the line's interrupt handler. The line stays masked while
    /// the counter is updated and is re-armed for the opposite edge before
    /// returning.
    pub fn on_interrupt(&mut self) -> Result<(), EncoderError<L::Error>> {
        let channel = self.channel;
        self.line
            .disable()
            .map_err(|e| EncoderError::Line(channel, e))?;

        let next = self.counter.on_edge(channel);
        self.enable(next)
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn counter(&self) -> &'a QuadratureCounter {
        self.counter
    }

    /// Give back the interrupt line.
    pub fn release(self) -> L {
        self.line
    }

    fn enable(&mut self, edge: Edge) -> Result<(), EncoderError<L::Error>> {
        let channel = self.channel;
        self.line
            .enable(edge)
            .map_err(|e| EncoderError::Line(channel, e))
    }
}

/// Both channels of a quadrature encoder sharing one counter.
///
/// # Example
///
/// ```ignore
/// use quadrature_counter::{QuadratureCounter, QuadratureEncoder};
///
/// static COUNTER: QuadratureCounter = QuadratureCounter::new();
///
/// // `line_a` and `line_b` implement `InterruptLine` for the board's HAL.
/// let mut encoder = QuadratureEncoder::new(line_a, line_b, &COUNTER);
/// encoder.initialize()?;
///
/// // Hand each channel to its interrupt handler.
/// let (channel_a, channel_b) = encoder.split();
/// ```
pub struct QuadratureEncoder<'a, A, B> {
    a: EncoderChannel<'a, A>,
    b: EncoderChannel<'a, B>,
}

impl<'a, A, B> QuadratureEncoder<'a, A, B>
where
    A: InterruptLine,
    B: InterruptLine<Error = A::Error>,
{
    /// Bind two interrupt lines to `counter`. No line is armed yet.
    pub fn new(line_a: A, line_b: B, counter: &'a QuadratureCounter) -> Self {
        Self {
            a: EncoderChannel::new(line_a, Channel::A, counter),
            b: EncoderChannel::new(line_b, Channel::B, counter),
        }
    }

    /// Arm both lines for their watched edge (rising, straight after
    /// construction).
    ///
    /// The lines must already be routed to handlers that end up in
    /// [`on_interrupt_a`](Self::on_interrupt_a) /
    /// [`on_interrupt_b`](Self::on_interrupt_b); this is not checked.
    pub fn initialize(&mut self) -> Result<(), EncoderError<A::Error>> {
        self.a.arm()?;
        self.b.arm()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("quadrature encoder armed");

        Ok(())
    }

    /// Service an interrupt on channel A.
    pub fn on_interrupt_a(&mut self) -> Result<(), EncoderError<A::Error>> {
        self.a.on_interrupt()
    }

    /// Service an interrupt on channel B.
    pub fn on_interrupt_b(&mut self) -> Result<(), EncoderError<A::Error>> {
        self.b.on_interrupt()
    }

    pub fn count(&self) -> i32 {
        self.a.counter().count()
    }

    pub fn set_count(&self, value: i32) {
        self.a.counter().set_count(value);
    }

    pub fn reset_count(&self) {
        self.a.counter().reset_count();
    }

    /// Separate the channels so each can live in its own interrupt context.
    pub fn split(self) -> (EncoderChannel<'a, A>, EncoderChannel<'a, B>) {
        (self.a, self.b)
    }
}
