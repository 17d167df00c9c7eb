//! Executor-driven edge watching.
//!
//! On async runtimes the GPIO driver already turns edge interrupts into
//! wakeups, so instead of an [`InterruptLine`](crate::InterruptLine) a
//! channel can simply await the edge it is armed for.

use core::convert::Infallible;

use embedded_hal_async::digital::Wait;

use crate::counter::QuadratureCounter;
use crate::error::EncoderError;
use crate::state::{Channel, Edge};

/// Follow one encoder channel forever.
///
/// Awaits the edge `channel` is armed for, records it in `counter`, and
/// switches to the opposite edge, mirroring what the interrupt handler of
/// [`EncoderChannel`](crate::EncoderChannel) does.
///
/// This is a regular `async fn`, not an executor task. Run one per channel
/// inside a thin concrete task wrapper:
///
/// ```ignore
/// static COUNTER: QuadratureCounter = QuadratureCounter::new();
///
/// #[embassy_executor::task(pool_size = 2)]
/// async fn channel_task(mut pin: Input<'static>, channel: Channel) {
///     if let Err(e) = watch_channel(&mut pin, channel, &COUNTER).await {
///         defmt::error!("{}", e);
///     }
/// }
/// ```
///
/// # Errors
///
/// Returns only when the pin reports an error.
pub async fn watch_channel<P>(
    pin: &mut P,
    channel: Channel,
    counter: &QuadratureCounter,
) -> Result<Infallible, EncoderError<P::Error>>
where
    P: Wait,
{
    let mut edge = counter.armed_edge(channel);

    loop {
        let waited = match edge {
            Edge::Rising => pin.wait_for_rising_edge().await,
            Edge::Falling => pin.wait_for_falling_edge().await,
        };
        waited.map_err(|e| EncoderError::Line(channel, e))?;

        edge = counter.on_edge(channel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embedded_hal::digital::{ErrorKind, ErrorType};

    /// Pin that reports a scripted number of edges, then fails.
    struct ScriptedPin {
        remaining: usize,
        waited: Vec<Edge>,
    }

    impl ScriptedPin {
        fn new(edges: usize) -> Self {
            Self {
                remaining: edges,
                waited: Vec::new(),
            }
        }

        fn next(&mut self, edge: Edge) -> Result<(), ErrorKind> {
            if self.remaining == 0 {
                return Err(ErrorKind::Other);
            }
            self.remaining -= 1;
            self.waited.push(edge);
            Ok(())
        }
    }

    impl ErrorType for ScriptedPin {
        type Error = ErrorKind;
    }

    impl Wait for ScriptedPin {
        async fn wait_for_high(&mut self) -> Result<(), ErrorKind> {
            Err(ErrorKind::Other)
        }

        async fn wait_for_low(&mut self) -> Result<(), ErrorKind> {
            Err(ErrorKind::Other)
        }

        async fn wait_for_rising_edge(&mut self) -> Result<(), ErrorKind> {
            self.next(Edge::Rising)
        }

        async fn wait_for_falling_edge(&mut self) -> Result<(), ErrorKind> {
            self.next(Edge::Falling)
        }

        async fn wait_for_any_edge(&mut self) -> Result<(), ErrorKind> {
            Err(ErrorKind::Other)
        }
    }

    #[test]
    fn alternates_edges_and_counts() {
        let counter = QuadratureCounter::new();
        let mut pin = ScriptedPin::new(3);

        let result = block_on(watch_channel(&mut pin, Channel::A, &counter));

        assert!(matches!(result, Err(EncoderError::Line(Channel::A, ErrorKind::Other))));
        assert_eq!(pin.waited, [Edge::Rising, Edge::Falling, Edge::Rising]);
        // Channel B never moved: A rising counts down, A falling counts up.
        assert_eq!(counter.count(), -1);
        assert_eq!(counter.armed_edge(Channel::A), Edge::Falling);
    }

    #[test]
    fn resumes_from_latched_state() {
        let counter = QuadratureCounter::new();
        counter.on_edge(Channel::B);

        let mut pin = ScriptedPin::new(1);
        let _ = block_on(watch_channel(&mut pin, Channel::B, &counter));

        assert_eq!(pin.waited, [Edge::Falling]);
        assert_eq!(counter.armed_edge(Channel::B), Edge::Rising);
    }

    #[test]
    fn interleaved_watchers_decode_forward_rotation() {
        let counter = QuadratureCounter::new();
        let mut a = ScriptedPin::new(1);
        let mut b = ScriptedPin::new(1);

        // A leads B by one edge at a time.
        for _ in 0..2 {
            a.remaining = 1;
            let _ = block_on(watch_channel(&mut a, Channel::A, &counter));
            b.remaining = 1;
            let _ = block_on(watch_channel(&mut b, Channel::B, &counter));
        }

        assert_eq!(counter.count(), -4);
    }
}
