//! Async driver for the serial seven-segment display over I2C.
//!
//! [`SegmentDisplay`] turns each operation into exactly one I2C write and
//! keeps the last brightness and decimal mask it sent, so repeating a
//! setting costs no bus traffic.

use embedded_hal_async::i2c::I2c;

use crate::error::DisplayError;
use crate::frame::{number_frame, text_frame};
use crate::registers::{
    CMD_BAUD_RATE, CMD_BRIGHTNESS, CMD_CLEAR, CMD_DECIMALS, INITIAL_BRIGHTNESS,
};
use crate::settings::{BaudRate, Decimals};

/// Four-digit seven-segment display module on an I2C bus.
///
/// The module itself cannot be read back. The driver instead assumes it
/// starts at brightness 254 with no decimals lit, and tracks every setting
/// it has successfully sent since.
///
/// # Example
///
/// ```no_run
/// use serial_7seg::{Decimals, SegmentDisplay, DEFAULT_ADDRESS};
///
/// # async fn example(i2c: impl embedded_hal_async::i2c::I2c) {
/// let mut display = SegmentDisplay::new(i2c, DEFAULT_ADDRESS);
/// display.clear_display().await.unwrap();
/// display.set_brightness(128).await.unwrap();
/// display.set_decimals(Decimals::COLON).await.unwrap();
/// display.send_string("1234").await.unwrap();
/// # }
/// ```
pub struct SegmentDisplay<I2C> {
    i2c: I2C,
    address: u8,
    brightness: u8,
    decimals: Decimals,
}

impl<I2C> SegmentDisplay<I2C>
where
    I2C: I2c,
{
    /// Construct a driver for the module at the 7-bit `address`.
    ///
    /// No I2C traffic is generated.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            brightness: INITIAL_BRIGHTNESS,
            decimals: Decimals::NONE,
        }
    }

    // -----------------------------------------------------------------------
    // Characters
    // -----------------------------------------------------------------------

    /// Show `text` on the four digits, starting at the cursor.
    ///
    /// Always sends exactly four bytes: longer text is cut, shorter text is
    /// padded with blanks.
    pub async fn send_string(&mut self, text: &str) -> Result<(), DisplayError<I2C::Error>> {
        let frame = text_frame(text);
        self.write(&frame).await?;

        #[cfg(feature = "defmt")]
        defmt::debug!("7seg: text {=[u8]:a}", frame);

        Ok(())
    }

    /// Show `value` right-aligned.
    ///
    /// Values outside `-999..=9999` are shown as `----`.
    pub async fn send_number(&mut self, value: i32) -> Result<(), DisplayError<I2C::Error>> {
        let frame = number_frame(value);
        self.write(&frame).await?;

        #[cfg(feature = "defmt")]
        defmt::debug!("7seg: number {} -> {=[u8]:a}", value, frame);

        Ok(())
    }

    /// Blank all digits and move the cursor home.
    ///
    /// The decimal mask is left as it is on the module, and so in the cache.
    pub async fn clear_display(&mut self) -> Result<(), DisplayError<I2C::Error>> {
        self.write(&[CMD_CLEAR]).await
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    /// Set brightness, 0 (dimmest) to 255 (brightest).
    ///
    /// Sends nothing if `value` is the brightness last sent.
    pub async fn set_brightness(&mut self, value: u8) -> Result<(), DisplayError<I2C::Error>> {
        if value == self.brightness {
            return Ok(());
        }

        self.write(&[CMD_BRIGHTNESS, value]).await?;
        self.brightness = value;

        #[cfg(feature = "defmt")]
        defmt::debug!("7seg: brightness {}", value);

        Ok(())
    }

    /// Light the decimal points, colon and apostrophe in `decimals`, and turn
    /// the rest off.
    ///
    /// Sends nothing if `decimals` is the mask last sent.
    pub async fn set_decimals(&mut self, decimals: Decimals) -> Result<(), DisplayError<I2C::Error>> {
        if decimals == self.decimals {
            return Ok(());
        }

        self.write(&[CMD_DECIMALS, decimals.bits()]).await?;
        self.decimals = decimals;

        #[cfg(feature = "defmt")]
        defmt::debug!("7seg: {}", decimals);

        Ok(())
    }

    /// Change the module's UART baud rate. Always sent.
    ///
    /// The module stores the rate in non-volatile memory; it takes effect on
    /// the serial port only.
    pub async fn set_baud_rate(&mut self, rate: BaudRate) -> Result<(), DisplayError<I2C::Error>> {
        self.write(&[CMD_BAUD_RATE, rate.code()]).await?;

        #[cfg(feature = "defmt")]
        defmt::info!("7seg: baud rate {}", rate.bits_per_second());

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Brightness the module is believed to be at.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Decimal mask the module is believed to show.
    pub fn decimals(&self) -> Decimals {
        self.decimals
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Consume the driver and return the I2C peripheral.
    pub fn release(self) -> I2C {
        self.i2c
    }

    async fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError<I2C::Error>> {
        self.i2c.write(self.address, bytes).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::DEFAULT_ADDRESS;
    use embassy_futures::block_on;
    use embedded_hal_async::i2c::{ErrorKind, ErrorType, Operation};

    // ========================================================================
    // Mock I2C bus
    // ========================================================================

    #[derive(Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
        fail_next_write: bool,
    }

    impl ErrorType for MockI2c {
        type Error = ErrorKind;
    }

    impl I2c for MockI2c {
        async fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), ErrorKind> {
            if self.fail_next_write {
                self.fail_next_write = false;
                return Err(ErrorKind::Other);
            }
            for op in operations {
                match op {
                    Operation::Write(bytes) => self.writes.push((address, bytes.to_vec())),
                    Operation::Read(_) => return Err(ErrorKind::Other),
                }
            }
            Ok(())
        }
    }

    fn display() -> SegmentDisplay<MockI2c> {
        SegmentDisplay::new(MockI2c::default(), DEFAULT_ADDRESS)
    }

    fn sent(display: &SegmentDisplay<MockI2c>) -> Vec<Vec<u8>> {
        display.i2c.writes.iter().map(|(_, bytes)| bytes.clone()).collect()
    }

    // ========================================================================
    // Construction
    // ========================================================================

    #[test]
    fn new_sends_nothing_and_assumes_defaults() {
        let display = display();
        assert!(display.i2c.writes.is_empty());
        assert_eq!(display.brightness(), INITIAL_BRIGHTNESS);
        assert_eq!(display.decimals(), Decimals::NONE);
        assert_eq!(display.address(), DEFAULT_ADDRESS);
    }

    #[test]
    fn writes_go_to_configured_address() {
        let mut display = SegmentDisplay::new(MockI2c::default(), 0x30);
        block_on(display.clear_display()).unwrap();
        assert_eq!(display.release().writes, vec![(0x30, vec![CMD_CLEAR])]);
    }

    // ========================================================================
    // Characters
    // ========================================================================

    #[test]
    fn send_string_sends_four_bytes() {
        let mut display = display();
        block_on(display.send_string("ABCD")).unwrap();
        assert_eq!(sent(&display), vec![b"ABCD".to_vec()]);
    }

    #[test]
    fn send_string_pads_and_truncates() {
        let mut display = display();
        block_on(display.send_string("Hi")).unwrap();
        block_on(display.send_string("HELLO")).unwrap();
        block_on(display.send_string("")).unwrap();
        assert_eq!(
            sent(&display),
            vec![b"Hi  ".to_vec(), b"HELL".to_vec(), b"    ".to_vec()]
        );
    }

    #[test]
    fn send_number_right_aligns() {
        let mut display = display();
        block_on(display.send_number(42)).unwrap();
        block_on(display.send_number(-12)).unwrap();
        block_on(display.send_number(10_000)).unwrap();
        assert_eq!(
            sent(&display),
            vec![b"  42".to_vec(), b" -12".to_vec(), b"----".to_vec()]
        );
    }

    #[test]
    fn clear_display_sends_single_command() {
        let mut display = display();
        block_on(display.clear_display()).unwrap();
        assert_eq!(sent(&display), vec![vec![0x76]]);
    }

    // ========================================================================
    // Brightness
    // ========================================================================

    #[test]
    fn brightness_repeat_is_suppressed() {
        let mut display = display();
        block_on(display.set_brightness(100)).unwrap();
        block_on(display.set_brightness(100)).unwrap();
        block_on(display.set_brightness(200)).unwrap();
        assert_eq!(sent(&display), vec![vec![0x7A, 100], vec![0x7A, 200]]);
        assert_eq!(display.brightness(), 200);
    }

    #[test]
    fn initial_brightness_is_suppressed() {
        let mut display = display();
        block_on(display.set_brightness(254)).unwrap();
        assert!(sent(&display).is_empty());

        block_on(display.set_brightness(255)).unwrap();
        assert_eq!(sent(&display), vec![vec![0x7A, 255]]);
    }

    #[test]
    fn failed_brightness_write_is_retried() {
        let mut display = display();
        display.i2c.fail_next_write = true;

        let err = block_on(display.set_brightness(10)).unwrap_err();
        assert!(matches!(err, DisplayError::I2c(ErrorKind::Other)));
        assert_eq!(display.brightness(), INITIAL_BRIGHTNESS);

        block_on(display.set_brightness(10)).unwrap();
        assert_eq!(sent(&display), vec![vec![0x7A, 10]]);
        assert_eq!(display.brightness(), 10);
    }

    // ========================================================================
    // Decimals
    // ========================================================================

    #[test]
    fn decimals_repeat_is_suppressed() {
        let mut display = display();
        let mask = Decimals::DIGIT_2 | Decimals::COLON;
        block_on(display.set_decimals(mask)).unwrap();
        block_on(display.set_decimals(mask)).unwrap();
        assert_eq!(sent(&display), vec![vec![0x77, 0b0001_0010]]);
        assert_eq!(display.decimals(), mask);
    }

    #[test]
    fn empty_decimals_on_fresh_driver_sends_nothing() {
        let mut display = display();
        block_on(display.set_decimals(Decimals::NONE)).unwrap();
        assert!(sent(&display).is_empty());
    }

    #[test]
    fn failed_decimals_write_keeps_cache() {
        let mut display = display();
        display.i2c.fail_next_write = true;
        assert!(block_on(display.set_decimals(Decimals::APOSTROPHE)).is_err());
        assert_eq!(display.decimals(), Decimals::NONE);
    }

    #[test]
    fn clear_does_not_touch_caches() {
        let mut display = display();
        block_on(display.set_decimals(Decimals::COLON)).unwrap();
        block_on(display.clear_display()).unwrap();
        block_on(display.set_decimals(Decimals::COLON)).unwrap();
        assert_eq!(sent(&display), vec![vec![0x77, 0x10], vec![0x76]]);
    }

    // ========================================================================
    // Baud rate
    // ========================================================================

    #[test]
    fn baud_rate_is_never_suppressed() {
        let mut display = display();
        block_on(display.set_baud_rate(BaudRate::Baud9600)).unwrap();
        block_on(display.set_baud_rate(BaudRate::Baud9600)).unwrap();
        block_on(display.set_baud_rate(BaudRate::Baud57600)).unwrap();
        assert_eq!(
            sent(&display),
            vec![vec![0x7F, 2], vec![0x7F, 2], vec![0x7F, 6]]
        );
    }

    #[test]
    fn bus_error_propagates_from_every_operation() {
        let mut display = display();
        display.i2c.fail_next_write = true;
        assert!(block_on(display.send_string("x")).is_err());
        display.i2c.fail_next_write = true;
        assert!(block_on(display.clear_display()).is_err());
        display.i2c.fail_next_write = true;
        assert!(block_on(display.set_baud_rate(BaudRate::Baud2400)).is_err());
        assert!(sent(&display).is_empty());
    }
}
