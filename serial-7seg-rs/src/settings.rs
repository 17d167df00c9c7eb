//! Typed payloads for the decimal and baud-rate commands.

use core::ops::{BitOr, BitOrAssign};

/// Decimal point, colon and apostrophe mask.
///
/// ```text
/// [MSB] (X)(X)(Apos)(Colon)(Digit 4)(Digit 3)(Digit 2)(Digit 1)
/// ```
///
/// A set bit lights the segment. The two top bits are unused and always
/// clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decimals(u8);

impl Decimals {
    pub const NONE: Self = Self(0);
    pub const DIGIT_1: Self = Self(1 << 0);
    pub const DIGIT_2: Self = Self(1 << 1);
    pub const DIGIT_3: Self = Self(1 << 2);
    pub const DIGIT_4: Self = Self(1 << 3);
    pub const COLON: Self = Self(1 << 4);
    pub const APOSTROPHE: Self = Self(1 << 5);
    pub const ALL: Self = Self(0b0011_1111);

    /// Build a mask from a raw byte, dropping the unused top bits.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Decimal point after digit `position` (1–4). Other positions give
    /// [`Decimals::NONE`].
    pub const fn point(position: u8) -> Self {
        match position {
            1..=4 => Self(1 << (position - 1)),
            _ => Self::NONE,
        }
    }
}

impl BitOr for Decimals {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Decimals {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Decimals {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Decimals({=u8:#b})", self.0)
    }
}

/// UART speed of the module, sent as a code byte.
///
/// The module only applies a new rate to its serial port; the I2C link is
/// unaffected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BaudRate {
    Baud2400 = 0,
    Baud4800 = 1,
    /// Factory default.
    #[default]
    Baud9600 = 2,
    Baud14400 = 3,
    Baud19200 = 4,
    Baud38400 = 5,
    Baud57600 = 6,
}

impl BaudRate {
    /// Code byte sent after the baud-rate command.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn bits_per_second(self) -> u32 {
        match self {
            BaudRate::Baud2400 => 2_400,
            BaudRate::Baud4800 => 4_800,
            BaudRate::Baud9600 => 9_600,
            BaudRate::Baud14400 => 14_400,
            BaudRate::Baud19200 => 19_200,
            BaudRate::Baud38400 => 38_400,
            BaudRate::Baud57600 => 57_600,
        }
    }

    /// Inverse of [`code`](Self::code).
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(BaudRate::Baud2400),
            1 => Some(BaudRate::Baud4800),
            2 => Some(BaudRate::Baud9600),
            3 => Some(BaudRate::Baud14400),
            4 => Some(BaudRate::Baud19200),
            5 => Some(BaudRate::Baud38400),
            6 => Some(BaudRate::Baud57600),
            _ => None,
        }
    }
}
