use embedded_hal::i2c::I2c;

use crate::{
    command::{Command, RegisterSelection},
    error::Error,
    sender::SendCommand,
    utils::BitOps,
};

// I2C to parallel:
// P7 -> P0
// DB7/DB6/DB5/DB4/P3/EN/RW/RS
//
// P3 is held high in every frame, RW is held low (write only)

const RS_BIT: u8 = 0;
const EN_BIT: u8 = 2;
const P3_HIGH: u8 = 0b0000_1000;

const NIBBLE_MASK: u8 = 0b1111_0000;

/// Sender for HD44780 behind a PCF8574 I2C backpack, running the controller in 4 bit mode
///
/// It borrows the bus exclusively, and talks to a single device address fixed at construction.
pub struct I2cSender<'a, I2cLcd: I2c> {
    i2c: &'a mut I2cLcd,
    addr: u8,
}

impl<'a, I2cLcd: I2c> I2cSender<'a, I2cLcd> {
    /// The usual address of a PCF8574T backpack with A0~A2 left open
    pub const DEFAULT_ADDRESS: u8 = 0x27;

    /// Bind a sender to an initialized bus and a 7 bit device address
    pub fn new(i2c: &'a mut I2cLcd, addr: u8) -> Self {
        Self { i2c, addr }
    }

    /// Device address this sender writes to
    pub fn address(&self) -> u8 {
        self.addr
    }
}

impl<'a, I2cLcd: I2c> SendCommand for I2cSender<'a, I2cLcd> {
    type Error = Error<I2cLcd::Error>;

    fn send(&mut self, command: impl Into<Command>) -> Result<(), Self::Error> {
        let command: Command = command.into();
        let I2cSeq(seq) = command.into();

        #[cfg(feature = "defmt")]
        defmt::trace!("lcd frame {:#x}", seq);

        self.i2c.write(self.addr, &seq).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "lcd write failed, {} {:#x} to {:#x}",
                command.get_register_selection(),
                command.get_data(),
                self.addr
            );

            Error::BusTransferFailure(e)
        })
    }
}

/// The four backpack bytes of one controller byte:
/// upper nibble with EN high, then low, then lower nibble with EN high, then low.
/// The controller latches on each falling edge of EN.
struct I2cSeq([u8; 4]);

impl From<Command> for I2cSeq {
    fn from(command: Command) -> Self {
        let mut disabled = P3_HIGH;
        if command.get_register_selection() == RegisterSelection::Data {
            disabled.set_bit(RS_BIT);
        }

        let mut enabled = disabled;
        enabled.set_bit(EN_BIT);

        let data = command.get_data();
        let upper = data & NIBBLE_MASK;
        let lower = (data << 4) & NIBBLE_MASK;

        I2cSeq([
            upper | enabled,
            upper | disabled,
            lower | enabled,
            lower | disabled,
        ])
    }
}
