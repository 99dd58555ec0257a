//! Built-in sender  
//! If you want to create a new sender, you will need to implement [`SendCommand`] trait

use embedded_hal::delay::DelayNs;

use crate::command::Command;

mod i2c_sender;

pub use i2c_sender::I2cSender;

/// Reference upper bound for one four-byte frame to reach the backpack, in milliseconds
///
/// `embedded-hal` I2C writes take no timeout argument, configure the peripheral with this value.
pub const I2C_WRITE_TIMEOUT_MS: u32 = 100;

/// [`SendCommand`] is the trait a sender should implement to communicate with the hardware
///
/// One call to [`SendCommand::send`] must reach the controller as one uninterrupted unit:
/// both nibbles of the byte, each with its enable pulse, and nothing from another call in between.
pub trait SendCommand {
    /// Failure reported by the underlying transport
    type Error;

    /// Frame a [`Command`] and write it to the hardware
    fn send(&mut self, command: impl Into<Command>) -> Result<(), Self::Error>;

    /// Send `byte` to the instruction register (RS = 0)
    fn send_command(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.send(Command::command(byte))
    }

    /// Send `byte` to the data register (RS = 1)
    fn send_data(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.send(Command::data(byte))
    }

    /// Send command, then wait at least `delay_ms` for the controller to settle
    ///
    /// The delay is skipped when the send fails.
    fn send_and_delay(
        &mut self,
        command: impl Into<Command>,
        delayer: &mut impl DelayNs,
        delay_ms: u32,
    ) -> Result<(), Self::Error> {
        self.send(command)?;
        delayer.delay_ms(delay_ms);
        Ok(())
    }
}
