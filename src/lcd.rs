//! The display controller
//!
//! [`Lcd`] turns screen operations into command/data bytes for a [`SendCommand`],
//! and waits out the settle time of the instructions that need one.
//! Nothing on the display is read back or cached: the cursor position, the display mode
//! and the DDRAM content live only in the controller.

use core::fmt;

use embedded_hal::delay::DelayNs;

use crate::{
    command::{CommandSet, MoveDirection, ShiftType, State, LINE_1_BASE, LINE_2_BASE},
    sender::SendCommand,
};

mod init;

pub use init::Config;

/// Settle time of the native clear and of return home
const LONG_COMMAND_SETTLE_MS: u32 = 2;

/// Glyph sent for characters outside ASCII, a full block on the A00 ROM
const UNMAPPED_CHAR: u8 = 0xFF;

/// An HD44780 display, with exclusive use of its sender and delayer for as long as it lives
///
/// Call [`Lcd::init`] before anything else; until it has run, every other method
/// produces undefined output on the hardware.
pub struct Lcd<'a, 'b, Sender: SendCommand, Delayer: DelayNs> {
    sender: &'a mut Sender,
    delayer: &'b mut Delayer,
    config: Config,
}

impl<'a, 'b, Sender: SendCommand, Delayer: DelayNs> Lcd<'a, 'b, Sender, Delayer> {
    /// Give the sender and delayer back
    pub fn release(self) -> (&'a mut Sender, &'b mut Delayer) {
        (self.sender, self.delayer)
    }

    /// The config this display was created with
    pub fn get_config(&self) -> &Config {
        &self.config
    }

    /// Wait with the borrowed delayer
    pub fn delay_ms(&mut self, ms: u32) {
        self.delayer.delay_ms(ms);
    }

    /// Send a raw byte to the instruction register
    pub fn send_command(&mut self, byte: u8) -> Result<(), Sender::Error> {
        self.sender.send_command(byte)
    }

    /// Send a raw byte to the data register
    pub fn send_data(&mut self, byte: u8) -> Result<(), Sender::Error> {
        self.sender.send_data(byte)
    }

    /// Blank the screen by moving to line 1 home and overwriting [`Config::get_clear_span`] cells with spaces
    ///
    /// This costs more transfers than [`Lcd::clear_native`] but needs no settle delay.
    /// The cursor ends up after the last written space.
    pub fn clear(&mut self) -> Result<(), Sender::Error> {
        self.sender.send(CommandSet::SetDDRAM(LINE_1_BASE))?;

        for _ in 0..self.config.get_clear_span() {
            self.sender.send(CommandSet::WriteDataToRAM(b' '))?;
        }

        Ok(())
    }

    /// Let the controller clear the screen, and wait for it
    pub fn clear_native(&mut self) -> Result<(), Sender::Error> {
        self.sender
            .send_and_delay(CommandSet::ClearDisplay, self.delayer, LONG_COMMAND_SETTLE_MS)
    }

    /// Move cursor to line 1 home, and undo any display shift
    pub fn return_home(&mut self) -> Result<(), Sender::Error> {
        self.sender
            .send_and_delay(CommandSet::ReturnHome, self.delayer, LONG_COMMAND_SETTLE_MS)
    }

    /// Move the cursor to `column` of `row`
    ///
    /// Row 0 is line 1, any other row is line 2; 4 line modules are not addressed correctly.
    /// `column` is not checked against the module width.
    pub fn goto_position(&mut self, column: u8, row: u8) -> Result<(), Sender::Error> {
        let base = match row {
            0 => LINE_1_BASE,
            _ => LINE_2_BASE,
        };

        self.sender.send(CommandSet::SetDDRAM(base | column))
    }

    /// Write every character of `text` at the cursor, stopping at the first `'\0'`
    pub fn put_string(&mut self, text: &str) -> Result<(), Sender::Error> {
        text.chars()
            .take_while(|&ch| ch != '\0')
            .try_for_each(|ch| self.put_char(ch))
    }

    /// Write one character at the cursor
    ///
    /// Characters outside ASCII are shown as a full block.
    pub fn put_char(&mut self, ch: char) -> Result<(), Sender::Error> {
        let byte = match ch.is_ascii() {
            true => ch as u8,
            false => UNMAPPED_CHAR,
        };

        self.put_byte(byte)
    }

    /// Write a character ROM code at the cursor, as is
    pub fn put_byte(&mut self, byte: u8) -> Result<(), Sender::Error> {
        self.sender.send(CommandSet::WriteDataToRAM(byte))
    }

    /// Move to `pos` (column, row), then write `text`
    pub fn write_str_to_pos(&mut self, text: &str, pos: (u8, u8)) -> Result<(), Sender::Error> {
        self.goto_position(pos.0, pos.1)?;
        self.put_string(text)
    }

    /// Switch display, cursor and cursor blink
    pub fn set_display_control(
        &mut self,
        display: State,
        cursor: State,
        cursor_blink: State,
    ) -> Result<(), Sender::Error> {
        self.sender.send(CommandSet::DisplayOnOff {
            display,
            cursor,
            cursor_blink,
        })
    }

    /// Set which way the cursor moves after a write, and whether the display follows
    pub fn set_entry_mode(
        &mut self,
        direction: MoveDirection,
        shift_type: ShiftType,
    ) -> Result<(), Sender::Error> {
        self.sender
            .send(CommandSet::EntryModeSet(direction, shift_type))
    }

    /// Move the cursor, or the cursor together with the display, by one cell
    pub fn shift(
        &mut self,
        shift_type: ShiftType,
        direction: MoveDirection,
    ) -> Result<(), Sender::Error> {
        self.sender
            .send(CommandSet::CursorOrDisplayShift(shift_type, direction))
    }
}

/// Bus errors are flattened into [`fmt::Error`]
impl<'a, 'b, Sender: SendCommand, Delayer: DelayNs> fmt::Write for Lcd<'a, 'b, Sender, Delayer> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put_string(s).map_err(|_| fmt::Error)
    }
}
