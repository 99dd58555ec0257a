//! HD44780 instruction set
//!
//! [`CommandSet`] is the typed form of every instruction this driver issues,
//! [`Command`] is what a [`SendCommand`](crate::sender::SendCommand) puts on the wire:
//! one payload byte plus the register it targets.

use crate::utils::{BitOps, BitState};

/// Clear display, set DDRAM address to 0
pub const CLEAR_DISPLAY: u8 = 0b0000_0001;
/// Return cursor to line-1 home, undo display shift
pub const RETURN_HOME: u8 = 0b0000_0010;
/// Entry mode set base opcode
pub const ENTRY_MODE_SET: u8 = 0b0000_0100;
/// Display on/off control base opcode
pub const DISPLAY_CONTROL: u8 = 0b0000_1000;
/// Cursor or display shift base opcode
pub const CURSOR_OR_DISPLAY_SHIFT: u8 = 0b0001_0000;
/// Function set base opcode
pub const FUNCTION_SET: u8 = 0b0010_0000;
/// Set DDRAM address base opcode
pub const SET_DDRAM_ADDR: u8 = 0b1000_0000;

/// DDRAM address of the first cell of line 1
pub const LINE_1_BASE: u8 = 0x00;
/// DDRAM address of the first cell of line 2
pub const LINE_2_BASE: u8 = 0x40;

// bit positions inside the instructions above
const ENTRY_INCREMENT_BIT: u8 = 1;
const ENTRY_SHIFT_BIT: u8 = 0;
const DISPLAY_ON_BIT: u8 = 2;
const CURSOR_ON_BIT: u8 = 1;
const BLINK_ON_BIT: u8 = 0;
const SHIFT_DISPLAY_BIT: u8 = 3;
const SHIFT_RIGHT_BIT: u8 = 2;
const DATA_WIDTH_8_BIT: u8 = 4;
const TWO_LINE_BIT: u8 = 3;
const FONT_5X11_BIT: u8 = 2;

/// Typed HD44780 instructions
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandSet {
    /// Native clear, the controller rewrites all of DDRAM
    ClearDisplay,
    /// Move cursor to line-1 home
    ReturnHome,
    /// Cursor move direction and display shift on write
    EntryModeSet(MoveDirection, ShiftType),
    /// Display, cursor and cursor blink switches
    DisplayOnOff {
        /// whole display
        display: State,
        /// underline cursor
        cursor: State,
        /// blinking block cursor
        cursor_blink: State,
    },
    /// Move the cursor or the whole display by one cell
    CursorOrDisplayShift(ShiftType, MoveDirection),
    /// Interface width, line count and font
    FunctionSet(DataWidth, LineMode, Font),
    /// Set DDRAM address, the address is OR-ed into the opcode unchecked
    SetDDRAM(u8),
    /// Write a byte at the current DDRAM address
    WriteDataToRAM(u8),
}

/// Direction the address counter moves after a write, or a shift goes
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveDirection {
    #[allow(missing_docs)]
    RightToLeft,
    #[allow(missing_docs)]
    #[default]
    LeftToRight,
}

/// Whether a move affects only the cursor, or the whole display
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShiftType {
    #[allow(missing_docs)]
    #[default]
    CursorOnly,
    #[allow(missing_docs)]
    CursorAndDisplay,
}

/// On/off switch
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    #[allow(missing_docs)]
    Off,
    #[allow(missing_docs)]
    #[default]
    On,
}

/// Interface data width
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataWidth {
    #[allow(missing_docs)]
    #[default]
    Bit4,
    /// only used by the wake-up sequence, the backpack wires just DB4~DB7
    Bit8,
}

/// Number of display lines
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineMode {
    #[allow(missing_docs)]
    OneLine,
    #[allow(missing_docs)]
    #[default]
    TwoLine,
}

/// Character font
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    #[allow(missing_docs)]
    #[default]
    Font5x8,
    #[allow(missing_docs)]
    Font5x11,
}

/// Target register of a transfer, driven onto the RS line
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterSelection {
    /// RS = 0, instruction register
    Command,
    /// RS = 1, data register
    Data,
}

/// One byte for one register, ready to be framed by a sender
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    rs: RegisterSelection,
    data: u8,
}

impl Command {
    /// An instruction byte
    pub fn command(data: u8) -> Self {
        Self {
            rs: RegisterSelection::Command,
            data,
        }
    }

    /// A character byte
    pub fn data(data: u8) -> Self {
        Self {
            rs: RegisterSelection::Data,
            data,
        }
    }

    #[allow(missing_docs)]
    pub fn get_register_selection(&self) -> RegisterSelection {
        self.rs
    }

    #[allow(missing_docs)]
    pub fn get_data(&self) -> u8 {
        self.data
    }
}

impl From<State> for BitState {
    fn from(state: State) -> Self {
        match state {
            State::Off => BitState::Clear,
            State::On => BitState::Set,
        }
    }
}

impl From<CommandSet> for Command {
    fn from(command: CommandSet) -> Self {
        match command {
            CommandSet::ClearDisplay => Self::command(CLEAR_DISPLAY),

            CommandSet::ReturnHome => Self::command(RETURN_HOME),

            CommandSet::EntryModeSet(dir, st) => {
                let mut raw_bits = ENTRY_MODE_SET;

                match dir {
                    MoveDirection::RightToLeft => raw_bits.clear_bit(ENTRY_INCREMENT_BIT),
                    MoveDirection::LeftToRight => raw_bits.set_bit(ENTRY_INCREMENT_BIT),
                };

                match st {
                    ShiftType::CursorOnly => raw_bits.clear_bit(ENTRY_SHIFT_BIT),
                    ShiftType::CursorAndDisplay => raw_bits.set_bit(ENTRY_SHIFT_BIT),
                };

                Self::command(raw_bits)
            }

            CommandSet::DisplayOnOff {
                display,
                cursor,
                cursor_blink,
            } => {
                let mut raw_bits = DISPLAY_CONTROL;

                raw_bits.put_bit(DISPLAY_ON_BIT, display.into());
                raw_bits.put_bit(CURSOR_ON_BIT, cursor.into());
                raw_bits.put_bit(BLINK_ON_BIT, cursor_blink.into());

                Self::command(raw_bits)
            }

            CommandSet::CursorOrDisplayShift(st, dir) => {
                let mut raw_bits = CURSOR_OR_DISPLAY_SHIFT;

                match st {
                    ShiftType::CursorOnly => raw_bits.clear_bit(SHIFT_DISPLAY_BIT),
                    ShiftType::CursorAndDisplay => raw_bits.set_bit(SHIFT_DISPLAY_BIT),
                };

                match dir {
                    MoveDirection::RightToLeft => raw_bits.clear_bit(SHIFT_RIGHT_BIT),
                    MoveDirection::LeftToRight => raw_bits.set_bit(SHIFT_RIGHT_BIT),
                };

                Self::command(raw_bits)
            }

            CommandSet::FunctionSet(width, line, font) => {
                let mut raw_bits = FUNCTION_SET;

                match width {
                    DataWidth::Bit4 => raw_bits.clear_bit(DATA_WIDTH_8_BIT),
                    DataWidth::Bit8 => raw_bits.set_bit(DATA_WIDTH_8_BIT),
                };

                match line {
                    LineMode::OneLine => raw_bits.clear_bit(TWO_LINE_BIT),
                    LineMode::TwoLine => raw_bits.set_bit(TWO_LINE_BIT),
                };

                match font {
                    Font::Font5x8 => raw_bits.clear_bit(FONT_5X11_BIT),
                    Font::Font5x11 => raw_bits.set_bit(FONT_5X11_BIT),
                };

                Self::command(raw_bits)
            }

            // no range check: an address past the module's DDRAM lands wherever the controller puts it
            CommandSet::SetDDRAM(addr) => Self::command(SET_DDRAM_ADDR | addr),

            CommandSet::WriteDataToRAM(data) => Self::data(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn byte_of(command: CommandSet) -> u8 {
        Command::from(command).get_data()
    }

    #[test]
    fn init_sequence_opcodes() {
        assert_eq!(
            byte_of(CommandSet::FunctionSet(
                DataWidth::Bit8,
                LineMode::OneLine,
                Font::Font5x8
            )),
            0x30
        );
        assert_eq!(
            byte_of(CommandSet::FunctionSet(
                DataWidth::Bit4,
                LineMode::OneLine,
                Font::Font5x8
            )),
            0x20
        );
        assert_eq!(
            byte_of(CommandSet::FunctionSet(
                DataWidth::Bit4,
                LineMode::TwoLine,
                Font::Font5x8
            )),
            0x28
        );
        assert_eq!(
            byte_of(CommandSet::DisplayOnOff {
                display: State::Off,
                cursor: State::Off,
                cursor_blink: State::Off,
            }),
            0x08
        );
        assert_eq!(byte_of(CommandSet::ClearDisplay), 0x01);
        assert_eq!(
            byte_of(CommandSet::EntryModeSet(
                MoveDirection::LeftToRight,
                ShiftType::CursorOnly
            )),
            0x06
        );
        assert_eq!(
            byte_of(CommandSet::DisplayOnOff {
                display: State::On,
                cursor: State::Off,
                cursor_blink: State::Off,
            }),
            0x0C
        );
    }

    #[test]
    fn mode_commands() {
        assert_eq!(byte_of(CommandSet::ReturnHome), 0x02);
        assert_eq!(
            byte_of(CommandSet::DisplayOnOff {
                display: State::On,
                cursor: State::On,
                cursor_blink: State::On,
            }),
            0x0F
        );
        assert_eq!(
            byte_of(CommandSet::EntryModeSet(
                MoveDirection::RightToLeft,
                ShiftType::CursorAndDisplay
            )),
            0x05
        );
        assert_eq!(
            byte_of(CommandSet::CursorOrDisplayShift(
                ShiftType::CursorAndDisplay,
                MoveDirection::RightToLeft
            )),
            0x18
        );
        assert_eq!(
            byte_of(CommandSet::CursorOrDisplayShift(
                ShiftType::CursorOnly,
                MoveDirection::LeftToRight
            )),
            0x14
        );
    }

    #[test]
    fn ddram_address_is_or_ed_in() {
        assert_eq!(byte_of(CommandSet::SetDDRAM(LINE_1_BASE | 5)), 0x85);
        assert_eq!(byte_of(CommandSet::SetDDRAM(LINE_2_BASE | 5)), 0xC5);
        // out of range passes through
        assert_eq!(byte_of(CommandSet::SetDDRAM(0xFF)), 0xFF);
    }

    #[test]
    fn register_selection() {
        assert_eq!(
            Command::from(CommandSet::WriteDataToRAM(b'A')).get_register_selection(),
            RegisterSelection::Data
        );
        assert_eq!(
            Command::from(CommandSet::ClearDisplay).get_register_selection(),
            RegisterSelection::Command
        );
    }
}
