use embedded_hal::delay::DelayNs;

use crate::{
    command::{CommandSet, DataWidth, Font, LineMode, MoveDirection, ShiftType, State},
    lcd::Lcd,
    sender::SendCommand,
};

/// The controller needs at least this long after power on before the first command
const MIN_POWER_UP_DELAY_MS: u32 = 50;

/// [`Config`] is the init config of a [`Lcd`]
///
/// The defaults bring a 2 line module up with display on, cursor off, blink off,
/// and the cursor moving right after each write.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    power_up_delay_ms: u32,
    clear_span: u8,
    cursor: State,
    cursor_blink: State,
    direction: MoveDirection,
    shift_type: ShiftType,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            power_up_delay_ms: 60,
            clear_span: 70,
            cursor: State::Off,
            cursor_blink: State::Off,
            direction: MoveDirection::LeftToRight,
            shift_type: ShiftType::CursorOnly,
        }
    }
}

#[allow(missing_docs)]
impl Config {
    pub fn get_power_up_delay_ms(&self) -> u32 {
        self.power_up_delay_ms
    }

    /// Values under 50 ms are raised to 50 ms
    pub fn set_power_up_delay_ms(mut self, delay_ms: u32) -> Self {
        self.power_up_delay_ms = delay_ms.max(MIN_POWER_UP_DELAY_MS);
        self
    }

    /// Number of spaces [`Lcd::clear`] writes
    pub fn get_clear_span(&self) -> u8 {
        self.clear_span
    }

    pub fn set_clear_span(mut self, span: u8) -> Self {
        self.clear_span = span;
        self
    }

    pub fn get_cursor_state(&self) -> State {
        self.cursor
    }

    pub fn set_cursor_state(mut self, cursor: State) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn get_cursor_blink(&self) -> State {
        self.cursor_blink
    }

    pub fn set_cursor_blink(mut self, blink: State) -> Self {
        self.cursor_blink = blink;
        self
    }

    pub fn get_direction(&self) -> MoveDirection {
        self.direction
    }

    pub fn set_direction(mut self, dir: MoveDirection) -> Self {
        self.direction = dir;
        self
    }

    pub fn get_shift_type(&self) -> ShiftType {
        self.shift_type
    }

    pub fn set_shift_type(mut self, shift: ShiftType) -> Self {
        self.shift_type = shift;
        self
    }

    /// Every init command, with the time to wait after it
    fn init_sequence(&self) -> [(CommandSet, u32); 9] {
        // the controller may wake up in any interface width,
        // three 8 bit function sets are recognized from every state
        let wake = CommandSet::FunctionSet(DataWidth::Bit8, LineMode::OneLine, Font::Font5x8);

        [
            (wake, 5),
            (wake, 1),
            (wake, 10),
            (
                CommandSet::FunctionSet(DataWidth::Bit4, LineMode::OneLine, Font::Font5x8),
                10,
            ),
            (
                CommandSet::FunctionSet(DataWidth::Bit4, LineMode::TwoLine, Font::Font5x8),
                1,
            ),
            (
                CommandSet::DisplayOnOff {
                    display: State::Off,
                    cursor: State::Off,
                    cursor_blink: State::Off,
                },
                1,
            ),
            (CommandSet::ClearDisplay, 2),
            (
                CommandSet::EntryModeSet(self.direction, self.shift_type),
                1,
            ),
            (
                CommandSet::DisplayOnOff {
                    display: State::On,
                    cursor: self.cursor,
                    cursor_blink: self.cursor_blink,
                },
                1,
            ),
        ]
    }
}

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand,
    Delayer: DelayNs,
{
    /// Create a [`Lcd`] driver, the hardware is left untouched until [`Lcd::init`]
    pub fn new(sender: &'a mut Sender, delayer: &'b mut Delayer, config: Config) -> Self {
        Lcd {
            sender,
            delayer,
            config,
        }
    }

    /// Run the power on sequence, and leave the display on and empty
    ///
    /// A failed write stops the sequence where it is, and leaves the controller in an unknown state;
    /// run [`Lcd::init`] again to recover.
    pub fn init(&mut self) -> Result<(), Sender::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("lcd init, {}", self.config);

        // in initialization process, we'd better use "raw command", to strictly follow datasheet
        self.delayer.delay_ms(self.config.get_power_up_delay_ms());

        for (command, settle_ms) in self.config.init_sequence() {
            self.sender.send_and_delay(command, self.delayer, settle_ms)?;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("lcd ready");

        Ok(())
    }
}
