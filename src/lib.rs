/*!
# LCD 1602 I2C Driver

Drive an HD44780 compatible character LCD through a PCF8574 I2C backpack, in 4 bit mode.

Basic Usage:

1. Create a "sender" <br/>
    [`sender::I2cSender`] borrows any [`embedded_hal::i2c::I2c`] bus and a device address,
    and frames every byte as two nibbles with their enable pulses.
    You can also bring your own, anything implementing [`sender::SendCommand`] works.
<br/>
<br/>
2. Use [`lcd::Lcd::new()`] to create a [`lcd::Lcd`], then [`lcd::Lcd::init()`] to bring up the hardware
<br/>
<br/>
3. use any methods provided by [`lcd::Lcd`] to control the display

```no_run
# fn demo<I2C: embedded_hal::i2c::I2c, D: embedded_hal::delay::DelayNs>(i2c: &mut I2C, delayer: &mut D)
# -> Result<(), lcd1602_i2c::error::Error<I2C::Error>> {
use lcd1602_i2c::{lcd::{Config, Lcd}, sender::I2cSender};

let mut sender = I2cSender::new(i2c, I2cSender::<I2C>::DEFAULT_ADDRESS);
let mut lcd = Lcd::new(&mut sender, delayer, Config::default());

lcd.init()?;
lcd.clear()?;
lcd.goto_position(0, 1)?;
lcd.put_string("hello, world")?;
# Ok(())
# }
```

No busy flag is polled, every instruction is followed by a fixed wait where the controller needs one.
A display shared between several threads of control must be serialized by the caller:
every method takes `&mut self`, and one [`lcd::Lcd`] holds its sender for its whole life.
*/

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod lcd;
pub mod sender;
pub mod utils;
