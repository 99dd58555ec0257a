//! Drive LCD1602 with a STM32F411RET6, through a PCF8574T I2C backpack
//!
//! Wiring diagram
//!
//! PCF8574T backpack <-> STM32F411RET6
//!               GND <-> GND
//!               VCC <-> 5V (It is best to use an external source for the 5V pin, such as the 5V output from a DAPLink device or USB.)
//!               SDA <-> PB7 (with a 4.7 kOhm pull up to 3.3V, if the backpack doesn't carry one)
//!               SCL <-> PB6 (with a 4.7 kOhm pull up to 3.3V, if the backpack doesn't carry one)

#![no_std]
#![no_main]

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::{
    i2c::{self, I2c},
    pac,
    prelude::*,
};

use lcd1602_i2c::{
    command::{MoveDirection, ShiftType, State},
    lcd::{Config, Lcd},
    sender::{I2cSender, SendCommand},
};

// the other common strap of PCF8574T backpacks is 0x3F
const LCD_ADDRESS: u8 = 0x27;

#[cortex_m_rt::entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = pac::Peripherals::take().expect("Cannot take device peripherals");
    let cp = pac::CorePeripherals::take().expect("Cannot take core peripherals");

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(12.MHz()).freeze();

    let mut delayer = cp.SYST.delay(&clocks);

    let gpiob = dp.GPIOB.split();

    let mut i2c = I2c::new(
        dp.I2C1,
        (gpiob.pb6, gpiob.pb7),
        i2c::Mode::standard(100.kHz()), // The PCF8574T max I2C speed
        &clocks,
    );

    let mut sender = I2cSender::new(&mut i2c, LCD_ADDRESS);

    let mut lcd = Lcd::new(&mut sender, &mut delayer, Config::default());

    // a failed init leaves the controller in an unknown state, just start over
    while let Err(e) = lcd.init() {
        rprintln!("LCD init failed: {:?}", e);
    }
    rprintln!("LCD ready");

    if let Err(e) = greet(&mut lcd) {
        rprintln!("LCD write failed: {:?}", e);
    }

    let mut count: u32 = 0;
    loop {
        if let Err(e) = tick(&mut lcd, count) {
            rprintln!("LCD write failed: {:?}", e);
        }

        count = count.wrapping_add(1);
        lcd.delay_ms(1_000);
    }
}

fn greet<S: SendCommand, D: DelayNs>(lcd: &mut Lcd<S, D>) -> Result<(), S::Error> {
    lcd.clear()?;
    lcd.put_string("hello,")?;

    lcd.goto_position(0, 1)?;
    lcd.put_string("world!")?;

    // degree sign in A00 character ROM
    lcd.goto_position(12, 0)?;
    lcd.put_byte(0xDF)?;
    lcd.put_char('C')?;

    // since tilde character (~) is not in CGROM of LCD1602A
    // it should be displayed as a right arrow
    lcd.write_str_to_pos("~", (15, 0))?;

    lcd.set_display_control(State::On, State::On, State::On)
}

// count on the second line, and nudge the whole display back and forth
fn tick<S: SendCommand, D: DelayNs>(lcd: &mut Lcd<S, D>, count: u32) -> Result<(), S::Error> {
    lcd.goto_position(8, 1)?;

    // write! only fails on bus errors, the next tick retries
    let _ = write!(lcd, "{:>4}", count % 10_000);

    lcd.shift(ShiftType::CursorAndDisplay, MoveDirection::RightToLeft)?;
    lcd.shift(ShiftType::CursorAndDisplay, MoveDirection::LeftToRight)
}
