use dc_motor_core::peripherals::Indicator;
use dc_motor_core::IndicatorChannel;
use stm32f7xx_hal::gpio::{Output, PG7, PI1, PI3};

use crate::motor::set_level;

/// Three status LEDs, one per direction
///
/// - Red, CN4 pin 5 (D4, PG7): stopped
/// - Green, on-board user LED (D13, PI1): clockwise
/// - Blue, CN4 pin 8 (D7, PI3): counter-clockwise
pub struct StatusLeds {
    red: PG7<Output>,
    green: PI1<Output>,
    blue: PI3<Output>,
}

impl StatusLeds {
    pub fn new(red: PG7<Output>, green: PI1<Output>, blue: PI3<Output>) -> Self {
        Self { red, green, blue }
    }
}

impl Indicator for StatusLeds {
    fn set_indicator(&mut self, channel: IndicatorChannel) {
        let (red, green, blue) = match channel {
            IndicatorChannel::None => (false, false, false),
            IndicatorChannel::A => (true, false, false),
            IndicatorChannel::B => (false, true, false),
            IndicatorChannel::C => (false, false, true),
        };

        // Everything off first, so two LEDs are never lit
        // together while switching
        if !red {
            set_level(&mut self.red, false);
        }
        if !green {
            set_level(&mut self.green, false);
        }
        if !blue {
            set_level(&mut self.blue, false);
        }
        match channel {
            IndicatorChannel::None => {}
            IndicatorChannel::A => set_level(&mut self.red, true),
            IndicatorChannel::B => set_level(&mut self.green, true),
            IndicatorChannel::C => set_level(&mut self.blue, true),
        }
    }
}
