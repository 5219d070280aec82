use dc_motor_core::peripherals::Button;
use stm32f7xx_hal::gpio::PI11;

/// Blue user button of the DISCO board
///
/// The button is connected to pin PI11 (letter i, number 11)
/// and reads high while pressed. The pin is an input by
/// default, so no configuration is needed. No debouncing here,
/// the input task only looks at one level per period.
pub struct UserButton {
    pin: PI11,
}

impl UserButton {
    pub fn new(pin: PI11) -> Self {
        Self { pin }
    }
}

impl Button for UserButton {
    fn read_button(&mut self) -> bool {
        self.pin.is_high()
    }
}
