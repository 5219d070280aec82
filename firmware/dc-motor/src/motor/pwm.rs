//! Single channel PWM on TIM1 for the motor speed input
//!

use cortex_m::asm::nop;
use stm32f7xx_hal::{
    gpio::PA8,
    pac::{RCC, TIM1},
};

/// Timer clock division, 216 MHz / (10 + 1) / 1000 counts
/// gives a PWM frequency of about 19.6 kHz
const PRESCALER: u16 = 10;

/// PWM output on TIM1 channel 1, PA8 (D10, CN7 pin 3)
///
/// The compare value runs from 0 (always low) to the period
/// (always high).
pub struct MotorPwm {
    tim: TIM1,
    period: u16,
}

impl MotorPwm {
    /// PAC-level setup, call it before the HAL takes RCC
    pub fn new(rcc: &RCC, tim: TIM1, pin: PA8, period: u16) -> Self {
        const TIM1_CH1_AF: u8 = 1;
        let _ = pin.into_alternate::<TIM1_CH1_AF>();

        // Enable the timer clock (delay after two clock
        // cycles before accessing peripheral registers)
        rcc.apb2enr.modify(|_, w| w.tim1en().bit(true));
        nop();
        nop();

        // Set PWM mode on channel 1
        tim.ccmr1_output().write(|w| {
            w.oc1m().bits(0b110);
            w.oc1pe().bit(true)
        });

        // Enable capture/compare output
        tim.ccer.write(|w| w.cc1e().bit(true));

        tim.psc.write(|w| unsafe { w.psc().bits(PRESCALER) });

        tim.cr1.write(|w| w.arpe().bit(true));

        // Main output enable (advanced timer only)
        tim.bdtr.write(|w| w.moe().bit(true));

        let mut pwm = Self { tim, period };

        pwm.set_period(period);
        pwm.set_duty(0);

        // Load the prescaler and period now instead of at the
        // first update event
        pwm.tim.egr.write(|w| w.ug().set_bit());

        pwm
    }

    pub fn enable(&self, enable: bool) {
        self.tim.cr1.modify(|_, w| w.cen().bit(enable));
    }

    pub fn period(&self) -> u16 {
        self.period
    }

    /// The counter runs 0..=ARR, so ARR is one less than the
    /// period
    fn set_period(&mut self, period: u16) {
        self.period = period;
        self.tim.arr.write(|w| w.arr().bits(period.saturating_sub(1)));
    }

    pub fn set_duty(&self, duty: u16) {
        self.tim.ccr1().write(|w| w.ccr().bits(duty));
    }
}
