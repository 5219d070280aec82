use crate::app::Mono;
use dc_motor_core::peripherals::AnalogInput;
use dc_motor_core::ConversionError;
use rtic_monotonics::systick::prelude::*;
use stm32f7xx_hal::gpio::PA0;
use stm32f7xx_hal::pac::RCC;
use stm32f7xx_hal::pac::{ADC3, ADC_COMMON};

use crate::CLOCK_FREQ_HZ;

/// APB2 clock once the HAL has frozen the clock tree
const PCLK2_HZ: u32 = CLOCK_FREQ_HZ / 2;

/// ADCPRE in CCR: 0b01 divides PCLK2 by 4
const ADC_PRESCALER: u32 = 4;
const ADCPRE_DIV4: u8 = 0b01;

/// Highest ADC clock allowed by the datasheet (VDDA >= 2.4 V)
const ADC_CLOCK_MAX_HZ: u32 = 36_000_000;

const _: () = assert!(PCLK2_HZ / ADC_PRESCALER <= ADC_CLOCK_MAX_HZ);

/// SMP0 in SMPR2: 0b100 is 84 cycles, enough for the
/// potentiometer's source impedance
const SAMPLE_TIME_84_CYCLES: u8 = 0b100;

/// Initialise the IN0 channel of ADC3 module
///
/// This is a PAC-level init function (not HAL). Call
/// it and pass a reference to RCC before it is eaten
/// by something in the HAL API.
///
/// PA0 is A0 on the Arduino header, where the wiper of
/// the speed potentiometer is connected. pa0 is consumed.
pub fn init_adc3(rcc: &RCC, adc_common: &ADC_COMMON, adc3: ADC3, pa0: PA0) -> ADC3 {
    // Set up ADC3 clocks
    rcc.apb2enr.modify(|_, w| w.adc3en().bit(true));

    // ADC clock is PCLK2 / 4 (CCR, p. 443). The reset value
    // of /2 is above the limit once sysclk is 216 MHz.
    adc_common.ccr.modify(|_, w| unsafe { w.adcpre().bits(ADCPRE_DIV4) });

    // References to page numbers refer to the RM0385 rev 8
    // reference manual.
    let _ = pa0.into_analog();

    // Turn ADC on by setting ADON in CR2 register (p. 415).
    // The reset value of RES in CR1 selects 12-bit samples.
    adc3.cr2.modify(|_, w| w.adon().bit(true));

    // Regular group of one conversion (p. 419): write 1 to
    // L[3:0] in SQR1 and channel 0 (IN0) to SQ1[4:0] in SQR3.
    adc3.sqr1.modify(|_, w| w.l().bits(1));
    adc3.sqr3.modify(|_, w| unsafe { w.sq1().bits(0) });

    // Longer sample time for channel 0 (SMPR2, p. 437)
    adc3.smpr2.modify(|r, w| unsafe {
        w.bits((r.bits() & !0b111) | SAMPLE_TIME_84_CYCLES as u32)
    });

    adc3
}

/// Speed potentiometer read by software-triggered single
/// conversions on ADC3
pub struct Potentiometer {
    adc: ADC3,
}

impl Potentiometer {
    pub fn new(adc: ADC3) -> Self {
        Self { adc }
    }
}

impl AnalogInput for Potentiometer {
    fn start_conversion(&mut self) {
        // A conversion that timed out last period may have
        // finished since. Reading DR clears EOC, so its sample
        // is never taken for this period's.
        if self.adc.sr.read().eoc().bit() {
            let _ = self.adc.dr.read().bits();
        }
        self.adc.sr.modify(|_, w| w.eoc().bit(false).ovr().bit(false));

        // Start a conversion by setting SWSTART in CR2
        // (p. 420).
        self.adc.cr2.modify(|_, w| w.swstart().bit(true));
    }

    fn poll_conversion(&mut self, timeout_ms: u32) -> Result<u16, ConversionError> {
        let deadline = Mono::now() + timeout_ms.millis();

        // Wait for the EOC flag in SR (p. 420), but never
        // past the deadline.
        while !self.adc.sr.read().eoc().bit() {
            if Mono::now() > deadline {
                return Err(ConversionError::Timeout);
            }
        }

        // The converted data is stored in the 16-bit DR
        // register (p. 420)
        let sample = self.adc.dr.read().bits() as u16;

        // "Software clears the EOC bit", Fig 74, p. 421
        self.adc.sr.modify(|_, w| w.eoc().bit(false));

        Ok(sample)
    }
}
