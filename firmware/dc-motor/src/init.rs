use crate::adc::{init_adc3, Potentiometer};
use crate::app::Mono;
use crate::app::{init, Local, Shared};
use crate::button::UserButton;
use crate::indicator::StatusLeds;
use crate::motor::pwm::MotorPwm;
use crate::motor::MotorOutputs;
use dc_motor_core::config::PWM_PERIOD;
use dc_motor_core::{ControlConfig, InputController, MotorCommand, OutputController};
use stm32f7xx_hal::prelude::*;
use stm32f7xx_hal::rcc::{self, HSEClock};

use crate::CLOCK_FREQ_HZ;

pub fn init(cx: init::Context) -> (Shared, Local) {
    defmt::info!("Starting RTIC init task");

    Mono::start(cx.core.SYST, CLOCK_FREQ_HZ);

    // Device specific peripherals
    let device = cx.device;

    // Split up the pins, and give them one by one to
    // the functions responsible for setting up each
    // peripheral.
    let gpioa = device.GPIOA.split();
    let gpiob = device.GPIOB.split();
    let gpiog = device.GPIOG.split();
    let gpioh = device.GPIOH.split();
    let gpioi = device.GPIOI.split();

    // Do all the PAC-level setup here before any HAL
    // setup which eats the resources.

    let adc = init_adc3(&device.RCC, &device.ADC_COMMON, device.ADC3, gpioa.pa0);
    let pwm = MotorPwm::new(&device.RCC, device.TIM1, gpioa.pa8, PWM_PERIOD as u16);

    // The DISCO board has a 25 MHz oscillator connected to
    // the HSE input. Configure the MCU to use this external
    // oscillator, and then set a frequency between 12.5 MHz
    // and 216 MHz (the program will panic if out of range).
    let hse_cfg = HSEClock::new(25_000_000.Hz(), rcc::HSEClockMode::Bypass);
    let rcc = device.RCC.constrain();
    let _clocks = rcc.cfgr.hse(hse_cfg).sysclk(CLOCK_FREQ_HZ.Hz()).freeze();

    let enable = gpiob.pb4.into_push_pull_output();
    let line_a = gpioh.ph6.into_push_pull_output();
    let line_b = gpioi.pi2.into_push_pull_output();
    let mut motor = MotorOutputs::new(pwm, enable, line_a, line_b);

    let red = gpiog.pg7.into_push_pull_output();
    let green = gpioi.pi1.into_push_pull_output();
    let blue = gpioi.pi3.into_push_pull_output();
    let mut indicator = StatusLeds::new(red, green, blue);

    let config = ControlConfig::default();
    defmt::info!("Control config: {}", config);

    // Put the motor and the indicator in the stopped state
    // before either task runs
    let mut output = OutputController::new(&config);
    output.apply_command(MotorCommand::STOPPED, &mut motor, &mut indicator);

    let button = UserButton::new(gpioi.pi11);
    let potentiometer = Potentiometer::new(adc);

    crate::app::output_task::spawn().ok();
    crate::app::input_task::spawn().ok();

    defmt::info!("Ending init task");

    (
        Shared {},
        Local {
            button,
            potentiometer,
            input: InputController::new(&config),
            motor,
            indicator,
            output,
        },
    )
}
