#![no_main]
#![no_std]

pub mod adc;
pub mod button;
pub mod indicator;
pub mod init;
pub mod input;
pub mod motor;
pub mod output;

mod panic_etc;

use dc_motor_core::SharedMotorState;

pub const CLOCK_FREQ_HZ: u32 = 216_000_000;
pub const SYSTICK_RATE_HZ: u32 = 1000;

/// Written by the input task, read by the output task
pub static MOTOR_STATE: SharedMotorState = SharedMotorState::new();

#[rtic::app(device = stm32f7xx_hal::pac, dispatchers = [EXTI0, EXTI1])]
mod app {

    use crate::adc::Potentiometer;
    use crate::button::UserButton;
    use crate::indicator::StatusLeds;
    use crate::motor::MotorOutputs;
    use dc_motor_core::{InputController, OutputController};
    use rtic_monotonics::systick::prelude::*;

    use crate::init::init;
    use crate::input::input_task;
    use crate::output::output_task;
    use crate::SYSTICK_RATE_HZ;

    systick_monotonic!(Mono, SYSTICK_RATE_HZ);

    #[shared]
    pub struct Shared {}

    #[local]
    pub struct Local {
        pub button: UserButton,
        pub potentiometer: Potentiometer,
        pub input: InputController,
        pub motor: MotorOutputs,
        pub indicator: StatusLeds,
        pub output: OutputController,
    }

    extern "Rust" {

        #[init]
        fn init(cx: init::Context) -> (Shared, Local);

        #[task(priority = 1, local=[button, potentiometer, input])]
        async fn input_task(cx: input_task::Context);

        // Actuation must not wait behind input sampling
        #[task(priority = 2, local=[motor, indicator, output])]
        async fn output_task(cx: output_task::Context);
    }

    #[idle]
    fn idle(_: idle::Context) -> ! {
        loop {
            continue;
        }
    }
}
