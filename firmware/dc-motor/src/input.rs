use crate::app::input_task;
use crate::app::Mono;
use crate::MOTOR_STATE;
use rtic_monotonics::systick::prelude::*;

/// Button and potentiometer sampling loop
///
/// Once per period: look for a button press and cycle the
/// direction on it, take one ADC sample, and publish the new
/// direction and duty for the output task. Faults are logged
/// by the controller and never stop the loop.
pub async fn input_task(cx: input_task::Context<'_>) {
    let button = cx.local.button;
    let potentiometer = cx.local.potentiometer;
    let input = cx.local.input;

    defmt::info!("Input task running every {} ms", input.period_ms());

    loop {
        let report = input.poll(button, potentiometer, &MOTOR_STATE);
        defmt::trace!("Published {}", report.command);

        Mono::delay(input.period_ms().millis()).await;
    }
}
