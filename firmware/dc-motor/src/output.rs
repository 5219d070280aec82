use crate::app::output_task;
use crate::app::Mono;
use crate::MOTOR_STATE;
use rtic_monotonics::systick::prelude::*;

/// Motor driver and indicator update loop
///
/// Runs faster than the input task so a new command reaches
/// the motor within one output period.
pub async fn output_task(cx: output_task::Context<'_>) {
    let motor = cx.local.motor;
    let indicator = cx.local.indicator;
    let output = cx.local.output;

    defmt::info!("Output task running every {} ms", output.period_ms());

    loop {
        output.apply(&MOTOR_STATE, motor, indicator);

        Mono::delay(output.period_ms().millis()).await;
    }
}
