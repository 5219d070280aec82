use defmt_brtt as _; // global logger

use panic_probe as _;
use stm32f7xx_hal as _; // memory layout

use crate::app::Mono;
use crate::SYSTICK_RATE_HZ;
use dc_motor_core::config::ticks_to_millis;
use rtic_monotonics::systick::prelude::*;

// same panicking *behavior* as `panic-probe` but doesn't print a panic message
// this prevents the panic message being printed *twice* when `defmt::panic` is invoked
#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}

// Milliseconds since boot, from the SysTick monotonic
defmt::timestamp!("{=u64:ms}", {
    ticks_to_millis(Mono::now().ticks(), SYSTICK_RATE_HZ)
});
