use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use dc_motor_core::{Direction, Duty, MotorCommand, SharedMotorState};

/// Every command the writer publishes has `duty % 3` equal to the
/// direction's position in the cycle (Stopped is always 0), so a
/// reader that saw a direction from one write and a duty from
/// another would break the relation.
fn command_for(i: u32) -> MotorCommand {
    let duty = (i % 101) as u8;
    let direction = match duty % 3 {
        0 => Direction::Stopped,
        1 => Direction::Clockwise,
        _ => Direction::CounterClockwise,
    };
    MotorCommand::new(direction, Duty::new(duty))
}

fn is_consistent(command: MotorCommand) -> bool {
    let duty = command.duty().percent();
    match command.direction() {
        Direction::Stopped => duty == 0,
        Direction::Clockwise => duty % 3 == 1,
        Direction::CounterClockwise => duty % 3 == 2,
    }
}

/// Reads the reader must complete while the writer is running
const MIN_OVERLAPPING_READS: u64 = 10_000;

#[test]
fn reader_never_sees_a_torn_pair() {
    let state = Arc::new(SharedMotorState::new());
    let ready = Arc::new(Barrier::new(2));
    let reads = Arc::new(AtomicU64::new(0));
    let done = Arc::new(AtomicBool::new(false));

    let reader = {
        let state = Arc::clone(&state);
        let ready = Arc::clone(&ready);
        let reads = Arc::clone(&reads);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            ready.wait();
            while !done.load(Ordering::Acquire) {
                let command = state.read();
                assert!(is_consistent(command), "torn read: {command:?}");
                reads.fetch_add(1, Ordering::Relaxed);
            }
        })
    };

    // Keep writing until the reader has had plenty of chances
    // to land between two writes
    ready.wait();
    let mut i = 0u32;
    while reads.load(Ordering::Relaxed) < MIN_OVERLAPPING_READS || i < 200_000 {
        let command = command_for(i);
        state.write(command.direction(), command.duty());
        i = i.wrapping_add(1);
        if reader.is_finished() {
            break;
        }
    }
    done.store(true, Ordering::Release);

    reader.join().expect("reader thread panicked");
    assert!(reads.load(Ordering::Relaxed) >= MIN_OVERLAPPING_READS);
    assert!(is_consistent(state.read()));
}

#[test]
fn writer_sequence_is_itself_consistent() {
    assert!((0..1000).map(command_for).all(is_consistent));
}
