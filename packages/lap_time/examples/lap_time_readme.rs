//! Example code for the `README.md` file.
//!
//! This contains the same code that appears in the `lap_time` package `README.md`.

use std::thread;
use std::time::Duration;

use lap_time::{DefaultTimer, Milliseconds, Timer};

fn main() {
    let mut timer = DefaultTimer::new();

    // Only the time between start() and stop() is counted.
    timer.start();
    thread::sleep(Duration::from_millis(20));
    timer.stop();

    thread::sleep(Duration::from_millis(50));

    timer.start();
    thread::sleep(Duration::from_millis(30));
    let total = timer.stop();

    println!("Counted {total:.3} s of the ~0.1 s that passed");

    // Time a single call, in whole milliseconds.
    let millis = Timer::<Milliseconds, u64>::latency(|| thread::sleep(Duration::from_millis(10)));
    println!("Sleeping took {millis} ms");

    // Or in seconds, without naming a timer type.
    let seconds = lap_time::latency(|| (0..1_000_u64).sum::<u64>());
    println!("Summing took {seconds} s");
}
