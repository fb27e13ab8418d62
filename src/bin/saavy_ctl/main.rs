//! saavy-ctl - closed-loop demo
//!
//! Run with: cargo run --bin saavy-ctl
//!
//! Drives a single-pole plant with a P controller twice: once in a paced
//! loop on the main thread, once through the threaded control loop.

mod logger;

use std::time::Duration;

use color_eyre::eyre::eyre;
use saavy_ctl::{
    control::Pid,
    dsp::LowPass,
    runtime::{channel, PhaseLock},
    Updater,
};

const DT: f64 = 1e-3;
const STEPS: usize = 50;
const SETPOINT: f64 = 100.0;

fn controller() -> Pid {
    Pid::new(1.0, 0.0, 0.0, DT).with_setpoint(SETPOINT)
}

fn plant() -> LowPass {
    LowPass::new(200.0, DT)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logger::init().map_err(|e| eyre!("logger: {e}"))?;

    // Paced loop on this thread
    let mut pid = controller();
    let mut lpf = plant();
    let mut lock = PhaseLock::new(Duration::from_secs_f64(DT));

    let mut measurement = 0.0;
    let mut paced = Vec::with_capacity(STEPS);
    lock.start();
    for _ in 0..STEPS {
        let drive = pid.update(measurement);
        measurement = lpf.update(drive);
        paced.push((drive, measurement));
        lock.tick();
    }
    print_history("paced loop", &paced);

    // Same loop, controller on its own thread
    let (control, mut handle) = channel(controller(), 8);
    let worker = control.spawn(Duration::from_micros(100));
    let mut lpf = plant();

    let mut measurement = 0.0;
    let mut threaded = Vec::with_capacity(STEPS);
    for _ in 0..STEPS {
        handle
            .send(measurement)
            .map_err(|_| eyre!("measurement queue full"))?;
        let drive = loop {
            match handle.recv() {
                Some(drive) => break drive,
                None => std::thread::sleep(Duration::from_micros(50)),
            }
        };
        measurement = lpf.update(drive);
        threaded.push((drive, measurement));
    }
    handle.stop().map_err(|_| eyre!("command queue full"))?;
    let pid = worker
        .join()
        .map_err(|_| eyre!("control loop thread panicked"))?;
    print_history("threaded loop", &threaded);

    println!(
        "final: measurement {:.4}, controller input {:.4}, output {:.4}",
        measurement,
        pid.input(),
        pid.output()
    );
    Ok(())
}

fn print_history(title: &str, history: &[(f64, f64)]) {
    println!("{title}");
    println!("{:>4}  {:>12}  {:>12}", "n", "drive", "measurement");
    for (n, (drive, measurement)) in history.iter().enumerate() {
        println!("{n:>4}  {drive:>12.4}  {measurement:>12.4}");
    }
    println!();
}
