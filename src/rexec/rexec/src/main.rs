#[macro_use]
extern crate clap;
use crossbeam_channel::{bounded, unbounded}; // Inter-thread communication
use ctrlc; // exit using cntrl-c
use env_logger;
use log::{error, info, warn};

mod console;
mod keyboard;

use rexec_core::constants::{priority, timers};
use rexec_core::{Agc, Alarm, Alarms, Jobs, Tasks};

/// Driver settings taken from the command line
struct RunConfig {
    ticks: Option<u64>,
    period: std::time::Duration,
    sleep: bool,
}

/// Configures command-line interface using clap
fn cli_app<'a, 'b>() -> clap::App<'a, 'b> {
    let description = "Apollo Guidance Computer executive and waitlist in Rust";
    clap::App::new("Rust AGC Executive (REXEC)")
        .version("0.1")
        .about(description)
        .arg(
            clap::Arg::with_name("ticks")
                .long("ticks")
                .value_name("N")
                .takes_value(true)
                .help("Stop after N clock ticks instead of running until Ctrl-C"),
        )
        .arg(
            clap::Arg::with_name("period-ms")
                .long("period-ms")
                .value_name("MS")
                .takes_value(true)
                .default_value("10")
                .help("Wall-clock length of one tick"),
        )
        .arg(
            clap::Arg::with_name("no-sleep")
                .long("no-sleep")
                .help("Run ticks back to back"),
        )
}

fn get_cli_config<'a>() -> clap::ArgMatches<'a> {
    cli_app().get_matches()
}

fn parse_config(matches: &clap::ArgMatches) -> Result<RunConfig, clap::Error> {
    let ticks = match matches.value_of("ticks") {
        Some(_) => Some(value_t!(matches, "ticks", u64)?),
        None => None,
    };
    let period_ms = value_t!(matches, "period-ms", u64)?;

    Ok(RunConfig {
        ticks,
        period: std::time::Duration::from_millis(period_ms),
        sleep: !matches.is_present("no-sleep"),
    })
}

/// P00, CMC idling
fn p00(agc: &mut Agc<'_>) {
    agc.state.set_program(0);
}

// Lights COMP ACTY for one quantum
fn heartbeat_job(_agc: &mut Agc<'_>) {}

fn heartbeat(agc: &mut Agc<'_>) {
    if let Err(alarm) = agc.novac(priority::PRIO1, heartbeat_job) {
        agc.alarm(alarm);
    }
    if let Err(alarm) = agc.fixdelay(timers::ONE_SEC, heartbeat) {
        agc.alarm(alarm);
    }
}

/// Fresh start into P00 with the heartbeat running
fn boot(agc: &mut Agc<'_>) {
    agc.fresh_start();
    if let Err(alarm) = agc.novac(priority::PRIO30, p00) {
        agc.alarm(alarm);
    }
    if let Err(alarm) = agc.waitlist(timers::ONE_SEC, heartbeat) {
        agc.alarm(alarm);
    }
}

/// Logs the alarm left standing when the loop stops
fn report_alarm(alarm: Alarm) -> &'static str {
    if alarm.is_exhaustion() {
        error!("Alarm {} standing: scheduler table exhausted", alarm);
        "scheduler table exhausted"
    } else {
        warn!("Alarm {} standing: program alarm", alarm);
        "program alarm"
    }
}

/// Main entry point for the executive driver
fn main() {
    env_logger::init();

    // Set up Ctrl-C handler with channel communication
    let (signal_sender, signal_receiver) = bounded(1);
    let handler_result = ctrlc::set_handler(move || {
        if signal_sender.is_full() {
            std::process::exit(-1); // Emergency exit if channel blocked
        }
        let _send_result = signal_sender.send(()); // Send shutdown signal
    });

    if let Err(e) = handler_result {
        error!("Signal handler failed: {:?}", e);
        return;
    }

    // Parse command-line arguments
    let cli_matches = get_cli_config();
    let config = match parse_config(&cli_matches) {
        Ok(config) => config,
        Err(e) => e.exit(),
    };

    // Keypresses arrive on their own thread and are queued into the loop
    let (key_sender, key_receiver) = unbounded();
    keyboard::spawn_reader(key_sender);

    let mut display = console::ConsoleDisplay::new();
    let mut ticks: u64 = 0;
    {
        let mut agc = Agc::with_display(&mut display);
        boot(&mut agc);
        info!("AGC ready, entering P00");

        // Main loop: one tick and one job quantum per period
        let mut deadline = std::time::Instant::now();
        loop {
            if !signal_receiver.is_empty() {
                break;
            }
            if config.ticks.map_or(false, |limit| ticks >= limit) {
                break;
            }

            for code in key_receiver.try_iter() {
                if let Err(code) = agc.push_key(code) {
                    warn!("Key queue full, dropping key 0o{:o}", code);
                }
            }

            agc.step();
            ticks += 1;

            if !config.sleep {
                continue;
            }
            deadline += config.period;
            let now = std::time::Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            } else {
                // Running behind, don't try to catch up
                deadline = now;
            }
        }

        if let Some(alarm) = agc.last_alarm() {
            report_alarm(alarm);
        }
    }

    info!("Stopped after {} ticks, {} display scans", ticks, display.scans());
}
