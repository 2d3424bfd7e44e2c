//! One-Hand Static Trainer Binary
//!
//! Fits dataset4.csv into model.forest (200 trees).
//!
//! Options: --csv, --out

use clap::Parser;
use handsign::gesture::Gesture;
use handsign::training::Args;
use handsign::training::Trainer;
use handsign::*;

fn main() {
    log();
    if let Err(e) = Trainer::new(Gesture::OneHandStatic, Args::parse()).run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
