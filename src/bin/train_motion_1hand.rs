//! One-Hand Motion Trainer Binary
//!
//! Fits onehandmotion.csv, windowed into 30-frame samples,
//! into motion_1hand.forest (200 trees).
//!
//! Options: --csv, --out

use clap::Parser;
use handsign::gesture::Gesture;
use handsign::training::Args;
use handsign::training::Trainer;
use handsign::*;

fn main() {
    log();
    if let Err(e) = Trainer::new(Gesture::OneHandMotion, Args::parse()).run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
