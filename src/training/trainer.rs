use super::Args;
use super::Evaluation;
use crate::MOTION_WINDOW;
use crate::TEST_FRACTION;
use crate::TRAINING_SEED;
use crate::dataset::Frame;
use crate::dataset::Samples;
use crate::dataset::Split;
use crate::dataset::windows;
use crate::forest::Forest;
use crate::forest::Params;
use crate::gesture::Gesture;
use crate::metrics::Confusion;
use crate::metrics::accuracy;
use anyhow::Context;
use std::path::PathBuf;

/// One training job: dataset in, artifact out.
///
/// Static gestures read one sample per CSV row and split stratified by
/// label. Motion gestures read per-frame rows, cut them into windows of
/// [`MOTION_WINDOW`] frames, and split without stratification.
#[derive(Debug, Clone)]
pub struct Trainer {
    gesture: Gesture,
    csv: PathBuf,
    out: PathBuf,
    params: Params,
}

impl Trainer {
    pub fn new(gesture: Gesture, args: Args) -> Self {
        Self {
            gesture,
            csv: args.csv.unwrap_or_else(|| PathBuf::from(gesture.dataset())),
            out: args.out.unwrap_or_else(|| PathBuf::from(gesture.artifact())),
            params: Params::new(gesture.trees(), TRAINING_SEED),
        }
    }

    pub fn with_params(self, params: Params) -> Self {
        Self { params, ..self }
    }

    /// Runs the whole job. The artifact is only written once fitting and
    /// evaluation have succeeded.
    pub fn run(&self) -> anyhow::Result<Evaluation> {
        log::info!("{:<32}{:<32}", "training    classifier", self.gesture);
        let samples = self.samples()?;
        for (label, count) in samples.distribution() {
            log::info!("{:<32}{:<32}", label, count);
        }
        if samples.width() != self.gesture.features() {
            log::warn!(
                "{} samples have {} features, clients send {}",
                self.gesture,
                samples.width(),
                self.gesture.features()
            );
        }
        let split = Split::new(
            &samples,
            TEST_FRACTION,
            TRAINING_SEED,
            !self.gesture.is_motion(),
        );
        log::info!(
            "{:<32}{:<32}",
            "fitting     forest",
            format!(
                "{} trees, {} rows, {} cores",
                self.params.trees,
                split.train.len(),
                num_cpus::get()
            )
        );
        let forest = Forest::fit(&split.train, self.params)
            .with_context(|| format!("fitting {} forest", self.gesture))?;
        let evaluation = self.evaluate(&forest, &split)?;
        log::info!("{}", evaluation);
        if self.gesture == Gesture::TwoHandStatic {
            println!("{}", evaluation.report());
            println!("{}", evaluation.confusion.heatmap());
        }
        forest
            .save(&self.out)
            .with_context(|| format!("saving {}", self.out.display()))?;
        Ok(evaluation)
    }

    /// Loads the labeled samples this gesture trains on.
    pub fn samples(&self) -> anyhow::Result<Samples> {
        let context = || format!("reading {}", self.csv.display());
        if !self.gesture.is_motion() {
            return Samples::read(&self.csv).with_context(context);
        }
        let frames = Frame::read(&self.csv).with_context(context)?;
        let count = frames.len();
        let samples = windows(frames, MOTION_WINDOW);
        if samples.is_empty() {
            anyhow::bail!(
                "{} frames in {} form no complete {}-frame window",
                count,
                self.csv.display(),
                MOTION_WINDOW
            );
        }
        log::info!("{:<32}{:<32}", "total       windows", samples.len());
        log::info!("{:<32}{:<32}", "feature     size", samples.width());
        Ok(samples)
    }

    fn evaluate(&self, forest: &Forest, split: &Split) -> anyhow::Result<Evaluation> {
        let predicted = split
            .test
            .rows()
            .iter()
            .map(|row| forest.predict(row).map(str::to_string))
            .collect::<Result<Vec<_>, _>>()
            .context("scoring held-out samples")?;
        let truth = split.test.labels();
        Ok(Evaluation {
            train: split.train.len(),
            test: split.test.len(),
            accuracy: accuracy(truth, &predicted),
            confusion: Confusion::new(forest.classes(), truth, &predicted),
        })
    }
}
