//! Two ways to serve decisions: epsilon-greedy into the default text log, and softmax into a
//! recorder of your own.
//!
//! Run with `RUST_LOG=mwt=debug cargo run --example quickstart` to see engine events.

use mwt::{
    ContextText, DecisionRecord, EpsilonGreedy, EpsilonGreedyConfig, Mwt, MwtConfig, Policy,
    RecordError, Recorder, Scorer, Softmax, SoftmaxConfig, TextRecorder,
};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

struct Visit {
    user: u32,
    hour: u8,
}

impl ContextText for Visit {
    fn to_text(&self) -> String {
        format!("user={} hour={}", self.user, self.hour)
    }
}

/// Shows the evening banner in the evening, the default one otherwise.
struct TimeOfDay;

impl Policy<Visit> for TimeOfDay {
    fn choose_action(&self, ctx: &Visit) -> u32 {
        if ctx.hour >= 18 {
            2
        } else {
            0
        }
    }
}

/// Prefers banners close to the visitor's hour bucket.
struct HourAffinity;

impl Scorer<Visit> for HourAffinity {
    fn scores(&self, ctx: &Visit) -> Vec<f32> {
        (0..4u8)
            .map(|banner| -((ctx.hour / 6) as f32 - banner as f32).abs())
            .collect()
    }
}

/// Collects `(key, action, probability)` for an offline evaluator.
#[derive(Default)]
struct PropensityLog(Mutex<Vec<(String, u32, f32)>>);

impl Recorder<Visit> for PropensityLog {
    fn record(&self, r: &DecisionRecord<'_, Visit>) -> Result<(), RecordError> {
        self.0
            .lock()
            .map_err(|_| "propensity log poisoned")?
            .push((r.key.to_string(), r.action, r.probability));
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let visits: Vec<Visit> = (0..8)
        .map(|i| Visit {
            user: 100 + i,
            hour: (i as u8 * 5) % 24,
        })
        .collect();

    // Epsilon-greedy exploration using the default text recorder.
    let mwt = Mwt::new(MwtConfig::new("banner-svc"), TextRecorder::in_memory());
    let explorer = EpsilonGreedy::new(
        EpsilonGreedyConfig {
            epsilon: 0.2,
            num_actions: 4,
        },
        TimeOfDay,
    )?;
    for (i, v) in visits.iter().enumerate() {
        mwt.choose_action(&explorer, v, &format!("visit-{i}"))?;
    }
    eprint!("{}", mwt.recorder().recording());

    // Softmax exploration using a user-defined recorder.
    let mwt = Mwt::new(MwtConfig::new("banner-svc"), PropensityLog::default());
    let explorer = Softmax::new(
        SoftmaxConfig {
            lambda: 0.5,
            num_actions: 4,
        },
        HourAffinity,
    )?;
    for (i, v) in visits.iter().enumerate() {
        let d = mwt.choose_action_explain(&explorer, v, &format!("visit-{i}"))?;
        eprintln!("key={} action={} p={:.3} note={:?}", d.key, d.action, d.probability, d.note);
    }
    let rows = mwt
        .into_recorder()
        .0
        .into_inner()
        .map_err(|_| "propensity log poisoned")?;
    eprintln!("logged {} decisions", rows.len());
    Ok(())
}
