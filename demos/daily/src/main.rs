//! daily — plan one day with the scheduling environment.
//!
//! Loads activity history from the CSV given as the first argument (or a
//! small built-in sample), then runs a few seeded episodes: one greedy
//! episode that always picks the activity most often seen at the current
//! hour, and one episode of random (partly invalid) actions for comparison.
//!
//! ```text
//! RUST_LOG=debug cargo run -p daily -- history.csv
//! ```

use std::io::Cursor;
use std::path::PathBuf;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ds_core::EnvRng;
use ds_env::{EnvBuilder, ScheduleEnv};
use ds_history::{HistoryDataset, load_history_csv, load_history_reader};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:      u64   = 42;
const NUM_SLOTS: usize = 24;

// ── Sample history ────────────────────────────────────────────────────────────

// Label-encoded activities: 0 = Sleep, 1 = Breakfast, 2 = Work, 3 = Lunch,
// 4 = Commute, 5 = Dinner, 6 = Leisure.
const SAMPLE_HISTORY: &str = "\
hour,activity_code,activity_name\n\
0,0,Sleep\n1,0,Sleep\n2,0,Sleep\n3,0,Sleep\n4,0,Sleep\n5,0,Sleep\n6,0,Sleep\n23,0,Sleep\n\
7,1,Breakfast\n7,1,Breakfast\n8,1,Breakfast\n\
9,2,Work\n10,2,Work\n11,2,Work\n13,2,Work\n14,2,Work\n15,2,Work\n16,2,Work\n\
12,3,Lunch\n12,3,Lunch\n13,3,Lunch\n\
8,4,Commute\n8,4,Commute\n17,4,Commute\n17,4,Commute\n\
18,5,Dinner\n19,5,Dinner\n19,5,Dinner\n\
20,6,Leisure\n21,6,Leisure\n22,6,Leisure\n22,6,Leisure\n\
";

// ── Policies ──────────────────────────────────────────────────────────────────

/// Pick the catalogue index with the highest time-preference score at the
/// current slot.  Ties go to the lowest index.
fn greedy_action(env: &ScheduleEnv) -> i64 {
    let slot = env.state().current_slot;
    let prefs = env.preferences();
    let best = env
        .catalogue()
        .codes()
        .iter()
        .enumerate()
        .fold((0usize, f64::MIN), |best, (i, &code)| {
            let score = prefs.time_preference_score(code, slot);
            if score > best.1 { (i, score) } else { best }
        });
    best.0 as i64
}

fn run_episode(env: &mut ScheduleEnv, mut policy: impl FnMut(&ScheduleEnv) -> i64) -> Result<f64> {
    env.reset();
    let mut total = 0.0;
    loop {
        let action = policy(&*env);
        let step = env.step(action)?;
        total += step.reward;
        if step.done {
            return Ok(total);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let history: HistoryDataset = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            info!(path = %path.display(), "loading history");
            load_history_csv(&path)?
        }
        None => {
            info!("no history given; using built-in sample");
            load_history_reader(Cursor::new(SAMPLE_HISTORY))?
        }
    };

    let mut env = EnvBuilder::new(&history).num_slots(NUM_SLOTS).seed(SEED).build()?;
    info!(
        actions = env.action_space().n,
        observation_dim = env.observation_space().dim,
        "environment built"
    );

    // ── Greedy episode ────────────────────────────────────────────────────
    let greedy_total = run_episode(&mut env, greedy_action)?;
    info!(total_reward = greedy_total, "greedy episode finished");
    env.render()?;

    // ── Random episode ────────────────────────────────────────────────────
    // Actions are drawn from one past each end of the valid range so the
    // environment's substitution policy is exercised too.
    let mut rng = EnvRng::new(SEED ^ 0xFF);
    let n = env.num_activities() as i64;
    let random_total = run_episode(&mut env, |_| rng.gen_range(-1..=n))?;
    info!(total_reward = random_total, "random episode finished");
    env.render()?;

    Ok(())
}
