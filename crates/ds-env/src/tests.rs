//! Unit tests for ds-env.

use ds_core::{ActivityCode, DayOfWeek, EnvConfig, RewardConfig};
use ds_history::{Columns, HistoricalRecord, HistoryDataset};

use crate::{EnvBuilder, EnvError, ScheduleEnv};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn rec(hour: i64, code: u32) -> HistoricalRecord {
    HistoricalRecord::new(hour, ActivityCode(code))
}

/// Three encoded activities: 0 = Sleep (0–6), 1 = Work (9–16), 2 = Leisure (18–22).
fn day_history() -> HistoryDataset {
    let mut records = Vec::new();
    records.extend((0..7).map(|h| rec(h, 0).with_name("Sleep")));
    records.extend((9..17).map(|h| rec(h, 1).with_name("Work")));
    records.extend((18..23).map(|h| rec(h, 2).with_name("Leisure")));
    HistoryDataset::from_records(records)
}

/// A single activity, always observed at 09:00.
fn single_activity() -> HistoryDataset {
    HistoryDataset::from_records(vec![rec(9, 5), rec(9, 5)])
}

fn env(ds: &HistoryDataset) -> ScheduleEnv {
    EnvBuilder::new(ds).seed(7).build().unwrap()
}

fn in_unit_interval(v: &[f64]) -> bool {
    v.iter().all(|x| (0.0..=1.0).contains(x))
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn spaces_sized_from_history() {
        let ds = day_history();
        let env = env(&ds);
        assert_eq!(env.action_space().n, 3);
        assert_eq!(env.observation_space().dim, 27);
        assert_eq!(env.observation_space().low, 0.0);
        assert_eq!(env.observation_space().high, 1.0);
        assert_eq!(env.num_activities(), 3);
        assert_eq!(env.num_slots(), 24);
    }

    #[test]
    fn custom_slot_count() {
        let ds = day_history();
        let env = EnvBuilder::new(&ds).num_slots(8).seed(1).build().unwrap();
        assert_eq!(env.observation_space().dim, 11);
        assert_eq!(env.schedule().len(), 8);
    }

    #[test]
    fn starts_reset() {
        let ds = day_history();
        let env = env(&ds);
        assert_eq!(env.state().current_slot, 0);
        assert_eq!(env.state().last_activity, None);
        assert!(env.schedule().iter().all(|&c| c == ActivityCode::UNFILLED));
    }

    #[test]
    fn empty_history_rejected() {
        let ds = HistoryDataset::empty();
        assert!(matches!(ScheduleEnv::new(&ds, 24), Err(EnvError::NoActivities)));
    }

    #[test]
    fn zero_slots_rejected() {
        let ds = day_history();
        assert!(matches!(ScheduleEnv::new(&ds, 0), Err(EnvError::Config(_))));
    }

    #[test]
    fn invalid_reward_config_rejected() {
        let ds = day_history();
        let result = EnvBuilder::new(&ds)
            .reward(RewardConfig { time_weight: 2.0, reward_floor: -1.0 })
            .build();
        assert!(matches!(result, Err(EnvError::Config(_))));
    }

    #[test]
    fn config_applied_wholesale() {
        let ds = day_history();
        let cfg = EnvConfig { num_slots: 4, seed: Some(3), ..EnvConfig::default() };
        let env = EnvBuilder::new(&ds).config(cfg).build().unwrap();
        assert_eq!(env.num_slots(), 4);
    }

    #[test]
    fn missing_hour_column_still_builds() {
        let ds = HistoryDataset::new(
            vec![HistoricalRecord { hour: None, ..rec(0, 3) }],
            Columns { hour: false, ..Columns::REQUIRED },
        );
        let mut env = EnvBuilder::new(&ds).seed(0).build().unwrap();
        assert!(env.preferences().is_empty());
        // 0.01 * 2 → floored.
        assert_eq!(env.step(0).unwrap().reward, 0.1);
    }
}

// ── Observation ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod observation {
    use super::*;

    #[test]
    fn reset_observation_shape_and_bounds() {
        let ds = day_history();
        let mut env = env(&ds);
        for _ in 0..50 {
            let obs = env.reset();
            assert_eq!(obs.len(), 27);
            assert!(in_unit_interval(&obs));
            assert!(env.observation_space().contains(&obs));
            assert_eq!(obs[0], 0.0);
            assert_eq!(obs[2], 0.0);
            assert!(obs.planned().iter().all(|&p| p == 0.0));
        }
    }

    #[test]
    fn day_feature_matches_state() {
        let ds = day_history();
        let mut env = env(&ds);
        let obs = env.reset();
        assert_eq!(obs[1], env.state().day_of_week.normalized());
    }

    #[test]
    fn planned_flags_track_slot_pointer() {
        let ds = day_history();
        let mut env = env(&ds);
        env.reset();
        env.step(0).unwrap();
        env.step(1).unwrap();
        let obs = env.step(2).unwrap().observation;
        assert_eq!(&obs.planned()[..4], &[1.0, 1.0, 1.0, 0.0]);
        assert!((obs[0] - 3.0 / 24.0).abs() < 1e-12);
        // Last activity index 2 of 3 → 2 / 2.
        assert_eq!(obs[2], 1.0);
    }

    #[test]
    fn last_activity_feature_zero_for_single_activity() {
        let ds = single_activity();
        let mut env = env(&ds);
        let obs = env.step(0).unwrap().observation;
        assert_eq!(obs[2], 0.0);
    }

    #[test]
    fn observations_stay_in_bounds_through_episode() {
        let ds = day_history();
        let mut env = env(&ds);
        env.reset();
        for i in 0..24 {
            let step = env.step(i % 3).unwrap();
            assert!(env.observation_space().contains(&step.observation));
        }
    }
}

// ── Step ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod step {
    use super::*;

    #[test]
    fn exactly_num_slots_steps_finish_episode() {
        let ds = day_history();
        let mut env = env(&ds);
        env.reset();
        for i in 0..24 {
            let step = env.step(1).unwrap();
            assert_eq!(step.info.current_slot, i + 1);
            assert_eq!(step.done, i == 23, "done at step {i}");
        }
        assert!(env.is_done());
    }

    #[test]
    fn single_activity_episode() {
        let ds = single_activity();
        let mut env = env(&ds);
        assert_eq!(env.action_space().n, 1);
        let mut last = None;
        for i in 0..24 {
            let step = env.step(0).unwrap();
            assert_eq!(step.done, i == 23);
            last = Some(step);
        }
        let last = last.unwrap();
        assert!(last.done);
        assert_eq!(last.info.current_slot, 24);
        assert_eq!(last.info.activity_code, ActivityCode(5));
    }

    #[test]
    fn step_after_terminal_is_error() {
        let ds = single_activity();
        let mut env = EnvBuilder::new(&ds).num_slots(2).seed(0).build().unwrap();
        env.step(0).unwrap();
        env.step(0).unwrap();
        let before = env.state().clone();
        assert!(matches!(env.step(0), Err(EnvError::EpisodeFinished { num_slots: 2 })));
        assert_eq!(env.state(), &before);
    }

    #[test]
    fn reset_after_terminal_starts_over() {
        let ds = single_activity();
        let mut env = EnvBuilder::new(&ds).num_slots(2).seed(0).build().unwrap();
        env.step(0).unwrap();
        env.step(0).unwrap();
        env.reset();
        assert_eq!(env.state().current_slot, 0);
        assert!(env.step(0).is_ok());
    }

    #[test]
    fn schedule_records_codes() {
        let ds = day_history();
        let mut env = env(&ds);
        env.step(2).unwrap();
        env.step(0).unwrap();
        assert_eq!(&env.schedule()[..3], &[ActivityCode(2), ActivityCode(0), ActivityCode::UNFILLED]);
        assert_eq!(env.state().last_activity, Some(ActivityCode(0)));
    }

    #[test]
    fn actions_index_sorted_codes() {
        let ds = HistoryDataset::from_records(vec![rec(1, 40), rec(2, 10), rec(3, 20)]);
        let mut env = env(&ds);
        let step = env.step(1).unwrap();
        assert_eq!(step.info.activity, 1);
        assert_eq!(step.info.activity_code, ActivityCode(20));
    }

    #[test]
    fn info_carries_day_of_week() {
        let ds = day_history();
        let mut env = env(&ds);
        let day = env.state().day_of_week;
        assert_eq!(env.step(0).unwrap().info.day_of_week, day);
    }
}

// ── Invalid actions ───────────────────────────────────────────────────────────

#[cfg(test)]
mod invalid_action {
    use super::*;

    #[test]
    fn out_of_range_actions_are_substituted() {
        let ds = day_history();
        let mut env = env(&ds);
        for bad in [-1, 3, 1_000, i64::MIN, i64::MAX] {
            env.reset();
            let step = env.step(bad).unwrap();
            assert!(step.info.activity < 3, "substituted {}", step.info.activity);
            assert_eq!(env.schedule()[0], env.catalogue().codes()[step.info.activity]);
            assert_eq!(step.info.current_slot, 1);
        }
    }

    #[test]
    fn single_activity_substitution_is_that_activity() {
        let ds = single_activity();
        let mut env = env(&ds);
        let step = env.step(-5).unwrap();
        assert_eq!(step.info.activity, 0);
        assert_eq!(step.info.activity_code, ActivityCode(5));
    }
}

// ── Reward ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reward {
    use super::*;

    #[test]
    fn first_slot_uses_time_score_only() {
        let ds = day_history();
        let mut env = env(&ds);
        // Sleep observed once per hour 0–6 → 1/7 at hour 0.
        let r = env.step(0).unwrap().reward;
        assert!((r - 2.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn later_slots_add_neutral_sequence() {
        let ds = day_history();
        let mut env = env(&ds);
        env.step(0).unwrap();
        let r = env.step(0).unwrap().reward;
        assert!((r - (2.0 / 7.0 + 0.5)).abs() < 1e-12);
    }

    #[test]
    fn unlikely_hour_gets_sequence_only() {
        let ds = day_history();
        let mut env = env(&ds);
        env.step(0).unwrap();
        // Work at 01:00 → time score 0.0; sequence 0.5.
        assert_eq!(env.step(1).unwrap().reward, 0.5);
    }

    #[test]
    fn floor_on_first_slot() {
        let ds = day_history();
        let mut env = env(&ds);
        // Work at 00:00 → 0.0, no sequence term → floor.
        assert_eq!(env.step(1).unwrap().reward, 0.1);
    }

    #[test]
    fn reward_never_below_floor() {
        let ds = day_history();
        let mut env = env(&ds);
        for episode in 0..5 {
            env.reset();
            for i in 0..24i64 {
                let action = (i * 7 + episode) % 5 - 1; // includes -1 and 3
                let r = env.step(action).unwrap().reward;
                assert!(r >= 0.1, "reward {r}");
            }
        }
    }

    #[test]
    fn slots_past_hour_range_use_default_score() {
        let ds = single_activity();
        let mut env = EnvBuilder::new(&ds).num_slots(30).seed(0).build().unwrap();
        for _ in 0..25 {
            env.step(0).unwrap();
        }
        // Slot 25: 0.01 * 2 + 0.5.
        let r = env.step(0).unwrap().reward;
        assert!((r - 0.52).abs() < 1e-12);
    }

    #[test]
    fn sequence_uses_previous_slot_code() {
        let ds = day_history();
        let seen = |prev: ActivityCode, next: ActivityCode| f64::from(prev.0 * 10 + next.0);
        let mut env = EnvBuilder::new(&ds).seed(0).sequence_scorer(seen).build().unwrap();
        env.step(2).unwrap(); // Leisure at 00:00
        // Work at 01:00: time 0.0, sequence prev=2 next=1 → 21.
        assert_eq!(env.step(1).unwrap().reward, 21.0);
    }
}

// ── Reset / determinism ───────────────────────────────────────────────────────

#[cfg(test)]
mod determinism {
    use super::*;

    fn days(env: &mut ScheduleEnv, n: usize) -> Vec<DayOfWeek> {
        (0..n)
            .map(|_| {
                env.reset();
                env.state().day_of_week
            })
            .collect()
    }

    #[test]
    fn same_seed_same_days() {
        let ds = day_history();
        let mut a = EnvBuilder::new(&ds).seed(11).build().unwrap();
        let mut b = EnvBuilder::new(&ds).seed(11).build().unwrap();
        assert_eq!(days(&mut a, 30), days(&mut b, 30));
    }

    #[test]
    fn days_cover_the_week() {
        let ds = day_history();
        let mut env = env(&ds);
        let seen = days(&mut env, 500);
        for day in DayOfWeek::ALL {
            assert!(seen.contains(&day), "{day} never sampled");
        }
    }

    #[test]
    fn same_seed_same_substitutions() {
        let ds = day_history();
        let mut a = EnvBuilder::new(&ds).seed(5).build().unwrap();
        let mut b = EnvBuilder::new(&ds).seed(5).build().unwrap();
        for _ in 0..24 {
            assert_eq!(a.step(-1).unwrap().info.activity, b.step(-1).unwrap().info.activity);
        }
    }
}

// ── Names and rendering ───────────────────────────────────────────────────────

#[cfg(test)]
mod render {
    use super::*;

    #[test]
    fn activity_names() {
        let ds = day_history();
        let env = env(&ds);
        assert_eq!(env.activity_name(ActivityCode(1)), "Work");
        assert_eq!(env.activity_name(ActivityCode(99)), "Activity 99");
    }

    #[test]
    fn synthesized_names_without_name_column() {
        let ds = single_activity();
        let env = env(&ds);
        assert_eq!(env.activity_name(ActivityCode(5)), "Activity 5");
    }

    #[test]
    fn render_lists_planned_and_unplanned() {
        let ds = day_history();
        let mut env = env(&ds);
        env.step(0).unwrap();
        env.step(1).unwrap();
        let text = env.render_string();
        let day = env.state().day_of_week;

        assert!(text.starts_with("Slot: 2/24\n"));
        assert!(text.contains(&format!("Day: {day}\n")));
        assert!(text.contains("  00:00 - Sleep\n"));
        assert!(text.contains("  01:00 - Work\n"));
        assert!(text.contains("  02:00 - [unplanned]\n"));
        assert!(text.contains("  23:00 - [unplanned]\n"));
        assert_eq!(text.matches("[unplanned]").count(), 22);
    }

    #[test]
    fn view_display_matches_render_string() {
        let ds = day_history();
        let mut env = env(&ds);
        env.step(2).unwrap();
        let text = format!("{}", env.view());
        assert_eq!(text, env.render_string());
        assert!(text.contains("  00:00 - Leisure\n"));
        assert!(text.ends_with("  23:00 - [unplanned]\n\n"));
    }

    #[test]
    fn render_to_writer() {
        let ds = day_history();
        let env = env(&ds);
        let mut buf = Vec::new();
        env.render_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), env.render_string());
    }
}
