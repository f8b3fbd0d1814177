//! Unit tests for ds-core primitives.

#[cfg(test)]
mod ids {
    use crate::ActivityCode;

    #[test]
    fn unfilled_is_zero() {
        assert_eq!(ActivityCode::UNFILLED, ActivityCode(0));
        assert_eq!(ActivityCode::default(), ActivityCode::UNFILLED);
    }

    #[test]
    fn ordering() {
        assert!(ActivityCode(1) < ActivityCode(2));
    }

    #[test]
    fn display() {
        assert_eq!(ActivityCode(7).to_string(), "7");
        assert_eq!(ActivityCode::from(3u32), ActivityCode(3));
    }
}

#[cfg(test)]
mod time {
    use crate::DayOfWeek;

    #[test]
    fn index_roundtrip() {
        for (i, day) in DayOfWeek::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
            assert_eq!(DayOfWeek::from_index(i), Some(*day));
        }
        assert_eq!(DayOfWeek::from_index(7), None);
    }

    #[test]
    fn sunday_first() {
        assert_eq!(DayOfWeek::from_index(0), Some(DayOfWeek::Sunday));
        assert_eq!(DayOfWeek::Sunday.to_string(), "Sun");
        assert_eq!(DayOfWeek::Saturday.to_string(), "Sat");
    }

    #[test]
    fn normalized_bounds() {
        assert_eq!(DayOfWeek::Sunday.normalized(), 0.0);
        assert_eq!(DayOfWeek::Saturday.normalized(), 1.0);
        assert!((DayOfWeek::Wednesday.normalized() - 0.5).abs() < 1e-12);
    }
}

#[cfg(test)]
mod rng {
    use crate::EnvRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = EnvRng::new(42);
        let mut b = EnvRng::new(42);
        let xs: Vec<u32> = (0..20).map(|_| a.gen_range(0..100)).collect();
        let ys: Vec<u32> = (0..20).map(|_| b.gen_range(0..100)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn gen_range_stays_in_bounds() {
        let mut rng = EnvRng::new(1);
        for _ in 0..1_000 {
            let d: usize = rng.gen_range(0..7);
            assert!(d < 7);
        }
    }

    #[test]
    fn from_seed_opt_some_is_deterministic() {
        let mut a = EnvRng::from_seed_opt(Some(9));
        let mut b = EnvRng::new(9);
        assert_eq!(a.gen_range(0..1_000_000u64), b.gen_range(0..1_000_000u64));
    }
}

#[cfg(test)]
mod config {
    use crate::{EnvConfig, RewardConfig};

    #[test]
    fn defaults() {
        let cfg = EnvConfig::default();
        assert_eq!(cfg.num_slots, 24);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.observation_dim(), 27);
        assert_eq!(cfg.reward, RewardConfig { time_weight: 2.0, reward_floor: 0.1 });
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_slots_rejected() {
        let cfg = EnvConfig { num_slots: 0, ..EnvConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn non_positive_floor_rejected() {
        let reward = RewardConfig { reward_floor: 0.0, ..RewardConfig::default() };
        assert!(reward.validate().is_err());
        let reward = RewardConfig { time_weight: f64::NAN, ..RewardConfig::default() };
        assert!(reward.validate().is_err());
    }
}
