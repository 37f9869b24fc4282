//! Unit tests for ag-core primitives.

#[cfg(test)]
mod time {
    use crate::{AgError, EnvConfig, SimClock, TimeStep};

    fn config(step_length_secs: u32) -> EnvConfig {
        EnvConfig {
            name:             "plot".into(),
            location:         Default::default(),
            climate:          Default::default(),
            start_unix_secs:  0,
            step_length_secs,
            seed:             7,
            max_jump_steps:   None,
        }
    }

    #[test]
    fn step_arithmetic() {
        let t = TimeStep(10);
        assert_eq!(t + 5, TimeStep(15));
        assert_eq!(t.offset(3), TimeStep(13));
        assert_eq!(TimeStep(15) - TimeStep(10), 5u64);
        assert_eq!(TimeStep(3).since(TimeStep(5)), 0);
    }

    #[test]
    fn checked_offset_rejects_negative_result() {
        assert_eq!(TimeStep(5).checked_offset(-5), Some(TimeStep(0)));
        assert_eq!(TimeStep(5).checked_offset(-6), None);
        assert_eq!(TimeStep(5).checked_offset(2), Some(TimeStep(7)));
    }

    #[test]
    fn negative_i64_is_not_a_step() {
        assert!(matches!(TimeStep::try_from(-1i64), Err(AgError::NegativeTimeStep(-1))));
        assert_eq!(TimeStep::try_from(4i64).unwrap(), TimeStep(4));
    }

    #[test]
    fn clock_rounds_start_down_to_step_boundary() {
        let clock = SimClock::new(3_700, 3_600);
        assert_eq!(clock.start_unix_secs, 3_600);

        // Negative starts round toward minus infinity, not toward zero.
        let clock = SimClock::new(-100, 3_600);
        assert_eq!(clock.start_unix_secs, -3_600);
    }

    #[test]
    fn clock_timestamp_tracks_step() {
        let mut clock = SimClock::new(0, 3_600);
        assert_eq!(clock.current_unix_secs(), 0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_step, TimeStep(2));
        assert_eq!(clock.current_unix_secs(), 7_200);
        assert_eq!(clock.unix_secs_at(TimeStep(5)), 18_000);
    }

    #[test]
    fn step_at_or_before_floors() {
        let clock = SimClock::new(0, 3_600);
        assert_eq!(clock.step_at_or_before(7_199).unwrap(), TimeStep(1));
        assert_eq!(clock.step_at_or_before(7_200).unwrap(), TimeStep(2));
        assert!(matches!(clock.step_at_or_before(-1), Err(AgError::BeforeStart { .. })));
    }

    #[test]
    fn steps_for_duration_round_up() {
        let clock = SimClock::new(0, 3_600);
        assert_eq!(clock.steps_for_hours(24), 24);
        assert_eq!(clock.steps_for_days(7), 168);
        assert_eq!(clock.steps_for_secs(1), 1);
        assert_eq!(clock.steps_for_secs(0), 0);
    }

    #[test]
    fn datetime_of_epoch() {
        let clock = SimClock::new(0, 60);
        assert_eq!(clock.to_string(), "S0 (1970-01-01 00:00:00 UTC)");
    }

    #[test]
    fn config_validation() {
        assert!(config(3_600).validate().is_ok());
        assert!(config(0).validate().is_err());

        let mut unnamed = config(3_600);
        unnamed.name = "  ".into();
        assert!(unnamed.validate().is_err());

        let mut zero_cap = config(3_600);
        zero_cap.max_jump_steps = Some(0);
        assert!(zero_cap.validate().is_err());
    }
}

#[cfg(test)]
mod climate {
    use crate::MinMax;

    #[test]
    fn constructor_orders_bounds() {
        let a = MinMax::new(10, 100);
        assert_eq!((a.min, a.max), (10, 100));
        let b = MinMax::new(100, 10);
        assert_eq!(a, b);
    }

    #[test]
    fn equality() {
        let mut a = MinMax::new(100, 10);
        let b = MinMax::new(200, 20);
        assert_ne!(a, b);
        a = b;
        assert_eq!(a, b);
    }

    #[test]
    fn covers_and_contains() {
        let wide = MinMax::new(-5.0, 35.0);
        let narrow = MinMax::new(0.0, 30.0);
        assert!(wide.covers(&narrow));
        assert!(!narrow.covers(&wide));
        assert!(wide.contains(-5.0));
        assert!(!wide.contains(35.5));
    }
}

#[cfg(test)]
mod geo {
    use crate::{Coordinate, Location};

    #[test]
    fn coordinate_order_is_x_then_y() {
        assert!(Coordinate::new(0, 9) < Coordinate::new(1, 0));
        assert!(Coordinate::new(1, 0) < Coordinate::new(1, 1));
        assert_eq!(Coordinate::from((2, 3)).to_string(), "(2, 3)");
    }

    #[test]
    fn location_center() {
        let loc = Location::new(-120.0, -118.0, 38.0, 36.0);
        assert_eq!(loc.center_latitude(), 37.0);
        assert_eq!(loc.center_longitude(), -119.0);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn streams_are_reproducible_and_distinct() {
        let a: u64 = SimRng::stream(7, 3).random();
        let b: u64 = SimRng::stream(7, 3).random();
        let c: u64 = SimRng::stream(7, 4).random();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
