//! Unit tests for ag-agent.

use ag_action::Action;
use ag_core::{Climate, Coordinate, EnvConfig, Location, MinMax, ResourceKind, ResourceList, TimeStep};
use ag_env::{EnvError, Environment, EnvironmentBuilder, FixedMeteorology};

use crate::{Agent, AgentError, optimal_plants, qualified_plants};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn climate(temp: (f64, f64), rain: (f64, f64)) -> Climate {
    Climate {
        yearly_temperature: MinMax::from(temp),
        yearly_rainfall: MinMax::from(rain),
        ..Climate::default()
    }
}

fn env_in(climate: Climate) -> Environment {
    let config = EnvConfig {
        name: "field".into(),
        location: Location::default(),
        climate,
        start_unix_secs: 0,
        step_length_secs: 3_600,
        seed: 1,
        max_jump_steps: None,
    };
    EnvironmentBuilder::new(config)
        .grid(3, 3)
        .meteorology(FixedMeteorology::default())
        .build()
        .unwrap()
}

fn env() -> Environment {
    env_in(climate((12.0, 28.0), (700.0, 900.0)))
}

fn cost(pairs: &[(ResourceKind, u64)]) -> ResourceList {
    pairs.iter().copied().collect()
}

fn plant_bean(start: u64, price: &[(ResourceKind, u64)]) -> Action {
    Action::add([Coordinate::new(1, 1)], TimeStep(start), 0, "Bean")
        .unwrap()
        .with_cost(cost(price))
}

#[cfg(test)]
mod inventory {
    use super::*;

    #[test]
    fn add_resource_accumulates() {
        let mut a = Agent::new("alice");
        a.add_resource(ResourceKind::Money, 5);
        a.add_resource(ResourceKind::Money, 7);
        assert_eq!(a.resource(ResourceKind::Money), 12);
        assert_eq!(a.resource(ResourceKind::Seed), 0);
    }

    #[test]
    fn with_resources_merges_list() {
        let a = Agent::with_resources("bob", &cost(&[(ResourceKind::Seed, 3), (ResourceKind::Labor, 1)]));
        assert_eq!(a.inventory().len(), 2);
        assert_eq!(a.to_string(), "bob [labor: 1, seed: 3]");
    }
}

#[cfg(test)]
mod take_action {
    use super::*;

    #[test]
    fn success_deducts_and_queues() {
        let mut env = env();
        let mut a = Agent::with_resources("alice", &cost(&[(ResourceKind::Seed, 2), (ResourceKind::Money, 10)]));

        let id = a
            .take_action(&mut env, plant_bean(0, &[(ResourceKind::Seed, 1), (ResourceKind::Money, 4)]))
            .unwrap();
        assert_eq!(a.resource(ResourceKind::Seed), 1);
        assert_eq!(a.resource(ResourceKind::Money), 6);
        assert_eq!(env.pending_actions(), 1);
        assert!(env.action_state(id).is_some());

        env.jump_to_time_step(TimeStep(0)).unwrap();
        assert!(env.terrain().plant(Coordinate::new(1, 1)).is_some());
    }

    #[test]
    fn insufficient_resources_change_nothing() {
        let mut env = env();
        let mut a = Agent::with_resources("alice", &cost(&[(ResourceKind::Seed, 1)]));

        let err = a
            .take_action(&mut env, plant_bean(0, &[(ResourceKind::Seed, 1), (ResourceKind::Money, 1)]))
            .unwrap_err();
        assert!(matches!(
            err,
            AgentError::NotEnoughResources { kind: ResourceKind::Money, required: 1, available: 0 }
        ));
        assert_eq!(a.resource(ResourceKind::Seed), 1);
        assert_eq!(env.pending_actions(), 0);
    }

    #[test]
    fn free_action_needs_no_inventory() {
        let mut env = env();
        let mut a = Agent::new("carol");
        assert!(a.take_action(&mut env, plant_bean(0, &[])).is_ok());
    }

    #[test]
    fn rejected_action_is_not_charged() {
        let mut env = env();
        env.jump_to_time_step(TimeStep(3)).unwrap();
        let mut a = Agent::with_resources("alice", &cost(&[(ResourceKind::Seed, 1)]));

        let err = a
            .take_action(&mut env, plant_bean(1, &[(ResourceKind::Seed, 1)]))
            .unwrap_err();
        assert!(matches!(err, AgentError::InvalidArgument(EnvError::ActionInPast { .. })));
        assert_eq!(a.resource(ResourceKind::Seed), 1);
    }

    #[test]
    fn cost_is_charged_even_if_effect_is_noop() {
        let mut env = env();
        let mut a = Agent::with_resources("alice", &cost(&[(ResourceKind::Seed, 2)]));
        a.take_action(&mut env, plant_bean(0, &[(ResourceKind::Seed, 1)])).unwrap();
        a.take_action(&mut env, plant_bean(0, &[(ResourceKind::Seed, 1)])).unwrap();
        env.jump_to_time_step(TimeStep(0)).unwrap();

        assert_eq!(env.terrain().plant_count(), 1);
        assert_eq!(a.resource(ResourceKind::Seed), 0);
    }

    #[test]
    fn batch_checks_combined_cost() {
        let mut env = env();
        let mut a = Agent::with_resources("alice", &cost(&[(ResourceKind::Money, 5)]));
        let batch = || {
            vec![
                plant_bean(0, &[(ResourceKind::Money, 3)]),
                plant_bean(1, &[(ResourceKind::Money, 3)]),
            ]
        };

        assert!(matches!(
            a.take_actions(&mut env, batch()),
            Err(AgentError::NotEnoughResources { required: 6, available: 5, .. })
        ));
        assert_eq!(env.pending_actions(), 0);

        a.add_resource(ResourceKind::Money, 1);
        let ids = a.take_actions(&mut env, batch()).unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(a.resource(ResourceKind::Money), 0);
    }
}

#[cfg(test)]
mod selection {
    use super::*;

    #[test]
    fn mild_climate_qualifies_all_but_optimal_for_none() {
        let c = climate((12.0, 28.0), (700.0, 900.0));
        assert_eq!(qualified_plants(&c), ["Bean", "Corn", "Squash"]);
        assert!(optimal_plants(&c).is_empty());
    }

    #[test]
    fn warm_climate_is_optimal_for_all() {
        let c = climate((20.0, 28.0), (700.0, 900.0));
        assert_eq!(optimal_plants(&c), ["Bean", "Corn", "Squash"]);
    }

    #[test]
    fn wet_climate_excludes_squash() {
        let c = climate((20.0, 29.0), (1_100.0, 1_150.0));
        assert_eq!(optimal_plants(&c), ["Bean", "Corn"]);
    }

    #[test]
    fn frost_qualifies_nothing() {
        let c = climate((-5.0, 25.0), (700.0, 900.0));
        assert!(qualified_plants(&c).is_empty());
    }

    #[test]
    fn optimal_is_subset_of_qualified() {
        let c = climate((20.0, 28.0), (700.0, 900.0));
        let qualified = qualified_plants(&c);
        assert!(optimal_plants(&c).iter().all(|p| qualified.contains(p)));
    }

    #[test]
    fn agent_queries_use_env_climate() {
        let env = env_in(climate((20.0, 29.0), (1_100.0, 1_150.0)));
        let a = Agent::new("dave");
        assert_eq!(a.optimal_plants(&env), ["Bean", "Corn"]);
        assert_eq!(a.qualified_plants(&env), ["Bean", "Corn", "Squash"]);
    }
}
