//! Tests for the training pipeline, observers and reference environments

use ps_agent::{
    AgentConfig, Error, PsAgent,
    environments::{GridWorld, InvasionGame},
    pipeline::{
        ComparisonFramework, Learner, MetricsObserver, RandomLearner, TracingObserver,
        TrainingConfig, TrainingPipeline,
    },
};

mod common;

use common::RecordingObserver;

fn invasion_agent(seed: u64) -> PsAgent {
    let config = AgentConfig::new(2)
        .with_glow(1.0)
        .with_softmax(1.0)
        .with_seed(seed);
    PsAgent::from_config(config).unwrap()
}

#[test]
fn ps_agent_learns_invasion_game() {
    let config = TrainingConfig {
        num_episodes: 500,
        max_steps_per_episode: 1,
        seed: Some(42),
    };
    let mut pipeline = TrainingPipeline::new(config);
    let mut agent = invasion_agent(42);
    let mut game = InvasionGame::new(2).unwrap().with_seed(7);

    let result = pipeline.run(&mut agent, &mut game).unwrap();

    assert_eq!(result.learner, "PS");
    assert_eq!(result.environment, "invasion-game");
    assert_eq!(result.total_episodes, 500);
    assert_eq!(result.total_steps, 500);
    assert_eq!(result.completed_episodes, 500);
    assert!(
        result.final_window_reward > 0.9,
        "PS agent should block almost every attack, got {}",
        result.final_window_reward
    );
    assert_eq!(agent.num_percepts(), 2);
}

#[test]
fn ps_agent_relearns_after_reversal_with_damping() {
    let config = TrainingConfig {
        num_episodes: 1000,
        max_steps_per_episode: 1,
        seed: Some(3),
    };
    let agent_config = AgentConfig::new(2)
        .with_glow(1.0)
        .with_damp(0.05)
        .with_softmax(1.0)
        .with_seed(3);
    let mut agent = PsAgent::from_config(agent_config).unwrap();
    let mut game = InvasionGame::new(2)
        .unwrap()
        .with_seed(11)
        .with_reversal(500);

    let metrics = MetricsObserver::new();
    let history = metrics.history();
    let mut pipeline = TrainingPipeline::new(config).with_observer(Box::new(metrics));
    pipeline.run(&mut agent, &mut game).unwrap();

    let curve = history.snapshot().learning_curve(100);
    assert_eq!(curve.len(), 10);
    assert!(curve[4] > 0.8, "learned before reversal: {curve:?}");
    assert!(curve[9] > 0.8, "relearned after reversal: {curve:?}");
    assert!(curve[5] < curve[4], "reversal must cost reward: {curve:?}");
}

#[test]
fn random_baseline_hovers_at_chance() {
    let config = TrainingConfig {
        num_episodes: 1000,
        max_steps_per_episode: 1,
        seed: Some(5),
    };
    let mut pipeline = TrainingPipeline::new(config);
    let mut learner = RandomLearner::new("Random".to_string(), 2).unwrap();
    let mut game = InvasionGame::new(2).unwrap().with_seed(5);

    let result = pipeline.run(&mut learner, &mut game).unwrap();
    assert!(
        result.mean_reward_per_episode > 0.4 && result.mean_reward_per_episode < 0.6,
        "random learner should score near 0.5, got {}",
        result.mean_reward_per_episode
    );
}

#[test]
fn comparison_ranks_ps_above_random() {
    let config = TrainingConfig {
        num_episodes: 400,
        max_steps_per_episode: 1,
        seed: Some(9),
    };
    let learners: Vec<Box<dyn Learner>> = vec![
        Box::new(invasion_agent(9)),
        Box::new(RandomLearner::new("Random".to_string(), 2).unwrap()),
    ];
    let mut framework = ComparisonFramework::new(learners, config);
    let result = framework
        .compare(|| Ok(InvasionGame::new(2)?.with_seed(1)))
        .unwrap();

    assert_eq!(result.results.len(), 2);
    assert_eq!(result.results[0].learner, "PS");
    assert_eq!(result.results[1].learner, "Random");
    assert_eq!(result.best().unwrap().learner, "PS");
}

#[test]
fn grid_world_episodes_get_shorter() {
    let config = TrainingConfig {
        num_episodes: 500,
        max_steps_per_episode: 1000,
        seed: Some(21),
    };
    let agent_config = AgentConfig::new(4)
        .with_glow(0.05)
        .with_softmax(1.0)
        .with_seed(21);
    let mut agent = PsAgent::from_config(agent_config).unwrap();
    let mut grid = GridWorld::new(3, 3).unwrap();

    let metrics = MetricsObserver::new();
    let history = metrics.history();
    let mut pipeline = TrainingPipeline::new(config).with_observer(Box::new(metrics));
    let result = pipeline.run(&mut agent, &mut grid).unwrap();

    assert_eq!(result.completed_episodes, 500);
    assert_eq!(result.total_reward, 500.0);
    assert_eq!(agent.num_percepts(), 8, "every non-goal cell is a percept");

    let steps = history.snapshot().episode_steps;
    let early: usize = steps[..100].iter().sum();
    let late: usize = steps[400..].iter().sum();
    assert!(
        late < early,
        "late episodes ({late} steps) should be shorter than early ones ({early} steps)"
    );
    assert!(steps.iter().all(|s| *s >= grid.shortest_path_len()));
}

#[test]
fn step_limit_cuts_episodes() {
    let config = TrainingConfig {
        num_episodes: 5,
        max_steps_per_episode: 2,
        seed: Some(1),
    };
    let mut pipeline = TrainingPipeline::new(config);
    let mut agent = PsAgent::new(4).unwrap();
    let mut grid = GridWorld::new(10, 10).unwrap();

    let result = pipeline.run(&mut agent, &mut grid).unwrap();
    assert_eq!(result.completed_episodes, 0);
    assert_eq!(result.total_steps, 10);
    assert_eq!(result.total_reward, 0.0);
}

#[test]
fn observers_see_events_in_order() {
    let config = TrainingConfig {
        num_episodes: 2,
        max_steps_per_episode: 1,
        seed: Some(4),
    };
    let recorder = RecordingObserver::default();
    let mut pipeline = TrainingPipeline::new(config)
        .with_observer(Box::new(recorder.clone()))
        .with_observer(Box::new(TracingObserver::new(1)));
    let mut agent = invasion_agent(4);
    let mut game = InvasionGame::new(2).unwrap().with_seed(4);
    pipeline.run(&mut agent, &mut game).unwrap();

    let events = recorder.events();
    assert_eq!(events.len(), 8);
    assert_eq!(events[0], "start 2");
    assert_eq!(events[1], "episode 0");
    assert!(events[2].starts_with("step 0.0 "));
    assert_eq!(events[3], "end 0 1");
    assert_eq!(events[4], "episode 1");
    assert!(events[5].starts_with("step 1.0 "));
    assert_eq!(events[6], "end 1 1");
    assert_eq!(events[7], "finish");
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = || {
        let config = TrainingConfig {
            num_episodes: 200,
            max_steps_per_episode: 50,
            seed: Some(77),
        };
        let mut agent = PsAgent::new(4).unwrap();
        let mut grid = GridWorld::new(4, 4).unwrap();
        TrainingPipeline::new(config)
            .run(&mut agent, &mut grid)
            .unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first.total_steps, second.total_steps);
    assert_eq!(first.total_reward, second.total_reward);
}

#[test]
fn zero_step_limit_is_rejected() {
    let config = TrainingConfig {
        num_episodes: 1,
        max_steps_per_episode: 0,
        seed: None,
    };
    let mut agent = PsAgent::new(2).unwrap();
    let mut game = InvasionGame::new(2).unwrap();
    let err = TrainingPipeline::new(config)
        .run(&mut agent, &mut game)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidParameter {
            name: "max_steps_per_episode",
            ..
        }
    ));
}

#[test]
fn environment_errors_propagate() {
    let config = TrainingConfig {
        num_episodes: 50,
        max_steps_per_episode: 1,
        seed: Some(2),
    };
    // Three actions against a two-door game: action 2 is eventually chosen.
    let mut learner = RandomLearner::new("Random".to_string(), 3).unwrap();
    let mut game = InvasionGame::new(2).unwrap().with_seed(2);
    let err = TrainingPipeline::new(config)
        .run(&mut learner, &mut game)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidAction { num_actions: 2, .. }));
}
