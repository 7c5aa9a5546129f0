//! Train command - Train a PS agent in a reference environment

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    AgentConfig, PsAgent,
    cli::{
        config::{AgentArgs, EnvArgs, EnvKind, RunArgs},
        output::{print_kv, print_section, print_subsection, print_training_result},
    },
    pipeline::{MetricsObserver, ProgressObserver, TrainingPipeline, TrainingResult},
    ports::Environment,
};

/// Number of percept rows shown by `--show-policy` before truncating
const MAX_POLICY_ROWS: usize = 25;

#[derive(Parser, Debug)]
#[command(about = "Train a PS agent")]
pub struct TrainArgs {
    #[command(flatten)]
    pub env: EnvArgs,

    #[command(flatten)]
    pub agent: AgentArgs,

    #[command(flatten)]
    pub run: RunArgs,

    /// Print the learned action distribution for each percept
    #[arg(long)]
    pub show_policy: bool,

    /// Emit the run summary as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct TrainReport<'a> {
    agent: &'a AgentConfig,
    result: &'a TrainingResult,
    learning_curve: Vec<f64>,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    match args.env.env {
        EnvKind::Invasion => {
            let env = args.env.invasion(args.run.seed)?;
            run(&args, env)
        }
        EnvKind::GridWorld => {
            let env = args.env.grid_world()?;
            run(&args, env)
        }
    }
}

fn run<E: Environment>(args: &TrainArgs, mut env: E) -> Result<()> {
    let config = args.agent.to_config(env.num_actions(), args.run.seed);
    let mut agent = PsAgent::from_config(config).context("invalid agent parameters")?;

    let metrics = MetricsObserver::new();
    let history = metrics.history();
    let mut pipeline =
        TrainingPipeline::new(args.run.training_config()).with_observer(Box::new(metrics));
    if !args.run.no_progress && !args.json {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }

    let result = pipeline.run(&mut agent, &mut env)?;
    let curve_window = (args.run.episodes / 10).max(1);
    let learning_curve = history.snapshot().learning_curve(curve_window);

    if args.json {
        let report = TrainReport {
            agent: agent.config(),
            result: &result,
            learning_curve,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Training Summary");
    print_training_result(&result);
    print_kv("Percepts", &agent.num_percepts().to_string());

    print_subsection(&format!("Learning curve (mean reward per {curve_window} episodes)"));
    for (block, reward) in learning_curve.iter().enumerate() {
        println!("  {:>6}  {reward:.4}", (block + 1) * curve_window);
    }

    if args.show_policy {
        print_policy(&agent)?;
    }

    Ok(())
}

fn print_policy(agent: &PsAgent) -> Result<()> {
    print_subsection("Learned policy");
    for (index, key) in agent.percepts().iter().take(MAX_POLICY_ROWS) {
        let probabilities = agent.action_probabilities(key)?;
        let formatted: Vec<String> = probabilities.iter().map(|p| format!("{p:.3}")).collect();
        println!("  {index:>4}  {key:<12} [{}]", formatted.join(", "));
    }
    if agent.num_percepts() > MAX_POLICY_ROWS {
        println!("  ... {} more", agent.num_percepts() - MAX_POLICY_ROWS);
    }
    Ok(())
}
