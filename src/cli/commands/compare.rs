//! Compare command - Compare a PS agent against a random baseline

use anyhow::Result;
use clap::Parser;

use crate::{
    PsAgent,
    cli::{
        config::{AgentArgs, EnvArgs, EnvKind, RunArgs},
        output::{print_section, print_subsection, print_training_result},
    },
    pipeline::{ComparisonFramework, ComparisonResult, Learner, RandomLearner},
    ports::Environment,
};

#[derive(Parser, Debug)]
#[command(about = "Compare a PS agent with a random baseline")]
pub struct CompareArgs {
    #[command(flatten)]
    pub env: EnvArgs,

    #[command(flatten)]
    pub agent: AgentArgs,

    #[command(flatten)]
    pub run: RunArgs,

    /// Emit results as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let result = match args.env.env {
        EnvKind::Invasion => compare(&args, || args.env.invasion(args.run.seed))?,
        EnvKind::GridWorld => compare(&args, || args.env.grid_world())?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_section("Comparison Results");
    for run in &result.results {
        print_subsection(&run.learner);
        print_training_result(run);
    }
    if let Some(best) = result.best() {
        println!("\nBest final reward: {} ({:.4})", best.learner, best.final_window_reward);
    }
    Ok(())
}

fn compare<E, F>(args: &CompareArgs, mut make_env: F) -> Result<ComparisonResult>
where
    E: Environment,
    F: FnMut() -> crate::Result<E>,
{
    let num_actions = make_env()?.num_actions();
    let config = args.agent.to_config(num_actions, args.run.seed);

    let learners: Vec<Box<dyn Learner>> = vec![
        Box::new(PsAgent::from_config(config)?),
        Box::new(RandomLearner::new("Random".to_string(), num_actions)?),
    ];

    let mut framework = ComparisonFramework::new(learners, args.run.training_config())
        .with_progress(!args.run.no_progress && !args.json);
    let result = framework.compare(make_env)?;

    if let Some(agent) = framework
        .learners()
        .iter()
        .find_map(|l| l.as_any().downcast_ref::<PsAgent>())
    {
        tracing::debug!(percepts = agent.num_percepts(), "PS agent percept table size");
    }

    Ok(result)
}
