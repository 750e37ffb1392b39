use clap::Args;
use studyplan_core::{build_prompt, generate_schedule, Config, PlannerMode, ScheduleResponse};

use super::input::RequestArgs;

#[derive(Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub input: RequestArgs,
    /// Print the schedule as JSON
    #[arg(long)]
    pub json: bool,
}

fn print_table(response: &ScheduleResponse) {
    for session in &response.schedule {
        println!(
            "{}  {}-{}  {:<6}  {} ({})",
            session.date,
            session.start_time,
            session.end_time,
            session.kind.as_str(),
            session.task,
            session.subject,
        );
    }
    println!();
    println!("{}", response.rationale);
    for tip in &response.tips {
        println!("- {tip}");
    }
}

pub fn run(args: PlanArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let request = args.input.read_request(config)?;
    let today = args.input.today();

    if config.planner.mode == PlannerMode::Model {
        request.validate().map_err(studyplan_core::CoreError::from)?;
        tracing::info!(provider = ?config.planner.provider, "model planner selected");
        eprintln!("planner mode is 'model'; send this prompt to the model and use `parse-reply`:");
        println!(
            "{}",
            build_prompt(&request.assignments, &request.preferences, today)
        );
        return Ok(());
    }

    let outcome = generate_schedule(&request, today)?;
    for skip in &outcome.skipped {
        eprintln!("note: {skip}");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.response)?);
    } else {
        print_table(&outcome.response);
    }
    Ok(())
}
