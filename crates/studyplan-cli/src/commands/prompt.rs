use clap::Args;
use studyplan_core::{build_prompt, Config, CoreError};

use super::input::RequestArgs;

#[derive(Args)]
pub struct PromptArgs {
    #[command(flatten)]
    pub input: RequestArgs,
}

pub fn run(args: PromptArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let request = args.input.read_request(config)?;
    request.validate().map_err(CoreError::from)?;
    println!(
        "{}",
        build_prompt(&request.assignments, &request.preferences, args.input.today())
    );
    Ok(())
}
