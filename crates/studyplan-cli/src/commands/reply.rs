use std::path::PathBuf;

use clap::Args;
use studyplan_core::{parse_model_reply, CoreError};

use super::input::read_text;

#[derive(Args)]
pub struct ReplyArgs {
    /// File holding the raw model reply; reads stdin when omitted or "-"
    pub file: Option<PathBuf>,
}

pub fn run(args: ReplyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_text(args.file.as_ref())?;
    let response = parse_model_reply(&text).map_err(CoreError::from)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
