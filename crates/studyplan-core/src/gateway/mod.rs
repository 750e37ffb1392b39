//! Offline half of the text-generation path.
//!
//! Builds the prompt sent to a remote model and turns its JSON reply into the
//! same [`ScheduleResponse`](crate::schedule::ScheduleResponse) the packer
//! produces. The network call itself lives outside this crate.

mod prompt;
mod reply;

pub use prompt::{build_prompt, OUTPUT_STRUCTURE};
pub use reply::parse_model_reply;
