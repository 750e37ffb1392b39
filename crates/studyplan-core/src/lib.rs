//! # studyplan Core Library
//!
//! Turns a list of academic assignments and study preferences into a
//! calendar of study sessions. The CLI is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Scheduler**: deterministic session packer; a pure function of the
//!   request and an injected "today"
//! - **Schedule**: wire types shared by every planning path
//! - **Gateway**: prompt building and reply parsing for the text-generation
//!   path (no network access here)
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`SessionPacker`]: packs sessions into peak-hour windows
//! - [`ScheduleRequest`]: validated input
//! - [`ScheduleResponse`]: schedule, rationale and tips
//! - [`Config`]: application configuration management

pub mod error;
pub mod gateway;
pub mod schedule;
pub mod scheduler;
pub mod storage;

pub use error::{ConfigError, CoreError, ErrorKind, GatewayError, PlanError, ValidationError};
pub use gateway::{build_prompt, parse_model_reply};
pub use schedule::{
    Assignment, AssignmentType, ClockTime, PeakHours, PeakWindow, Preferences, Priority,
    ScheduleRequest, ScheduleResponse, SessionType, StudySession,
};
pub use scheduler::{
    generate_schedule, pack, DeadlineSkip, PackOutcome, SessionPacker, SkipReason, STUDY_TIPS,
};
pub use storage::{Config, PlannerMode};
