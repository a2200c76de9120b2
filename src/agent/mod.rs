pub mod error;
pub mod history;
pub mod remote;
pub mod runner;
pub mod scripted;
pub mod system_prompt;
