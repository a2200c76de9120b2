//! testforge — AI-agent-driven QA test execution and code generation.
//!
//! A test case is a natural-language scenario. The pipeline hands it to an
//! external browser-driving agent, persists the agent's action trace as
//! JSON, then asks a completion service to synthesize test source code
//! (Selenium/TestNG or Playwright) reproducing the trace. Independent
//! pipelines for distinct test cases run concurrently; both external
//! capabilities sit behind injected traits.

pub mod agent;
pub mod case;
pub mod casegen;
pub mod cli;
pub mod codegen;
pub mod llm;
pub mod pipeline;
pub mod server;
pub mod trace;
pub mod validate;
