//! MCP tools implementation

pub mod media;
pub mod post_results;
pub mod posts;
pub mod social_accounts;
pub mod upload;
pub mod util;

#[cfg(test)]
mod tools_argument_tests;
