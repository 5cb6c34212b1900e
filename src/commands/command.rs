// Command trait - Defines the interface for all command implementations
// Copyright (C) 2026 CredWatch Team
// Licensed under GPL-3.0

use crate::Result;
use async_trait::async_trait;

/// Command trait - Defines the interface for all command implementations
///
/// Each operational mode of CredWatch is encapsulated as an independent,
/// testable command object. A command validates its own preconditions,
/// executes its logic, and returns a Result indicating success or failure.
#[async_trait]
pub trait Command: Send + Sync {
    /// Execute the command asynchronously
    async fn execute(&self) -> Result<()>;

    /// Get a human-readable name for this command (for logging/debugging)
    fn name(&self) -> &'static str;
}
