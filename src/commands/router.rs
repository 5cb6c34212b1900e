// CommandRouter - Routes CLI arguments to appropriate Command
// Copyright (C) 2026 CredWatch Team
// Licensed under GPL-3.0

use super::{CheckCommand, Command, TestAlertCommand};
use crate::{Args, CredError, Result};

/// CommandRouter determines which Command to execute based on CLI arguments
///
/// Priority-based routing:
/// 1. Webhook connectivity test (--test-alert)
/// 2. Expiry check and notification (default)
pub struct CommandRouter;

impl CommandRouter {
    /// Route CLI arguments to the appropriate Command
    pub fn route(args: Args) -> Result<Box<dyn Command>> {
        // Priority 1: webhook connectivity test
        if args.notify.test_alert {
            return Ok(Box::new(TestAlertCommand::new(args)));
        }

        // Default: run the expiry check
        Ok(Box::new(CheckCommand::new(args)))
    }

    /// Check that the argument combination can be routed
    pub fn validate_routing(args: &Args) -> Result<()> {
        if args.notify.test_alert && args.notify.dry_run {
            return Err(CredError::InvalidInput {
                message: "Cannot combine --test-alert with --dry-run".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
