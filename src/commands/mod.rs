// Commands module - Command Pattern implementation
// Copyright (C) 2026 CredWatch Team
// Licensed under GPL-3.0

mod command;
mod router;

// Individual command implementations
mod check;
mod test_alert;

pub use command::Command;
pub use router::CommandRouter;

// Re-export individual commands for testing purposes
pub use check::CheckCommand;
pub use test_alert::TestAlertCommand;
