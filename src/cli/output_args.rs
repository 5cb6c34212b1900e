// Output and display arguments
// Copyright (C) 2026 CredWatch Team
// Licensed under GPL-3.0

use clap::Args;

/// Output and display options
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Suppress the banner and non-essential output
    #[arg(long = "quiet", short = 'q')]
    pub quiet: bool,
}
