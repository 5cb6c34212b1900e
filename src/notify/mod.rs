// Notification channels
// Copyright (C) 2026 CredWatch Team
// Licensed under GPL-3.0

mod channels;
pub mod teams;

pub use channels::AlertChannel;
pub use teams::TeamsChannel;
