// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod branch;
pub mod clap_config;
pub mod common_types;
pub mod git;
pub mod ui_str;

// Re-export.
pub use branch::*;
pub use clap_config::*;
pub use common_types::*;
pub use git::*;
pub use ui_str::*;
