// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod branch_checkout_command;
pub mod branch_command;
pub mod branch_delete_command;
pub mod branch_new_command;

// Re-export.
pub use branch_checkout_command::*;
pub use branch_command::*;
pub use branch_delete_command::*;
pub use branch_new_command::*;
