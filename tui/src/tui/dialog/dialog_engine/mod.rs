// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod border_cache;
pub mod dialog_engine_api;
pub mod dialog_engine_struct;

// Re-export.
pub use border_cache::*;
pub use dialog_engine_api::*;
pub use dialog_engine_struct::*;
