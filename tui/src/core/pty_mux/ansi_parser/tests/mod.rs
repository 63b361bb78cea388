// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub(super) mod tests_fixtures; // Make fixtures accessible to parent module.

mod tests_character_encoding;
mod tests_control_sequences;
mod tests_cursor_operations;
mod tests_display_operations;
mod tests_dsr_responses;
mod tests_integration;
mod tests_line_wrap_and_scroll_control;
mod tests_osc_sequences;
mod tests_processor_lifecycle;
