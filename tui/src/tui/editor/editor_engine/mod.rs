/*
 *   Copyright (c) 2022-2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

// Attach.
pub mod caret_mut;
pub mod content_mut;
pub mod engine_internal_api;
pub mod engine_public_api;
pub mod engine_struct;
pub mod macros;
pub mod scroll_editor_content;
pub mod select_mode;
pub mod validate_buffer_mut;
pub mod validate_scroll_on_resize;

// Re-export.
pub use engine_public_api::*;
pub use engine_struct::*;
pub use select_mode::*;
pub use validate_scroll_on_resize::*;
