/*
 *   Copyright (c) 2022 R3BL LLC
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
pub mod arg_types;
pub mod editor_buffer;
pub mod editor_buffer_command;
pub mod editor_buffer_command_impl;
pub mod editor_render_engine;

// Re-export.
pub use arg_types::*;
pub use editor_buffer::*;
pub use editor_buffer_command::*;
pub use editor_buffer_command_impl::*;
pub use editor_render_engine::*;

// Tests.
pub mod test_editor;
