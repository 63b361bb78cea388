// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use base64::{Engine, engine::general_purpose};
use miette::IntoDiagnostic;
use r3bl_tui::{CommonResult, friendly_random_id};
use serde_json::Value;

use super::types::{HistoryItem, ImageContent, ParsedPastedContents, PastedContent,
                   SavedImageInfo};

/// Count the number of images in a history item's pasted contents
#[must_use]
pub fn count_images_in_history_item(history_item: &HistoryItem) -> usize {
    if let Value::Object(contents) = &history_item.pasted_contents {
        contents
            .values()
            .filter_map(|value| {
                serde_json::from_value::<PastedContent>(value.clone()).ok()
            })
            .filter(|content| matches!(content, PastedContent::Image { .. }))
            .count()
    } else {
        0
    }
}

/// Parse pasted contents to extract images and text
///
/// # Errors
///
/// Returns an error if the JSON deserialization fails for any content entry
pub fn parse_pasted_contents(
    pasted_contents: Value,
) -> CommonResult<ParsedPastedContents> {
    let mut images = Vec::new();
    let mut text_parts = Vec::new();

    if let Value::Object(contents) = pasted_contents {
        for (_key, value) in contents {
            match serde_json::from_value::<PastedContent>(value) {
                Ok(PastedContent::Image {
                    content,
                    media_type,
                    ..
                }) => {
                    images.push(ImageContent {
                        content,
                        media_type,
                    });
                }
                Ok(PastedContent::Text { content, .. }) => {
                    text_parts.push(content);
                }
                Err(_) => {
                    // Skip malformed entries
                    tracing::warn!("Failed to parse pasted content entry, skipping");
                }
            }
        }
    }

    let text_content = text_parts.join("\n");

    Ok(ParsedPastedContents {
        images,
        text_content,
    })
}

/// Generate a unique filename for an image
#[must_use]
pub fn generate_image_filename(
    project_path: &str,
    image_num: usize,
    friendly_id: &str,
    media_type: &str,
) -> String {
    let project_name = extract_project_name(project_path);
    let extension = media_type_to_extension(media_type);

    format!("{project_name}_image_{image_num}_{friendly_id}.{extension}")
}

/// Extract project name from full project path
#[must_use]
pub fn extract_project_name(project_path: &str) -> String {
    std::path::Path::new(project_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unknown-project")
        .to_string()
}

/// Convert media type to file extension
#[must_use]
pub fn media_type_to_extension(media_type: &str) -> &str {
    match media_type {
        "image/png" => "png",
        "image/jpeg" | "image/jpg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/bmp" => "bmp",
        "image/svg+xml" => "svg",
        _ => "bin", // fallback for unknown types
    }
}

/// Decode base64 image data
///
/// # Errors
///
/// Returns an error if the base64 decoding fails
pub fn decode_base64_image(base64_data: &str) -> CommonResult<Vec<u8>> {
    general_purpose::STANDARD
        .decode(base64_data)
        .into_diagnostic()
        .map_err(|e| miette::miette!("Failed to decode base64 image data: {}", e))
}

/// Get the Downloads directory for the current platform
///
/// # Errors
///
/// Returns an error if neither the Downloads directory nor the home directory can be
/// determined
pub fn get_downloads_directory() -> CommonResult<PathBuf> {
    if let Some(downloads_dir) = dirs::download_dir() {
        Ok(downloads_dir)
    } else {
        // Fallback to home directory if Downloads can't be found
        let home_dir = dirs::home_dir()
            .ok_or_else(|| miette::miette!("Could not determine home directory"))?;
        Ok(home_dir.join("Downloads"))
    }
}

/// Save images to the Downloads directory
///
/// # Errors
///
/// Returns an error if:
/// - Failed to get the Downloads directory
/// - Failed to create the Downloads directory
/// - Failed to decode base64 image data
/// - Failed to write image file to disk
///
/// # Panics
///
/// Panics if the `saved_images` vector is empty when trying to access the last element
/// (this should never happen as we always push before accessing)
pub fn save_images_to_downloads(
    project_path: &str,
    images: &[ImageContent],
) -> CommonResult<Vec<SavedImageInfo>> {
    if images.is_empty() {
        return Ok(Vec::new());
    }

    let downloads_dir = get_downloads_directory()?;

    // Create Downloads directory if it doesn't exist
    if !downloads_dir.exists() {
        std::fs::create_dir_all(&downloads_dir)
            .into_diagnostic()
            .map_err(|e| {
                miette::miette!("Failed to create Downloads directory: {}", e)
            })?;
    }

    // Generate a single friendly ID for this batch of images
    let friendly_id = friendly_random_id::generate_friendly_random_id();
    let mut saved_images = Vec::new();

    for (index, image) in images.iter().enumerate() {
        let filename = generate_image_filename(
            project_path,
            index + 1, // Start from 1 for user-friendly numbering
            &friendly_id,
            &image.media_type,
        );

        let filepath = downloads_dir.join(&filename);

        // Decode and save the image
        let image_data = decode_base64_image(&image.content)?;

        std::fs::write(&filepath, image_data)
            .into_diagnostic()
            .map_err(|e| {
                miette::miette!(
                    "Failed to write image file {}: {}",
                    filepath.display(),
                    e
                )
            })?;

        saved_images.push(SavedImageInfo {
            filename,
            filepath,
            media_type: image.media_type.clone(),
        });

        tracing::info!(
            "Saved image to: {}",
            saved_images.last().unwrap().filepath.display()
        );
    }

    Ok(saved_images)
}
