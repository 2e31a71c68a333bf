//! Configuration type definitions.

use super::enums::ColorChoice;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas settings.
///
/// Controls the size of the drawing surface and the background it starts
/// with. The background can still be changed at runtime with the
/// `background` command.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// Canvas height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: i32,

    /// Initial background color name (e.g. "white", "lightblue") or hex "#rrggbb"
    #[serde(default = "default_background")]
    pub background: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

/// Terminal presentation preferences.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// When to highlight rejected commands in red (auto, always, never)
    #[serde(default = "default_color_choice")]
    pub color: ColorChoice,

    /// Prompt printed before each line when reading interactively
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: default_color_choice(),
            prompt: default_prompt(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_width() -> i32 {
    400
}

fn default_canvas_height() -> i32 {
    400
}

fn default_background() -> String {
    "white".to_string()
}

fn default_color_choice() -> ColorChoice {
    ColorChoice::Auto
}

fn default_prompt() -> String {
    "> ".to_string()
}
