//! Placement and form constants for the outfit editor.
//!
//! This module centralizes the hardcoded values for item placement,
//! gesture clamping, and metadata form limits.

/// Placement constants for items on the composition canvas.
pub mod placement {
    /// Default width for a newly placed item, in canvas units.
    pub const DEFAULT_WIDTH: f32 = 120.0;
    /// Default height for a newly placed item, in canvas units.
    pub const DEFAULT_HEIGHT: f32 = 160.0;
    /// Minimum width an item can be resized to.
    pub const MIN_WIDTH: f32 = 80.0;
    /// Minimum height an item can be resized to.
    pub const MIN_HEIGHT: f32 = 100.0;
    /// Rotation applied per rotate action, in degrees.
    pub const ROTATION_STEP_DEG: f32 = 45.0;
    /// One full turn, in degrees. Rotations are normalized into [0, this).
    pub const FULL_TURN_DEG: f32 = 360.0;
}

/// Spawn region for newly added items.
///
/// New items land at a jittered offset from the canvas origin so that
/// consecutive adds do not stack exactly on top of one another.
pub mod spawn {
    /// Inclusive lower bound of the spawn offset on both axes.
    pub const OFFSET_MIN: f32 = 50.0;
    /// Inclusive upper bound of the spawn offset on both axes.
    pub const OFFSET_MAX: f32 = 250.0;
}

/// Metadata form limits and defaults.
pub mod form {
    /// Maximum outfit title length, in characters.
    pub const TITLE_MAX: usize = 100;
    /// Maximum outfit description length, in characters.
    pub const DESCRIPTION_MAX: usize = 500;
    /// Category preselected for a fresh outfit form.
    pub const DEFAULT_CATEGORY: &str = "Casual";
    /// Outfit categories offered by the editor form.
    pub const CATEGORIES: &[&str] = &[
        "Casual",
        "Work",
        "Date Night",
        "Formal",
        "Party",
        "Weekend",
        "Travel",
        "Sport",
    ];
}

/// History limits.
pub mod history {
    /// Default maximum number of undo steps kept per session.
    pub const MAX_UNDO: usize = 100;
}
