use log::Level;

/// Vertical scroll offset, in CSS pixels, past which the nav bar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Fraction of the viewport height a block's top edge has to rise above before it is revealed.
pub const REVEAL_VIEWPORT_RATIO: f64 = 0.85;

/// Attribute carrying a block's reveal tag.
pub const ANIMATE_ATTRIBUTE: &str = "data-animate";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
