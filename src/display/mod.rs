pub mod canvas;
pub mod clock;
pub mod context;
pub mod icons;
pub mod overlay;
pub mod renderer;
pub mod surface;
pub mod update_loop;

/// Matrix width in pixels
pub const MATRIX_WIDTH: i32 = 32;

/// Matrix height in pixels
pub const MATRIX_HEIGHT: i32 = 8;
