pub mod json_float;
pub mod time_series;
pub mod windowing;

pub use time_series::{TimeSeries, UnclickedWindowPolicy};
pub use windowing::{
    WindowBounds, WindowRange, bisect_left, bisect_right, index_range, resolve_window,
    window_bounds,
};
