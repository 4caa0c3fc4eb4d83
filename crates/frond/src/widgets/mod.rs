//! Built-in widgets.

/// Push button.
mod button;
/// Fixed-size box with a background.
mod container;
/// Centers children.
mod center;
/// Filled disc.
mod circle;
/// Dropdown list.
mod dropdown;
/// Flex weight marker.
mod expanded;
/// Rows and columns.
mod flex;
/// Straight line segment.
mod line;
/// Insets around children.
mod padding;
/// Progress bar and ring.
mod progress;
/// Radio buttons and groups.
mod radio;
/// Clamped numeric range.
mod range;
/// Fixed or partly fixed size.
mod sized_box;
/// Horizontal slider.
mod slider;
/// Static text.
pub(crate) mod text;
/// Single-line text entry.
mod text_input;

pub use button::{Button, ButtonStyle};
pub use center::Center;
pub use circle::Circle;
pub use container::Container;
pub use dropdown::Dropdown;
pub use expanded::Expanded;
pub use flex::Flex;
pub use line::Line;
pub use padding::Padding;
pub use progress::{CircularIndicator, ProgressBar};
pub use radio::{RadioButton, RadioGroup};
pub use range::RangeValue;
pub use sized_box::SizedBox;
pub use slider::{Slider, SliderStyle};
pub use text::Text;
pub use text_input::TextInput;
