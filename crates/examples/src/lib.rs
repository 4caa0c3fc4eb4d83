//! Demo scenes built on frond.

/// A click counter.
pub mod counter;
/// A form with text entry, a dropdown and radio buttons.
pub mod form;
/// Shapes, indicators and a slider.
pub mod gallery;
/// Palette shared by the demos.
pub mod palette;

#[cfg(test)]
mod tests;
