use frond::{Color, widgets::ButtonStyle};

/// Window background.
pub const BACKGROUND: Color = Color(0xFF1A_1A1A);
/// Raised panels.
pub const SURFACE: Color = Color(0xFF2A_2A2A);
/// Primary accent.
pub const BLUE: Color = Color(0xFF3B_82F6);
/// Positive state.
pub const GREEN: Color = Color(0xFF10_B981);
/// Negative state.
pub const RED: Color = Color(0xFFEF_4444);
/// Secondary text.
pub const MUTED: Color = Color(0xFF9C_A3AF);

/// A rounded button style around a base color.
pub fn button(normal: Color) -> ButtonStyle {
    ButtonStyle {
        normal,
        hover: normal.lighten(0.15),
        press: normal.darken(0.2),
        text: Color::WHITE,
        radius: 12,
        border_width: 0,
        border_color: Color::TRANSPARENT,
    }
}
