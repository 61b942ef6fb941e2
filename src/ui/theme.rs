use ratatui::style::Color;

pub struct Theme {
    pub chart_bg: Color,
    pub bar: Color,        // Blue
    pub bar_active: Color, // Red
    pub bar_value: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    chart_bg: Color::Rgb(255, 255, 255),
    bar: Color::Rgb(0, 0, 255),
    bar_active: Color::Rgb(255, 0, 0),
    bar_value: Color::Rgb(255, 255, 255),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
};
