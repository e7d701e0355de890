use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Width of the form column on wide terminals.
pub const FORM_WIDTH: u16 = 48;

/// Split a screen into a content area and a footer of `footer_height` rows.
pub fn split_footer(area: Rect, footer_height: u16) -> (Rect, Rect) {
    let [content, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(footer_height)]).areas(area);
    (content, footer)
}

/// Center a column of at most `width` columns and exactly `height` rows.
///
/// The result is clamped to `area`, so small terminals get the whole area.
pub fn centered_column(area: Rect, width: u16, height: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [column] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(column);
    column
}
