use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen split for the Game screen.
pub struct GameLayout {
    pub header: Rect,
    pub timer: Rect,
    pub words: Rect,
    pub input: Rect,
    pub footer: Rect,
}

impl GameLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: vertical[0],
            timer: vertical[1],
            words: vertical[2],
            input: vertical[3],
            footer: vertical[4],
        }
    }
}

/// Menu on the left, leaderboard on the right; stacked when narrow.
pub struct MenuLayout {
    pub menu: Rect,
    pub board: Rect,
    pub footer: Rect,
}

impl MenuLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(1)])
            .split(area);

        let direction = if area.width >= 90 {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };
        let body = Layout::default()
            .direction(direction)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(vertical[0]);

        Self {
            menu: body[0],
            board: body[1],
            footer: vertical[1],
        }
    }
}

/// Rect of the given share of `area`, grown to at least `min_w` x `min_h`
/// and never larger than `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, min_w: u16, min_h: u16, area: Rect) -> Rect {
    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(min_w).min(area.width);
    let target_h = requested_h.max(min_h).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}

/// Join key hints into one footer line, dropping whole hints that no
/// longer fit in `width`.
pub fn hint_line(hints: &[&str], width: usize) -> String {
    let mut out = String::new();
    for hint in hints.iter().filter(|h| !h.is_empty()) {
        let extra = if out.is_empty() { 2 } else { 3 };
        if out.chars().count() + extra + hint.chars().count() > width {
            break;
        }
        out.push_str(if out.is_empty() { "  " } else { "   " });
        out.push_str(hint);
    }
    out
}
