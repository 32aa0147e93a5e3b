use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::ui::theme::Theme;

/// Below this share of time left the bar switches to the warning color.
const LOW_TIME_RATIO: f64 = 0.2;

/// Time-left bar, full at start and draining toward zero.
pub struct TimeBar<'a> {
    pub remaining: u32,
    pub total: u32,
    pub theme: &'a Theme,
}

impl<'a> TimeBar<'a> {
    pub fn new(remaining: u32, total: u32, theme: &'a Theme) -> Self {
        Self {
            remaining,
            total,
            theme,
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (f64::from(self.remaining) / f64::from(self.total)).clamp(0.0, 1.0)
    }
}

impl Widget for TimeBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Time ")
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let ratio = self.ratio();
        let filled_width = (ratio * f64::from(inner.width)).round() as u16;
        let fill = if ratio < LOW_TIME_RATIO {
            colors.bar_low()
        } else {
            colors.bar_filled()
        };

        for x in inner.x..inner.x + inner.width {
            let style = if x < inner.x + filled_width {
                Style::default().bg(fill)
            } else {
                Style::default().bg(colors.bar_empty())
            };
            buf[(x, inner.y)].set_style(style);
        }

        let label = format!("{}s", self.remaining);
        let label_x = inner.x + (inner.width.saturating_sub(label.len() as u16)) / 2;
        buf.set_string(label_x, inner.y, &label, Style::default().fg(colors.fg()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_tracks_time_left() {
        let theme = Theme::default();
        assert_eq!(TimeBar::new(60, 60, &theme).ratio(), 1.0);
        assert_eq!(TimeBar::new(30, 60, &theme).ratio(), 0.5);
        assert_eq!(TimeBar::new(0, 60, &theme).ratio(), 0.0);
        assert_eq!(TimeBar::new(5, 0, &theme).ratio(), 0.0);
    }
}
