use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::Snapshot;
use crate::ui::theme::Theme;
use crate::vocabulary::Tier;

/// One-line header: tier, time left, WPM, accuracy, score.
pub struct StatsBar<'a> {
    snapshot: &'a Snapshot,
    tier: Tier,
    theme: &'a Theme,
}

impl<'a> StatsBar<'a> {
    pub fn new(snapshot: &'a Snapshot, tier: Tier, theme: &'a Theme) -> Self {
        Self {
            snapshot,
            tier,
            theme,
        }
    }
}

impl Widget for StatsBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let label = Style::default().fg(colors.muted());
        let value = Style::default()
            .fg(colors.header_fg())
            .add_modifier(Modifier::BOLD);

        let s = self.snapshot;
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.tier.label()),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" | Time ", label),
            Span::styled(format!("{}s", s.time_remaining), value),
            Span::styled(" | WPM ", label),
            Span::styled(s.wpm.to_string(), value),
            Span::styled(" | Accuracy ", label),
            Span::styled(format!("{}%", s.accuracy), value),
            Span::styled(" | Score ", label),
            Span::styled(s.score.to_string(), value),
        ]);

        let block = Block::bordered()
            .title(" keyrush ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        Paragraph::new(line)
            .block(block)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
