use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Row, Table, Widget};

use crate::store::LeaderboardEntry;
use crate::ui::theme::Theme;
use crate::vocabulary::Tier;

pub const EMPTY_BOARD_MESSAGE: &str = "No scores yet. Be the first!";

pub struct LeaderboardTable<'a> {
    entries: &'a [LeaderboardEntry],
    tier: Tier,
    theme: &'a Theme,
}

impl<'a> LeaderboardTable<'a> {
    pub fn new(entries: &'a [LeaderboardEntry], tier: Tier, theme: &'a Theme) -> Self {
        Self {
            entries,
            tier,
            theme,
        }
    }
}

impl Widget for LeaderboardTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::bordered()
            .title(format!(" Leaderboard: {} ", self.tier.label()))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        if self.entries.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            let top = inner.y + inner.height / 2;
            Paragraph::new(EMPTY_BOARD_MESSAGE)
                .style(Style::default().fg(colors.muted()))
                .alignment(Alignment::Center)
                .render(Rect::new(inner.x, top, inner.width, 1.min(inner.height)), buf);
            return;
        }

        let header = Row::new(["#", "Player", "WPM", "Acc", "Points"]).style(
            Style::default()
                .fg(colors.header_fg())
                .add_modifier(Modifier::BOLD),
        );

        let rows = self.entries.iter().enumerate().map(|(i, e)| {
            let style = if i == 0 {
                Style::default().fg(colors.accent())
            } else {
                Style::default().fg(colors.fg())
            };
            Row::new([
                format!("#{}", i + 1),
                e.player_name.clone(),
                format!("{} WPM", e.wpm),
                format!("{}%", e.accuracy),
                format!("{} pts", e.score),
            ])
            .style(style)
        });

        let widths = [
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(8),
            Constraint::Length(5),
            Constraint::Length(9),
        ];
        Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::session::SessionResult;

    fn render_to_string(entries: &[LeaderboardEntry]) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 50, 8);
        let mut buf = Buffer::empty(area);
        LeaderboardTable::new(entries, Tier::Easy, &theme).render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_empty_board_shows_prompt() {
        assert!(render_to_string(&[]).contains(EMPTY_BOARD_MESSAGE));
    }

    #[test]
    fn test_rows_show_rank_and_name() {
        let result = SessionResult {
            tier: Tier::Easy,
            wpm: 33,
            accuracy: 98,
            correct_word_count: 33,
            incorrect_word_count: 1,
            score: 330,
        };
        let entries = vec![LeaderboardEntry::new("ada", &result, Utc::now())];
        let text = render_to_string(&entries);
        assert!(text.contains("#1"));
        assert!(text.contains("ada"));
        assert!(text.contains("330 pts"));
    }
}
