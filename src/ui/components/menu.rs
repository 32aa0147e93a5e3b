use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;
use crate::vocabulary::Tier;

/// Title and difficulty picker.
pub struct Menu<'a> {
    pub selected: Tier,
    pub theme: &'a Theme,
}

impl<'a> Menu<'a> {
    pub fn new(selected: Tier, theme: &'a Theme) -> Self {
        Self { selected, theme }
    }
}

fn tier_blurb(tier: Tier) -> &'static str {
    match tier {
        Tier::Easy => "Short everyday words",
        Tier::Medium => "Longer common words",
        Tier::Hard => "Long technical words",
    }
}

impl Widget for &Menu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let title_lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "keyrush",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Type as many words as you can in the time limit",
                Style::default().fg(colors.fg()),
            )),
        ];
        Paragraph::new(title_lines)
            .alignment(Alignment::Center)
            .render(layout[0], buf);

        let tier_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(Tier::ALL.iter().map(|_| Constraint::Length(3)))
            .split(layout[2]);

        for (i, tier) in Tier::ALL.iter().copied().enumerate() {
            let is_selected = tier == self.selected;
            let indicator = if is_selected { ">" } else { " " };
            let label_style = if is_selected {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };

            let lines = vec![
                Line::from(Span::styled(
                    format!(" {indicator} [{}] {}", i + 1, tier.label()),
                    label_style,
                )),
                Line::from(Span::styled(
                    format!("     {} ({} pts/word)", tier_blurb(tier), tier.points()),
                    Style::default().fg(colors.muted()),
                )),
            ];
            if let Some(row) = tier_layout.get(i) {
                Paragraph::new(lines).render(*row, buf);
            }
        }
    }
}
