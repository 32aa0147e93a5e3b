use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::app::{Notice, NoticeKind};
use crate::session::SessionResult;
use crate::ui::theme::Theme;

/// Final numbers for a finished session.
pub struct Results<'a> {
    result: &'a SessionResult,
    notice: Option<&'a Notice>,
    theme: &'a Theme,
}

impl<'a> Results<'a> {
    pub fn new(result: &'a SessionResult, notice: Option<&'a Notice>, theme: &'a Theme) -> Self {
        Self {
            result,
            notice,
            theme,
        }
    }
}

impl Widget for Results<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let label = Style::default().fg(colors.muted());
        let value = Style::default()
            .fg(colors.fg())
            .add_modifier(Modifier::BOLD);
        let r = self.result;

        let row = |name: &str, text: String| {
            Line::from(vec![
                Span::styled(format!("{name:>18}  "), label),
                Span::styled(format!("{text:<14}"), value),
            ])
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Time's up!",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            row("Speed", format!("{} WPM", r.wpm)),
            row("Accuracy", format!("{}%", r.accuracy)),
            row("Correct words", r.correct_word_count.to_string()),
            row("Incorrect words", r.incorrect_word_count.to_string()),
            row("Score", format!("{} points", r.score)),
            row("Difficulty", r.tier.label().to_string()),
            Line::from(""),
        ];

        if let Some(notice) = self.notice {
            let color = match notice.kind {
                NoticeKind::Success => colors.success(),
                NoticeKind::Error => colors.error(),
            };
            lines.push(Line::from(Span::styled(
                notice.text.clone(),
                Style::default().fg(color),
            )));
        }

        let block = Block::bordered()
            .title(" Game Over ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
