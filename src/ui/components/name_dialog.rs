use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::app::NameDialog;
use crate::ui::theme::Theme;

pub struct NameDialogView<'a> {
    dialog: &'a NameDialog,
    score: u32,
    theme: &'a Theme,
}

impl<'a> NameDialogView<'a> {
    pub fn new(dialog: &'a NameDialog, score: u32, theme: &'a Theme) -> Self {
        Self {
            dialog,
            score,
            theme,
        }
    }
}

impl Widget for NameDialogView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        Clear.render(area, buf);

        let (before, cursor, after) = self.dialog.input.render_parts();
        let cursor_style = Style::default().add_modifier(Modifier::REVERSED);
        let field = Line::from(vec![
            Span::styled(" Name: ", Style::default().fg(colors.muted())),
            Span::styled(before.to_string(), Style::default().fg(colors.fg())),
            Span::styled(
                cursor.map_or_else(|| " ".to_string(), |c| c.to_string()),
                cursor_style,
            ),
            Span::styled(after.to_string(), Style::default().fg(colors.fg())),
        ]);

        let mut lines = vec![
            Line::from(Span::styled(
                format!(" You scored {} points!", self.score),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            field,
            Line::from(""),
        ];
        match &self.dialog.error {
            Some(error) => lines.push(Line::from(Span::styled(
                format!(" {error}"),
                Style::default().fg(colors.error()),
            ))),
            None => lines.push(Line::from(Span::styled(
                " [Enter] Save   [Esc] Skip",
                Style::default().fg(colors.muted()),
            ))),
        }

        let block = Block::bordered()
            .title(" Save your score ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
