use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::session::Snapshot;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterState {
    Correct,
    Wrong,
    Pending,
}

/// Per-letter state of the target word against what has been typed so
/// far, compared index by index.
pub fn letter_states(typed: &str, target: &str) -> Vec<(char, LetterState)> {
    let mut typed = typed.chars();
    target
        .chars()
        .map(|want| {
            let state = match typed.next() {
                Some(got) if got == want => LetterState::Correct,
                Some(_) => LetterState::Wrong,
                None => LetterState::Pending,
            };
            (want, state)
        })
        .collect()
}

/// The current word, large and letter-colored, above the queue of
/// upcoming words.
pub struct WordStream<'a> {
    snapshot: &'a Snapshot,
    theme: &'a Theme,
}

impl<'a> WordStream<'a> {
    pub fn new(snapshot: &'a Snapshot, theme: &'a Theme) -> Self {
        Self { snapshot, theme }
    }

    fn current_word_line(&self) -> Line<'static> {
        let colors = &self.theme.colors;
        let Some(word) = self.snapshot.current_word.as_deref() else {
            return Line::from(Span::styled(
                "out of words",
                Style::default().fg(colors.muted()),
            ));
        };

        let spans: Vec<Span> = letter_states(&self.snapshot.typed_buffer, word)
            .into_iter()
            .map(|(ch, state)| {
                let style = match state {
                    LetterState::Correct => Style::default().fg(colors.text_correct()),
                    LetterState::Wrong => Style::default()
                        .fg(colors.text_incorrect())
                        .add_modifier(Modifier::UNDERLINED),
                    LetterState::Pending => Style::default().fg(colors.text_current()),
                };
                Span::styled(ch.to_string(), style.add_modifier(Modifier::BOLD))
            })
            .collect();
        Line::from(spans)
    }
}

impl Widget for WordStream<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Words ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        Paragraph::new(self.current_word_line())
            .alignment(Alignment::Center)
            .render(layout[1], buf);

        let mut spans = Vec::new();
        for (i, word) in self.snapshot.upcoming_words.iter().enumerate() {
            if i == 0 {
                // current word, drawn with per-letter state
                spans.extend(self.current_word_line().spans);
            } else {
                spans.push(Span::styled(
                    word.clone(),
                    Style::default().fg(colors.text_pending()),
                ));
            }
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .render(layout[3], buf);
    }
}
