pub mod gallows;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::{App, AppMode},
    session::GameState,
};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;
const HISTORY_WIDTH: u16 = 30;

const LEGEND: &str = "(a-z) guess (f2) attempts (f3) history (f5) new word (esc)ape";

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status = self.status();

        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
        let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(2),                  // word
                Constraint::Min(gallows::height() + 2), // drawing + history
                Constraint::Length(1),                  // message / notice
                Constraint::Length(1),                  // padding
                Constraint::Length(1),                  // legend
            ])
            .split(area);

        let word_line = match status.message() {
            Some(message) => Span::styled(
                message,
                if status.state == GameState::Won {
                    green_bold_style
                } else {
                    red_bold_style
                },
            ),
            None => Span::styled(status.display_word(), bold_style),
        };
        Paragraph::new(Line::from(word_line))
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(HISTORY_WIDTH)])
            .split(chunks[1]);

        let drawing: Vec<Line> = gallows::stage(status.error_level())
            .iter()
            .map(|line| Line::from(*line))
            .collect();
        let drawing_width = gallows::stage(0)[0].width() as u16;
        let drawing_area = centered(drawing_width, gallows::height(), middle[0]);
        Paragraph::new(drawing)
            .style(if status.error_count == 0 {
                dim_style
            } else {
                bold_style
            })
            .render(drawing_area, buf);

        let mut side = vec![Line::from(Span::styled(
            format!("Errors: {}/{}", status.error_count, status.max_errors),
            bold_style,
        ))];
        if self.show_history {
            side.push(Line::from(""));
            side.push(Line::from(Span::styled(
                format!("Guessed: {}", status.history()),
                Style::default().fg(Color::Cyan),
            )));
        }
        Paragraph::new(side)
            .block(Block::default().borders(Borders::LEFT))
            .wrap(Wrap { trim: true })
            .render(middle[1], buf);

        if let Some(notice) = &self.notice {
            Paragraph::new(Span::styled(notice.as_str(), Style::default().fg(Color::Yellow)))
                .alignment(Alignment::Center)
                .render(chunks[2], buf);
        }

        Paragraph::new(Span::styled(LEGEND, italic_style)).render(chunks[4], buf);

        if let AppMode::EditingMaxErrors { input } = &self.mode {
            render_max_errors_prompt(input, area, buf);
        }
    }
}

fn render_max_errors_prompt(input: &str, area: Rect, buf: &mut Buffer) {
    let popup = centered(36, 5, area);
    Clear.render(popup, buf);

    let lines = vec![
        Line::from(Span::styled(
            format!("{input}_"),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "(enter) apply / (esc) cancel",
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Enter max attempts (1-8)"),
        )
        .render(popup, buf);
}

/// Rect of at most `width`x`height` centered in `area`
fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
