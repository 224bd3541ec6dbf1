//! Stateless rendering of the game screen.

use crate::config::UiConfig;
use crate::frontend::MessageSlot;
use crate::tui::context::DisplayContext;
use noughts_core::{Board, Cell, Coord, Mark, SIZE, Score};
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::collections::BTreeMap;

/// Height of the drawn field in rows.
pub const FIELD_HEIGHT: u16 = 9;

/// Width of the drawn field in columns.
pub const FIELD_WIDTH: u16 = 24;

const SCORE_HEADER: &str = "You | Enemy";

/// Glyphs used for the two marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    cross: char,
    zero: char,
}

impl Theme {
    /// Builds a theme from the configured glyphs.
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            cross: config.glyph(Mark::Cross),
            zero: config.glyph(Mark::Zero),
        }
    }

    /// Glyph drawn for `mark`.
    pub fn glyph(&self, mark: Mark) -> char {
        match mark {
            Mark::Cross => self.cross,
            Mark::Zero => self.zero,
        }
    }

    fn style(&self, mark: Mark) -> Style {
        let color = match mark {
            Mark::Cross => Color::Blue,
            Mark::Zero => Color::Red,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            cross: 'X',
            zero: 'O',
        }
    }
}

/// Everything currently on screen.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    /// Board as last shown.
    pub board: Board,
    /// Score as last shown.
    pub score: Score,
    /// Text per slot; empty slots are absent.
    pub messages: BTreeMap<MessageSlot, String>,
    /// Highlighted cell while picking a move.
    pub cursor: Option<Coord>,
    /// What the human has typed after the prompt so far.
    pub input: String,
}

impl Screen {
    /// Replaces the text in `slot`. Empty text clears it.
    pub fn set_message(&mut self, slot: MessageSlot, text: &str) {
        if text.is_empty() {
            self.messages.remove(&slot);
        } else {
            self.messages.insert(slot, text.to_string());
        }
    }

    /// Text currently in `slot`.
    pub fn message(&self, slot: MessageSlot) -> Option<&str> {
        self.messages.get(&slot).map(String::as_str)
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, screen: &Screen, theme: &Theme) {
    let context = DisplayContext::from(frame.area());

    for (slot, text) in &screen.messages {
        match slot {
            MessageSlot::Title => put(
                frame,
                &context,
                text,
                (1, 1),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            MessageSlot::Status => put(
                frame,
                &context,
                text,
                (1, 2),
                Style::default().fg(Color::Yellow),
            ),
            MessageSlot::Notice => put(
                frame,
                &context,
                text,
                (1, 3),
                Style::default().fg(Color::Red),
            ),
            MessageSlot::Prompt => {}
        }
    }

    draw_score(frame, &context, &screen.score);
    draw_field(frame, &context, screen, theme);
    draw_prompt(frame, &context, screen);
}

fn put(frame: &mut Frame, context: &DisplayContext, text: &str, at: (i32, i32), style: Style) {
    let area = context.place(at.0, at.1, text_width(text));
    if area.is_empty() {
        return;
    }
    frame.render_widget(Paragraph::new(text.to_string()).style(style), area);
}

fn draw_score(frame: &mut Frame, context: &DisplayContext, score: &Score) {
    let counters = format!("{:<3} | {:<5}", score.human(), score.computer());
    put(frame, context, SCORE_HEADER, (-1, 1), Style::default());
    put(frame, context, &counters, (-1, 2), Style::default());
}

fn draw_field(frame: &mut Frame, context: &DisplayContext, screen: &Screen, theme: &Theme) {
    let top = context.block_top(FIELD_HEIGHT);
    let mut area = context.area();
    area.y = top;
    area.height = FIELD_HEIGHT.min(context.rows().saturating_sub(top));
    area.width = FIELD_WIDTH.min(context.cols());
    if area.is_empty() {
        return;
    }

    let lines = field_lines(&screen.board, theme, screen.cursor);
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_prompt(frame: &mut Frame, context: &DisplayContext, screen: &Screen) {
    let Some(prompt) = screen.message(MessageSlot::Prompt) else {
        return;
    };

    let text = format!("{}{}", prompt, screen.input);
    put(frame, context, &text, (1, -1), Style::default());

    let end = context.place(1, -1, text_width(&text));
    if end.width < context.cols() {
        frame.set_cursor_position((end.x + end.width, end.y));
    }
}

/// Lines of the axis-labelled field, marks styled per side.
///
/// `x` labels the columns and `y` the rows, both counted from 1.
pub fn field_lines(board: &Board, theme: &Theme, cursor: Option<Coord>) -> Vec<Line<'static>> {
    let grid = Style::default().fg(Color::DarkGray);
    let separator = Line::styled("─────|─────|─────|─────|", grid);

    let mut lines = vec![
        Line::styled("     |     |     |     |", grid),
        Line::from(vec![
            Span::styled("     x", grid),
            Span::raw("  1  "),
            Span::styled("|", grid),
            Span::raw("  2  "),
            Span::styled("|", grid),
            Span::raw("  3  "),
            Span::styled("|", grid),
        ]),
        Line::styled("──y──|─────|─────|─────|", grid),
    ];

    for row in 0..SIZE {
        let mut spans = vec![
            Span::raw(format!("  {}  ", row + 1)),
            Span::styled("|", grid),
        ];
        for col in 0..SIZE {
            let coord = Coord::new(row, col);
            let (glyph, mut style) = match board.get(coord) {
                Some(Cell::Marked(mark)) => (theme.glyph(mark), theme.style(mark)),
                _ => (' ', Style::default()),
            };
            if cursor == Some(coord) {
                style = style.bg(Color::White).fg(Color::Black);
            }
            spans.push(Span::styled(format!("  {glyph}  "), style));
            spans.push(Span::styled("|", grid));
        }
        lines.push(Line::from(spans));
        lines.push(separator.clone());
    }

    lines
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect::<String>()
    }

    fn render(screen: &Screen, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| draw(frame, screen, &Theme::default()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_field_has_nine_lines() {
        let board: Board = "x../.o./...".parse().unwrap();
        let lines = field_lines(&board, &Theme::default(), None);
        assert_eq!(lines.len(), usize::from(FIELD_HEIGHT));

        let text: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
        assert_eq!(text[1], "     x  1  |  2  |  3  |");
        assert_eq!(text[3], "  1  |  X  |     |     |");
        assert_eq!(text[5], "  2  |     |  O  |     |");
        assert!(text.iter().all(|line| line.chars().count() == usize::from(FIELD_WIDTH)));
    }

    #[test]
    fn test_custom_glyphs() {
        let theme = Theme { cross: '#', zero: '@' };
        let board: Board = "xo./.../...".parse().unwrap();
        let lines = field_lines(&board, &theme, None);
        assert_eq!(lines[3].to_string(), "  1  |  #  |  @  |     |");
    }

    #[test]
    fn test_theme_uses_configured_glyphs() {
        let config = UiConfig::from_toml("cross_glyph = '+'\nzero_glyph = '*'").unwrap();
        let theme = Theme::from_config(&config);
        assert_eq!(theme.glyph(Mark::Cross), '+');
        assert_eq!(theme.glyph(Mark::Zero), '*');
    }

    #[test]
    fn test_header_and_score_layout() {
        let mut screen = Screen::default();
        screen.set_message(MessageSlot::Title, "Tic Tac Toe!");
        screen.set_message(MessageSlot::Status, "Your turn...");
        screen.score = Score::from_wins(2, 1);

        let buffer = render(&screen, 40, 24);
        let first = row_text(&buffer, 0);
        let second = row_text(&buffer, 1);

        assert!(first.starts_with("Tic Tac Toe!"));
        assert!(first.ends_with("You | Enemy "));
        assert!(second.starts_with("Your turn..."));
        assert!(second.ends_with("2   | 1     "));
    }

    #[test]
    fn test_prompt_on_last_row_with_input() {
        let mut screen = Screen::default();
        screen.set_message(MessageSlot::Prompt, "Choose position (x y): ");
        screen.input = "2 3".to_string();

        let buffer = render(&screen, 40, 24);
        assert!(row_text(&buffer, 23).starts_with("Choose position (x y): 2 3"));
    }

    #[test]
    fn test_field_drawn_mid_screen() {
        let screen = Screen::default();
        let buffer = render(&screen, 40, 24);
        assert!(row_text(&buffer, 12).starts_with("     |     |     |     |"));
        assert!(row_text(&buffer, 13).starts_with("     x  1  |  2  |  3  |"));
    }

    #[test]
    fn test_cursor_cell_highlighted() {
        let screen = Screen {
            cursor: Some(Coord::new(0, 0)),
            ..Screen::default()
        };
        let buffer = render(&screen, 40, 24);
        // Row 1 of the field sits three lines below its top.
        assert_eq!(buffer[(8, 15)].bg, Color::White);
        assert_ne!(buffer[(14, 15)].bg, Color::White);
    }

    #[test]
    fn test_empty_message_clears_slot() {
        let mut screen = Screen::default();
        screen.set_message(MessageSlot::Notice, "Cell (1, 1) is already taken");
        screen.set_message(MessageSlot::Notice, "");
        assert_eq!(screen.message(MessageSlot::Notice), None);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut screen = Screen::default();
        screen.set_message(MessageSlot::Title, "Tic Tac Toe!");
        screen.set_message(MessageSlot::Prompt, "Cross or zero? (c / z): ");
        render(&screen, 5, 2);
    }
}
