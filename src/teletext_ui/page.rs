// src/teletext_ui/page.rs - Teletext page model and buffered rendering

use crate::constants::ui::{CHROME_ROWS, CONTENT_MARGIN, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::AppError;
use chrono::{DateTime, Local};
use crossterm::{execute, style::Print};
use std::io::{Stdout, Write};

use super::colors::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRow {
    /// League name or detail section title.
    SectionHeader(String),
    /// One fixture in the list view. Takes two lines.
    MatchCard {
        number: usize,
        title: String,
        date_time: String,
        status: Option<String>,
        selected: bool,
    },
    /// `Label: value`, value wrapped to the page width.
    Label { label: String, value: String },
    Text(String),
    Blank,
    /// Notice shown in place of content (loading, empty list).
    Message(String),
}

/// A fully laid out line, before colouring.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    text: String,
    /// Byte length of a leading label that gets its own colour.
    label_len: usize,
    fg: LineColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineColor {
    Section,
    Text,
    Label,
    Highlight,
    Message,
}

impl LineColor {
    fn code(self) -> String {
        match self {
            LineColor::Section => fg(section_fg()),
            LineColor::Text => fg(text_fg()),
            LineColor::Label => fg(label_fg()),
            LineColor::Highlight => fg(highlight_fg()),
            LineColor::Message => fg(message_fg()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TeletextPage {
    page_number: u16,
    title: String,
    subheader: String,
    rows: Vec<PageRow>,
    controls: Option<String>,
    updated_at: Option<DateTime<Local>>,
    refreshing: bool,
    /// Interactive pages are positioned on screen and clipped to its height.
    interactive: bool,
    width: u16,
    height: u16,
    /// First visible content line for pages without a selected card.
    scroll: usize,
}

impl TeletextPage {
    /// Creates a page sized for non-interactive output. Call
    /// [`TeletextPage::for_terminal`] to size it to the current terminal.
    ///
    /// # Example
    /// ```
    /// use liga1_feed::teletext_ui::{PageRow, TeletextPage};
    ///
    /// let mut page = TeletextPage::new(201, "FÚTBOL", "PRÓXIMOS PARTIDOS");
    /// page.add_row(PageRow::SectionHeader("Peruvian Primera Division".to_string()));
    /// let text = page.to_plain_lines().join("\n");
    /// assert!(text.contains("PERUVIAN PRIMERA DIVISION"));
    /// ```
    pub fn new(page_number: u16, title: &str, subheader: &str) -> Self {
        Self {
            page_number,
            title: title.to_string(),
            subheader: subheader.to_string(),
            rows: Vec::new(),
            controls: None,
            updated_at: None,
            refreshing: false,
            interactive: false,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scroll: 0,
        }
    }

    /// Switches the page to interactive mode using the terminal size,
    /// falling back to 80x24 if it cannot be read.
    pub fn for_terminal(mut self) -> Self {
        let (width, height) = crossterm::terminal::size().unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT));
        self.interactive = true;
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn add_row(&mut self, row: PageRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[PageRow] {
        &self.rows
    }

    pub fn subheader(&self) -> &str {
        &self.subheader
    }

    /// Key help shown in the footer.
    pub fn set_controls(&mut self, controls: &str) {
        self.controls = Some(controls.to_string());
    }

    pub fn set_updated_at(&mut self, at: DateTime<Local>) {
        self.updated_at = Some(at);
    }

    pub fn set_refreshing(&mut self, refreshing: bool) {
        self.refreshing = refreshing;
    }

    pub fn set_scroll(&mut self, scroll: usize) {
        self.scroll = scroll;
    }

    fn content_width(&self) -> usize {
        (self.width as usize).saturating_sub(CONTENT_MARGIN * 2).max(20)
    }

    /// Number of content lines that fit between header and footer.
    pub fn visible_line_count(&self) -> usize {
        (self.height as usize).saturating_sub(CHROME_ROWS).max(1)
    }

    /// Lays out every row. Returns the lines and the index of the first line
    /// of the selected card, if any.
    fn layout(&self) -> (Vec<Line>, Option<usize>) {
        let width = self.content_width();
        let mut lines = Vec::new();
        let mut focus = None;

        for row in &self.rows {
            match row {
                PageRow::SectionHeader(text) => lines.push(Line {
                    text: text.to_uppercase(),
                    label_len: 0,
                    fg: LineColor::Section,
                }),
                PageRow::MatchCard {
                    number,
                    title,
                    date_time,
                    status,
                    selected,
                } => {
                    if *selected {
                        focus = Some(lines.len());
                    }
                    let marker = if *selected { '>' } else { ' ' };
                    lines.push(Line {
                        text: truncate(&format!("{marker}{number:>2}. {title}"), width),
                        label_len: 0,
                        fg: if *selected {
                            LineColor::Highlight
                        } else {
                            LineColor::Text
                        },
                    });
                    let when = match status {
                        Some(status) => format!("     {date_time}  {status}"),
                        None => format!("     {date_time}"),
                    };
                    lines.push(Line {
                        text: truncate(&when, width),
                        label_len: 0,
                        fg: LineColor::Label,
                    });
                }
                PageRow::Label { label, value } => {
                    let prefix = format!("{label}: ");
                    let indent = " ".repeat(prefix.chars().count().min(width / 2));
                    let available = width.saturating_sub(indent.len()).max(10);
                    for (i, part) in wrap_text(value, available).into_iter().enumerate() {
                        if i == 0 {
                            lines.push(Line {
                                text: format!("{prefix}{part}"),
                                label_len: prefix.len(),
                                fg: LineColor::Text,
                            });
                        } else {
                            lines.push(Line {
                                text: format!("{indent}{part}"),
                                label_len: 0,
                                fg: LineColor::Text,
                            });
                        }
                    }
                }
                PageRow::Text(text) => {
                    for part in wrap_text(text, width) {
                        lines.push(Line {
                            text: part,
                            label_len: 0,
                            fg: LineColor::Text,
                        });
                    }
                }
                PageRow::Blank => lines.push(Line {
                    text: String::new(),
                    label_len: 0,
                    fg: LineColor::Text,
                }),
                PageRow::Message(text) => {
                    for part in wrap_text(text, width) {
                        lines.push(Line {
                            text: part,
                            label_len: 0,
                            fg: LineColor::Message,
                        });
                    }
                }
            }
        }

        (lines, focus)
    }

    /// Range of content lines shown on screen.
    ///
    /// A selected card is kept in view together with its second line;
    /// otherwise the scroll offset applies, clamped to the content.
    fn window(&self, total: usize, focus: Option<usize>) -> std::ops::Range<usize> {
        if !self.interactive {
            return 0..total;
        }
        let visible = self.visible_line_count();
        if total <= visible {
            return 0..total;
        }
        let max_start = total - visible;
        let start = match focus {
            Some(line) if line + 2 > visible => (line + 2 - visible).min(max_start),
            Some(_) => 0,
            None => self.scroll.min(max_start),
        };
        start..start + visible
    }

    /// Largest useful scroll offset for this page.
    pub fn max_scroll(&self) -> usize {
        let (lines, _) = self.layout();
        lines.len().saturating_sub(self.visible_line_count())
    }

    fn header_text(&self) -> String {
        format!("LIGA 1 {} {}", self.page_number, Local::now().format("%d.%m.%Y"))
    }

    fn footer_text(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(controls) = &self.controls {
            parts.push(controls.clone());
        }
        if self.refreshing {
            parts.push("Actualizando...".to_string());
        } else if let Some(at) = self.updated_at {
            parts.push(format!("Actualizado {}", at.format("%H:%M")));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("  "))
        }
    }

    /// Renders the page without any escape sequences, one string per line.
    pub fn to_plain_lines(&self) -> Vec<String> {
        let width = self.width as usize;
        let margin = " ".repeat(CONTENT_MARGIN);
        let header_width = width.saturating_sub(20);
        let mut out = vec![
            format!("{:<20}{:>header_width$}", self.title, self.header_text()),
            self.subheader.clone(),
            String::new(),
        ];

        let (lines, focus) = self.layout();
        for line in &lines[self.window(lines.len(), focus)] {
            if line.text.is_empty() {
                out.push(String::new());
            } else {
                out.push(format!("{margin}{}", line.text));
            }
        }

        if let Some(footer) = self.footer_text() {
            out.push(String::new());
            out.push(footer);
        }
        out
    }

    /// Renders the page as a single ANSI string.
    ///
    /// Interactive pages position every line with cursor addressing;
    /// non-interactive pages are newline-separated coloured lines.
    pub fn to_ansi(&self) -> String {
        let width = self.width as usize;
        let header_width = width.saturating_sub(20);
        let (lines, focus) = self.layout();
        let range = self.window(lines.len(), focus);
        let mut buffer = String::with_capacity(width * (range.len() + CHROME_ROWS) * 4);

        let goto = |buffer: &mut String, row: usize| {
            buffer.push_str(&format!("\x1b[{row};1H"));
        };

        if self.interactive {
            buffer.push_str("\x1b[H");
            buffer.push_str("\x1b[0J");
            goto(&mut buffer, 1);
        }

        // Header line
        buffer.push_str(&format!(
            "{}{}{:<20}{}{}{:>header_width$}{RESET}",
            bg(title_bg()),
            fg(title_fg()),
            self.title,
            bg(header_bg()),
            fg(text_fg()),
            self.header_text(),
        ));
        if self.interactive {
            goto(&mut buffer, 2);
        } else {
            buffer.push('\n');
        }
        buffer.push_str(&format!("{}{}{RESET}", fg(subheader_fg()), self.subheader));
        if !self.interactive {
            buffer.push_str("\n\n");
        }

        let margin = " ".repeat(CONTENT_MARGIN);
        let mut current_line = 4;
        for line in &lines[range] {
            if self.interactive {
                goto(&mut buffer, current_line);
            }
            if !line.text.is_empty() {
                buffer.push_str(&margin);
                if line.label_len > 0 {
                    let (label, value) = line.text.split_at(line.label_len);
                    buffer.push_str(&format!(
                        "{}{label}{}{value}{RESET}",
                        LineColor::Label.code(),
                        line.fg.code()
                    ));
                } else {
                    buffer.push_str(&format!("{}{}{RESET}", line.fg.code(), line.text));
                }
            }
            if !self.interactive {
                buffer.push('\n');
            }
            current_line += 1;
        }

        if let Some(footer) = self.footer_text() {
            if self.interactive {
                let footer_row = (self.height as usize).max(current_line + 1);
                goto(&mut buffer, footer_row);
                buffer.push_str(&format!(
                    "{}{}{:^width$}{RESET}",
                    bg(header_bg()),
                    fg(text_fg()),
                    footer,
                ));
            } else {
                buffer.push('\n');
                buffer.push_str(&format!("{}{footer}{RESET}\n", fg(text_fg())));
            }
        }

        buffer
    }

    /// Writes the page to the terminal in one operation.
    pub fn render_buffered(&self, stdout: &mut Stdout, plain: bool) -> Result<(), AppError> {
        if self.interactive {
            // Hide cursor to prevent visual artifacts during rendering
            execute!(stdout, crossterm::cursor::Hide)?;
        }

        let buffer = if plain && self.interactive {
            // Raw mode does not translate newlines
            let mut buffer = String::from("\x1b[H\x1b[0J");
            buffer.push_str(&self.to_plain_lines().join("\r\n"));
            buffer
        } else if plain {
            let mut buffer = self.to_plain_lines().join("\n");
            buffer.push('\n');
            buffer
        } else {
            self.to_ansi()
        };

        execute!(stdout, Print(buffer))?;

        if self.interactive {
            execute!(stdout, crossterm::cursor::Show)?;
        }

        stdout.flush()?;
        Ok(())
    }
}

/// Word-wraps `text` to `width` characters. Words longer than a line are
/// split. Always returns at least one line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        let mut word_len = word.chars().count();

        while word_len > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let head: String = word.chars().take(width).collect();
            word = word.chars().skip(width).collect();
            word_len -= width;
            lines.push(head);
        }

        if current_len == 0 {
            current = word;
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(&word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::replace(&mut current, word));
            current_len = word_len;
        }
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
