//! Modal asking what to do with unsaved commit message edits before a split

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use serde::Deserialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::dialog::{DialogFrame, InstructionBar};
use crate::data::{CommitMessageSchema, EditedCommitEntry};
use crate::modal::{ModalContent, ModalEvent};

/// Glyph marking a commit with unsaved message changes
const UNSAVED_INDICATOR: &str = "●";

/// Narrowest title column kept when the short hash is shown
const MIN_TITLE_WIDTH: usize = 16;

/// Rows used by everything except the summary and the commit list:
/// borders, padding, legend, divider, buttons and instructions
const FIXED_ROWS: u16 = 10;

/// The three buttons of the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnsavedEditsChoice {
    /// Abort the split, keep edits untouched
    #[default]
    Cancel,
    /// Throw away the edits and split the commits as they are
    #[serde(alias = "discard")]
    DiscardEdits,
    /// Keep the edits; the split picks them up as the commits' text
    #[serde(alias = "save")]
    SaveEdits,
}

impl UnsavedEditsChoice {
    /// Buttons in display order
    pub const ALL: [UnsavedEditsChoice; 3] = [
        UnsavedEditsChoice::Cancel,
        UnsavedEditsChoice::DiscardEdits,
        UnsavedEditsChoice::SaveEdits,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            UnsavedEditsChoice::Cancel => "Cancel",
            UnsavedEditsChoice::DiscardEdits => "Discard Edits",
            UnsavedEditsChoice::SaveEdits => "Save Edits",
        }
    }

    /// Single key that picks this button directly
    pub fn quick_key(&self) -> char {
        match self {
            UnsavedEditsChoice::Cancel => 'c',
            UnsavedEditsChoice::DiscardEdits => 'd',
            UnsavedEditsChoice::SaveEdits => 's',
        }
    }

    /// Whether the split may go ahead after this choice
    pub fn proceeds(&self) -> bool {
        !matches!(self, UnsavedEditsChoice::Cancel)
    }

    fn color(&self) -> Color {
        match self {
            UnsavedEditsChoice::Cancel => Color::White,
            UnsavedEditsChoice::DiscardEdits => Color::Yellow,
            UnsavedEditsChoice::SaveEdits => Color::Cyan,
        }
    }

    fn index(&self) -> usize {
        match self {
            UnsavedEditsChoice::Cancel => 0,
            UnsavedEditsChoice::DiscardEdits => 1,
            UnsavedEditsChoice::SaveEdits => 2,
        }
    }

    fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// State for the unsaved edits dialog
#[derive(Debug, Clone)]
pub struct UnsavedEditsDialogState {
    entries: Vec<EditedCommitEntry>,
    schema: CommitMessageSchema,
    selected: UnsavedEditsChoice,
    width: u16,
}

impl UnsavedEditsDialogState {
    pub fn new(entries: Vec<EditedCommitEntry>, schema: CommitMessageSchema) -> Self {
        Self {
            entries,
            schema,
            selected: UnsavedEditsChoice::default(),
            width: 64,
        }
    }

    /// Button selected when the dialog opens
    pub fn with_selected(mut self, selected: UnsavedEditsChoice) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn entries(&self) -> &[EditedCommitEntry] {
        &self.entries
    }

    pub fn selected(&self) -> UnsavedEditsChoice {
        self.selected
    }

    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
    }

    /// Pluralized summary for the flagged commits
    pub fn summary(&self) -> String {
        match self.entries.len() {
            1 => "1 commit has unsaved changes to its message. Save the edits to use them \
                  in the split, or discard them."
                .to_string(),
            n => format!(
                "{n} commits have unsaved changes to their messages. Save the edits to use \
                 them in the split, or discard them."
            ),
        }
    }

    /// Unsaved field keys of `entry` in display order
    pub fn field_names<'a>(&self, entry: &'a EditedCommitEntry) -> Vec<&'a str> {
        self.schema.display_order(entry.fields.edited_fields())
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> ModalEvent<UnsavedEditsChoice> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return ModalEvent::Pending;
        }
        match key.code {
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => {
                self.select_prev();
                ModalEvent::Pending
            }
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
                self.select_next();
                ModalEvent::Pending
            }
            KeyCode::Enter | KeyCode::Char(' ') => ModalEvent::Complete(self.selected),
            KeyCode::Esc | KeyCode::Char('q') => ModalEvent::Dismiss,
            KeyCode::Char(c) => UnsavedEditsChoice::ALL
                .into_iter()
                .find(|choice| choice.quick_key() == c.to_ascii_lowercase())
                .map(ModalEvent::Complete)
                .unwrap_or(ModalEvent::Pending),
            _ => ModalEvent::Pending,
        }
    }
}

impl ModalContent for UnsavedEditsDialogState {
    type Output = UnsavedEditsChoice;

    fn render(&self, title: &str, area: Rect, buf: &mut Buffer) {
        UnsavedEditsDialog::new(self, title).render(area, buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ModalEvent<UnsavedEditsChoice> {
        UnsavedEditsDialogState::handle_key(self, key)
    }
}

/// Unsaved edits dialog widget
pub struct UnsavedEditsDialog<'a> {
    state: &'a UnsavedEditsDialogState,
    title: &'a str,
}

impl<'a> UnsavedEditsDialog<'a> {
    pub fn new(state: &'a UnsavedEditsDialogState, title: &'a str) -> Self {
        Self { state, title }
    }

    /// Dialog height needed to show every flagged commit
    pub fn required_height(&self) -> u16 {
        let summary = wrapped_line_count(&self.state.summary(), self.content_width());
        let entries = (self.state.entries.len() as u16).saturating_mul(2);
        FIXED_ROWS
            .saturating_add(summary)
            .saturating_add(entries)
    }

    fn content_width(&self) -> u16 {
        // Border plus two columns of padding on each side
        self.state.width.saturating_sub(6)
    }

    fn entry_lines(&self, entry: &'a EditedCommitEntry, width: u16) -> [Line<'a>; 2] {
        let short_hash = entry.commit.short_hash();
        let hash_width = short_hash.width() + 2;
        // Drop the hash before squeezing the title below a readable width
        let show_hash = (width as usize) >= 4 + hash_width + MIN_TITLE_WIDTH;
        let title_width = if show_hash {
            (width as usize) - 4 - hash_width
        } else {
            (width as usize).saturating_sub(4)
        };
        let mut title = vec![
            Span::raw("  "),
            Span::styled(UNSAVED_INDICATOR, Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::styled(
                truncate_to_width(&entry.commit.title, title_width),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if show_hash {
            title.push(Span::styled(
                format!("  {short_hash}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let title = Line::from(title);

        let mut byline = vec![Span::styled(
            "    unsaved changes to ",
            Style::default().fg(Color::Gray),
        )];
        for (i, field) in self.state.field_names(entry).into_iter().enumerate() {
            if i > 0 {
                byline.push(Span::styled(", ", Style::default().fg(Color::Gray)));
            }
            if let Some(icon) = self.state.schema.icon_for(field) {
                byline.push(Span::styled(
                    format!("{icon} "),
                    Style::default().fg(Color::Cyan),
                ));
            }
            byline.push(Span::styled(field, Style::default().fg(Color::Cyan)));
        }

        [title, Line::from(byline)]
    }

    fn render_buttons(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, choice) in UnsavedEditsChoice::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if *choice == self.state.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(choice.color())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(choice.color())
            };
            spans.push(Span::styled(format!(" {} ", choice.label()), style));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for UnsavedEditsDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let frame = DialogFrame::new(self.title, self.state.width, self.required_height())
            .border_color(Color::Yellow);
        let inner = frame.render(area, buf);

        if inner.height < 6 || inner.width < 8 {
            return;
        }

        let content = Rect {
            x: inner.x + 2,
            y: inner.y,
            width: inner.width.saturating_sub(4),
            height: inner.height,
        };
        let row = |offset: u16| Rect {
            y: content.y + offset,
            height: 1,
            ..content
        };

        // Bottom-anchored rows: instructions, blank, buttons, divider, blank, legend
        let instructions_row = inner.height - 1;
        let buttons_row = inner.height - 3;
        let divider_row = inner.height - 4;
        let legend_row = inner.height - 6;

        let mut y_offset: u16 = 1;

        let summary = self.state.summary();
        let summary_lines = wrapped_line_count(&summary, content.width).min(legend_row.saturating_sub(y_offset));
        Paragraph::new(summary)
            .wrap(Wrap { trim: true })
            .render(
                Rect {
                    y: content.y + y_offset,
                    height: summary_lines,
                    ..content
                },
                buf,
            );
        y_offset += summary_lines + 1;

        // Commit list, clipped with an overflow marker when it doesn't fit
        let available = legend_row.saturating_sub(y_offset);
        let total = self.state.entries.len();
        let shown = if (total as u16).saturating_mul(2) <= available {
            total
        } else {
            (available.saturating_sub(1) / 2) as usize
        };
        for entry in &self.state.entries[..shown] {
            for line in self.entry_lines(entry, content.width) {
                Paragraph::new(line).render(row(y_offset), buf);
                y_offset += 1;
            }
        }
        if shown < total && y_offset < legend_row {
            Paragraph::new(Span::styled(
                format!("  … and {} more", total - shown),
                Style::default().fg(Color::Gray),
            ))
            .render(row(y_offset), buf);
        }

        if legend_row > 0 {
            Paragraph::new(Line::from(vec![
                Span::styled(UNSAVED_INDICATOR, Style::default().fg(Color::Yellow)),
                Span::styled(
                    " This commit has unsaved changes to its message",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ),
            ]))
            .render(row(legend_row), buf);
        }

        Paragraph::new(Span::styled(
            "─".repeat(content.width as usize),
            Style::default().fg(Color::DarkGray),
        ))
        .render(row(divider_row), buf);

        self.render_buttons(row(buttons_row), buf);

        InstructionBar::new(vec![
            ("←/→", "Select"),
            ("Enter", "Choose"),
            ("c/d/s", "Quick"),
            ("Esc", "Cancel"),
        ])
        .render(
            Rect {
                y: inner.y + instructions_row,
                height: 1,
                ..inner
            },
            buf,
        );
    }
}

/// Number of rows `text` takes when word-wrapped to `width` columns
fn wrapped_line_count(text: &str, width: u16) -> u16 {
    let width = width as usize;
    if text.is_empty() {
        return 0;
    }
    if width == 0 {
        return 1;
    }

    let mut lines: u16 = 1;
    let mut current = 0usize;
    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if current == 0 {
            word_width
        } else {
            current + 1 + word_width
        };
        if needed <= width {
            current = needed;
            continue;
        }
        if current > 0 {
            lines = lines.saturating_add(1);
        }
        // Words longer than a row are broken across rows
        let extra_rows = word_width.saturating_sub(1) / width;
        lines = lines.saturating_add(extra_rows as u16);
        current = word_width - extra_rows * width;
    }
    lines
}

/// Cut `text` to at most `max_width` columns, ending in `…` when shortened
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
