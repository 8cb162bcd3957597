//! TUI testing utilities using Ratatui's TestBackend
//!
//! Renders modal content into a test buffer and flattens it to text for
//! assertions.

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use split_confirm::modal::ModalContent;

/// Create a test terminal with standard dimensions (80x24)
pub fn create_test_terminal() -> Terminal<TestBackend> {
    create_test_terminal_sized(80, 24)
}

/// Create a test terminal with custom dimensions
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Draw `content` full-screen and return the resulting buffer text
pub fn render_modal<C: ModalContent>(
    terminal: &mut Terminal<TestBackend>,
    title: &str,
    content: &C,
) -> String {
    terminal
        .draw(|f| {
            let area = f.area();
            content.render(title, area, f.buffer_mut());
        })
        .expect("Failed to draw modal");
    buffer_to_string(terminal.backend().buffer())
}

/// Convert a buffer to a string, one line per row
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }

    output
}

/// Row index of the first line containing `text`
pub fn row_of(rendered: &str, text: &str) -> Option<usize> {
    rendered.lines().position(|line| line.contains(text))
}
