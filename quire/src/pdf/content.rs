//! Page geometry and content-stream construction.

/// Vertical distance between baselines, in points.
pub const LINE_HEIGHT: u32 = 14;
/// Body text size, in points.
pub const FONT_SIZE: u32 = 11;
/// Drop from the top margin down to the first baseline, in points.
const FIRST_BASELINE_DROP: u32 = 24;

/// Fixed page dimensions in points, shared by every page of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

impl Default for PageGeometry {
    /// A4 at 72 dpi with a 56 point margin.
    fn default() -> Self {
        PageGeometry {
            width: 595,
            height: 842,
            margin: 56,
        }
    }
}

impl PageGeometry {
    /// Number of lines that fit in the usable vertical space, never below 1.
    pub fn max_lines(&self) -> usize {
        let usable = self.height.saturating_sub(2 * self.margin);
        ((usable / LINE_HEIGHT) as usize).max(1)
    }

    fn first_baseline(&self) -> u32 {
        self.height - self.margin - FIRST_BASELINE_DROP
    }
}

/// Escape `\`, `(` and `)` for use inside a literal string operand.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '(' | ')') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build the text-drawing instructions for one page of lines.
///
/// Positions the cursor at the first baseline, then shows each line and
/// advances by the leading. The caller has already checked capacity.
pub fn content_stream(geometry: &PageGeometry, lines: &[&str]) -> String {
    let mut ops = Vec::with_capacity(lines.len() * 2 + 5);
    ops.push("BT".to_owned());
    ops.push(format!("/F1 {} Tf", FONT_SIZE));
    ops.push(format!("{} TL", LINE_HEIGHT));
    ops.push(format!(
        "1 0 0 1 {} {} Tm",
        geometry.margin,
        geometry.first_baseline()
    ));
    for line in lines {
        ops.push(format!("({}) Tj", escape_text(line)));
        ops.push("T*".to_owned());
    }
    ops.push("ET".to_owned());
    ops.join("\n")
}
