//! Fixed-width framed rendering.
//!
//! Every screen is drawn inside a 52-column box:
//!
//! ```text
//! +--------------------------------------------------+
//! |                    Home Page                     |
//! +--------------------------------------------------+
//! ```
//!
//! Body lines longer than [`BODY_WIDTH`] are word-wrapped; words that alone
//! exceed the width are hard-broken. Indentation and repeated spaces are
//! kept; only a whitespace run landing exactly on a break is dropped. Header
//! titles wider than the frame are cut to fit.

/// Columns between the two `|` borders.
pub const FRAME_INNER_WIDTH: usize = 50;
/// Visible text columns of a body line (inner width minus one space each side).
pub const BODY_WIDTH: usize = FRAME_INNER_WIDTH - 2;

/// `+-----...-----+` spanning the full frame.
pub fn border() -> String {
    format!("+{}+", "-".repeat(FRAME_INNER_WIDTH))
}

/// Renders a screen header: blank line, border, centered title, border.
pub fn render_header(title: &str) -> String {
    let title = title.chars().take(FRAME_INNER_WIDTH).collect::<String>();
    let padding = FRAME_INNER_WIDTH - title.chars().count();
    let left = padding / 2;
    let right = padding - left;
    format!(
        "\n{border}\n|{}{title}{}|\n{border}\n",
        " ".repeat(left),
        " ".repeat(right),
        border = border()
    )
}

/// Renders `text` as left-justified body lines inside a bordered box.
///
/// Leading and trailing blank space of the whole text is ignored; inner line
/// breaks start new body lines.
pub fn render_framed(text: &str) -> String {
    let mut rendered = border();
    rendered.push('\n');
    for line in text.trim().split('\n') {
        for chunk in wrap_line(line.trim_end_matches('\r'), BODY_WIDTH) {
            let padding = BODY_WIDTH - chunk.chars().count();
            rendered.push_str(&format!("| {chunk}{} |\n", " ".repeat(padding)));
        }
    }
    rendered.push_str(&border());
    rendered.push('\n');
    rendered
}

/// Splits one logical line into chunks of at most `width` characters.
///
/// Breaks at whitespace where possible and keeps whitespace runs, including
/// indentation. A whitespace run that falls exactly on a break is dropped.
/// Always returns at least one chunk.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if line.chars().count() <= width {
        return vec![line.to_string()];
    }

    let mut chunks: Vec<String> = Vec::new();
    let mut current: Vec<char> = Vec::new();
    for run in whitespace_runs(line) {
        let run = run.chars().collect::<Vec<_>>();
        let is_space = run[0].is_whitespace();

        if current.len() + run.len() <= width {
            if !(is_space && current.is_empty() && !chunks.is_empty()) {
                current.extend(run);
            }
            continue;
        }
        if !current.is_empty() {
            chunks.push(current.drain(..).collect());
            if is_space {
                continue;
            }
        }

        let mut rest = run;
        while rest.len() > width {
            chunks.push(rest.drain(..width).collect());
        }
        current = rest;
    }
    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current.into_iter().collect());
    }
    chunks
}

/// Splits `line` into maximal runs of whitespace and non-whitespace.
fn whitespace_runs(line: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut previous: Option<bool> = None;
    for (idx, ch) in line.char_indices() {
        let is_space = ch.is_whitespace();
        if previous.is_some_and(|was_space| was_space != is_space) {
            runs.push(&line[start..idx]);
            start = idx;
        }
        previous = Some(is_space);
    }
    if start < line.len() {
        runs.push(&line[start..]);
    }
    runs
}
