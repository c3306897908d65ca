use crossterm::style::Stylize;
use std::io::{BufRead, IsTerminal, Write};
use unicode_width::UnicodeWidthStr;

pub const ANSI_REGEX_PATTERN: &str = r"\x1b\[[0-9;?]*[a-zA-Z]|\x1b].*?(\x1b\\|[\x07])";

pub fn strip_ansi_codes(s: &str) -> String {
    static RE: std::sync::LazyLock<regex::Regex> = std::sync::LazyLock::new(|| {
        regex::Regex::new(ANSI_REGEX_PATTERN).expect("ANSI pattern is valid")
    });
    RE.replace_all(s, "").to_string()
}

pub fn get_terminal_width() -> usize {
    static TERMINAL_WIDTH: std::sync::LazyLock<usize> = std::sync::LazyLock::new(|| {
        for var in ["DRYNESS_COLUMNS", "COLUMNS"] {
            if let Ok(w) = std::env::var(var).map(|s| s.parse().unwrap_or(0))
                && w > 0
            {
                return w;
            }
        }

        if is_stdout_terminal()
            && let Ok((w, _)) = crossterm::terminal::size()
        {
            return w as usize;
        }

        80
    });

    *TERMINAL_WIDTH
}

/// Renders `lines` centred inside a rounded box of `width` columns.
pub fn render_panel(title: &str, lines: &[String], width: usize) -> String {
    let inner_width = width.saturating_sub(2);
    let title_fmt = if title.is_empty() {
        String::new()
    } else {
        format!(" {} ", title)
    };

    let title_width = UnicodeWidthStr::width(title_fmt.as_str());
    let total_dashes = inner_width.saturating_sub(title_width);
    let left_dashes = total_dashes / 2;
    let right_dashes = total_dashes - left_dashes;

    let mut out = format!(
        "╭{}{}{}╮\n",
        "─".repeat(left_dashes),
        title_fmt,
        "─".repeat(right_dashes)
    );

    for line in lines {
        let stripped = strip_ansi_codes(line);
        let visible_len = UnicodeWidthStr::width(stripped.as_str());
        let total_padding = inner_width.saturating_sub(visible_len);
        let left_padding = total_padding / 2;
        let right_padding = total_padding - left_padding;

        out.push_str(&format!(
            "│{}{}{}│\n",
            " ".repeat(left_padding),
            line,
            " ".repeat(right_padding)
        ));
    }

    out.push_str(&format!("╰{}╯", "─".repeat(inner_width)));
    out
}

pub fn draw_panel(title: &str, lines: &[String], width: usize) {
    println!("{}", render_panel(title, lines, width));
}

/// Long paragraphs are wrapped on word boundaries so they fit inside a panel.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(10);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let projected = UnicodeWidthStr::width(current.as_str())
                + UnicodeWidthStr::width(word)
                + usize::from(!current.is_empty());
            if projected > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}

pub fn is_stdout_terminal() -> bool {
    if std::env::var("DRYNESS_FORCE_TTY").is_ok() {
        return true;
    }
    std::io::stdout().is_terminal()
}

pub fn is_stderr_terminal() -> bool {
    std::io::stderr().is_terminal()
}

/// Colours `text` only when stdout is a terminal.
pub fn paint(text: &str, color: crossterm::style::Color) -> String {
    if is_stdout_terminal() {
        text.with(color).bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str) -> String {
    if is_stdout_terminal() {
        text.dim().to_string()
    } else {
        text.to_string()
    }
}

/// Asks a yes/no question on stderr; anything but `y`/`yes` is a no.
pub fn confirm(question: &str) -> std::io::Result<bool> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{} [y/N] ", question)?;
    stderr.flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "ya")
}
