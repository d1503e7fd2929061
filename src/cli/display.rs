// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the whisker CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The theme comes from
//! `WHISKER_THEME` if set, then `COLORFGBG`, then defaults to dark. Colors are
//! dropped entirely when `NO_COLOR` is set or stdout isn't a terminal, so
//! piped output stays plain.

use std::io::IsTerminal;
use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 78;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("WHISKER_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const UNDERLINE: &str = "\x1b[4m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);   // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);  // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);     // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);     // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);      // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);     // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);    // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);     // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);  // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);      // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);    // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Apply theme color with optional modifiers; plain text without colors.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Apply bare modifiers (bold, dim, ...) without a color.
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, ignoring ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Greedy word wrap on plain text.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(text: &str) -> String {
    themed(GRAY, &[], text)
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!("{} {}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("├"),
        label_part,
        border(&format!("{}┤", "─".repeat(remaining)))
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Score column. Anything at or above one exact match is bright.
pub fn score_value(score: f64, exact: f64) -> String {
    let text = if score >= 1000.0 {
        format!("{:>12.0}", score)
    } else {
        format!("{:>12.4}", score)
    };
    if score >= exact {
        themed(BRIGHT_GREEN, &[BOLD], &text)
    } else if score >= 1.0 {
        themed(GREEN, &[], &text)
    } else if score > 0.0 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

/// Part-of-speech tag, nouns and verbs in different colors.
pub fn pos_badge(tag: &str) -> String {
    let text = format!("{:<4}", tag);
    if tag.starts_with("NN") {
        themed(BLUE, &[], &text)
    } else if tag.starts_with("VB") {
        themed(MAGENTA, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

/// Excerpt with its highlighted word emphasised.
pub fn excerpt(before: &str, word: &str, after: &str) -> String {
    format!(
        "{}{}{}",
        before,
        themed(BRIGHT_CYAN, &[BOLD, UNDERLINE], word),
        after
    )
}

pub fn dim(text: &str) -> String {
    styled(&[DIM], text)
}

pub fn bold(text: &str) -> String {
    styled(&[BOLD], text)
}
