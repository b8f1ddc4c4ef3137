use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::wire::{Category, NameRecord};

pub const EMPTY_RESULT_WARNING: &str = "Unable to generate names. Try again!";

/// What the form collected. The business type may still be blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub business_type: String,
    pub category: Category,
}

pub fn banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "🚀 AI Business Name & Tagline Generator".bold().truecolor(255, 87, 51))?;
    writeln!(out, "Enter your business idea, and AI will generate six creative names, each with a tagline and a 30-word description!\n")
}

/// Interactive form: a free-text business type, then a numbered category menu.
/// Values already supplied on the command line are not asked for again.
pub fn read_form<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    business_type: Option<String>,
    category: Option<Category>,
) -> io::Result<FormInput> {
    let business_type = match business_type {
        Some(b) => b,
        None => {
            write!(out, "📝 Enter your business type (e.g., Tech Startup, Clothing Brand, etc.): ")?;
            out.flush()?;
            let mut s = String::new();
            input.read_line(&mut s)?;
            s.trim().to_string()
        }
    };

    let category = match category {
        Some(c) => c,
        None => {
            writeln!(out, "Select Business Category:")?;
            for (i, c) in Category::ALL.iter().enumerate() {
                writeln!(out, "  {}. {}", i + 1, c)?;
            }
            write!(out, "Category [1]: ")?;
            out.flush()?;
            let mut s = String::new();
            input.read_line(&mut s)?;
            pick_category(&s)
        }
    };

    Ok(FormInput { business_type, category })
}

/// Accepts a menu number or a category name; anything else keeps the first entry.
fn pick_category(s: &str) -> Category {
    let t = s.trim();
    if let Ok(n) = t.parse::<usize>() {
        if (1..=Category::ALL.len()).contains(&n) {
            return Category::ALL[n - 1];
        }
    }
    t.parse().unwrap_or(Category::ALL[0])
}

pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

pub fn warn<W: Write>(w: &mut W, msg: &str) -> io::Result<()> {
    writeln!(w, "{} {}", "⚠️".yellow(), msg.yellow().bold())
}

pub fn error<W: Write>(w: &mut W, msg: &str) -> io::Result<()> {
    writeln!(w, "{} {}", "❌".red(), msg.red().bold())
}

pub fn render_cards(records: &[NameRecord]) -> String {
    let mut s = format!("\n{}\n", "🎉 Your AI-Generated Business Names & Taglines".bold());
    for r in records {
        s.push_str(&format!("{}\n", "┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┓".dimmed()));
        s.push_str(&format!("  📌 {}\n", r.name.blue().bold()));
        s.push_str(&format!("  {}\n", r.tagline.bold()));
        s.push_str(&format!("{}\n", indent(&wrap(&r.description, 56), 2).bright_black()));
        s.push_str(&format!("{}\n", "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛".dimmed()));
    }
    s
}

pub fn render_html(records: &[NameRecord]) -> String {
    let mut s = String::new();
    for r in records {
        s.push_str(&format!(
            "<div style='background-color:#f8f9fa; padding:15px; border-radius:10px; margin-bottom:10px;'>\n\
             \x20   <h3 style='color:#3498db;'>📌 {}</h3>\n\
             \x20   <h5 style='color:#2c3e50;'>{}</h5>\n\
             \x20   <p style='color:#7f8c8d;'>{}</p>\n\
             </div>\n",
            escape_html(&r.name),
            escape_html(&r.tagline),
            escape_html(&r.description)
        ));
    }
    s
}

pub fn render_json(records: &[NameRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn wrap(s: &str, width: usize) -> String {
    let mut lines = Vec::new();
    let mut cur = String::new();
    for word in s.split_whitespace() {
        if !cur.is_empty() && cur.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut cur));
        }
        if !cur.is_empty() {
            cur.push(' ');
        }
        cur.push_str(word);
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines.join("\n")
}

fn indent(s: &str, n: usize) -> String {
    let pad = " ".repeat(n);
    s.lines()
        .map(|l| format!("{}{}", pad, l))
        .collect::<Vec<_>>()
        .join("\n")
}
