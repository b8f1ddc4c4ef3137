use regex::Regex;
use std::sync::OnceLock;

use crate::wire::NameRecord;

/// Records recovered from a raw reply, plus how many blocks were too short to use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub records: Vec<NameRecord>,
    pub dropped: usize,
}

fn blank_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // a run of line breaks with only whitespace between them
    RE.get_or_init(|| Regex::new(r"\n[ \t]*\n\s*").expect("static regex"))
}

/// Split a model reply into paragraph blocks and read each as
/// name / tagline / description. Blocks with fewer than three non-empty
/// lines are skipped.
pub fn parse_reply(raw: &str) -> ParseOutcome {
    let normalized = raw.replace("\r\n", "\n");
    let mut out = ParseOutcome::default();

    for block in blank_line().split(normalized.trim()) {
        if block.trim().is_empty() {
            continue;
        }
        match parse_block(block) {
            Some(rec) => out.records.push(rec),
            None => out.dropped += 1,
        }
    }
    out
}

/// Convenience wrapper returning only the records.
pub fn parse_records(raw: &str) -> Vec<NameRecord> {
    parse_reply(raw).records
}

fn parse_block(block: &str) -> Option<NameRecord> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.len() < 3 {
        return None;
    }
    Some(NameRecord {
        name: lines[0].to_string(),
        tagline: lines[1].to_string(),
        description: lines[2..].join(" "),
    })
}
