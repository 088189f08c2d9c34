use anyhow::Context;
use std::io::Write;

fn parse_codepoint(s: &str) -> anyhow::Result<u32> {
    u32::from_str_radix(s.trim(), 16).with_context(|| s.to_string())
}

/// U+2329 is canonically equivalent to U+3008, and BD16 pairs brackets
/// up to canonical equivalence. Fold them onto the same pair id so that
/// the resolver can compare ids directly.
fn canonical_opening(cp: u32) -> u32 {
    match cp {
        0x2329 => 0x3008,
        cp => cp,
    }
}

struct Entry {
    code_point: u32,
    bidi_paired_bracket: u32,
    bidi_paired_bracket_type: char,
    comment: String,
}

impl Entry {
    fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let line = line.trim();
        if line.starts_with('#') || line.is_empty() {
            return Ok(None);
        }
        let fields: Vec<&str> = line.split(';').collect();
        anyhow::ensure!(fields.len() >= 3, "malformed line {line}");

        let code_point: u32 = parse_codepoint(fields[0])?;
        let bidi_paired_bracket: u32 = parse_codepoint(fields[1])?;

        let fields: Vec<&str> = fields[2].split('#').collect();
        let bidi_paired_bracket_type: char = fields[0]
            .trim()
            .parse()
            .with_context(|| fields[0].to_string())?;
        let comment = fields.get(1).map(|c| c.trim()).unwrap_or("").to_string();

        Ok(Some(Entry {
            code_point,
            bidi_paired_bracket,
            bidi_paired_bracket_type,
            comment,
        }))
    }

    /// The opening bracket of the pair, which doubles as the pair id
    fn pair_id(&self) -> u32 {
        let opening = match self.bidi_paired_bracket_type {
            'o' => self.code_point,
            _ => self.bidi_paired_bracket,
        };
        canonical_opening(opening)
    }
}

fn to_char(cp: u32) -> anyhow::Result<char> {
    char::from_u32(cp).with_context(|| format!("invalid codepoint {cp:x}"))
}

fn gen_brackets() -> anyhow::Result<()> {
    let data = std::fs::read_to_string("bidi/data/BidiBrackets.txt")
        .context("bidi/data/BidiBrackets.txt")?;

    let mut entries = vec![];
    for line in data.lines() {
        if let Some(entry) = Entry::parse(line)? {
            entries.push(entry);
        }
    }

    entries.sort_by_key(|e| e.code_point);

    let mut f =
        std::fs::File::create("bidi/src/bidi_brackets.rs").context("bidi/src/bidi_brackets.rs")?;
    writeln!(
        f,
        "//! Generated from bidi/data/BidiBrackets.txt by bidi/generate/src/main.rs"
    )?;
    writeln!(f, "use crate::bracket::BracketKind;\n")?;
    writeln!(
        f,
        "/// (codepoint, pair id, kind); the pair id is the canonical opening bracket"
    )?;
    writeln!(
        f,
        "pub const BIDI_BRACKETS: &[(char, char, BracketKind)] = &["
    )?;
    for entry in entries.iter() {
        writeln!(
            f,
            "    ('{}', '{}', {}), // {}",
            to_char(entry.code_point)?.escape_unicode(),
            to_char(entry.pair_id())?.escape_unicode(),
            match entry.bidi_paired_bracket_type {
                'o' => "BracketKind::Open",
                'c' => "BracketKind::Close",
                bad => anyhow::bail!("invalid BracketType {}", bad),
            },
            entry.comment
        )?;
    }

    writeln!(f, "];")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    gen_brackets().context("gen_brackets")?;
    Ok(())
}
