//! Label text ⇄ label line records

use super::decode::decode_label_bytes;
use crate::errors::{LabelError, LabelResult};
use crate::grammar::{split_block, split_blocks, Block};
use crate::label::{LabelLine, LineContext, LineContextMut};
use crate::settings::{LabelSettings, SeparatorStyle};

/// Split off the first whitespace-delimited token
fn next_token(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }
    let end = text.find(char::is_whitespace).unwrap_or(text.len());
    Some((&text[..end], &text[end..]))
}

fn parse_time(token: &str, what: &str, line_number: usize) -> LabelResult<i64> {
    token.parse().map_err(|_| {
        LabelError::malformed(line_number, format!("{} time '{}' is not an integer", what, token))
    })
}

/// Parse one label line (`line_number` is 1-based, for error messages)
pub fn parse_line(line: &str, line_number: usize, settings: &LabelSettings) -> LabelResult<LabelLine> {
    let too_short = || LabelError::malformed(line_number, "expected 'start end contexts'");
    let (start, rest) = next_token(line).ok_or_else(too_short)?;
    let (end, rest) = next_token(rest).ok_or_else(too_short)?;
    let contexts = rest.trim();
    if contexts.is_empty() {
        return Err(too_short());
    }

    let mut record = LabelLine::new();
    record.set_start(parse_time(start, "start", line_number)?);
    record.set_end(parse_time(end, "end", line_number)?);

    let bodies = split_blocks(contexts).map_err(|reason| LabelError::malformed(line_number, reason))?;
    for (block, body) in Block::ALL.iter().zip(bodies) {
        let fields = split_block(*block, body, settings.lenient_separators)
            .map_err(|reason| LabelError::malformed(line_number, reason))?;
        record.set_block(*block, &fields);
    }
    Ok(record)
}

/// Parse a sequence of lines; blank lines are skipped
pub fn parse_lines<I, S>(lines: I, settings: &LabelSettings) -> LabelResult<Vec<LabelLine>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref().trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_line(line, index + 1, settings)?);
    }
    log::debug!("parsed {} label lines", records.len());
    Ok(records)
}

/// Parse label text
pub fn parse_text(text: &str, settings: &LabelSettings) -> LabelResult<Vec<LabelLine>> {
    parse_lines(text.lines(), settings)
}

/// Decode (UTF-8, then Shift_JIS) and parse label bytes
pub fn parse_bytes(bytes: &[u8], settings: &LabelSettings) -> LabelResult<Vec<LabelLine>> {
    let text = decode_label_bytes(bytes)?;
    parse_text(&text, settings)
}

/// Render records as label text, one line each, joined with `\n`
pub fn serialize<L: LineContext>(records: &[L], style: SeparatorStyle) -> String {
    records
        .iter()
        .map(|record| record.render(style))
        .collect::<Vec<_>>()
        .join("\n")
}
