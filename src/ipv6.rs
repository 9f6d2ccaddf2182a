//! IPv6 literals in URI hosts
use crate::compat::{String, Vec};
use crate::ipv4::parse_ipv4;
use core::fmt::Write;

/// Parse an IPv6 literal into its eight 16-bit pieces.
///
/// Brackets are optional. A dotted IPv4 tail (`::ffff:1.2.3.4`) fills the last
/// two pieces. Zone ids (`%eth0`) are rejected.
pub fn parse_ipv6(input: &str) -> Option<[u16; 8]> {
    let input = input
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(input);
    if input.is_empty() || input.contains('%') {
        return None;
    }

    let (head, tail) = split_ipv4_tail(input)?;
    let width = if tail.is_some() { 6 } else { 8 };

    let mut pieces = [0u16; 8];
    if let Some((before, after)) = head.split_once("::") {
        let before = parse_pieces(before)?;
        let after = parse_pieces(after)?;
        // `::` stands for at least one zero piece
        if before.len() + after.len() >= width {
            return None;
        }
        pieces[..before.len()].copy_from_slice(&before);
        pieces[width - after.len()..width].copy_from_slice(&after);
    } else {
        let all = parse_pieces(head)?;
        if all.len() != width {
            return None;
        }
        pieces[..width].copy_from_slice(&all);
    }

    if let Some(address) = tail {
        pieces[6] = (address >> 16) as u16;
        pieces[7] = address as u16;
    }
    Some(pieces)
}

/// Split `head:a.b.c.d` into the hex head and the IPv4 value.
/// The head keeps a trailing `:` when the tail follows `::`.
fn split_ipv4_tail(input: &str) -> Option<(&str, Option<u32>)> {
    let Some(colon) = input.rfind(':') else {
        return Some((input, None));
    };
    let last = &input[colon + 1..];
    if !last.contains('.') {
        return Some((input, None));
    }

    let address = parse_ipv4(last)?;
    let head = if input[..colon].ends_with(':') {
        &input[..=colon]
    } else {
        &input[..colon]
    };
    Some((head, Some(address)))
}

/// `a:b:c` into pieces; an empty run is zero pieces
fn parse_pieces(run: &str) -> Option<Vec<u16>> {
    if run.is_empty() {
        return Some(Vec::new());
    }
    run.split(':').map(parse_piece).collect()
}

fn parse_piece(piece: &str) -> Option<u16> {
    if !(1..=4).contains(&piece.len()) || !piece.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(piece, 16).ok()
}

/// Lowercase hex pieces, without brackets. The first longest run of two or
/// more zero pieces is written as `::`.
pub fn serialize_ipv6(pieces: &[u16; 8]) -> String {
    let zeros = longest_zero_run(pieces);
    let mut output = String::with_capacity(39);

    let mut i = 0;
    while i < pieces.len() {
        if let Some((start, end)) = zeros
            && start == i
        {
            output.push_str("::");
            i = end;
            continue;
        }
        if i > 0 && !output.ends_with(':') {
            output.push(':');
        }
        let _ = write!(output, "{:x}", pieces[i]);
        i += 1;
    }
    output
}

/// `(start, end)` of the first longest zero run, if it spans two pieces or more
fn longest_zero_run(pieces: &[u16; 8]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut i = 0;
    while i < pieces.len() {
        if pieces[i] != 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < pieces.len() && pieces[i] == 0 {
            i += 1;
        }
        let len = i - start;
        if len > 1 && best.is_none_or(|(s, e)| len > e - s) {
            best = Some((start, i));
        }
    }
    best
}
