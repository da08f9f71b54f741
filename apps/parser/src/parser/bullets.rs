//! Bullet-run collection — merges wrapped source lines into logical bullets.

use crate::parser::line::{bullet_text, classify, LineClass};

/// Consumes one bullet run starting at `start` and returns the merged
/// bullets plus the index of the first unconsumed line.
///
/// The run ends at a blank line, a header line, a non-bullet line with no
/// bullet open, or end of input. The terminating line is never consumed,
/// and an open accumulator is always flushed before returning.
pub fn collect(lines: &[&str], start: usize) -> (Vec<String>, usize) {
    let mut bullets = Vec::new();
    let mut open: Option<String> = None;
    let mut i = start;

    while i < lines.len() {
        match classify(lines[i]) {
            LineClass::Blank | LineClass::Header => {
                if let Some(b) = open {
                    bullets.push(b);
                }
                return (bullets, i);
            }
            LineClass::BulletStart => {
                if let Some(b) = open.take() {
                    bullets.push(b);
                }
                open = Some(bullet_text(lines[i]).to_string());
            }
            LineClass::Continuation => match open.as_mut() {
                Some(b) => {
                    // Wrapped segment: space-joined regardless of trailing
                    // punctuation on the previous segment.
                    b.push(' ');
                    b.push_str(lines[i].trim());
                }
                None => return (bullets, i),
            },
        }
        i += 1;
    }

    if let Some(b) = open {
        bullets.push(b);
    }
    (bullets, lines.len())
}

/// Collects every bullet run in `lines`, skipping blank and inert lines
/// between runs. Used by the generic section parser, where prose that
/// belongs to no bullet is simply ignored.
pub fn collect_all(lines: &[&str]) -> Vec<String> {
    let mut all = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if classify(lines[i]) == LineClass::BulletStart {
            let (mut run, next) = collect(lines, i);
            all.append(&mut run);
            i = next;
        } else {
            i += 1;
        }
    }
    all
}
