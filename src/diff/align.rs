use super::types::{AnnotatedLine, ChangeKind, DiffOptions, InlineMode, Piece};
use similar::{ChangeTag, DiffTag, TextDiff};
use std::ops::Range;
use std::time::Instant;

/// Split text into lines on `\n`. A trailing newline leaves a final empty
/// line, which is diffed like any other.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// A stretch of the alignment: either lines equal on both sides, or a run of
/// removed lines directly followed by added ones.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Block {
    Equal { old: Range<usize>, new: Range<usize> },
    Change { old: Range<usize>, new: Range<usize> },
}

fn compute_blocks(
    old: &[&str],
    new: &[&str],
    deadline: Option<Instant>,
    options: &DiffOptions,
) -> Vec<Block> {
    let ops =
        similar::capture_diff_slices_deadline(options.algorithm.into(), old, new, deadline);

    let mut blocks = Vec::new();
    let mut pending: Option<(Range<usize>, Range<usize>)> = None;

    for op in ops {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                if let Some((old, new)) = pending.take() {
                    blocks.push(Block::Change { old, new });
                }
                blocks.push(Block::Equal {
                    old: old_range,
                    new: new_range,
                });
            }
            DiffTag::Delete | DiffTag::Insert | DiffTag::Replace => match pending.as_mut() {
                Some((old, new)) => {
                    old.end = old_range.end;
                    new.end = new_range.end;
                }
                None => pending = Some((old_range, new_range)),
            },
        }
    }

    if let Some((old, new)) = pending {
        blocks.push(Block::Change { old, new });
    }

    blocks
}

/// Align two texts into equal-length left and right columns
pub fn align(
    left: &str,
    right: &str,
    options: &DiffOptions,
) -> (Vec<AnnotatedLine>, Vec<AnnotatedLine>) {
    let old = split_lines(left);
    let new = split_lines(right);
    let deadline = options.deadline.map(|d| Instant::now() + d);

    let mut left_col = Vec::with_capacity(old.len());
    let mut right_col = Vec::with_capacity(new.len());

    for block in compute_blocks(&old, &new, deadline, options) {
        match block {
            Block::Equal { old: o, new: n } => {
                for (i, j) in o.zip(n) {
                    left_col.push(AnnotatedLine::new(old[i], ChangeKind::Unchanged, i + 1));
                    right_col.push(AnnotatedLine::new(new[j], ChangeKind::Unchanged, j + 1));
                }
            }
            Block::Change { old: o, new: n } => {
                let rows = o.len().max(n.len());
                for k in 0..rows {
                    let i = (k < o.len()).then_some(o.start + k);
                    let j = (k < n.len()).then_some(n.start + k);
                    match (i, j) {
                        (Some(i), Some(j)) => {
                            let mut l = AnnotatedLine::new(old[i], ChangeKind::Modified, i + 1);
                            let mut r = AnnotatedLine::new(new[j], ChangeKind::Modified, j + 1);
                            if let Some((lp, rp)) =
                                inline_pieces(old[i], new[j], deadline, options)
                            {
                                l.pieces = lp;
                                r.pieces = rp;
                            }
                            left_col.push(l);
                            right_col.push(r);
                        }
                        (Some(i), None) => {
                            left_col.push(AnnotatedLine::new(old[i], ChangeKind::Deleted, i + 1));
                            right_col.push(AnnotatedLine::placeholder());
                        }
                        (None, Some(j)) => {
                            left_col.push(AnnotatedLine::placeholder());
                            right_col.push(AnnotatedLine::new(new[j], ChangeKind::Inserted, j + 1));
                        }
                        (None, None) => {}
                    }
                }
            }
        }
    }

    (left_col, right_col)
}

/// Word or character level pieces for a modified pair
fn inline_pieces(
    left: &str,
    right: &str,
    deadline: Option<Instant>,
    options: &DiffOptions,
) -> Option<(Vec<Piece>, Vec<Piece>)> {
    let mut config = TextDiff::configure();
    config.algorithm(options.algorithm.into());
    if let Some(deadline) = deadline {
        config.deadline(deadline);
    }

    let diff = match options.inline {
        InlineMode::Off => return None,
        InlineMode::Words => config.diff_words(left, right),
        InlineMode::Chars => config.diff_chars(left, right),
    };

    let mut left_pieces = Vec::new();
    let mut right_pieces = Vec::new();
    for change in diff.iter_all_changes() {
        let text = change.value();
        match change.tag() {
            ChangeTag::Equal => {
                push_piece(&mut left_pieces, text, ChangeKind::Unchanged);
                push_piece(&mut right_pieces, text, ChangeKind::Unchanged);
            }
            ChangeTag::Delete => push_piece(&mut left_pieces, text, ChangeKind::Deleted),
            ChangeTag::Insert => push_piece(&mut right_pieces, text, ChangeKind::Inserted),
        }
    }

    Some((left_pieces, right_pieces))
}

fn push_piece(pieces: &mut Vec<Piece>, text: &str, kind: ChangeKind) {
    match pieces.last_mut() {
        Some(last) if last.kind == kind => last.text.push_str(text),
        _ => pieces.push(Piece {
            text: text.to_string(),
            kind,
        }),
    }
}
