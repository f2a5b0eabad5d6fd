//! Short move labels for history display.
//!
//! A label is the piece letter (none for pawns), the origin square, an `x`
//! for captures, then the destination square: "e2e4", "Bf1xb5", "Kg1f3".

use crate::history::MoveRecord;

/// Formats a single applied move.
pub fn move_label(record: &MoveRecord) -> String {
    let mut label = String::with_capacity(6);

    if let Some(letter) = record.piece.kind.label_letter() {
        label.push(letter);
    }
    label.push(record.from.file_char());
    label.push(record.from.rank_char());
    if record.captured.is_some() {
        label.push('x');
    }
    label.push(record.to.file_char());
    label.push(record.to.rank_char());

    label
}

/// Formats a whole history as numbered move pairs: "1. e2e4 e7e5 2. Kg1f3".
pub fn history_text(records: &[MoveRecord]) -> String {
    records
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let mut text = format!("{}.", i + 1);
            for record in pair {
                text.push(' ');
                text.push_str(&move_label(record));
            }
            text
        })
        .collect::<Vec<_>>()
        .join(" ")
}
