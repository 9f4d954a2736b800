//! Two-pass scoring: exact matches first, then a left-to-right search of the
//! shield for each remaining guess peg. Every shield peg is consumed at most once.

use crate::{CodePeg, Response};

/// Key peg assigned to a single guess position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Unmarked,
    White,
    Black,
}

/// Marks each position of `code` against `shield`.
///
/// # Panics
///
/// If `code` and `shield` differ in length.
pub fn marks(code: &[CodePeg], shield: &[CodePeg]) -> Vec<Mark> {
    assert_eq!(code.len(), shield.len());
    let mut marks = vec![Mark::Unmarked; code.len()];
    let mut consumed = vec![false; shield.len()];

    for (i, (cc, sc)) in code.iter().zip(shield).enumerate() {
        if cc == sc {
            marks[i] = Mark::Black;
            consumed[i] = true;
        }
    }

    for (cc, mark) in code.iter().zip(&mut marks) {
        if *mark != Mark::Unmarked {
            continue;
        }
        let found = shield
            .iter()
            .zip(&consumed)
            .position(|(sc, &used)| !used && sc == cc);
        if let Some(j) = found {
            consumed[j] = true;
            *mark = Mark::White;
        }
    }

    marks
}

/// Totals of [`marks`].
///
/// # Panics
///
/// If `code` and `shield` differ in length.
pub fn score(code: &[CodePeg], shield: &[CodePeg]) -> Response {
    marks(code, shield)
        .into_iter()
        .fold(Response::default(), |mut r, mark| {
            match mark {
                Mark::Black => r.black_key_pegs += 1,
                Mark::White => r.white_key_pegs += 1,
                Mark::Unmarked => {}
            }
            r
        })
}
