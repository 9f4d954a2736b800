//! Count-bank scoring. Shield pegs left over from the exact pass are banked by
//! color, and each unmatched guess peg withdraws from the bank. Gives the same
//! totals as [`crate::scan::score`] without allocating.

use crate::{CodePeg, Response, N_COLORS};

/// # Panics
///
/// If `code` and `shield` differ in length.
pub fn score(code: &[CodePeg], shield: &[CodePeg]) -> Response {
    assert_eq!(code.len(), shield.len());
    let mut bank = [0usize; N_COLORS];
    let mut response = Response::default();

    for (&cc, &sc) in code.iter().zip(shield) {
        if cc == sc {
            response.black_key_pegs += 1;
        } else {
            bank[sc.index()] += 1;
        }
    }

    for (&cc, _) in code.iter().zip(shield).filter(|(cc, sc)| cc != sc) {
        let left = &mut bank[cc.index()];
        if *left > 0 {
            *left -= 1;
            response.white_key_pegs += 1;
        }
    }

    response
}
