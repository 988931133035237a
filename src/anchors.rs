// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, board_layout, matrix};

// A place where laying exactly some number of new tiles, starting from
// (row, col) and running in the given direction, touches the existing
// tiles (or the star). bridging holds the board letters the word must
// swallow on the way, in no particular order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnchorEntry {
    pub row: i8,
    pub col: i8,
    pub down: bool,
    pub bridging: Box<[u8]>,
}

pub struct AnchorTable {
    max_tiles: i8,
    // [num_tiles], index 0 is always empty.
    across: Vec<Vec<AnchorEntry>>,
    down: Vec<Vec<AnchorEntry>>,
}

struct LaneEnv<'a> {
    board: &'a board::Board,
    strider: matrix::Strider,
    down: bool,
    lane: i8,
    star_idx: Option<i8>,
    max_tiles: i8,
}

impl LaneEnv<'_> {
    #[inline(always)]
    fn letter(&self, idx: i8) -> Option<u8> {
        self.board.at(self.strider.at(idx)).letter()
    }

    #[inline(always)]
    fn is_occupied(&self, idx: i8) -> bool {
        self.board.is_occupied_at(self.strider.at(idx))
    }

    // A tile at idx, or either perpendicular neighbour, or right after idx.
    fn touches(&self, idx: i8) -> bool {
        let (row, col) = matrix::row_and_col(self.down, self.lane, idx);
        let (before, after) = if self.down {
            ((row, col - 1), (row, col + 1))
        } else {
            ((row - 1, col), (row + 1, col))
        };
        self.is_occupied(idx)
            || self.board.is_occupied(before.0, before.1)
            || self.board.is_occupied(after.0, after.1)
            || (idx + 1 < self.strider.len() && self.is_occupied(idx + 1))
            || self.star_idx == Some(idx)
    }

    fn scan(&self, entries: &mut [Vec<AnchorEntry>], bridging: &mut Vec<u8>) {
        let len = self.strider.len();
        for first_empty in 0..len {
            if self.is_occupied(first_empty) {
                continue;
            }
            bridging.clear();
            let mut start = first_empty;
            while start > 0 {
                match self.letter(start - 1) {
                    Some(letter) => bridging.push(letter),
                    None => break,
                }
                start -= 1;
            }
            let mut legal = start < first_empty;
            let (row, col) = matrix::row_and_col(self.down, self.lane, start);
            let mut num_placed = 0i8;
            let mut working = first_empty;
            while num_placed < self.max_tiles && working < len {
                legal = legal || self.touches(working);
                num_placed += 1;
                working += 1;
                while working < len {
                    match self.letter(working) {
                        Some(letter) => bridging.push(letter),
                        None => break,
                    }
                    working += 1;
                }
                if legal {
                    entries[num_placed as usize].push(AnchorEntry {
                        row,
                        col,
                        down: self.down,
                        bridging: bridging.clone().into_boxed_slice(),
                    });
                }
            }
        }
    }
}

// The span of len squares from (row, col) touches a tile on the board, or
// covers the star, by the same rule the table is built with. The span must
// be on the board.
pub fn is_connected(
    board: &board::Board,
    board_layout: &board_layout::BoardLayout,
    row: i8,
    col: i8,
    down: bool,
    len: usize,
) -> bool {
    let (lane, idx) = matrix::lane_and_idx(down, row, col);
    let (star_lane, star_idx) =
        matrix::lane_and_idx(down, board_layout.star_row(), board_layout.star_col());
    let env = LaneEnv {
        board,
        strider: board.dim().lane(down, lane),
        down,
        lane,
        star_idx: if lane == star_lane { Some(star_idx) } else { None },
        max_tiles: 0,
    };
    (idx > 0 && env.is_occupied(idx - 1)) || (idx..).take(len).any(|i| env.touches(i))
}

impl AnchorTable {
    pub fn compute(
        board: &board::Board,
        board_layout: &board_layout::BoardLayout,
        max_tiles: i8,
    ) -> Self {
        let dim = board.dim();
        let max_tiles = max_tiles.max(0);
        let mut across = vec![Vec::new(); max_tiles as usize + 1];
        let mut down = vec![Vec::new(); max_tiles as usize + 1];
        let mut bridging = Vec::new();
        for &is_down in &[false, true] {
            let (num_lanes, star_lane, star_idx) = if is_down {
                (dim.cols, board_layout.star_col(), board_layout.star_row())
            } else {
                (dim.rows, board_layout.star_row(), board_layout.star_col())
            };
            let entries = if is_down { &mut down } else { &mut across };
            for lane in 0..num_lanes {
                LaneEnv {
                    board,
                    strider: dim.lane(is_down, lane),
                    down: is_down,
                    lane,
                    star_idx: if lane == star_lane { Some(star_idx) } else { None },
                    max_tiles,
                }
                .scan(entries, &mut bridging);
            }
        }
        Self {
            max_tiles,
            across,
            down,
        }
    }

    #[inline(always)]
    pub fn max_tiles(&self) -> i8 {
        self.max_tiles
    }

    // Empty for counts outside 1..=max_tiles.
    #[inline(always)]
    pub fn entries(&self, down: bool, num_tiles: usize) -> &[AnchorEntry] {
        let table = if down { &self.down } else { &self.across };
        table.get(num_tiles).map_or(&[], |v| &v[..])
    }

    pub fn len(&self) -> usize {
        self.across
            .iter()
            .chain(self.down.iter())
            .map(|v| v.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_row7(row7: &str) -> board::Board {
        let mut rows = vec![String::new(); 15];
        rows[7] = row7.to_string();
        board::Board::from_rows(matrix::Dim { rows: 15, cols: 15 }, &rows).unwrap()
    }

    #[test]
    fn test_empty_board_anchors_cover_star() {
        let layout = board_layout::make_standard_board_layout();
        let table = AnchorTable::compute(&board_with_row7(""), &layout, 7);
        for num_tiles in 1..=7 {
            let across = table.entries(false, num_tiles);
            assert_eq!(across.len(), num_tiles);
            for entry in across {
                assert_eq!(entry.row, 7);
                assert!(entry.col <= 7 && entry.col + num_tiles as i8 > 7);
                assert!(entry.bridging.is_empty());
            }
            let down = table.entries(true, num_tiles);
            assert_eq!(down.len(), num_tiles);
            assert!(down.iter().all(|entry| entry.col == 7 && entry.row <= 7));
        }
        assert!(table.entries(false, 0).is_empty());
        assert!(table.entries(false, 8).is_empty());
    }

    #[test]
    fn test_bridging_letters() {
        let layout = board_layout::make_standard_board_layout();
        let table = AnchorTable::compute(&board_with_row7(".......CAT"), &layout, 2);
        let across = table.entries(false, 1);
        // hooks before and after CAT.
        assert!(across.contains(&AnchorEntry {
            row: 7,
            col: 6,
            down: false,
            bridging: b"CAT".to_vec().into_boxed_slice(),
        }));
        let after = across
            .iter()
            .find(|entry| entry.row == 7 && entry.col == 7)
            .unwrap();
        let mut letters = after.bridging.to_vec();
        letters.sort_unstable();
        assert_eq!(letters, b"ACT");
        // one tile anywhere above or below the word.
        assert!(across.iter().any(|entry| entry.row == 6 && entry.col == 8));
        assert!(!across.iter().any(|entry| entry.row == 5));
        // two tiles spanning CAT need the T and the A too.
        let down = table.entries(true, 2);
        assert!(down.contains(&AnchorEntry {
            row: 6,
            col: 8,
            down: true,
            bridging: b"A".to_vec().into_boxed_slice(),
        }));
    }

    #[test]
    fn test_is_connected() {
        let layout = board_layout::make_standard_board_layout();
        let empty = board_with_row7("");
        assert!(is_connected(&empty, &layout, 7, 5, false, 3));
        assert!(is_connected(&empty, &layout, 5, 7, true, 3));
        assert!(!is_connected(&empty, &layout, 7, 3, false, 3));
        assert!(!is_connected(&empty, &layout, 0, 0, true, 5));
        let board = board_with_row7(".......CAT");
        // through, above, before and after the word.
        assert!(is_connected(&board, &layout, 5, 8, true, 3));
        assert!(is_connected(&board, &layout, 6, 3, false, 5));
        assert!(is_connected(&board, &layout, 7, 4, false, 3));
        assert!(is_connected(&board, &layout, 7, 10, false, 2));
        // diagonal is not enough.
        assert!(!is_connected(&board, &layout, 6, 2, false, 5));
        assert!(!is_connected(&board, &layout, 8, 10, false, 3));
        assert!(!is_connected(&board, &layout, 0, 0, false, 7));
    }

    #[test]
    fn test_spans_stay_on_board() {
        let layout = board_layout::make_standard_board_layout();
        let table = AnchorTable::compute(&board_with_row7("..........CATS."), &layout, 7);
        for num_tiles in 1..=7 {
            for &down in &[false, true] {
                for entry in table.entries(down, num_tiles) {
                    let (_, idx) = matrix::lane_and_idx(down, entry.row, entry.col);
                    assert!(idx as usize + num_tiles + entry.bridging.len() <= 15);
                }
            }
        }
    }
}
