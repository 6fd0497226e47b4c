use crate::board::Board;

pub const EXAMPLE: &str = "        ...#
        .#..
        #...
        ....
...#.......#
........#...
..#....#....
..........#.
        ...#....
        .....#..
        .#......
        ......#.

10R5L5R10L4R5L5
";

pub fn example_board() -> Board {
    let (board_text, _) = EXAMPLE.split_once("\n\n").unwrap();
    Board::from_string(board_text).unwrap()
}

/// Blows each `#` of `pattern` up into an open `face_size` square.
pub fn board_from_pattern(pattern: &str, face_size: usize) -> Board {
    let mut text = String::new();
    for line in pattern.lines() {
        let row: String = line
            .chars()
            .flat_map(|ch| {
                let tile = if ch == '#' { '.' } else { ' ' };
                std::iter::repeat(tile).take(face_size)
            })
            .collect();
        for _ in 0..face_size {
            text.push_str(&row);
            text.push('\n');
        }
    }
    Board::from_string(&text).unwrap()
}
