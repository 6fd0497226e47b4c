//! Cube nets and a physical folding oracle shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use cube_net_topology::{Board, Direction, Grid, Position};

/// The eleven cube nets, one face per `#`.
pub const NETS: [&str; 11] = [
    "#\n####\n#",
    "#\n#\n##\n #\n #",
    "#\n###\n #\n #",
    "#\n##\n ##\n #",
    "#\n##\n #\n ##",
    "#\n####\n #",
    "#\n##\n ##\n  #",
    "#\n####\n  #",
    "#\n####\n   #",
    " #\n###\n #\n #",
    " #\n##\n ##\n #",
];

pub const EXAMPLE_BOARD: &str = "        ...#
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
        ......#.";

/// Rotates a pattern `symmetry % 4` quarter turns, mirrored first when
/// `symmetry >= 4`.
pub fn transform(pattern: &str, symmetry: usize) -> String {
    let mut cells: Vec<(i32, i32)> = pattern
        .lines()
        .enumerate()
        .flat_map(|(y, line)| {
            line.chars()
                .enumerate()
                .filter(|(_, ch)| *ch == '#')
                .map(move |(x, _)| (x as i32, y as i32))
        })
        .collect();

    if symmetry >= 4 {
        cells = cells.into_iter().map(|(x, y)| (-x, y)).collect();
    }
    for _ in 0..symmetry % 4 {
        cells = cells.into_iter().map(|(x, y)| (-y, x)).collect();
    }

    let min_x = cells.iter().map(|c| c.0).min().unwrap();
    let min_y = cells.iter().map(|c| c.1).min().unwrap();
    let cells: HashSet<(i32, i32)> = cells
        .into_iter()
        .map(|(x, y)| (x - min_x, y - min_y))
        .collect();
    let width = cells.iter().map(|c| c.0).max().unwrap() + 1;
    let height = cells.iter().map(|c| c.1).max().unwrap() + 1;

    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| if cells.contains(&(x, y)) { '#' } else { ' ' })
                .collect::<String>()
        })
        .collect::<Vec<String>>()
        .join("\n")
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

type Vec3 = [i32; 3];

fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

fn scale(a: Vec3, k: i32) -> Vec3 {
    [a[0] * k, a[1] * k, a[2] * k]
}

/// A face of the folded cube: corner, in-plane axes, and the normal
/// pointing into the cube.
#[derive(Debug, Clone, Copy)]
struct Frame {
    origin: Vec3,
    right: Vec3,
    down: Vec3,
    inward: Vec3,
}

impl Frame {
    fn towards(&self, d: Direction) -> Vec3 {
        match d {
            Direction::Right => self.right,
            Direction::Left => scale(self.right, -1),
            Direction::Down => self.down,
            Direction::Up => scale(self.down, -1),
        }
    }

    /// The face across side `d`, bent into the cube.
    fn fold(&self, d: Direction, size: i32) -> Frame {
        let inward = self.inward;
        match d {
            Direction::Right => Frame {
                origin: add(self.origin, scale(self.right, size)),
                right: inward,
                down: self.down,
                inward: scale(self.right, -1),
            },
            Direction::Down => Frame {
                origin: add(self.origin, scale(self.down, size)),
                right: self.right,
                down: inward,
                inward: scale(self.down, -1),
            },
            Direction::Left => Frame {
                origin: add(self.origin, scale(inward, size)),
                right: scale(inward, -1),
                down: self.down,
                inward: self.right,
            },
            Direction::Up => Frame {
                origin: add(self.origin, scale(inward, size)),
                right: self.right,
                down: scale(inward, -1),
                inward: self.down,
            },
        }
    }
}

/// Folds a board into a cube by hand, in 3-D.
pub struct PaperCube {
    size: i32,
    frames: HashMap<(i32, i32), Frame>,
}

impl PaperCube {
    pub fn fold(board: &Board, size: i32) -> PaperCube {
        let blocks: HashSet<(i32, i32)> = (0..board.height())
            .flat_map(|y| (0..board.width()).map(move |x| (x, y)))
            .filter(|p| board.occupied(*p))
            .map(|(x, y)| (x / size, y / size))
            .collect();
        let start = *blocks.iter().min_by_key(|(x, y)| (*y, *x)).unwrap();

        let mut frames = HashMap::new();
        frames.insert(
            start,
            Frame {
                origin: [0, 0, 0],
                right: [1, 0, 0],
                down: [0, 1, 0],
                inward: [0, 0, 1],
            },
        );
        let mut todo = vec![start];
        while let Some(block) = todo.pop() {
            let frame = frames[&block];
            for d in Direction::all() {
                let next = d.step(block);
                if blocks.contains(&next) && !frames.contains_key(&next) {
                    frames.insert(next, frame.fold(d, size));
                    todo.push(next);
                }
            }
        }

        PaperCube { size, frames }
    }

    fn frame(&self, (x, y): (i32, i32)) -> Frame {
        self.frames[&(x / self.size, y / self.size)]
    }

    /// Cell centre in half-cell units.
    fn centre(&self, (x, y): (i32, i32)) -> Vec3 {
        let frame = self.frame((x, y));
        let local_x = x % self.size;
        let local_y = y % self.size;
        add(
            scale(frame.origin, 2),
            add(
                scale(frame.right, 2 * local_x + 1),
                scale(frame.down, 2 * local_y + 1),
            ),
        )
    }

    /// Whether stepping from `from` really lands on `to` on the folded cube.
    pub fn agrees(&self, from: Position, to: Position) -> bool {
        let frame = self.frame(from.coords());
        let heading = frame.towards(from.facing);
        let same_face =
            from.x / self.size == to.x / self.size && from.y / self.size == to.y / self.size;

        let (expected_centre, expected_heading) = if same_face {
            (add(self.centre(from.coords()), scale(heading, 2)), heading)
        } else {
            (
                add(self.centre(from.coords()), add(heading, frame.inward)),
                frame.inward,
            )
        };

        self.centre(to.coords()) == expected_centre
            && self.frame(to.coords()).towards(to.facing) == expected_heading
    }
}
