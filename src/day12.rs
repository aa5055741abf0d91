// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// A position on the [`Heightmap`]. Ordered by `x` first, then `y`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
struct Cell { x: usize, y: usize }

impl Cell {
	fn manhattan(self, other: Cell) -> usize {
		self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
	}
}

#[cfg_attr(test, derive(Debug))]
struct Heightmap {
	heights: Vec<u8>,
	width: usize,
	start: Cell,
	end: Cell,
}

impl Heightmap {
	fn rows(&self) -> usize {
		self.heights.len() / self.width
	}

	/// Panics when `cell` lies outside of the map.
	fn height(&self, cell: Cell) -> u8 {
		assert!(cell.x < self.width, "{cell:?} out of bounds");
		self.heights[cell.y * self.width + cell.x]
	}

	fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
		(0..self.rows()).flat_map(move |y| (0..self.width).map(move |x| Cell { x, y }))
	}

	/// Returns the orthogonally adjacent cells that can be stepped onto from
	/// `cell`: at most one unit higher, or any amount lower.
	fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
		let Cell { x, y } = cell;
		let limit = self.height(cell) + 1;
		let up = (y > 0).then(|| Cell { x, y: y - 1 });
		let left = (x > 0).then(|| Cell { x: x - 1, y });
		let right = (x + 1 < self.width).then(|| Cell { x: x + 1, y });
		let down = (y + 1 < self.rows()).then(|| Cell { x, y: y + 1 });
		[up, left, right, down].into_iter()
			.flatten()
			.filter(move |&adj| self.height(adj) <= limit)
	}
}


/// State of a single A* search. Each search owns its own scores and frontier.
struct Search<'m> {
	heightmap: &'m Heightmap,
	goal: Cell,
	g_scores: std::collections::HashMap<Cell, usize>,
	came_from: std::collections::HashMap<Cell, Cell>,
	/// Min-heap on f-score; ties pop the lowest [`Cell`].
	frontier: std::collections::BinaryHeap<std::cmp::Reverse<(usize, Cell)>>,
}

impl<'m> Search<'m> {
	fn new(heightmap: &'m Heightmap, start: Cell, goal: Cell) -> Self {
		let mut search = Search {
			heightmap,
			goal,
			g_scores: Default::default(),
			came_from: Default::default(),
			frontier: Default::default(),
		};
		let f_score = search.heuristic(start);
		search.g_scores.insert(start, 0);
		search.frontier.push(std::cmp::Reverse((f_score, start)));
		search
	}

	/// Manhattan distance to the goal. Never overestimates, as every step
	/// covers exactly one unit of it at most.
	fn heuristic(&self, cell: Cell) -> usize {
		cell.manhattan(self.goal)
	}

	/// Returns the fewest steps to the goal, or [`None`] if it cannot be reached.
	fn run(&mut self) -> Option<usize> {
		let heightmap = self.heightmap;

		while let Some(std::cmp::Reverse((f_score, current))) = self.frontier.pop() {
			let g_score = self.g_scores[&current];
			if f_score > g_score + self.heuristic(current) { continue }

			log::trace!("{},{} @ g={g_score} f={f_score}: {}",
				current.x, current.y, heightmap.height(current));

			if current == self.goal { return Some(self.path().len() - 1) }

			for neighbor in heightmap.neighbors(current) {
				let tentative = g_score + 1;
				if self.g_scores.get(&neighbor).map_or(false, |&g| g <= tentative) { continue }
				let f_score = tentative + self.heuristic(neighbor);
				self.came_from.insert(neighbor, current);
				self.g_scores.insert(neighbor, tentative);
				self.frontier.push(std::cmp::Reverse((f_score, neighbor)));
			}
		}

		None
	}

	/// Cells from the start to the goal, both inclusive, following the
	/// predecessors recorded so far.
	fn path(&self) -> Vec<Cell> {
		let mut cell = self.goal;
		let mut path = vec![cell];
		while let Some(&prev) = self.came_from.get(&cell) {
			path.push(prev);
			cell = prev;
		}
		path.reverse();
		path
	}
}

fn fewest_steps(heightmap: &Heightmap, from: Cell, to: Cell) -> Option<usize> {
	Search::new(heightmap, from, to).run()
}

/// Searches from every lowest cell independently (in parallel) and keeps the best.
fn fewest_steps_from_lowest(heightmap: &Heightmap) -> Option<usize> {
	use rayon::prelude::{IntoParallelIterator as _, ParallelIterator as _};
	let candidates = heightmap.cells()
		.filter(|&cell| heightmap.height(cell) == 0)
		.collect::<Vec<_>>();
	log::debug!("Searching from {} lowest cells", candidates.len());
	candidates.into_par_iter()
		.filter_map(|start| fewest_steps(heightmap, start, heightmap.end))
		.min()
}


/// Number of steps of a shortest route, if there is any route at all.
#[derive(PartialEq, Eq, Debug)]
struct Steps(Option<usize>);

impl std::fmt::Display for Steps {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.0 {
			Some(steps) => write!(f, "{steps}"),
			None => f.write_str("no route"),
		}
	}
}


fn part1_impl(input_heightmap: &Heightmap) -> Steps {
	Steps(fewest_steps(input_heightmap, input_heightmap.start, input_heightmap.end))
}

pub(crate) fn part1(input: &str) -> Result<impl std::fmt::Display, parsing::HeightmapError> {
	Ok(part1_impl(&input.parse::<Heightmap>()?))
}


fn part2_impl(input_heightmap: &Heightmap) -> Steps {
	Steps(fewest_steps_from_lowest(input_heightmap))
}

pub(crate) fn part2(input: &str) -> Result<impl std::fmt::Display, parsing::HeightmapError> {
	Ok(part2_impl(&input.parse::<Heightmap>()?))
}


pub(crate) mod parsing {
	use std::{fmt, str::FromStr};
	use super::{Cell, Heightmap};

	#[derive(Debug, PartialEq, Eq)]
	pub(crate) enum HeightmapError {
		Empty,
		LineLen { line: usize, expected: usize, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
		DuplicateStart { line: usize, column: usize },
		DuplicateEnd { line: usize, column: usize },
		NoStart,
		NoEnd,
	}

	impl fmt::Display for HeightmapError {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			use HeightmapError::*;
			match self {
				Empty => write!(f, "Empty heightmap"),
				LineLen { line, expected, found } =>
					write!(f, "Line {line} has {found} columns, expected {expected}"),
				InvalidByte { line, column, found } =>
					write!(f, "Invalid byte {:?} at {line}:{column}", *found as char),
				DuplicateStart { line, column } => write!(f, "Second start at {line}:{column}"),
				DuplicateEnd { line, column } => write!(f, "Second end at {line}:{column}"),
				NoStart => write!(f, "No start (`S`)"),
				NoEnd => write!(f, "No end (`E`)"),
			}
		}
	}

	impl std::error::Error for HeightmapError {}

	impl FromStr for Heightmap {
		type Err = HeightmapError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use HeightmapError as E;

			let mut heights = vec![];
			let mut width = None;
			let mut start = None;
			let mut end = None;

			for (y, line) in s.trim_end().lines().enumerate() {
				let line = line.trim_end();
				match width {
					None => width = Some(line.len()),
					Some(expected) if expected != line.len() => return Err(
						E::LineLen { line: y + 1, expected, found: line.len() }),
					Some(_) => (),
				}

				for (x, b) in line.bytes().enumerate() {
					macro_rules! set_once { ( $which:ident, $dup_err:ident, $height:literal ) => { {
						if $which.replace(Cell { x, y }).is_some() {
							return Err(E::$dup_err { line: y + 1, column: x + 1 }) }
						$height
					} } }

					heights.push(match b {
						b'S' => set_once!(start, DuplicateStart, 0),
						b'E' => set_once!(end, DuplicateEnd, 25),
						b'a'..=b'z' => b - b'a',
						found => return Err(E::InvalidByte { line: y + 1, column: x + 1, found }),
					});
				}
			}

			Ok(Heightmap {
				width: width.filter(|&w| w > 0).ok_or(E::Empty)?,
				start: start.ok_or(E::NoStart)?,
				end: end.ok_or(E::NoEnd)?,
				heights,
			})
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use {parsing::HeightmapError, test_case::test_case};

	const INPUT: &str = indoc::indoc! { "
		Sabqponm
		abcryxxl
		accszExk
		acctuvwj
		abdefghi
	" };

	fn heightmap(s: &str) -> Heightmap {
		s.parse().unwrap()
	}

	fn flat(width: usize, rows: usize) -> Heightmap {
		Heightmap {
			heights: vec![0; width * rows],
			width,
			start: Cell { x: 0, y: 0 },
			end: Cell { x: width - 1, y: rows - 1 },
		}
	}

	#[test]
	fn example() {
		let heightmap = heightmap(INPUT);
		assert_eq!(part1_impl(&heightmap), Steps(Some(31)));
		assert_eq!(part2_impl(&heightmap), Steps(Some(29)));
		assert_eq!(part1(INPUT).unwrap().to_string(), "31");
		assert_eq!(part2(INPUT).unwrap().to_string(), "29");
	}

	#[test]
	fn zero_steps_to_self() {
		let heightmap = heightmap(INPUT);
		for cell in heightmap.cells() {
			assert_eq!(fewest_steps(&heightmap, cell, cell), Some(0), "{cell:?}");
		}
	}

	#[test]
	fn never_shorter_than_manhattan() {
		let heightmap = heightmap(INPUT);
		for from in heightmap.cells() {
			if let Some(steps) = fewest_steps(&heightmap, from, heightmap.end) {
				assert!(steps >= from.manhattan(heightmap.end), "{from:?}: {steps}");
			}
		}
	}

	#[test]
	fn climbing_is_not_descending() {
		// `S` is at height 'a', its right neighbor at 'c'
		let heightmap = heightmap("ScE\n");
		let (low, high) = (Cell { x: 0, y: 0 }, Cell { x: 1, y: 0 });
		assert_eq!(fewest_steps(&heightmap, low, high), None);
		assert_eq!(fewest_steps(&heightmap, high, low), Some(1));
	}

	#[test]
	fn from_lowest_at_most_from_start() {
		let heightmap = heightmap(INPUT);
		let from_start = fewest_steps(&heightmap, heightmap.start, heightmap.end).unwrap();
		let from_lowest = fewest_steps_from_lowest(&heightmap).unwrap();
		assert!(from_lowest <= from_start);
	}

	#[test]
	fn walled_off_end() {
		const INPUT: &str = indoc::indoc! { "
			Saaaa
			azzza
			azEza
			azzza
			aaaaa
		" };
		let heightmap = heightmap(INPUT);
		assert_eq!(part1_impl(&heightmap), Steps(None));
		assert_eq!(part2_impl(&heightmap), Steps(None));
		assert_eq!(part1(INPUT).unwrap().to_string(), "no route");
	}

	#[test]
	fn ties_pop_lowest_cell_first() {
		let heightmap = flat(3, 3);
		let mut search = Search::new(&heightmap, heightmap.start, heightmap.end);
		assert_eq!(search.run(), Some(4));
		assert_eq!(search.path(), [[0, 0], [0, 1], [0, 2], [1, 2], [2, 2]]
			.map(|[x, y]| Cell { x, y }));
	}

	#[test]
	fn trailing_whitespace() {
		let short = heightmap("SbcdE  \r\n\n\n");
		assert_eq!(short.width, 5);
		assert_eq!(part1_impl(&short), Steps(None));
		assert_eq!(part1_impl(&heightmap("SbcdefghijklmnopqrstuvwxyE\n")), Steps(Some(25)));
	}

	#[test_case("" => HeightmapError::Empty ; "empty")]
	#[test_case("Sab\nab\nE" => HeightmapError::LineLen { line: 2, expected: 3, found: 2 } ; "ragged")]
	#[test_case("Sa1E" => HeightmapError::InvalidByte { line: 1, column: 3, found: b'1' } ; "invalid")]
	#[test_case("SaE\nSaa" => HeightmapError::DuplicateStart { line: 2, column: 1 } ; "two starts")]
	#[test_case("SaE\naEa" => HeightmapError::DuplicateEnd { line: 2, column: 2 } ; "two ends")]
	#[test_case("aaE" => HeightmapError::NoStart ; "no start")]
	#[test_case("Saa" => HeightmapError::NoEnd ; "no end")]
	fn invalid(input: &str) -> HeightmapError {
		input.parse::<Heightmap>().unwrap_err()
	}
}
