// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
struct Pos { x: i32, y: i32 }

const SOURCE: Pos = Pos { x: 500, y: 0 };

/// Rock structures, as scanned.
#[cfg_attr(test, derive(Debug))]
struct Scan {
	rocks: std::collections::HashSet<Pos>,
	lowest: i32,
}

#[derive(Clone, Copy)]
enum Bottom {
	/// Sand falling below the lowest rock keeps falling forever.
	Abyss,
	/// An infinitely wide floor two units below the lowest rock.
	Floor,
}

/// Pours sand from [`SOURCE`] until one grain falls into the abyss or a grain
/// comes to rest on the source itself. Returns the number of grains at rest.
fn pour(scan: &Scan, bottom: Bottom) -> usize {
	let floor = scan.lowest + 2;
	let mut blocked = scan.rocks.clone();
	let rocks = blocked.len();

	// Resume each grain from where the previous one last moved, as everything
	// up to there is unchanged.
	let mut trail = vec![SOURCE];
	while let Some(&from) = trail.last() {
		if matches!(bottom, Bottom::Abyss) && from.y > scan.lowest { break }

		let to = [0, -1, 1].into_iter()
			.map(|dx| Pos { x: from.x + dx, y: from.y + 1 })
			.find(|to| !blocked.contains(to) && !(matches!(bottom, Bottom::Floor) && to.y == floor));
		match to {
			Some(to) => trail.push(to),
			None => {
				blocked.insert(from);
				trail.pop();
			}
		}
	}

	let settled = blocked.len() - rocks;
	log::debug!("{settled} grains at rest");
	settled
}


fn part1_impl(input_scan: &Scan) -> usize {
	pour(input_scan, Bottom::Abyss)
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::ScanError> {
	Ok(part1_impl(&input.parse::<Scan>()?))
}


fn part2_impl(input_scan: &Scan) -> usize {
	pour(input_scan, Bottom::Floor)
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::ScanError> {
	Ok(part2_impl(&input.parse::<Scan>()?))
}


pub(crate) mod parsing {
	use std::{fmt, num::ParseIntError, str::FromStr};
	use super::{Pos, Scan};

	#[derive(Debug, PartialEq, Eq)]
	pub(crate) enum PosError {
		NoComma,
		X(ParseIntError),
		Y(ParseIntError),
	}

	impl FromStr for Pos {
		type Err = PosError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (x, y) = s.split_once(',').ok_or(PosError::NoComma)?;
			Ok(Pos {
				x: x.parse().map_err(PosError::X)?,
				y: y.parse().map_err(PosError::Y)?,
			})
		}
	}

	#[derive(Debug, PartialEq, Eq)]
	pub(crate) enum PathError {
		Pos { offset: usize, source: PosError },
		Diagonal([Pos; 2]),
	}

	/// Calls `f` with each position covered by the rock path in `s`.
	fn try_with_path_from_str(s: &str, mut f: impl FnMut(Pos)) -> Result<(), PathError> {
		let mut prev: Option<Pos> = None;
		for (offset, pos) in s.split(" -> ").enumerate() {
			let pos = pos.parse().map_err(|e| PathError::Pos { offset, source: e })?;
			let Some(from) = prev.replace(pos) else { f(pos); continue };
			if from.x != pos.x && from.y != pos.y { return Err(PathError::Diagonal([from, pos])) }
			let (dx, dy) = ((pos.x - from.x).signum(), (pos.y - from.y).signum());
			let mut at = from;
			while at != pos {
				at = Pos { x: at.x + dx, y: at.y + dy };
				f(at);
			}
		}
		Ok(())
	}

	#[derive(Debug)]
	pub(crate) enum ScanError {
		Empty,
		Path { line: usize, source: PathError },
	}

	impl fmt::Display for ScanError {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			match self {
				ScanError::Empty => write!(f, "No rock paths"),
				ScanError::Path { line, source } =>
					write!(f, "Invalid rock path on line {line}: {source:?}"),
			}
		}
	}

	impl std::error::Error for ScanError {}

	impl FromStr for Scan {
		type Err = ScanError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut rocks = std::collections::HashSet::new();
			for (l, line) in s.lines().enumerate().filter(|(_, line)| !line.trim().is_empty()) {
				try_with_path_from_str(line.trim_end(), |pos| { rocks.insert(pos); })
					.map_err(|e| ScanError::Path { line: l + 1, source: e })?;
			}
			let lowest = rocks.iter().map(|pos| pos.y).max().ok_or(ScanError::Empty)?;
			Ok(Scan { rocks, lowest })
		}
	}

	#[cfg(test)]
	impl ScanError {
		pub(super) fn path_error(&self) -> Option<&PathError> {
			match self { ScanError::Path { source, .. } => Some(source), _ => None }
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use parsing::{PathError, PosError};

	const INPUT: &str = indoc::indoc! { "
		498,4 -> 498,6 -> 496,6
		503,4 -> 502,4 -> 502,9 -> 494,9
	" };

	#[test]
	fn example() {
		assert_eq!(part1(INPUT).unwrap(), 24);
		assert_eq!(part2(INPUT).unwrap(), 93);
	}

	#[test]
	fn scan() {
		let scan = INPUT.parse::<Scan>().unwrap();
		assert_eq!(scan.lowest, 9);
		assert_eq!(scan.rocks.len(), 20);
		assert!(scan.rocks.contains(&Pos { x: 497, y: 6 }));
		assert!(scan.rocks.contains(&Pos { x: 502, y: 7 }));
	}

	#[test]
	fn single_rock() {
		// Sand piles up on the floor in a triangle of 1 + 3 + 5, around the rock
		assert_eq!(part1("500,1\n").unwrap(), 0);
		assert_eq!(part2("500,1\n").unwrap(), 1 + 3 + 5 - 1);
	}

	#[test]
	fn invalid() {
		assert!(matches!("".parse::<Scan>(), Err(parsing::ScanError::Empty)));
		let err = "498,4 -> 500,6".parse::<Scan>().unwrap_err();
		assert!(matches!(err.path_error(), Some(PathError::Diagonal(_))));
		let err = "498,4 -> 498;6".parse::<Scan>().unwrap_err();
		assert!(matches!(err.path_error(), Some(PathError::Pos { offset: 1, source: PosError::NoComma })));
		assert_eq!(err.to_string(), "Invalid rock path on line 1: Pos { offset: 1, source: NoComma }");
	}
}
