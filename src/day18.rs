// Copyright (c) 2022 Bastiaan Marinus van de Weerd


type Cube = [i32; 3];
type Cubes = std::collections::HashSet<Cube>;

fn adjacent([x, y, z]: Cube) -> [Cube; 6] {
	[
		[x - 1, y, z], [x + 1, y, z],
		[x, y - 1, z], [x, y + 1, z],
		[x, y, z - 1], [x, y, z + 1],
	]
}

/// Counts the faces of `cubes` that border a cube for which `exposed` holds.
fn count_faces(cubes: &Cubes, exposed: impl Fn(&Cube) -> bool) -> usize {
	cubes.iter()
		.flat_map(|&cube| adjacent(cube))
		.filter(|adj| exposed(adj))
		.count()
}


fn part1_impl(input_cubes: &Cubes) -> usize {
	count_faces(input_cubes, |adj| !input_cubes.contains(adj))
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::CubesError> {
	Ok(part1_impl(&parsing::try_cubes_from_str(input)?))
}


/// Floods the air around `cubes` within their bounding box grown by one, so
/// that the flood also wraps around cubes touching the box.
fn outside_air(cubes: &Cubes) -> Cubes {
	use {std::collections::VecDeque, itertools::{Itertools as _, MinMaxResult}};

	let bounds = [0, 1, 2].map(|axis| match cubes.iter().map(|cube| cube[axis]).minmax() {
		MinMaxResult::NoElements => 0..=0,
		MinMaxResult::OneElement(c) => c - 1..=c + 1,
		MinMaxResult::MinMax(min, max) => min - 1..=max + 1,
	});
	let within = |cube: &Cube| cube.iter().zip(&bounds).all(|(c, range)| range.contains(c));

	let corner = bounds.clone().map(|range| *range.start());
	let mut air = Cubes::from([corner]);
	let mut queue = VecDeque::from([corner]);
	while let Some(cube) = queue.pop_front() {
		for adj in adjacent(cube) {
			if !within(&adj) || cubes.contains(&adj) || !air.insert(adj) { continue }
			queue.push_back(adj);
		}
	}

	log::debug!("{} cubes of outside air", air.len());
	air
}

fn part2_impl(input_cubes: &Cubes) -> usize {
	let air = outside_air(input_cubes);
	count_faces(input_cubes, |adj| air.contains(adj))
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::CubesError> {
	Ok(part2_impl(&parsing::try_cubes_from_str(input)?))
}


pub(crate) mod parsing {
	use std::{fmt, num::ParseIntError};
	use super::{Cube, Cubes};

	#[derive(Debug, PartialEq, Eq)]
	pub(crate) enum CubeError {
		Len(usize),
		Coord { axis: usize, source: ParseIntError },
	}

	fn try_cube_from_str(s: &str) -> Result<Cube, CubeError> {
		let mut cube = [0; 3];
		let mut coords = s.split(',');
		for (axis, c) in cube.iter_mut().enumerate() {
			*c = coords.next().ok_or(CubeError::Len(axis))?
				.trim().parse().map_err(|e| CubeError::Coord { axis, source: e })?;
		}
		match coords.count() {
			0 => Ok(cube),
			more => Err(CubeError::Len(3 + more)),
		}
	}

	#[derive(Debug, PartialEq, Eq)]
	pub(crate) struct CubesError { line: usize, source: CubeError }

	impl fmt::Display for CubesError {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			write!(f, "Invalid cube on line {}: {:?}", self.line, self.source)
		}
	}

	impl std::error::Error for CubesError {}

	pub(super) fn try_cubes_from_str(s: &str) -> Result<Cubes, CubesError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| try_cube_from_str(line)
				.map_err(|e| CubesError { line: l + 1, source: e }))
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use test_case::test_case;

	const INPUT: &str = indoc::indoc! { "
		2,2,2
		1,2,2
		3,2,2
		2,1,2
		2,3,2
		2,2,1
		2,2,3
		2,2,4
		2,2,6
		1,2,5
		3,2,5
		2,1,5
		2,3,5
	" };

	#[test]
	fn example() {
		assert_eq!(part1(INPUT).unwrap(), 64);
		assert_eq!(part2(INPUT).unwrap(), 58);
	}

	#[test_case("1,1,1" => (6, 6) ; "single")]
	#[test_case("1,1,1\n2,1,1" => (10, 10) ; "pair")]
	#[test_case("" => (0, 0) ; "none")]
	fn surface(input: &str) -> (usize, usize) {
		(part1(input).unwrap(), part2(input).unwrap())
	}

	#[test]
	fn hollow_cube() {
		// A 3×3×3 cube without its center
		let input = (0..27)
			.filter(|&i| i != 13)
			.map(|i| format!("{},{},{}\n", i % 3, i / 3 % 3, i / 9))
			.collect::<String>();
		assert_eq!(part1(&input).unwrap(), 6 * 9 + 6);
		assert_eq!(part2(&input).unwrap(), 6 * 9);
	}

	#[test]
	fn invalid() {
		assert_eq!(part1("1,2,3\n1,2\n").unwrap_err().to_string(), "Invalid cube on line 2: Len(2)");
		assert_eq!(part2("1,2,3,4").unwrap_err().to_string(), "Invalid cube on line 1: Len(4)");
		assert!(part1("1,x,3").is_err());
	}
}
