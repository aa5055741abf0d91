// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// An inclusive range of section IDs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Sections { first: u32, last: u32 }

impl Sections {
	fn contains(&self, other: &Sections) -> bool {
		self.first <= other.first && self.last >= other.last
	}

	fn overlaps(&self, other: &Sections) -> bool {
		self.first <= other.last && self.last >= other.first
	}
}

struct Pair([Sections; 2]);


fn part1_impl(input_pairs: &[Pair]) -> usize {
	input_pairs.iter()
		.filter(|Pair([left, right])| left.contains(right) || right.contains(left))
		.count()
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::PairsError> {
	Ok(part1_impl(&parsing::try_pairs_from_str(input)?))
}


fn part2_impl(input_pairs: &[Pair]) -> usize {
	input_pairs.iter()
		.filter(|Pair([left, right])| left.overlaps(right))
		.count()
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::PairsError> {
	Ok(part2_impl(&parsing::try_pairs_from_str(input)?))
}


pub(crate) mod parsing {
	use std::{fmt, num::ParseIntError, str::FromStr};
	use super::{Sections, Pair};

	#[derive(Debug, PartialEq, Eq)]
	pub(crate) enum SectionsError {
		NoHyphen,
		First(ParseIntError),
		Last(ParseIntError),
		Reversed { first: u32, last: u32 },
	}

	impl FromStr for Sections {
		type Err = SectionsError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (first, last) = s.split_once('-').ok_or(SectionsError::NoHyphen)?;
			let first = first.parse().map_err(SectionsError::First)?;
			let last = last.parse().map_err(SectionsError::Last)?;
			if last < first { return Err(SectionsError::Reversed { first, last }) }
			Ok(Sections { first, last })
		}
	}

	#[derive(Debug, PartialEq, Eq)]
	pub(crate) enum PairError {
		NoComma,
		Left(SectionsError),
		Right(SectionsError),
	}

	impl FromStr for Pair {
		type Err = PairError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (left, right) = s.split_once(',').ok_or(PairError::NoComma)?;
			Ok(Pair([
				left.parse().map_err(PairError::Left)?,
				right.parse().map_err(PairError::Right)?,
			]))
		}
	}

	#[derive(Debug)]
	pub(crate) struct PairsError { line: usize, source: PairError }

	impl fmt::Display for PairsError {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			write!(f, "Invalid assignment pair on line {}: {:?}", self.line, self.source)
		}
	}

	impl std::error::Error for PairsError {}

	pub(super) fn try_pairs_from_str(s: &str) -> Result<Vec<Pair>, PairsError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.trim_end().parse()
				.map_err(|e| PairsError { line: l + 1, source: e }))
			.collect()
	}

	#[cfg(test)]
	impl PairsError {
		pub(super) fn pair_error(&self) -> &PairError { &self.source }
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use {parsing::{PairError, SectionsError}, test_case::test_case};

	const INPUT: &str = indoc::indoc! { "
		2-4,6-8
		2-3,4-5
		5-7,7-9
		2-8,3-7
		6-6,4-6
		2-6,4-8
	" };

	#[test]
	fn example() {
		assert_eq!(part1(INPUT).unwrap(), 2);
		assert_eq!(part2(INPUT).unwrap(), 4);
	}

	#[test_case("2-4,6-8" => (false, false))]
	#[test_case("5-7,7-9" => (false, true))]
	#[test_case("2-8,3-7" => (true, true))]
	#[test_case("6-6,4-6" => (true, true))]
	#[test_case("3-3,3-3" => (true, true))]
	fn contains_and_overlaps(pair: &str) -> (bool, bool) {
		let Pair([left, right]) = pair.parse::<Pair>().unwrap();
		assert_eq!(left.overlaps(&right), right.overlaps(&left));
		(left.contains(&right) || right.contains(&left), left.overlaps(&right))
	}

	#[test]
	fn invalid() {
		let err = part1("2-4,6-8\n2-4;6-8\n").unwrap_err();
		assert_eq!(err.to_string(), "Invalid assignment pair on line 2: NoComma");
		assert!(matches!(part1("2-4,8-6").unwrap_err().pair_error(),
			PairError::Right(SectionsError::Reversed { first: 8, last: 6 })));
		assert!(matches!(part2("24,6-8").unwrap_err().pair_error(),
			PairError::Left(SectionsError::NoHyphen)));
	}
}
