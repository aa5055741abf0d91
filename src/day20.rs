// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const DECRYPTION_KEY: i64 = 811_589_153;


/// Mixes `numbers` `rounds` times, returning them in their final order.
fn mix(numbers: &[i64], rounds: usize) -> Vec<i64> {
	let len = numbers.len();
	if len < 2 { return numbers.to_vec() }

	// Indices into `numbers`, in mixed order; moving one shifts the ones
	// in between, which is cheap enough at puzzle sizes.
	let mut mixed = (0..len).collect::<Vec<_>>();
	for round in 0..rounds {
		for (i, &number) in numbers.iter().enumerate() {
			let Some(from) = mixed.iter().position(|&j| j == i) else { unreachable!() };
			mixed.remove(from);
			let to = (from as i64 + number).rem_euclid(len as i64 - 1) as usize;
			mixed.insert(to, i);
		}
		log::trace!("Mixed round {}", round + 1);
	}

	mixed.into_iter().map(|i| numbers[i]).collect()
}

fn grove_coordinates(mixed: &[i64]) -> Result<i64, parsing::NumbersError> {
	let zero = mixed.iter().position(|&n| n == 0).ok_or(parsing::NumbersError::NoZero)?;
	Ok([1000, 2000, 3000].into_iter()
		.map(|offset| mixed[(zero + offset) % mixed.len()])
		.sum())
}


fn part1_impl(input_numbers: &[i64]) -> Result<i64, parsing::NumbersError> {
	grove_coordinates(&mix(input_numbers, 1))
}

pub(crate) fn part1(input: &str) -> Result<i64, parsing::NumbersError> {
	part1_impl(&parsing::try_numbers_from_str(input)?)
}


fn part2_impl(input_numbers: &[i64]) -> Result<i64, parsing::NumbersError> {
	let decrypted = input_numbers.iter().map(|n| n * DECRYPTION_KEY).collect::<Vec<_>>();
	grove_coordinates(&mix(&decrypted, 10))
}

pub(crate) fn part2(input: &str) -> Result<i64, parsing::NumbersError> {
	part2_impl(&parsing::try_numbers_from_str(input)?)
}


pub(crate) mod parsing {
	use std::{fmt, num::ParseIntError};

	#[derive(Debug, PartialEq, Eq)]
	pub(crate) enum NumbersError {
		Number { line: usize, source: ParseIntError },
		NoZero,
	}

	impl fmt::Display for NumbersError {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			match self {
				NumbersError::Number { line, source } => write!(f, "Invalid number on line {line}: {source}"),
				NumbersError::NoZero => write!(f, "No 0 to find coordinates from"),
			}
		}
	}

	impl std::error::Error for NumbersError {}

	pub(super) fn try_numbers_from_str(s: &str) -> Result<Vec<i64>, NumbersError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.trim().parse()
				.map_err(|e| NumbersError::Number { line: l + 1, source: e }))
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use parsing::NumbersError;

	const INPUT: &str = indoc::indoc! { "
		1
		2
		-3
		3
		-2
		0
		4
	" };

	/// Rotates `numbers` so that 0 comes first, as mixing is circular.
	fn from_zero(mut numbers: Vec<i64>) -> Vec<i64> {
		let zero = numbers.iter().position(|&n| n == 0).unwrap();
		numbers.rotate_left(zero);
		numbers
	}

	#[test]
	fn example() {
		assert_eq!(part1(INPUT).unwrap(), 3);
		assert_eq!(part2(INPUT).unwrap(), 1_623_178_306);
	}

	#[test]
	fn mixing() {
		let numbers = parsing::try_numbers_from_str(INPUT).unwrap();
		assert_eq!(from_zero(mix(&numbers, 1)), [0, 3, -2, 1, 2, -3, 4]);
	}

	#[test]
	fn duplicates_keep_identity() {
		// Each 1 moves past the other once
		assert_eq!(from_zero(mix(&[1, 1, 0], 1)), [0, 1, 1]);
		assert_eq!(from_zero(mix(&[0, 3, 3, 3], 1)).len(), 4);
	}

	#[test]
	fn invalid() {
		assert_eq!(part1("1\n2\n"), Err(NumbersError::NoZero));
		assert_eq!(part2("1\nx\n0").unwrap_err().to_string(),
			"Invalid number on line 2: invalid digit found in string");
	}
}
