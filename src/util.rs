// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Declares a `dayNN` module for each listed day, plus [`DAYS`] and a `solve`
/// function dispatching to those modules’ `part1` and `part2`.
macro_rules! mod_days { ( $( $day:literal ),+ $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )+

	/// Days that have a solution, in ascending order.
	const DAYS: &[u8] = &[ $( $day ),+ ];

	fn solve(day: u8, input: &str) -> anyhow::Result<[String; 2]> {
		match day {
			$( $day => Ok([
				[<day $day>]::part1(input)?.to_string(),
				[<day $day>]::part2(input)?.to_string(),
			]), )+
			_ => anyhow::bail!("No solution for day {day}"),
		}
	}
} } }

pub(crate) use mod_days;
