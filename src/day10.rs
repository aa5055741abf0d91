// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const SCREEN_WIDTH: usize = 40;
const SCREEN_HEIGHT: usize = 6;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Instr {
	Noop,
	AddX(i32),
}

/// Runs a program one cycle at a time, yielding the value of the `X`
/// register *during* each cycle (so an `addx` takes effect two items later).
struct Cpu<I> {
	instrs: I,
	x: i32,
	pending: Option<i32>,
}

impl<I: Iterator<Item = Instr>> Cpu<I> {
	fn new(instrs: I) -> Self {
		Cpu { instrs, x: 1, pending: None }
	}
}

impl<I: Iterator<Item = Instr>> Iterator for Cpu<I> {
	type Item = i32;
	fn next(&mut self) -> Option<i32> {
		if let Some(v) = self.pending.take() {
			let during = self.x;
			self.x += v;
			return Some(during)
		}
		match self.instrs.next()? {
			Instr::Noop => (),
			Instr::AddX(v) => self.pending = Some(v),
		}
		Some(self.x)
	}
}

struct Crt([bool; SCREEN_WIDTH * SCREEN_HEIGHT]);

impl std::fmt::Display for Crt {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write as _;
		for (y, row) in self.0.chunks(SCREEN_WIDTH).enumerate() {
			if y > 0 { f.write_char('\n')? }
			for &lit in row { f.write_char(if lit { '#' } else { '.' })? }
		}
		Ok(())
	}
}


fn part1_impl(input_instrs: impl IntoIterator<Item = Instr>) -> i64 {
	Cpu::new(input_instrs.into_iter())
		.zip(1..)
		.filter(|&(_, cycle)| cycle % 40 == 20 && cycle <= 220)
		.inspect(|&(x, cycle)| log::debug!("Cycle {cycle}: X = {x}"))
		.map(|(x, cycle)| cycle * x as i64)
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<i64, parsing::InstrsError> {
	Ok(part1_impl(parsing::try_instrs_from_str(input)?))
}


fn part2_impl(input_instrs: impl IntoIterator<Item = Instr>) -> Crt {
	let mut pixels = [false; SCREEN_WIDTH * SCREEN_HEIGHT];
	for (i, x) in Cpu::new(input_instrs.into_iter()).take(pixels.len()).enumerate() {
		pixels[i] = ((i % SCREEN_WIDTH) as i32 - x).abs() <= 1
	}
	Crt(pixels)
}

pub(crate) fn part2(input: &str) -> Result<impl std::fmt::Display, parsing::InstrsError> {
	Ok(part2_impl(parsing::try_instrs_from_str(input)?))
}


pub(crate) mod parsing {
	use std::{fmt, num::ParseIntError, str::FromStr};
	use super::Instr;

	#[derive(Debug, PartialEq, Eq)]
	pub(crate) enum InstrError {
		Invalid,
		AddX(ParseIntError),
	}

	impl FromStr for Instr {
		type Err = InstrError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match s.split_once(' ') {
				None if s == "noop" => Ok(Instr::Noop),
				Some(("addx", v)) => Ok(Instr::AddX(v.parse().map_err(InstrError::AddX)?)),
				_ => Err(InstrError::Invalid),
			}
		}
	}

	#[derive(Debug)]
	pub(crate) struct InstrsError { line: usize, source: InstrError }

	impl fmt::Display for InstrsError {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			write!(f, "Invalid instruction on line {}: {:?}", self.line, self.source)
		}
	}

	impl std::error::Error for InstrsError {}

	pub(super) fn try_instrs_from_str(s: &str) -> Result<Vec<Instr>, InstrsError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.trim_end().parse()
				.map_err(|e| InstrsError { line: l + 1, source: e }))
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const SHORT_INPUT: &str = indoc::indoc! { "
		noop
		addx 3
		addx -5
	" };

	#[test]
	fn cpu() {
		let instrs = parsing::try_instrs_from_str(SHORT_INPUT).unwrap();
		assert_eq!(instrs, [Instr::Noop, Instr::AddX(3), Instr::AddX(-5)]);
		assert_eq!(Cpu::new(instrs.into_iter()).collect::<Vec<_>>(), [1, 1, 1, 4, 4]);
	}

	#[test]
	fn signal_strengths() {
		assert_eq!(part1(SHORT_INPUT).unwrap(), 0);

		// `X` is 1 during cycles 1 through 21, then 11 up to cycle 60
		let input = std::iter::repeat("noop\n").take(19)
			.chain(["addx 10\n"])
			.chain(std::iter::repeat("noop\n").take(39))
			.collect::<String>();
		assert_eq!(part1(&input).unwrap(), 20 * 1 + 60 * 11);
	}

	#[test]
	fn crt() {
		let image = part2(SHORT_INPUT).unwrap().to_string();
		assert_eq!(image.lines().count(), SCREEN_HEIGHT);
		assert_eq!(image.lines().next(), Some(format!("#####{}", ".".repeat(35)).as_str()));

		let input = "noop\n".repeat(240);
		let row = format!("###{}", ".".repeat(37));
		assert_eq!(part2(&input).unwrap().to_string(), vec![row; SCREEN_HEIGHT].join("\n"));
	}

	#[test]
	fn invalid() {
		assert_eq!(part1("noop\naddx\n").unwrap_err().to_string(),
			"Invalid instruction on line 2: Invalid");
		assert!(part2("addx five").is_err());
	}
}
