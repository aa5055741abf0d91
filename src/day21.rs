// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const ROOT: &str = "root";
const HUMAN: &str = "humn";


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Operator { Add, Sub, Mul, Div }

impl Operator {
	fn apply(self, left: i64, right: i64) -> Result<i64, MathError> {
		use Operator::*;
		Ok(match self {
			Add => left + right,
			Sub => left - right,
			Mul => left * right,
			Div => left.checked_div(right).ok_or(MathError::DivisionByZero)?,
		})
	}

	/// Finds `left` such that `left <op> right == output`.
	fn solve_left(self, output: i64, right: i64) -> Result<i64, MathError> {
		use Operator::*;
		match self {
			Add => Ok(output - right),
			Sub => Ok(output + right),
			Mul => exact_div(output, right),
			Div => Ok(output * right),
		}
	}

	/// Finds `right` such that `left <op> right == output`.
	fn solve_right(self, output: i64, left: i64) -> Result<i64, MathError> {
		use Operator::*;
		match self {
			Add => Ok(output - left),
			Sub => Ok(left - output),
			Mul => exact_div(output, left),
			Div => exact_div(left, output),
		}
	}
}

fn exact_div(lhs: i64, rhs: i64) -> Result<i64, MathError> {
	match lhs.checked_rem(rhs) {
		None => Err(MathError::DivisionByZero),
		Some(0) => Ok(lhs / rhs),
		Some(_) => Err(MathError::Inexact { lhs, rhs }),
	}
}

#[derive(Debug)]
enum Job<'a> {
	Number(i64),
	Operation(Operator, [&'a str; 2]),
}

type Monkeys<'a> = std::collections::HashMap<&'a str, Job<'a>>;


#[derive(Debug, PartialEq, Eq)]
pub(crate) enum MathError {
	Parse(parsing::MonkeysError),
	UnknownMonkey(String),
	DivisionByZero,
	Inexact { lhs: i64, rhs: i64 },
	NoHuman,
}

impl From<parsing::MonkeysError> for MathError {
	fn from(err: parsing::MonkeysError) -> Self { MathError::Parse(err) }
}

impl std::fmt::Display for MathError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use MathError::*;
		match self {
			Parse(err) => write!(f, "Invalid job on line {}: {:?}", err.line, err.source),
			UnknownMonkey(name) => write!(f, "No monkey named {name}"),
			DivisionByZero => write!(f, "Division by zero"),
			Inexact { lhs, rhs } => write!(f, "{lhs} is not divisible by {rhs}"),
			NoHuman => write!(f, "{HUMAN} does not affect {ROOT}"),
		}
	}
}

impl std::error::Error for MathError {}


fn job<'m, 'a>(monkeys: &'m Monkeys<'a>, name: &str) -> Result<&'m Job<'a>, MathError> {
	monkeys.get(name).ok_or_else(|| MathError::UnknownMonkey(name.to_owned()))
}

fn evaluate(monkeys: &Monkeys, name: &str) -> Result<i64, MathError> {
	match *job(monkeys, name)? {
		Job::Number(number) => Ok(number),
		Job::Operation(operator, [left, right]) =>
			operator.apply(evaluate(monkeys, left)?, evaluate(monkeys, right)?),
	}
}

/// Whether the number yelled by `name` depends on [`HUMAN`]’s.
fn depends_on_human(monkeys: &Monkeys, name: &str) -> Result<bool, MathError> {
	if name == HUMAN { return Ok(true) }
	match *job(monkeys, name)? {
		Job::Number(_) => Ok(false),
		Job::Operation(_, [left, right]) =>
			Ok(depends_on_human(monkeys, left)? || depends_on_human(monkeys, right)?),
	}
}

/// Picks the operand of `name`’s operation that depends on [`HUMAN`], and
/// evaluates the other one.
fn split_on_human<'a>(monkeys: &Monkeys<'a>, name: &str)
-> Result<(Operator, either::Either<(&'a str, i64), (i64, &'a str)>), MathError> {
	use either::Either::*;
	let Job::Operation(operator, [left, right]) = *job(monkeys, name)? else {
		return Err(MathError::NoHuman) };
	let split = match (depends_on_human(monkeys, left)?, depends_on_human(monkeys, right)?) {
		(true, false) => Left((left, evaluate(monkeys, right)?)),
		(false, true) => Right((evaluate(monkeys, left)?, right)),
		_ => return Err(MathError::NoHuman),
	};
	Ok((operator, split))
}


fn part1_impl(input_monkeys: &Monkeys) -> Result<i64, MathError> {
	evaluate(input_monkeys, ROOT)
}

pub(crate) fn part1(input: &str) -> Result<i64, MathError> {
	part1_impl(&parsing::try_monkeys_from_str(input)?)
}


/// Walks down from [`ROOT`] (whose operands must be equal) towards
/// [`HUMAN`], inverting each operation on the way.
fn part2_impl(input_monkeys: &Monkeys) -> Result<i64, MathError> {
	use either::Either::*;

	let (mut name, mut target) = match split_on_human(input_monkeys, ROOT)?.1 {
		Left((name, other)) | Right((other, name)) => (name, other),
	};
	while name != HUMAN {
		log::trace!("{name} must yell {target}");
		let (operator, split) = split_on_human(input_monkeys, name)?;
		(name, target) = match split {
			Left((left, right)) => (left, operator.solve_left(target, right)?),
			Right((left, right)) => (right, operator.solve_right(target, left)?),
		};
	}
	Ok(target)
}

pub(crate) fn part2(input: &str) -> Result<i64, MathError> {
	part2_impl(&parsing::try_monkeys_from_str(input)?)
}


pub(crate) mod parsing {
	use std::num::ParseIntError;
	use super::{Operator, Job, Monkeys};

	#[derive(Debug, PartialEq, Eq)]
	pub(crate) enum JobError {
		Format,
		Name,
		Operator,
		Number(ParseIntError),
	}

	fn name(s: &str) -> Result<&str, JobError> {
		if s.is_empty() || !s.bytes().all(|b| b.is_ascii_lowercase()) { return Err(JobError::Name) }
		Ok(s)
	}

	fn try_monkey_from_str(s: &str) -> Result<(&str, Job), JobError> {
		let (monkey, job) = s.split_once(": ").ok_or(JobError::Format)?;
		let job = match job.split(' ').collect::<Vec<_>>()[..] {
			[number] => Job::Number(number.parse().map_err(JobError::Number)?),
			[left, operator, right] => Job::Operation(match operator {
				"+" => Operator::Add,
				"-" => Operator::Sub,
				"*" => Operator::Mul,
				"/" => Operator::Div,
				_ => return Err(JobError::Operator),
			}, [name(left)?, name(right)?]),
			_ => return Err(JobError::Format),
		};
		Ok((name(monkey)?, job))
	}

	#[derive(Debug, PartialEq, Eq)]
	pub(crate) struct MonkeysError { pub(super) line: usize, pub(super) source: JobError }

	pub(super) fn try_monkeys_from_str(s: &str) -> Result<Monkeys, MonkeysError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| try_monkey_from_str(line.trim_end())
				.map_err(|e| MonkeysError { line: l + 1, source: e }))
			.collect()
	}
}
