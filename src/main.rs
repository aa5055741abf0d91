// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod util;
util::mod_days![04, 10, 12, 14, 16, 18, 20, 21];

use {std::path::PathBuf, anyhow::Context as _, clap::Parser, itertools::Itertools as _};


/// Solves Advent of Code 2022 puzzles.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
	/// Days to solve (all solved days if none are given)
	days: Vec<u8>,

	/// Directory containing the `dayNN.txt` puzzle inputs
	#[arg(short, long, default_value = "inputs")]
	input_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
	env_logger::init();
	let args = Args::parse();

	let days = if args.days.is_empty() { DAYS.to_vec() } else { args.days };
	if let Some(day) = days.iter().find(|day| !DAYS.contains(day)) {
		anyhow::bail!("No solution for day {day} (solved: {})", DAYS.iter().join(", "))
	}

	for day in days {
		let path = args.input_dir.join(format!("day{day:02}.txt"));
		log::info!("Solving day {day} with input {}", path.display());
		let input = std::fs::read_to_string(&path)
			.with_context(|| format!("Failed to read input for day {day} ({})", path.display()))?;

		let answers = solve(day, &input)
			.with_context(|| format!("Failed to solve day {day}"))?;
		for (part, answer) in answers.iter().enumerate() {
			let sep = if answer.contains('\n') { '\n' } else { ' ' };
			println!("Day {day}; part {}:{sep}{answer}", part + 1);
		}
	}

	Ok(())
}
