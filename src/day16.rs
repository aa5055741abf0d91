// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const START: &str = "AA";


#[cfg_attr(test, derive(Debug))]
struct Valve<'a> {
	flow_rate: u32,
	tunnels: Vec<&'a str>,
}

type Valves<'a> = std::collections::HashMap<&'a str, Valve<'a>>;

/// The valves worth opening (those with a positive flow rate), and the
/// minutes it takes to walk between them.
struct Network {
	flow_rates: Vec<u32>,
	/// Indexed by `[from][to]`; [`u32::MAX`] when unreachable.
	distances: Vec<Vec<u32>>,
	from_start: Vec<u32>,
}

impl Network {
	fn new(valves: &Valves) -> Result<Self, parsing::ValvesError> {
		use {std::collections::{HashMap, VecDeque}, itertools::Itertools as _, parsing::ValvesError as E};

		if !valves.contains_key(START) { return Err(E::NoStart) }
		for (&from, valve) in valves {
			if let Some(&to) = valve.tunnels.iter().find(|to| !valves.contains_key(*to)) {
				return Err(E::UnknownTunnel { from: from.to_owned(), to: to.to_owned() })
			}
		}

		let useful = valves.iter()
			.filter(|(_, valve)| valve.flow_rate > 0)
			.map(|(&label, _)| label)
			.sorted()
			.collect::<Vec<_>>();
		if useful.len() > u64::BITS as usize { return Err(E::TooManyValves(useful.len())) }

		let distances_from = |from: &str| -> Vec<u32> {
			let mut known = HashMap::from([(from, 0)]);
			let mut queue = VecDeque::from([from]);
			while let Some(label) = queue.pop_front() {
				let steps = known[label] + 1;
				for &to in &valves[label].tunnels {
					known.entry(to).or_insert_with(|| { queue.push_back(to); steps });
				}
			}
			useful.iter().map(|to| known.get(to).copied().unwrap_or(u32::MAX)).collect()
		};

		Ok(Network {
			flow_rates: useful.iter().map(|label| valves[label].flow_rate).collect(),
			distances: useful.iter().map(|from| distances_from(from)).collect(),
			from_start: distances_from(START),
		})
	}

	/// Explores every route that can be walked within `minutes`, returning the
	/// most pressure released per set of opened valves (as a bit set).
	fn best_per_opened(&self, minutes: u32) -> std::collections::HashMap<u64, u32> {
		struct Route { at: Option<usize>, remaining: u32, opened: u64, released: u32 }

		let mut best = std::collections::HashMap::new();
		let mut stack = vec![Route { at: None, remaining: minutes, opened: 0, released: 0 }];
		while let Some(route) = stack.pop() {
			let released = best.entry(route.opened).or_insert(0);
			*released = route.released.max(*released);

			for (next, flow_rate) in self.flow_rates.iter().enumerate() {
				if route.opened & 1 << next != 0 { continue }
				let distance = match route.at {
					Some(at) => self.distances[at][next],
					None => self.from_start[next],
				};
				// Walking there and opening it must leave at least a minute of flow
				let Some(remaining) = distance.checked_add(1)
					.and_then(|cost| route.remaining.checked_sub(cost))
					.filter(|&remaining| remaining > 0) else { continue };
				stack.push(Route {
					at: Some(next),
					remaining,
					opened: route.opened | 1 << next,
					released: route.released + remaining * flow_rate,
				});
			}
		}

		log::debug!("{} sets of valves can be opened in {minutes} minutes", best.len());
		best
	}
}


fn part1_impl(network: &Network) -> u32 {
	network.best_per_opened(30).into_values().max().unwrap_or(0)
}

pub(crate) fn part1(input: &str) -> Result<u32, parsing::ValvesError> {
	Ok(part1_impl(&Network::new(&parsing::try_valves_from_str(input)?)?))
}


/// Best total of two routes (yours and the elephant’s) opening distinct valves.
fn part2_impl(network: &Network) -> u32 {
	use itertools::Itertools as _;
	let best = network.best_per_opened(26).into_iter().collect::<Vec<_>>();
	best.iter()
		.tuple_combinations()
		.filter(|((mine, _), (theirs, _))| mine & theirs == 0)
		.map(|((_, mine), (_, theirs))| mine + theirs)
		.max()
		.unwrap_or(0)
}

pub(crate) fn part2(input: &str) -> Result<u32, parsing::ValvesError> {
	Ok(part2_impl(&Network::new(&parsing::try_valves_from_str(input)?)?))
}


pub(crate) mod parsing {
	use std::{fmt, num::ParseIntError};
	use super::{Valve, Valves};

	#[derive(Debug, PartialEq, Eq)]
	pub(crate) enum ValveError {
		Format,
		Label,
		FlowRate(ParseIntError),
	}

	fn try_valve_from_str(s: &str) -> Result<(&str, Valve), ValveError> {
		use ValveError as E;
		fn label(s: &str) -> Result<&str, ValveError> {
			if s.is_empty() || !s.bytes().all(|b| b.is_ascii_uppercase()) { return Err(ValveError::Label) }
			Ok(s)
		}

		let s = s.strip_prefix("Valve ").ok_or(E::Format)?;
		let (name, s) = s.split_once(" has flow rate=").ok_or(E::Format)?;
		let (flow_rate, s) = s.split_once("; ").ok_or(E::Format)?;
		let tunnels = s.strip_prefix("tunnels lead to valves ")
			.or_else(|| s.strip_prefix("tunnel leads to valve "))
			.ok_or(E::Format)?;
		Ok((label(name)?, Valve {
			flow_rate: flow_rate.parse().map_err(E::FlowRate)?,
			tunnels: tunnels.split(", ").map(label).collect::<Result<_, _>>()?,
		}))
	}

	#[derive(Debug, PartialEq, Eq)]
	pub(crate) enum ValvesError {
		Valve { line: usize, source: ValveError },
		UnknownTunnel { from: String, to: String },
		NoStart,
		TooManyValves(usize),
	}

	impl fmt::Display for ValvesError {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			use ValvesError::*;
			match self {
				Valve { line, source } => write!(f, "Invalid valve on line {line}: {source:?}"),
				UnknownTunnel { from, to } => write!(f, "Tunnel from {from} to unknown valve {to}"),
				NoStart => write!(f, "No valve {}", super::START),
				TooManyValves(count) => write!(f, "Too many valves with flow ({count})"),
			}
		}
	}

	impl std::error::Error for ValvesError {}

	pub(super) fn try_valves_from_str(s: &str) -> Result<Valves, ValvesError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| try_valve_from_str(line.trim_end())
				.map_err(|e| ValvesError::Valve { line: l + 1, source: e }))
			.collect()
	}
}
