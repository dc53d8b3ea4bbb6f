// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


type Pair = [u8; 2];

struct Polymerization {
	template: Vec<u8>,
	rules: HashMap<Pair, u8>,
}

impl Polymerization {
	/// The polymer only matters as a multiset of adjacent pairs: each
	/// insertion replaces one pair with two.
	fn pair_counts_after(&self, steps: usize) -> HashMap<Pair, u64> {
		use itertools::Itertools as _;

		let mut counts = HashMap::<Pair, u64>::new();
		for (&l, &r) in self.template.iter().tuple_windows() {
			*counts.entry([l, r]).or_default() += 1;
		}

		for _ in 0..steps {
			let mut next = HashMap::with_capacity(counts.len());
			for (pair @ [l, r], n) in counts {
				match self.rules.get(&pair) {
					Some(&m) => {
						*next.entry([l, m]).or_default() += n;
						*next.entry([m, r]).or_default() += n;
					}
					None => *next.entry(pair).or_default() += n,
				}
			}
			counts = next;
		}
		counts
	}

	fn element_spread_after(&self, steps: usize) -> u64 {
		use itertools::{Itertools as _, MinMaxResult::*};

		// Every element starts exactly one pair except the last one
		let mut elements = HashMap::<u8, u64>::new();
		for ([l, _], n) in self.pair_counts_after(steps) {
			*elements.entry(l).or_default() += n;
		}
		if let Some(&last) = self.template.last() {
			*elements.entry(last).or_default() += 1;
		}

		match elements.values().minmax() {
			MinMax(min, max) => max - min,
			_ => 0,
		}
	}
}


fn input_polymerization(input: &str) -> Polymerization {
	parsing::try_polymerization_from_str(input).unwrap()
}


pub(crate) fn part1(input: &str) -> u64 {
	input_polymerization(input).element_spread_after(10)
}


pub(crate) fn part2(input: &str) -> u64 {
	input_polymerization(input).element_spread_after(40)
}


mod parsing {
	use std::collections::HashMap;
	use super::Polymerization;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PolymerizationError {
		Template,
		Rule { line: usize },
	}

	pub(super) fn try_polymerization_from_str(s: &str) -> Result<Polymerization, PolymerizationError> {
		let mut lines = s.lines().map(str::trim).enumerate();
		let template = lines.next()
			.map(|(_, t)| t.as_bytes().to_vec())
			.filter(|t| !t.is_empty())
			.ok_or(PolymerizationError::Template)?;
		let rules = lines
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| match line.as_bytes() {
				&[a, b, b' ', b'-', b'>', b' ', c] => Ok(([a, b], c)),
				_ => Err(PolymerizationError::Rule { line: l + 1 }),
			})
			.collect::<Result<HashMap<_, _>, _>>()?;
		Ok(Polymerization { template, rules })
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		NNCB

		CH -> B
		HH -> N
		CB -> H
		NH -> C
		HB -> C
		HC -> B
		HN -> C
		NN -> C
		BH -> H
		NC -> B
		NB -> B
		BN -> B
		BB -> N
		BC -> B
		CC -> N
		CN -> C
	" };
	let polymerization = input_polymerization(INPUT);
	assert_eq!(polymerization.pair_counts_after(4).values().sum::<u64>() + 1, 49);
	assert_eq!(polymerization.pair_counts_after(10).values().sum::<u64>() + 1, 3073);
	assert_eq!(part1(INPUT), 1588);
	assert_eq!(part2(INPUT), 2_188_189_693_529);
}
