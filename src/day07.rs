// Copyright (c) 2022 Bastiaan Marinus van de Weerd


fn linear_cost(distance: u64) -> u64 {
	distance
}

fn triangular_cost(distance: u64) -> u64 {
	distance * (distance + 1) / 2
}

fn cheapest_alignment(crabs: &[u64], cost: fn(u64) -> u64) -> u64 {
	use itertools::{Itertools as _, MinMaxResult::*};
	let (min, max) = match crabs.iter().copied().minmax() {
		NoElements => return 0,
		OneElement(p) => (p, p),
		MinMax(min, max) => (min, max),
	};
	(min..=max)
		.map(|target| crabs.iter().map(|&c| cost(c.abs_diff(target))).sum::<u64>())
		.min()
		.unwrap_or(0)
}


fn input_crabs(input: &str) -> Vec<u64> {
	use std::num::ParseIntError;

	#[allow(dead_code)]
	#[derive(Debug)]
	struct ParseCrabsError { index: usize, source: ParseIntError }

	input.trim()
		.split(',')
		.enumerate()
		.map(|(i, crab)| crab.trim().parse()
			.map_err(|e| ParseCrabsError { index: i, source: e }))
		.collect::<Result<_, _>>()
		.unwrap()
}


pub(crate) fn part1(input: &str) -> u64 {
	cheapest_alignment(&input_crabs(input), linear_cost)
}


pub(crate) fn part2(input: &str) -> u64 {
	cheapest_alignment(&input_crabs(input), triangular_cost)
}


#[test]
fn tests() {
	const INPUT: &str = "16,1,2,0,4,2,7,1,2,14\n";
	assert_eq!(triangular_cost(11), 66);
	assert_eq!(part1(INPUT), 37);
	assert_eq!(part2(INPUT), 168);
}
