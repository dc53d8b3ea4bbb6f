// Copyright (c) 2022 Bastiaan Marinus van de Weerd


fn count_increases(depths: impl Iterator<Item = u64>) -> usize {
	use itertools::Itertools as _;
	depths.tuple_windows().filter(|(l, r)| r > l).count()
}

fn input_depths(input: &str) -> Vec<u64> {

	use std::num::ParseIntError;

	#[allow(dead_code)]
	#[derive(Debug)]
	struct ParseDepthsError { line: usize, source: ParseIntError }

	input
		.lines()
		.enumerate()
		.map(|(l, line)| line.trim().parse()
			.map_err(|e| ParseDepthsError { line: l + 1, source: e }))
		.collect::<Result<_, _>>()
		.unwrap()
}


pub(crate) fn part1(input: &str) -> usize {
	count_increases(input_depths(input).into_iter())
}


pub(crate) fn part2(input: &str) -> usize {
	use itertools::Itertools as _;
	count_increases(input_depths(input).into_iter()
		.tuple_windows()
		.map(|(a, b, c)| a + b + c))
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		199
		200
		208
		210
		200
		207
		240
		269
		260
		263
	" };
	assert_eq!(part1(INPUT), 7);
	assert_eq!(part2(INPUT), 5);
	assert_eq!(part1("1\n"), 0);
}
