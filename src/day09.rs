// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Heightmap {
	heights: Vec<u8>,
	width: usize,
}

impl Heightmap {
	fn adjacent_positions(&self, pos: usize) -> impl Iterator<Item = usize> {
		let (w, h) = (self.width, self.heights.len() / self.width);
		let (x, y) = (pos % w, pos / w);
		[
			(y > 0).then(|| pos - w),
			(x > 0).then(|| pos - 1),
			(x < w - 1).then(|| pos + 1),
			(y < h - 1).then(|| pos + w),
		].into_iter().flatten()
	}

	fn low_points(&self) -> impl Iterator<Item = usize> + '_ {
		(0..self.heights.len()).filter(|&pos| self.adjacent_positions(pos)
			.all(|adj| self.heights[adj] > self.heights[pos]))
	}

	fn basin_size(&self, low_point: usize) -> usize {
		use std::collections::HashSet;

		// Depth-first flood-fill, bounded by height 9
		let mut seen = HashSet::from([low_point]);
		let mut stack = vec![low_point];
		while let Some(pos) = stack.pop() {
			for adj in self.adjacent_positions(pos) {
				if self.heights[adj] < 9 && seen.insert(adj) { stack.push(adj) }
			}
		}
		seen.len()
	}
}


fn input_heightmap(input: &str) -> Heightmap {
	parsing::try_heightmap_from_str(input).unwrap()
}


pub(crate) fn part1(input: &str) -> u64 {
	let heightmap = input_heightmap(input);
	heightmap.low_points().map(|pos| heightmap.heights[pos] as u64 + 1).sum()
}


pub(crate) fn part2(input: &str) -> usize {
	use itertools::Itertools as _;
	let heightmap = input_heightmap(input);
	heightmap.low_points()
		.map(|pos| heightmap.basin_size(pos))
		.sorted_by(|l, r| r.cmp(l))
		.take(3)
		.product()
}


mod parsing {
	use super::Heightmap;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum HeightmapError {
		Empty,
		Width { line: usize },
		Height { line: usize, column: usize },
	}

	pub(super) fn try_heightmap_from_str(s: &str) -> Result<Heightmap, HeightmapError> {
		use HeightmapError::*;
		let mut heights = Vec::new();
		let mut width = None;
		for (l, line) in s.lines().enumerate() {
			let line = line.trim();
			if *width.get_or_insert(line.len()) != line.len() {
				return Err(Width { line: l + 1 })
			}
			for (c, b) in line.bytes().enumerate() {
				if !b.is_ascii_digit() { return Err(Height { line: l + 1, column: c + 1 }) }
				heights.push(b - b'0');
			}
		}
		match width {
			Some(width) if width > 0 => Ok(Heightmap { heights, width }),
			_ => Err(Empty),
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		2199943210
		3987894921
		9856789892
		8767896789
		9899965678
	" };
	let heightmap = input_heightmap(INPUT);
	assert_eq!(heightmap.low_points().collect::<Vec<_>>(), [1, 9, 22, 46]);
	assert_eq!(heightmap.basin_size(1), 3);
	assert_eq!(heightmap.basin_size(9), 9);
	assert_eq!(part1(INPUT), 15);
	assert_eq!(part2(INPUT), 1134);
}
