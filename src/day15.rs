// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Cave {
	risks: Vec<u8>,
	width: usize,
}

impl Cave {
	fn height(&self) -> usize {
		self.risks.len() / self.width
	}

	fn adjacent_positions(&self, pos: usize) -> impl Iterator<Item = usize> {
		let (w, h) = (self.width, self.height());
		let (x, y) = (pos % w, pos / w);
		[
			(y > 0).then(|| pos - w),
			(x > 0).then(|| pos - 1),
			(x < w - 1).then(|| pos + 1),
			(y < h - 1).then(|| pos + w),
		].into_iter().flatten()
	}

	/// Tiles the cave `times` by `times`, each tile one risk level higher
	/// than the one to its left or above, wrapping from 9 back to 1.
	fn tiled(&self, times: usize) -> Cave {
		let (w, h) = (self.width, self.height());
		let width = w * times;
		let risks = (0..h * times)
			.flat_map(|y| (0..width).map(move |x| (x, y)))
			.map(|(x, y)| {
				let risk = self.risks[(y % h) * w + x % w] as usize + x / w + y / h;
				((risk - 1) % 9 + 1) as u8
			})
			.collect();
		Cave { risks, width }
	}

	fn lowest_total_risk(&self) -> Option<usize> {
		use std::{cmp::Ordering, collections::BinaryHeap};

		// Dijkstra

		#[derive(PartialEq, Eq)]
		struct State { pos: usize, risk: usize }

		impl Ord for State {
			fn cmp(&self, other: &Self) -> Ordering {
				other.risk.cmp(&self.risk)
					.then_with(|| self.pos.cmp(&other.pos))
			}
		}

		impl PartialOrd for State {
			fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
				Some(self.cmp(other))
			}
		}

		let target = self.risks.len().checked_sub(1)?;
		let mut best = vec![usize::MAX; self.risks.len()];
		let mut heap = BinaryHeap::from([State { pos: 0, risk: 0 }]);
		best[0] = 0;

		while let Some(State { pos, risk }) = heap.pop() {
			if pos == target { return Some(risk) }
			if risk > best[pos] { continue }
			for adj in self.adjacent_positions(pos) {
				let adj_risk = risk + self.risks[adj] as usize;
				if adj_risk < best[adj] {
					best[adj] = adj_risk;
					heap.push(State { pos: adj, risk: adj_risk });
				}
			}
		}
		None
	}
}


fn input_cave(input: &str) -> Cave {
	parsing::try_cave_from_str(input).unwrap()
}


pub(crate) fn part1(input: &str) -> usize {
	input_cave(input).lowest_total_risk().unwrap()
}


pub(crate) fn part2(input: &str) -> usize {
	input_cave(input).tiled(5).lowest_total_risk().unwrap()
}


mod parsing {
	use super::Cave;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum CaveError {
		Empty,
		Width { line: usize },
		Risk { line: usize, column: usize },
	}

	pub(super) fn try_cave_from_str(s: &str) -> Result<Cave, CaveError> {
		use CaveError::*;
		let mut risks = Vec::new();
		let mut width = None;
		for (l, line) in s.lines().enumerate() {
			let line = line.trim();
			if *width.get_or_insert(line.len()) != line.len() {
				return Err(Width { line: l + 1 })
			}
			for (c, b) in line.bytes().enumerate() {
				if !(b'1'..=b'9').contains(&b) { return Err(Risk { line: l + 1, column: c + 1 }) }
				risks.push(b - b'0');
			}
		}
		match width {
			Some(width) if width > 0 => Ok(Cave { risks, width }),
			_ => Err(Empty),
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		1163751742
		1381373672
		2136511328
		3694931569
		7463417111
		1319128137
		1359912421
		3125421639
		1293138521
		2311944581
	" };
	let tiled = input_cave("8\n").tiled(5);
	assert_eq!(tiled.risks[..5], [8, 9, 1, 2, 3]);
	assert_eq!(tiled.risks[20..], [3, 4, 5, 6, 7]);
	assert_eq!(input_cave(INPUT).tiled(5).risks.len(), 2500);
	assert_eq!(part1(INPUT), 40);
	assert_eq!(part2(INPUT), 315);
}
