// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const W: usize = 10;

#[derive(Clone)]
struct Cavern([u8; W * W]);

impl Cavern {
	fn neighbors(pos: usize) -> impl Iterator<Item = usize> {
		let (x, y) = ((pos % W) as isize, (pos / W) as isize);
		(-1..=1).flat_map(move |dy| (-1..=1).map(move |dx| (x + dx, y + dy)))
			.filter(move |&(nx, ny)| (nx, ny) != (x, y)
				&& (0..W as isize).contains(&nx) && (0..W as isize).contains(&ny))
			.map(|(nx, ny)| ny as usize * W + nx as usize)
	}

	/// Advances one step and returns the number of flashes.
	fn step(&mut self) -> usize {
		let mut flashing = Vec::new();
		for (pos, energy) in self.0.iter_mut().enumerate() {
			*energy += 1;
			if *energy > 9 { flashing.push(pos) }
		}

		let mut flashed = [false; W * W];
		while let Some(pos) = flashing.pop() {
			if std::mem::replace(&mut flashed[pos], true) { continue }
			for adj in Self::neighbors(pos) {
				self.0[adj] += 1;
				if self.0[adj] > 9 && !flashed[adj] { flashing.push(adj) }
			}
		}

		for (energy, _) in self.0.iter_mut().zip(flashed).filter(|(_, f)| *f) {
			*energy = 0;
		}
		flashed.iter().filter(|&&f| f).count()
	}
}


fn input_cavern(input: &str) -> Cavern {
	parsing::try_cavern_from_str(input).unwrap()
}


fn part1_impl<const STEPS: usize>(mut cavern: Cavern) -> usize {
	(0..STEPS).map(|_| cavern.step()).sum()
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl::<100>(input_cavern(input))
}


pub(crate) fn part2(input: &str) -> usize {
	let mut cavern = input_cavern(input);
	(1..).find(|_| cavern.step() == W * W).unwrap()
}


mod parsing {
	use super::{Cavern, W};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum CavernError {
		Size,
		Energy { line: usize, column: usize },
	}

	pub(super) fn try_cavern_from_str(s: &str) -> Result<Cavern, CavernError> {
		let mut energies = [0; W * W];
		let mut lines = 0;
		for (l, line) in s.lines().enumerate() {
			let line = line.trim();
			if l >= W || line.len() != W { return Err(CavernError::Size) }
			for (c, b) in line.bytes().enumerate() {
				if !b.is_ascii_digit() { return Err(CavernError::Energy { line: l + 1, column: c + 1 }) }
				energies[l * W + c] = b - b'0';
			}
			lines += 1;
		}
		if lines != W { return Err(CavernError::Size) }
		Ok(Cavern(energies))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		5483143223
		2745854711
		5264556173
		6141336146
		6357385478
		4167524645
		2176841721
		6882881134
		4846848554
		5283751526
	" };
	assert_eq!(Cavern::neighbors(0).collect::<Vec<_>>(), [1, 10, 11]);
	assert_eq!(Cavern::neighbors(55).count(), 8);
	assert_eq!(part1_impl::<10>(input_cavern(INPUT)), 204);
	assert_eq!(part1(INPUT), 1656);
	assert_eq!(part2(INPUT), 195);
}
