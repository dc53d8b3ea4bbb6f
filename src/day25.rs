// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
enum Space { Empty, East, South }

#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
struct Seafloor {
	spaces: Vec<Space>,
	width: usize,
}

impl Seafloor {
	fn height(&self) -> usize {
		self.spaces.len() / self.width
	}

	/// Moves one herd at once, wrapping around the edges. Returns whether
	/// any sea cucumber moved.
	fn move_herd(&mut self, herd: Space) -> bool {
		let (w, h) = (self.width, self.height());
		let ahead = |pos: usize| match herd {
			Space::East => pos - pos % w + (pos % w + 1) % w,
			_ => (pos + w) % (w * h),
		};
		let moving = (0..self.spaces.len())
			.filter(|&pos| self.spaces[pos] == herd && self.spaces[ahead(pos)] == Space::Empty)
			.collect::<Vec<_>>();
		for &pos in &moving {
			self.spaces[pos] = Space::Empty;
			self.spaces[ahead(pos)] = herd;
		}
		!moving.is_empty()
	}

	fn step(&mut self) -> bool {
		let east = self.move_herd(Space::East);
		let south = self.move_herd(Space::South);
		east || south
	}
}

impl std::fmt::Display for Seafloor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for row in self.spaces.chunks(self.width) {
			for space in row {
				f.write_str(match space { Space::Empty => ".", Space::East => ">", Space::South => "v" })?;
			}
			f.write_str("\n")?;
		}
		Ok(())
	}
}


fn input_seafloor(input: &str) -> Seafloor {
	parsing::try_seafloor_from_str(input).unwrap()
}


pub(crate) fn part1(input: &str) -> usize {
	let mut seafloor = input_seafloor(input);
	let mut steps = 1;
	while seafloor.step() { steps += 1 }
	steps
}


mod parsing {
	use super::{Seafloor, Space};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum SeafloorError {
		Empty,
		Width { line: usize },
		Space { line: usize, column: usize, found: char },
	}

	pub(super) fn try_seafloor_from_str(s: &str) -> Result<Seafloor, SeafloorError> {
		let mut spaces = Vec::new();
		let mut width = None;
		for (l, line) in s.lines().map(str::trim).enumerate().filter(|(_, line)| !line.is_empty()) {
			if *width.get_or_insert(line.len()) != line.len() {
				return Err(SeafloorError::Width { line: l + 1 })
			}
			for (c, ch) in line.chars().enumerate() {
				spaces.push(match ch {
					'.' => Space::Empty,
					'>' => Space::East,
					'v' => Space::South,
					found => return Err(SeafloorError::Space { line: l + 1, column: c + 1, found }),
				});
			}
		}
		match width {
			Some(width) => Ok(Seafloor { spaces, width }),
			None => Err(SeafloorError::Empty),
		}
	}
}


#[test]
fn tests() {
	let mut row = input_seafloor("...>>>>>...\n");
	assert!(row.step());
	assert_eq!(row.to_string(), "...>>>>.>..\n");
	assert!(row.step());
	assert_eq!(row.to_string(), "...>>>.>.>.\n");

	let mut wrapping = input_seafloor(indoc::indoc! { "
		..........
		.>v....v..
		.......>..
		..........
	" });
	wrapping.step();
	assert_eq!(wrapping.to_string(), indoc::indoc! { "
		..........
		.>........
		..v....v>.
		..........
	" });

	let mut edges = input_seafloor(indoc::indoc! { "
		...>...
		.......
		......>
		v.....>
		......>
		.......
		..vvv..
	" });
	edges.step();
	assert_eq!(edges.to_string(), indoc::indoc! { "
		..vv>..
		.......
		>......
		v.....>
		>......
		.......
		....v..
	" });

	const INPUT: &str = indoc::indoc! { "
		v...>>.vv>
		.vv>>.vv..
		>>.>v>...v
		>>v>>.>.v.
		v>v.vv.v..
		>.>>..v...
		.vv..>.>v.
		v.v..>>v.v
		....v..v.>
	" };
	assert_eq!(part1(INPUT), 58);
}
