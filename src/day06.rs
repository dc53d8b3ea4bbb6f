// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const NEW_TIMER: usize = 8;
const RESET_TIMER: usize = 6;

/// Number of fish per timer value.
#[derive(Clone)]
struct School([u64; NEW_TIMER + 1]);

impl School {
	fn tick(&mut self) {
		let spawning = self.0[0];
		self.0.rotate_left(1);
		self.0[RESET_TIMER] += spawning;
	}

	fn len(&self) -> u64 {
		self.0.iter().sum()
	}
}


fn input_school(input: &str) -> School {
	parsing::try_school_from_str(input).unwrap()
}


fn part1and2_impl<const DAYS: usize>(mut school: School) -> u64 {
	for _ in 0..DAYS { school.tick() }
	school.len()
}

pub(crate) fn part1(input: &str) -> u64 {
	part1and2_impl::<80>(input_school(input))
}

pub(crate) fn part2(input: &str) -> u64 {
	part1and2_impl::<256>(input_school(input))
}


mod parsing {
	use std::num::ParseIntError;
	use super::{School, NEW_TIMER};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum SchoolError {
		Timer { column: usize, source: ParseIntError },
		TimerRange { column: usize, timer: usize },
	}

	pub(super) fn try_school_from_str(s: &str) -> Result<School, SchoolError> {
		let mut school = School([0; NEW_TIMER + 1]);
		let mut column = 1;
		for timer in s.trim().split(',') {
			let parsed = timer.trim().parse::<usize>()
				.map_err(|e| SchoolError::Timer { column, source: e })?;
			if parsed > NEW_TIMER { return Err(SchoolError::TimerRange { column, timer: parsed }) }
			school.0[parsed] += 1;
			column += timer.len() + 1;
		}
		Ok(school)
	}
}


#[test]
fn tests() {
	const INPUT: &str = "3,4,3,1,2\n";
	assert_eq!(part1and2_impl::<18>(input_school(INPUT)), 26);
	assert_eq!(part1(INPUT), 5934);
	assert_eq!(part2(INPUT), 26_984_457_539);
	assert!(parsing::try_school_from_str("3,9").is_err());
}
