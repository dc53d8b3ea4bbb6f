// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::ops::RangeInclusive;


#[cfg_attr(test, derive(Debug, PartialEq))]
struct Target {
	x: RangeInclusive<i64>,
	y: RangeInclusive<i64>,
}

impl Target {
	/// Returns the highest point reached if the probe ever ends a step
	/// inside the target.
	fn launch(&self, mut vel: [i64; 2]) -> Option<i64> {
		let mut pos = [0; 2];
		let mut top = 0;
		while pos[0] <= *self.x.end() && pos[1] >= *self.y.start() {
			if self.x.contains(&pos[0]) && self.y.contains(&pos[1]) { return Some(top) }
			pos = [pos[0] + vel[0], pos[1] + vel[1]];
			top = top.max(pos[1]);
			vel = [vel[0] - vel[0].signum(), vel[1] - 1];
			if vel[0] == 0 && !self.x.contains(&pos[0]) { return None }
		}
		None
	}

	/// Highest points of all initial velocities that hit the target. Assumes
	/// the target lies right of and below the launch position.
	fn hits(&self) -> impl Iterator<Item = i64> + '_ {
		let max_vy = self.y.start().abs();
		(1..=*self.x.end())
			.flat_map(move |vx| (*self.y.start()..=max_vy).map(move |vy| [vx, vy]))
			.filter_map(|vel| self.launch(vel))
	}
}


fn input_target(input: &str) -> Target {
	input.parse().unwrap()
}


pub(crate) fn part1(input: &str) -> i64 {
	input_target(input).hits().max().unwrap()
}


pub(crate) fn part2(input: &str) -> usize {
	input_target(input).hits().count()
}


mod parsing {
	use std::{num::ParseIntError, ops::RangeInclusive, str::FromStr};
	use super::Target;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum TargetError {
		Format,
		Bound(ParseIntError),
	}

	fn try_range_from_str(s: &str) -> Result<RangeInclusive<i64>, TargetError> {
		let (from, through) = s.split_once("..").ok_or(TargetError::Format)?;
		let (from, through): (i64, i64) = (
			from.parse().map_err(TargetError::Bound)?,
			through.parse().map_err(TargetError::Bound)?,
		);
		Ok(from.min(through)..=from.max(through))
	}

	impl FromStr for Target {
		type Err = TargetError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (x, y) = s.trim().strip_prefix("target area: x=")
				.and_then(|s| s.split_once(", y="))
				.ok_or(TargetError::Format)?;
			Ok(Target { x: try_range_from_str(x)?, y: try_range_from_str(y)? })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = "target area: x=20..30, y=-10..-5\n";
	let target = input_target(INPUT);
	assert_eq!(target, Target { x: 20..=30, y: -10..=-5 });
	assert_eq!(target.launch([7, 2]), Some(3));
	assert_eq!(target.launch([6, 3]), Some(6));
	assert_eq!(target.launch([9, 0]), Some(0));
	assert_eq!(target.launch([17, -4]), None);
	assert_eq!(target.launch([6, 9]), Some(45));
	assert_eq!(part1(INPUT), 45);
	assert_eq!(part2(INPUT), 112);
}
