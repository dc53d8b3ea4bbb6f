// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(Debug))]
struct Point { x: i32, y: i32 }

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug))]
struct Line { from: Point, to: Point }

impl Line {
	fn is_axis_aligned(&self) -> bool {
		self.from.x == self.to.x || self.from.y == self.to.y
	}

	/// All points on a horizontal, vertical or 45° line, both ends included.
	fn points(&self) -> impl Iterator<Item = Point> {
		let (dx, dy) = ((self.to.x - self.from.x).signum(), (self.to.y - self.from.y).signum());
		let len = (self.to.x - self.from.x).abs().max((self.to.y - self.from.y).abs());
		let from = self.from;
		(0..=len).map(move |i| Point { x: from.x + i * dx, y: from.y + i * dy })
	}
}


fn count_overlaps<'a>(lines: impl Iterator<Item = &'a Line>) -> usize {
	let mut covered = std::collections::HashMap::<_, usize>::new();
	for point in lines.flat_map(Line::points) {
		*covered.entry(point).or_default() += 1;
	}
	covered.values().filter(|&&n| n >= 2).count()
}


fn input_lines(input: &str) -> Vec<Line> {
	parsing::try_lines_from_str(input).unwrap()
}


pub(crate) fn part1(input: &str) -> usize {
	count_overlaps(input_lines(input).iter().filter(|l| l.is_axis_aligned()))
}


pub(crate) fn part2(input: &str) -> usize {
	count_overlaps(input_lines(input).iter())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Line, Point};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PointError {
		Format,
		X(ParseIntError),
		Y(ParseIntError),
	}

	impl FromStr for Point {
		type Err = PointError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (x, y) = s.trim().split_once(',').ok_or(PointError::Format)?;
			Ok(Point {
				x: x.parse().map_err(PointError::X)?,
				y: y.parse().map_err(PointError::Y)?,
			})
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum LineError {
		Format,
		From(PointError),
		To(PointError),
	}

	impl FromStr for Line {
		type Err = LineError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (from, to) = s.split_once(" -> ").ok_or(LineError::Format)?;
			Ok(Line {
				from: from.parse().map_err(LineError::From)?,
				to: to.parse().map_err(LineError::To)?,
			})
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct LinesError { line: usize, source: LineError }

	pub(super) fn try_lines_from_str(s: &str) -> Result<Vec<Line>, LinesError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| LinesError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		0,9 -> 5,9
		8,0 -> 0,8
		9,4 -> 3,4
		2,2 -> 2,1
		7,0 -> 7,4
		6,4 -> 2,0
		0,9 -> 2,9
		3,4 -> 1,4
		0,0 -> 8,8
		5,5 -> 8,2
	" };
	let diagonal = Line { from: Point { x: 9, y: 7 }, to: Point { x: 7, y: 9 } };
	assert_eq!(diagonal.points().collect::<Vec<_>>(),
		[Point { x: 9, y: 7 }, Point { x: 8, y: 8 }, Point { x: 7, y: 9 }]);
	assert_eq!(part1(INPUT), 5);
	assert_eq!(part2(INPUT), 12);
}
