// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Report {
	values: Vec<u32>,
	width: usize,
}

impl Report {
	fn ones_at(values: &[u32], bit: usize) -> usize {
		values.iter().filter(|v| *v >> bit & 1 == 1).count()
	}

	fn power_consumption(&self) -> u64 {
		let gamma = (0..self.width)
			.filter(|&bit| Self::ones_at(&self.values, bit) * 2 > self.values.len())
			.fold(0_u32, |acc, bit| acc | 1 << bit);
		let epsilon = !gamma & ((1 << self.width) - 1);
		gamma as u64 * epsilon as u64
	}

	/// Keeps the values whose bit (from the left) matches the selected
	/// criterion until one value remains.
	fn rating(&self, keep_most_common: bool) -> u32 {
		let mut values = self.values.clone();
		for bit in (0..self.width).rev() {
			if values.len() == 1 { break }
			let ones = Self::ones_at(&values, bit);
			let most_common = u32::from(ones * 2 >= values.len());
			let keep = if keep_most_common { most_common } else { most_common ^ 1 };
			values.retain(|v| v >> bit & 1 == keep);
		}
		values[0]
	}

	fn life_support_rating(&self) -> u64 {
		self.rating(true) as u64 * self.rating(false) as u64
	}
}


fn input_report(input: &str) -> Report {
	parsing::try_report_from_str(input).unwrap()
}


pub(crate) fn part1(input: &str) -> u64 {
	input_report(input).power_consumption()
}


pub(crate) fn part2(input: &str) -> u64 {
	input_report(input).life_support_rating()
}


mod parsing {
	use std::num::ParseIntError;
	use super::Report;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ReportErrorKind {
		Empty,
		Width(usize),
		Value(ParseIntError),
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct ReportError { line: usize, kind: ReportErrorKind }

	pub(super) fn try_report_from_str(s: &str) -> Result<Report, ReportError> {
		let mut width = None;
		let values = s.lines()
			.enumerate()
			.map(|(l, line)| {
				let line = line.trim();
				match width {
					None => width = Some(line.len()),
					Some(w) if w != line.len() =>
						return Err(ReportError { line: l + 1, kind: ReportErrorKind::Width(line.len()) }),
					_ => (),
				}
				u32::from_str_radix(line, 2)
					.map_err(|e| ReportError { line: l + 1, kind: ReportErrorKind::Value(e) })
			})
			.collect::<Result<Vec<_>, _>>()?;
		let width = width.ok_or(ReportError { line: 1, kind: ReportErrorKind::Empty })?;
		Ok(Report { values, width })
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		00100
		11110
		10110
		10111
		10101
		01111
		00111
		11100
		10000
		11001
		00010
		01010
	" };
	let report = input_report(INPUT);
	assert_eq!(report.width, 5);
	assert_eq!(report.rating(true), 23);
	assert_eq!(report.rating(false), 10);
	assert_eq!(part1(INPUT), 198);
	assert_eq!(part2(INPUT), 230);
}
