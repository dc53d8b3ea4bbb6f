// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
enum Fold {
	X(u32),
	Y(u32),
}

impl Fold {
	fn axis_and_line(&self) -> (usize, u32) {
		match *self {
			Fold::X(line) => (0, line),
			Fold::Y(line) => (1, line),
		}
	}
}

/// Dots on a sheet that spans `size`; the sheet can be wider or taller than
/// its dots once folded.
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Sheet {
	dots: HashSet<[u32; 2]>,
	size: [u32; 2],
}

impl Sheet {
	fn new(dots: HashSet<[u32; 2]>) -> Self {
		let size = [0, 1].map(|axis| dots.iter().map(|d| d[axis] + 1).max().unwrap_or(0));
		Sheet { dots, size }
	}

	/// Folds the far side over onto the near side. When the far side is the
	/// longer one it overhangs, and everything shifts so the sheet starts at 0
	/// again. Dots on the fold line itself vanish.
	fn folded(&self, fold: &Fold) -> Sheet {
		let (axis, line) = fold.axis_and_line();
		let far = self.size[axis].saturating_sub(line + 1);
		let len = line.max(far);
		let dots = self.dots.iter()
			.filter_map(|&dot| {
				let dist = dot[axis].abs_diff(line);
				if dist == 0 { return None }
				let mut dot = dot;
				dot[axis] = len - dist;
				Some(dot)
			})
			.collect();
		let mut size = self.size;
		size[axis] = len;
		Sheet { dots, size }
	}
}

struct Manual {
	sheet: Sheet,
	folds: Vec<Fold>,
}


struct Paper<'a>(&'a HashSet<[u32; 2]>);

impl std::fmt::Display for Paper<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write;
		let width = self.0.iter().map(|d| d[0] + 1).max().unwrap_or(0);
		let height = self.0.iter().map(|d| d[1] + 1).max().unwrap_or(0);
		for y in 0..height {
			for x in 0..width {
				f.write_char(if self.0.contains(&[x, y]) { '#' } else { '.' })?;
			}
			if y < height - 1 { f.write_char('\n')? }
		}
		Ok(())
	}
}


mod font {
	use std::collections::HashSet;

	pub(super) const HEIGHT: u32 = 6;
	pub(super) const ADVANCE: u32 = 5;

	const GLYPHS: [(char, [&str; HEIGHT as usize]); 16] = [
		('A', [".##.", "#..#", "#..#", "####", "#..#", "#..#"]),
		('B', ["###.", "#..#", "###.", "#..#", "#..#", "###."]),
		('C', [".##.", "#..#", "#...", "#...", "#..#", ".##."]),
		('E', ["####", "#...", "###.", "#...", "#...", "####"]),
		('F', ["####", "#...", "###.", "#...", "#...", "#..."]),
		('G', [".##.", "#..#", "#...", "#.##", "#..#", ".###"]),
		('H', ["#..#", "#..#", "####", "#..#", "#..#", "#..#"]),
		('J', ["..##", "...#", "...#", "...#", "#..#", ".##."]),
		('K', ["#..#", "#.#.", "##..", "#.#.", "#.#.", "#..#"]),
		('L', ["#...", "#...", "#...", "#...", "#...", "####"]),
		('O', [".##.", "#..#", "#..#", "#..#", "#..#", ".##."]),
		('P', ["###.", "#..#", "#..#", "###.", "#...", "#..."]),
		('R', ["###.", "#..#", "#..#", "###.", "#.#.", "#..#"]),
		('S', [".###", "#...", "#...", ".##.", "...#", "###."]),
		('U', ["#..#", "#..#", "#..#", "#..#", "#..#", ".##."]),
		('Z', ["####", "...#", "..#.", ".#..", "#...", "####"]),
	];

	/// Reads the letters drawn by the dots, `?` for unknown glyphs.
	pub(super) fn read(dots: &HashSet<[u32; 2]>) -> String {
		let width = dots.iter().map(|d| d[0] + 1).max().unwrap_or(0);
		(0..(width + 1) / ADVANCE)
			.map(|i| {
				let x0 = i * ADVANCE;
				GLYPHS.iter()
					.find(|(_, rows)| rows.iter().enumerate().all(|(y, row)|
						row.bytes().enumerate().all(|(x, b)|
							(b == b'#') == dots.contains(&[x0 + x as u32, y as u32]))))
					.map(|&(c, _)| c)
					.unwrap_or('?')
			})
			.collect()
	}
}


fn input_manual(input: &str) -> Manual {
	parsing::try_manual_from_str(input).unwrap()
}


pub(crate) fn part1(input: &str) -> usize {
	let manual = input_manual(input);
	match manual.folds.first() {
		Some(first) => manual.sheet.folded(first).dots.len(),
		None => manual.sheet.dots.len(),
	}
}


fn part2_impl(input: &str) -> HashSet<[u32; 2]> {
	let manual = input_manual(input);
	manual.folds.iter().fold(manual.sheet, |sheet, f| sheet.folded(f)).dots
}

pub(crate) fn part2(input: &str) -> String {
	let dots = part2_impl(input);
	tracing::debug!("folded paper:\n{}", Paper(&dots));
	font::read(&dots)
}


mod parsing {
	use std::{collections::HashSet, num::ParseIntError, str::FromStr};
	use super::{Fold, Manual, Sheet};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum FoldError {
		Format,
		Axis,
		Line(ParseIntError),
	}

	impl FromStr for Fold {
		type Err = FoldError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (axis, line) = s.strip_prefix("fold along ")
				.and_then(|s| s.split_once('='))
				.ok_or(FoldError::Format)?;
			let line = line.trim().parse().map_err(FoldError::Line)?;
			match axis {
				"x" => Ok(Fold::X(line)),
				"y" => Ok(Fold::Y(line)),
				_ => Err(FoldError::Axis),
			}
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ManualErrorKind {
		Dot,
		Coordinate(ParseIntError),
		Instruction(FoldError),
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct ManualError { line: usize, kind: ManualErrorKind }

	pub(super) fn try_manual_from_str(s: &str) -> Result<Manual, ManualError> {
		use ManualErrorKind::*;
		let mut lines = s.lines().map(str::trim).enumerate();
		let mut dots = HashSet::new();
		for (l, line) in lines.by_ref() {
			if line.is_empty() { break }
			let err = |kind| ManualError { line: l + 1, kind };
			let (x, y) = line.split_once(',').ok_or_else(|| err(Dot))?;
			let x = x.parse().map_err(|e| err(Coordinate(e)))?;
			let y = y.parse().map_err(|e| err(Coordinate(e)))?;
			dots.insert([x, y]);
		}
		let folds = lines
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|e| ManualError { line: l + 1, kind: Instruction(e) }))
			.collect::<Result<_, _>>()?;
		Ok(Manual { sheet: Sheet::new(dots), folds })
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		6,10
		0,14
		9,10
		0,3
		10,4
		4,11
		6,0
		6,12
		4,1
		0,13
		10,12
		3,4
		3,0
		8,4
		1,10
		2,14
		8,10
		9,0

		fold along y=7
		fold along x=5
	" };
	let manual = input_manual(INPUT);
	assert_eq!(manual.folds, [Fold::Y(7), Fold::X(5)]);
	assert_eq!(part1(INPUT), 17);
	assert_eq!(Paper(&part2_impl(INPUT)).to_string(), indoc::indoc! { "
		#####
		#...#
		#...#
		#...#
		#####" });
	assert_eq!(part2(INPUT), "?");

	let uneven = input_manual("0,0\n5,0\n0,1\n\nfold along x=1\n");
	assert_eq!(uneven.sheet.size, [6, 2]);
	let folded = uneven.sheet.folded(&uneven.folds[0]);
	assert_eq!(folded, Sheet { dots: HashSet::from([[3, 0], [0, 0], [3, 1]]), size: [4, 2] });
	assert_eq!(part1("0,0\n5,0\n\nfold along x=1\n"), 2);
	assert_eq!(part1("2,0\n2,2\n2,5\n\nfold along y=1\n"), 2);
	assert_eq!(Sheet::new(HashSet::from([[0, 0], [0, 2]])).folded(&Fold::Y(1)).dots, HashSet::from([[0, 0]]));

	const CODE: &str = indoc::indoc! { "
		###   ##  #  # #### ###  ####   ##  ##
		#  # #  # #  #    # #  # #       # #  #
		#  # #    ####   #  ###  ###     # #
		###  # ## #  #  #   #  # #       # #
		#    #  # #  # #    #  # #    #  # #  #
		#     ### #  # #### ###  #     ##   ##
	" };
	let dots = CODE.lines().enumerate()
		.flat_map(|(y, row)| row.bytes().enumerate()
			.filter(|&(_, b)| b == b'#')
			.map(move |(x, _)| [x as u32, y as u32]))
		.collect();
	assert_eq!(font::read(&dots), "PGHZBFJC");
}
