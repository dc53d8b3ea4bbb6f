// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const SIZE: usize = 5;

#[derive(Clone)]
struct Board {
	numbers: [[u32; SIZE]; SIZE],
	marked: [[bool; SIZE]; SIZE],
}

impl Board {
	/// Marks the number and returns whether that completed a row or column.
	fn mark(&mut self, number: u32) -> bool {
		let mut won = false;
		for r in 0..SIZE {
			for c in 0..SIZE {
				if self.numbers[r][c] != number { continue }
				self.marked[r][c] = true;
				won |= self.marked[r].iter().all(|&m| m)
					|| self.marked.iter().all(|row| row[c]);
			}
		}
		won
	}

	fn unmarked_sum(&self) -> u32 {
		self.numbers.iter().flatten()
			.zip(self.marked.iter().flatten())
			.filter_map(|(&n, &m)| (!m).then_some(n))
			.sum()
	}
}


struct Bingo {
	draws: Vec<u32>,
	boards: Vec<Board>,
}

impl Bingo {
	/// Scores of the boards in the order in which they win.
	fn winning_scores(mut self) -> impl Iterator<Item = u32> {
		let mut won = vec![false; self.boards.len()];
		let mut scores = Vec::new();
		for draw in self.draws {
			for (board, won) in self.boards.iter_mut().zip(won.iter_mut()) {
				if *won { continue }
				if board.mark(draw) {
					*won = true;
					scores.push(board.unmarked_sum() * draw);
				}
			}
		}
		scores.into_iter()
	}
}


fn input_bingo(input: &str) -> Bingo {
	input.parse().unwrap()
}


pub(crate) fn part1(input: &str) -> u32 {
	input_bingo(input).winning_scores().next().unwrap()
}


pub(crate) fn part2(input: &str) -> u32 {
	input_bingo(input).winning_scores().last().unwrap()
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Bingo, Board, SIZE};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum BingoError {
		Empty,
		Draw(ParseIntError),
		Number { line: usize, source: ParseIntError },
		BoardShape { line: usize },
	}

	impl FromStr for Bingo {
		type Err = BingoError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use BingoError::*;
			let mut lines = s.lines().enumerate()
				.map(|(l, line)| (l + 1, line.trim()))
				.filter(|(_, line)| !line.is_empty());

			let (_, draws) = lines.next().ok_or(Empty)?;
			let draws = draws.split(',')
				.map(|d| d.parse().map_err(Draw))
				.collect::<Result<_, _>>()?;

			let mut boards = Vec::new();
			let mut numbers = [[0; SIZE]; SIZE];
			let mut row = 0;
			for (line, numbers_line) in lines {
				let mut col = 0;
				for number in numbers_line.split_whitespace() {
					if col == SIZE { return Err(BoardShape { line }) }
					numbers[row][col] = number.parse()
						.map_err(|e| Number { line, source: e })?;
					col += 1;
				}
				if col != SIZE { return Err(BoardShape { line }) }
				row += 1;
				if row == SIZE {
					boards.push(Board { numbers, marked: [[false; SIZE]; SIZE] });
					row = 0;
				}
			}
			if row != 0 { return Err(BoardShape { line: s.lines().count() }) }

			Ok(Bingo { draws, boards })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

		22 13 17 11  0
		 8  2 23  4 24
		21  9 14 16  7
		 6 10  3 18  5
		 1 12 20 15 19

		 3 15  0  2 22
		 9 18 13 17  5
		19  8  7 25 23
		20 11 10 24  4
		14 21 16 12  6

		14 21 17 24  4
		10 16 15  9 19
		18  8 23 26 20
		22 11 13  6  5
		 2  0 12  3  7
	" };
	let bingo = input_bingo(INPUT);
	assert_eq!(bingo.draws.len(), 27);
	assert_eq!(bingo.boards.len(), 3);
	assert_eq!(part1(INPUT), 4512);
	assert_eq!(part2(INPUT), 1924);
}
