// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const EXPLODE_DEPTH: u8 = 5;
const SPLIT_VALUE: u32 = 10;

/// A snailfish number flattened to its regular numbers, left to right,
/// each with the number of pairs enclosing it.
#[derive(Clone, PartialEq, Eq)]
struct Number(Vec<Regular>);

#[derive(Clone, Copy, PartialEq, Eq)]
struct Regular { value: u32, depth: u8 }

impl Number {
	fn add(&self, other: &Number) -> Number {
		let mut sum = Number(self.0.iter().chain(other.0.iter())
			.map(|&r| Regular { depth: r.depth + 1, ..r })
			.collect());
		sum.reduce();
		sum
	}

	fn reduce(&mut self) {
		while self.explode() || self.split() {}
	}

	fn explode(&mut self) -> bool {
		let Some(i) = self.0.iter().position(|r| r.depth >= EXPLODE_DEPTH) else { return false };
		let (l, r) = (self.0[i], self.0[i + 1]);
		if i > 0 { self.0[i - 1].value += l.value }
		if let Some(next) = self.0.get_mut(i + 2) { next.value += r.value }
		self.0.splice(i..i + 2, [Regular { value: 0, depth: l.depth - 1 }]);
		true
	}

	fn split(&mut self) -> bool {
		use num_integer::Integer as _;
		let Some(i) = self.0.iter().position(|r| r.value >= SPLIT_VALUE) else { return false };
		let Regular { value, depth } = self.0[i];
		let (half, rem) = value.div_rem(&2);
		self.0.splice(i..=i, [
			Regular { value: half, depth: depth + 1 },
			Regular { value: half + rem, depth: depth + 1 },
		]);
		true
	}

	fn magnitude(&self) -> u64 {
		let mut items = self.0.iter()
			.map(|r| (r.value as u64, r.depth))
			.collect::<Vec<_>>();
		// The leftmost of the deepest regular numbers always starts a pair
		while items.len() > 1 {
			let depth = items.iter().map(|&(_, d)| d).max().unwrap_or(0);
			let i = items.iter().position(|&(_, d)| d == depth).unwrap_or(0);
			let magnitude = 3 * items[i].0 + 2 * items[i + 1].0;
			items.splice(i..i + 2, [(magnitude, depth.saturating_sub(1))]);
		}
		items.first().map(|&(m, _)| m).unwrap_or(0)
	}
}

impl std::fmt::Display for Number {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		fn write(f: &mut std::fmt::Formatter<'_>, items: &[Regular], i: &mut usize, depth: u8) -> std::fmt::Result {
			let Some(item) = items.get(*i) else { return Ok(()) };
			if item.depth == depth {
				*i += 1;
				return write!(f, "{}", item.value)
			}
			f.write_str("[")?;
			write(f, items, i, depth + 1)?;
			f.write_str(",")?;
			write(f, items, i, depth + 1)?;
			f.write_str("]")
		}
		write(f, &self.0, &mut 0, 0)
	}
}


fn input_numbers(input: &str) -> Vec<Number> {
	parsing::try_numbers_from_str(input).unwrap()
}


pub(crate) fn part1(input: &str) -> u64 {
	input_numbers(input).into_iter()
		.reduce(|sum, n| sum.add(&n))
		.map(|sum| sum.magnitude())
		.unwrap_or(0)
}


pub(crate) fn part2(input: &str) -> u64 {
	use itertools::Itertools as _;
	input_numbers(input).iter()
		.permutations(2)
		.map(|pair| pair[0].add(pair[1]).magnitude())
		.max()
		.unwrap_or(0)
}


mod parsing {
	use std::str::FromStr;
	use super::{Number, Regular};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum NumberError {
		Unexpected { column: usize, found: char },
		Unbalanced,
	}

	impl FromStr for Number {
		type Err = NumberError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut regulars = Vec::new();
			let mut depth = 0_u8;
			let mut digits = None;
			for (c, ch) in s.trim().chars().enumerate() {
				if let Some(d) = ch.to_digit(10) {
					digits = Some(digits.unwrap_or(0) * 10 + d);
					continue
				}
				if let Some(value) = digits.take() { regulars.push(Regular { value, depth }) }
				match ch {
					'[' => depth += 1,
					']' => depth = depth.checked_sub(1).ok_or(NumberError::Unbalanced)?,
					',' => (),
					found => return Err(NumberError::Unexpected { column: c + 1, found }),
				}
			}
			if let Some(value) = digits { regulars.push(Regular { value, depth }) }
			if depth != 0 { return Err(NumberError::Unbalanced) }
			Ok(Number(regulars))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct NumbersError { line: usize, source: NumberError }

	pub(super) fn try_numbers_from_str(s: &str) -> Result<Vec<Number>, NumbersError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|e| NumbersError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	fn number(s: &str) -> Number {
		s.parse().unwrap()
	}
	fn sum(s: &str) -> String {
		input_numbers(s).into_iter().reduce(|sum, n| sum.add(&n)).unwrap().to_string()
	}

	for n in ["[1,2]", "[[1,2],3]", "[9,[8,7]]", "[[[[1,3],[5,3]],[[1,3],[8,7]]],[[[4,9],[6,9]],[[8,2],[7,3]]]]"] {
		assert_eq!(number(n).to_string(), n);
	}

	for (before, after) in [
		("[[[[[9,8],1],2],3],4]", "[[[[0,9],2],3],4]"),
		("[7,[6,[5,[4,[3,2]]]]]", "[7,[6,[5,[7,0]]]]"),
		("[[6,[5,[4,[3,2]]]],1]", "[[6,[5,[7,0]]],3]"),
		("[[3,[2,[1,[7,3]]]],[6,[5,[4,[3,2]]]]]", "[[3,[2,[8,0]]],[9,[5,[4,[3,2]]]]]"),
	] {
		let mut n = number(before);
		assert!(n.explode());
		assert_eq!(n.to_string(), after);
	}

	assert_eq!(number("[[[[4,3],4],4],[7,[[8,4],9]]]").add(&number("[1,1]")).to_string(),
		"[[[[0,7],4],[[7,8],[6,0]]],[8,1]]");
	assert_eq!(sum("[1,1]\n[2,2]\n[3,3]\n[4,4]\n"), "[[[[1,1],[2,2]],[3,3]],[4,4]]");
	assert_eq!(sum("[1,1]\n[2,2]\n[3,3]\n[4,4]\n[5,5]\n"), "[[[[3,0],[5,3]],[4,4]],[5,5]]");
	assert_eq!(sum("[1,1]\n[2,2]\n[3,3]\n[4,4]\n[5,5]\n[6,6]\n"), "[[[[5,0],[7,4]],[5,5]],[6,6]]");

	for (n, magnitude) in [
		("[9,1]", 29),
		("[[1,2],[[3,4],5]]", 143),
		("[[[[0,7],4],[[7,8],[6,0]]],[8,1]]", 1384),
		("[[[[1,1],[2,2]],[3,3]],[4,4]]", 445),
		("[[[[3,0],[5,3]],[4,4]],[5,5]]", 791),
		("[[[[5,0],[7,4]],[5,5]],[6,6]]", 1137),
		("[[[[8,7],[7,7]],[[8,6],[7,7]]],[[[0,7],[6,6]],[8,7]]]", 3488),
	] {
		assert_eq!(number(n).magnitude(), magnitude);
	}

	const INPUT: &str = indoc::indoc! { "
		[[[0,[5,8]],[[1,7],[9,6]]],[[4,[1,2]],[[1,4],2]]]
		[[[5,[2,8]],4],[5,[[9,9],0]]]
		[6,[[[6,2],[5,6]],[[7,6],[4,7]]]]
		[[[6,[0,7]],[0,9]],[4,[9,[9,0]]]]
		[[[7,[6,4]],[3,[1,3]]],[[[5,5],1],9]]
		[[6,[[7,3],[3,2]]],[[[3,8],[5,7]],4]]
		[[[[5,4],[7,7]],8],[[8,3],8]]
		[[9,3],[[9,9],[6,[4,9]]]]
		[[2,[[7,7],7]],[[5,8],[[9,3],[0,2]]]]
		[[[[5,2],5],[8,[3,7]]],[[5,[7,5]],[4,4]]]
	" };
	assert_eq!(sum(INPUT), "[[[[6,6],[7,6]],[[7,7],[7,0]]],[[[7,7],[7,7]],[[7,8],[9,9]]]]");
	assert_eq!(part1(INPUT), 4140);
	assert_eq!(part2(INPUT), 3993);
}
