// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Lit segments `a` through `g` as bits 0 through 6.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
struct Segments(u8);

impl Segments {
	fn len(&self) -> u32 {
		self.0.count_ones()
	}

	fn without(&self, other: Segments) -> Segments {
		Segments(self.0 & !other.0)
	}

	fn is_unique_digit(&self) -> bool {
		matches!(self.len(), 2 | 3 | 4 | 7)
	}
}

struct Entry {
	patterns: [Segments; 10],
	output: [Segments; 4],
}

impl Entry {
	fn with_len(&self, len: u32) -> impl Iterator<Item = Segments> + '_ {
		self.patterns.iter().copied().filter(move |p| p.len() == len)
	}

	/// Patterns indexed by the digit they represent.
	fn deduce(&self) -> [Segments; 10] {
		let unique = |len| self.with_len(len).next().unwrap();
		let (one, four, seven, eight) = (unique(2), unique(4), unique(3), unique(7));
		let four_arm = four.without(one); // b & d
		let bottom_left = eight.without(seven).without(four); // e & g

		let mut digits = [Segments(0); 10];
		digits[1] = one;
		digits[4] = four;
		digits[7] = seven;
		digits[8] = eight;
		for pattern in self.with_len(5) {
			let digit = if four_arm.without(pattern).len() == 0 { 5 }
				else if bottom_left.without(pattern).len() == 0 { 2 }
				else { 3 };
			digits[digit] = pattern;
		}
		for pattern in self.with_len(6) {
			let digit = if bottom_left.without(pattern).len() == 1 { 9 }
				else if four_arm.without(pattern).len() == 1 { 0 }
				else { 6 };
			digits[digit] = pattern;
		}
		digits
	}

	fn value(&self) -> u64 {
		let digits = self.deduce();
		self.output.iter()
			.map(|o| digits.iter().position(|d| d == o).unwrap() as u64)
			.fold(0, |acc, d| acc * 10 + d)
	}
}


fn input_entries(input: &str) -> Vec<Entry> {
	parsing::try_entries_from_str(input).unwrap()
}


pub(crate) fn part1(input: &str) -> usize {
	input_entries(input).iter()
		.flat_map(|d| d.output.iter())
		.filter(|o| o.is_unique_digit())
		.count()
}


pub(crate) fn part2(input: &str) -> u64 {
	input_entries(input).iter().map(Entry::value).sum()
}


mod parsing {
	use std::str::FromStr;
	use super::{Entry, Segments};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum SegmentsError {
		Empty,
		Invalid(char),
	}

	impl FromStr for Segments {
		type Err = SegmentsError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			if s.is_empty() { return Err(SegmentsError::Empty) }
			s.chars().try_fold(Segments(0), |acc, c| match c {
				'a'..='g' => Ok(Segments(acc.0 | 1 << (c as u8 - b'a'))),
				_ => Err(SegmentsError::Invalid(c)),
			})
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum EntryError {
		Format,
		Count,
		Segments(SegmentsError),
	}

	fn try_segments_array<const N: usize>(s: &str) -> Result<[Segments; N], EntryError> {
		let mut array = [Segments(0); N];
		let mut n = 0;
		for segments in s.split_whitespace() {
			if n == N { return Err(EntryError::Count) }
			array[n] = segments.parse().map_err(EntryError::Segments)?;
			n += 1;
		}
		if n != N { return Err(EntryError::Count) }
		Ok(array)
	}

	impl FromStr for Entry {
		type Err = EntryError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (patterns, output) = s.split_once('|').ok_or(EntryError::Format)?;
			Ok(Entry {
				patterns: try_segments_array(patterns)?,
				output: try_segments_array(output)?,
			})
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct EntriesError { line: usize, source: EntryError }

	pub(super) fn try_entries_from_str(s: &str) -> Result<Vec<Entry>, EntriesError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| EntriesError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUTS: [&str; 2] = [
		"acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf",
		indoc::indoc! { "
			be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
			edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc
			fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg
			fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb
			aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea
			fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb
			dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe
			bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef
			egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb
			gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce
		" },
	];
	let entry = input_entries(INPUTS[0]).remove(0);
	let digits = entry.deduce();
	assert_eq!(digits[8], "acedgfb".parse::<Segments>().unwrap());
	assert_eq!(digits[5], "cdfbe".parse::<Segments>().unwrap());
	assert_eq!(digits[2], "gcdfa".parse::<Segments>().unwrap());
	assert_eq!(digits[3], "fbcad".parse::<Segments>().unwrap());
	assert_eq!(digits[9], "cefabd".parse::<Segments>().unwrap());
	assert_eq!(digits[6], "cdfgeb".parse::<Segments>().unwrap());
	assert_eq!(digits[0], "cagedb".parse::<Segments>().unwrap());
	assert_eq!(entry.value(), 5353);
	assert_eq!(part1(INPUTS[0]), 0);
	assert_eq!(part2(INPUTS[0]), 5353);
	assert_eq!(input_entries(INPUTS[1]).iter().map(Entry::value).collect::<Vec<_>>(),
		[8394, 9781, 1197, 9361, 4873, 8418, 4548, 1625, 8717, 4315]);
	assert_eq!(part1(INPUTS[1]), 26);
	assert_eq!(part2(INPUTS[1]), 61229);
}
