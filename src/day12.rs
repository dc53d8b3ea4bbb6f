// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


const START: &str = "start";
const END: &str = "end";

struct Caves<'a> {
	names: Vec<&'a str>,
	links: Vec<Vec<usize>>,
}

impl<'a> Caves<'a> {
	fn index(&self, name: &str) -> Option<usize> {
		self.names.iter().position(|&n| n == name)
	}

	fn is_small(&self, cave: usize) -> bool {
		self.names[cave].chars().all(|c| c.is_ascii_lowercase())
	}

	/// Counts paths to `end` visiting small caves at most once, or one of
	/// them twice when `may_revisit`.
	fn count_paths(&self, may_revisit: bool) -> usize {
		let (Some(start), Some(end)) = (self.index(START), self.index(END)) else { return 0 };
		let mut visits = vec![0_u8; self.names.len()];
		visits[start] = 1;
		self.count_paths_from(start, end, &mut visits, may_revisit, &mut HashMap::new())
	}

	fn count_paths_from(
		&self,
		from: usize,
		end: usize,
		visits: &mut [u8],
		may_revisit: bool,
		memo: &mut HashMap<(usize, Vec<u8>, bool), usize>,
	) -> usize {
		if from == end { return 1 }
		let key = (from, visits.to_vec(), may_revisit);
		if let Some(&count) = memo.get(&key) { return count }

		let mut count = 0;
		for &next in &self.links[from] {
			if self.names[next] == START { continue }
			let small = self.is_small(next);
			let revisit = small && visits[next] > 0;
			if revisit && !may_revisit { continue }
			if small { visits[next] += 1 }
			count += self.count_paths_from(next, end, visits, may_revisit && !revisit, memo);
			if small { visits[next] -= 1 }
		}

		memo.insert(key, count);
		count
	}
}


fn input_caves(input: &str) -> Caves<'_> {
	parsing::try_caves_from_str(input).unwrap()
}


pub(crate) fn part1(input: &str) -> usize {
	input_caves(input).count_paths(false)
}


pub(crate) fn part2(input: &str) -> usize {
	input_caves(input).count_paths(true)
}


mod parsing {
	use super::Caves;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct CavesError { line: usize }

	fn index<'a>(caves: &mut Caves<'a>, name: &'a str) -> usize {
		caves.index(name).unwrap_or_else(|| {
			caves.names.push(name);
			caves.links.push(Vec::new());
			caves.names.len() - 1
		})
	}

	pub(super) fn try_caves_from_str(s: &str) -> Result<Caves<'_>, CavesError> {
		let mut caves = Caves { names: Vec::new(), links: Vec::new() };
		for (l, line) in s.lines().enumerate() {
			let (a, b) = line.trim().split_once('-')
				.filter(|(a, b)| !a.is_empty() && !b.is_empty())
				.ok_or(CavesError { line: l + 1 })?;
			let (a, b) = (index(&mut caves, a), index(&mut caves, b));
			caves.links[a].push(b);
			caves.links[b].push(a);
		}
		Ok(caves)
	}
}


#[test]
fn tests() {
	const INPUTS: [&str; 3] = [
		indoc::indoc! { "
			start-A
			start-b
			A-c
			A-b
			b-d
			A-end
			b-end
		" },
		indoc::indoc! { "
			dc-end
			HN-start
			start-kj
			dc-start
			dc-HN
			LN-dc
			HN-end
			kj-sa
			kj-HN
			kj-dc
		" },
		indoc::indoc! { "
			fs-end
			he-DX
			fs-he
			start-DX
			pj-DX
			end-zg
			zg-sl
			zg-pj
			pj-he
			RW-he
			fs-DX
			pj-RW
			zg-RW
			start-pj
			he-WI
			zg-he
			pj-fs
			start-RW
		" },
	];
	assert_eq!(part1(INPUTS[0]), 10);
	assert_eq!(part1(INPUTS[1]), 19);
	assert_eq!(part1(INPUTS[2]), 226);
	assert_eq!(part2(INPUTS[0]), 36);
	assert_eq!(part2(INPUTS[1]), 103);
	assert_eq!(part2(INPUTS[2]), 3509);
}
