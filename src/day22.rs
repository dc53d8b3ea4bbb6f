// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::ops::RangeInclusive;
use crate::ranges;


#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Cuboid([RangeInclusive<i64>; 3]);

impl Cuboid {
	fn intersection(&self, other: &Cuboid) -> Option<Cuboid> {
		let [x, y, z] = [0, 1, 2].map(|i| ranges::intersection(&self.0[i], &other.0[i]));
		Some(Cuboid([x?, y?, z?]))
	}

	fn volume(&self) -> u64 {
		self.0.iter().map(ranges::len).product()
	}

	/// Splits into the (at most six) cuboids that surround `embedded`,
	/// which must lie inside `self`.
	fn surrounding(&self, embedded: &Cuboid) -> Vec<Cuboid> {
		let mut pieces = Vec::with_capacity(6);
		let mut core = self.clone();
		for axis in 0..3 {
			let (c, e) = (&core.0[axis], &embedded.0[axis]);
			for range in [*c.start()..=*e.start() - 1, *e.end() + 1..=*c.end()] {
				if range.is_empty() { continue }
				let mut piece = core.clone();
				piece.0[axis] = range;
				pieces.push(piece);
			}
			core.0[axis] = e.clone();
		}
		pieces
	}
}


struct Step { on: bool, cuboid: Cuboid }

/// Lit cubes as disjoint cuboids.
#[derive(Default)]
struct Reactor(Vec<Cuboid>);

impl Reactor {
	fn apply(&mut self, step: &Step) {
		let mut lit = Vec::with_capacity(self.0.len());
		for cuboid in self.0.drain(..) {
			match cuboid.intersection(&step.cuboid) {
				Some(overlap) => lit.extend(cuboid.surrounding(&overlap)),
				None => lit.push(cuboid),
			}
		}
		if step.on { lit.push(step.cuboid.clone()) }
		self.0 = lit;
	}

	fn lit_count_within(&self, region: Option<&Cuboid>) -> u64 {
		self.0.iter()
			.filter_map(|c| match region {
				Some(region) => c.intersection(region),
				None => Some(c.clone()),
			})
			.map(|c| c.volume())
			.sum()
	}
}


fn input_reactor(input: &str) -> Reactor {
	let mut reactor = Reactor::default();
	for step in parsing::try_steps_from_str(input).unwrap() {
		reactor.apply(&step);
	}
	reactor
}


pub(crate) fn part1(input: &str) -> u64 {
	let region = Cuboid([-50..=50, -50..=50, -50..=50]);
	input_reactor(input).lit_count_within(Some(&region))
}


pub(crate) fn part2(input: &str) -> u64 {
	input_reactor(input).lit_count_within(None)
}


mod parsing {
	use std::{num::ParseIntError, ops::RangeInclusive, str::FromStr};
	use super::{Cuboid, Step};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum StepError {
		State,
		Axis(usize),
		Range,
		Bound(ParseIntError),
	}

	fn try_range_from_str(s: &str) -> Result<RangeInclusive<i64>, StepError> {
		let (from, through) = s.split_once("..").ok_or(StepError::Range)?;
		let (from, through): (i64, i64) = (
			from.parse().map_err(StepError::Bound)?,
			through.parse().map_err(StepError::Bound)?,
		);
		Ok(from.min(through)..=from.max(through))
	}

	impl FromStr for Step {
		type Err = StepError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (state, cuboid) = s.trim().split_once(' ').ok_or(StepError::State)?;
			let on = match state { "on" => true, "off" => false, _ => return Err(StepError::State) };
			let mut axes = cuboid.split(',');
			let mut ranges = [0, 1, 2].map(|_| 0..=0);
			for (i, (axis, range)) in ['x', 'y', 'z'].into_iter().zip(ranges.iter_mut()).enumerate() {
				*range = axes.next()
					.and_then(|a| a.strip_prefix(axis))
					.and_then(|a| a.strip_prefix('='))
					.ok_or(StepError::Axis(i))
					.and_then(try_range_from_str)?;
			}
			if axes.next().is_some() { return Err(StepError::Axis(3)) }
			Ok(Step { on, cuboid: Cuboid(ranges) })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct StepsError { line: usize, source: StepError }

	pub(super) fn try_steps_from_str(s: &str) -> Result<Vec<Step>, StepsError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|e| StepsError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	let cube = Cuboid([0..=2, 0..=2, 0..=2]);
	let center = Cuboid([1..=1, 1..=1, 1..=1]);
	let pieces = cube.surrounding(&center);
	assert_eq!(pieces.len(), 6);
	assert_eq!(pieces.iter().map(Cuboid::volume).sum::<u64>(), 26);
	assert!(pieces.iter().all(|p| p.intersection(&center).is_none()));
	assert_eq!(cube.surrounding(&Cuboid([0..=2, 0..=2, 2..=2])), [Cuboid([0..=2, 0..=2, 0..=1])]);
	assert!(cube.surrounding(&cube).is_empty());

	const SMALL: &str = indoc::indoc! { "
		on x=10..12,y=10..12,z=10..12
		on x=11..13,y=11..13,z=11..13
		off x=9..11,y=9..11,z=9..11
		on x=10..10,y=10..10,z=10..10
	" };
	assert_eq!(part1(SMALL), 39);
	assert_eq!(part2(SMALL), 39);

	const BEYOND: &str = "on x=-100..100,y=0..0,z=0..0\n";
	assert_eq!(part1(BEYOND), 101);
	assert_eq!(part2(BEYOND), 201);

	const OVERLAPPING: &str = indoc::indoc! { "
		on x=0..9,y=0..9,z=0..9
		on x=5..14,y=5..14,z=5..14
		off x=0..0,y=0..0,z=0..0
		on x=100..101,y=0..0,z=0..0
		off x=101..200,y=-5..5,z=-5..5
	" };
	assert_eq!(part1(OVERLAPPING), 1000 + 1000 - 125 - 1);
	assert_eq!(part2(OVERLAPPING), 1000 + 1000 - 125 - 1 + 1);

	const LARGER: &str = indoc::indoc! { "
		on x=-20..26,y=-36..17,z=-47..7
		on x=-20..33,y=-21..23,z=-26..28
		on x=-22..28,y=-29..23,z=-38..16
		on x=-46..7,y=-6..46,z=-50..-1
		on x=-49..1,y=-3..46,z=-24..28
		on x=2..47,y=-22..22,z=-23..27
		on x=-27..23,y=-28..26,z=-21..29
		on x=-39..5,y=-6..47,z=-3..44
		on x=-30..21,y=-8..43,z=-13..34
		on x=-22..26,y=-27..20,z=-29..19
		off x=-48..-32,y=26..41,z=-47..-37
		on x=-12..35,y=6..50,z=-50..-2
		off x=-48..-32,y=-32..-16,z=-15..-5
		on x=-18..26,y=-33..15,z=-7..46
		off x=-40..-22,y=-38..-28,z=23..41
		on x=-16..35,y=-41..10,z=-47..6
		off x=-32..-23,y=11..30,z=-14..3
		on x=-49..-5,y=-3..45,z=-29..18
		off x=18..30,y=-20..-8,z=-3..13
		on x=-41..9,y=-7..43,z=-33..15
		on x=-54112..-39298,y=-85059..-49293,z=-27449..7877
		on x=967..23432,y=45373..81175,z=27513..53682
	" };
	assert_eq!(part1(LARGER), 590_784);

	const REBOOT: &str = indoc::indoc! { "
		on x=-5..47,y=-31..22,z=-19..33
		on x=-44..5,y=-27..21,z=-14..35
		on x=-49..-1,y=-11..42,z=-10..38
		on x=-20..34,y=-40..6,z=-44..1
		off x=26..39,y=40..50,z=-2..11
		on x=-41..5,y=-41..6,z=-36..8
		off x=-43..-33,y=-45..-28,z=7..25
		on x=-33..15,y=-32..19,z=-34..11
		off x=35..47,y=-46..-34,z=-11..5
		on x=-14..36,y=-6..44,z=-16..29
		on x=-57795..-6158,y=29564..72030,z=20435..90618
		on x=36731..105352,y=-21140..28532,z=16094..90401
		on x=30999..107136,y=-53464..15513,z=8553..71215
		on x=13528..83982,y=-99403..-27377,z=-24141..23996
		on x=-72682..-12347,y=18159..111354,z=7391..80950
		on x=-1060..80757,y=-65301..-20884,z=-103788..-16709
		on x=-83015..-9461,y=-72160..-8347,z=-81239..-26856
		on x=-52752..22273,y=-49450..9096,z=54442..119054
		on x=-29982..40483,y=-108474..-28371,z=-24328..38471
		on x=-4958..62750,y=40422..118853,z=-7672..65583
		on x=55694..108686,y=-43367..46958,z=-26781..48729
		on x=-98497..-18186,y=-63569..3412,z=1232..88485
		on x=-726..56291,y=-62629..13224,z=18033..85226
		on x=-110886..-34664,y=-81338..-8658,z=8914..63723
		on x=-55829..24974,y=-16897..54165,z=-121762..-28058
		on x=-65152..-11147,y=22489..91432,z=-58782..1780
		on x=-120100..-32970,y=-46592..27473,z=-11695..61039
		on x=-18631..37533,y=-124565..-50804,z=-35667..28308
		on x=-57817..18248,y=49321..117703,z=5745..55881
		on x=14781..98692,y=-1341..70827,z=15753..70151
		on x=-34419..55919,y=-19626..40991,z=39015..114138
		on x=-60785..11593,y=-56135..2999,z=-95368..-26915
		on x=-32178..58085,y=17647..101866,z=-91405..-8878
		on x=-53655..12091,y=50097..105568,z=-75335..-4862
		on x=-111166..-40997,y=-71714..2688,z=5609..50954
		on x=-16602..70118,y=-98693..-44401,z=5197..76897
		on x=16383..101554,y=4615..83635,z=-44907..18747
		off x=-95822..-15171,y=-19987..48940,z=10804..104439
		on x=-89813..-14614,y=16069..88491,z=-3297..45228
		on x=41075..99376,y=-20427..49978,z=-52012..13762
		on x=-21330..50085,y=-17944..62733,z=-112280..-30197
		on x=-16478..35915,y=36008..118594,z=-7885..47086
		off x=-98156..-27851,y=-49952..43171,z=-99005..-8456
		off x=2032..69770,y=-71013..4824,z=7471..94418
		on x=43670..120875,y=-42068..12382,z=-24787..38892
		off x=37514..111226,y=-45862..25743,z=-16714..54663
		off x=25699..97951,y=-30668..59918,z=-15349..69697
		off x=-44271..17935,y=-9516..60759,z=49131..112598
		on x=-61695..-5813,y=40978..94975,z=8655..80240
		off x=-101086..-9439,y=-7088..67543,z=33935..83858
		off x=18020..114017,y=-48931..32606,z=21474..89843
		off x=-77139..10506,y=-89994..-18797,z=-80..59318
		off x=8476..79288,y=-75520..11602,z=-96624..-24783
		on x=-47488..-1262,y=24338..100707,z=16292..72967
		off x=-84341..13987,y=2429..92914,z=-90671..-1318
		off x=-37810..49457,y=-71013..-7894,z=-105357..-13188
		off x=-27365..46395,y=31009..98017,z=15428..76570
		off x=-70369..-16548,y=22648..78696,z=-1892..86821
		on x=-53470..21291,y=-120233..-33476,z=-44150..38147
		off x=-93533..-4276,y=-16170..68771,z=-104985..-24507
	" };
	assert_eq!(part1(REBOOT), 474_140);
	assert_eq!(part2(REBOOT), 2_758_514_936_282_235);
}
