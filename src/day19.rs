// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::{HashMap, HashSet};


const MIN_OVERLAP: usize = 12;

type Vector = [i32; 3];

#[derive(Clone, Copy)]
struct Rotation { axes: [usize; 3], signs: [i32; 3] }

impl Rotation {
	fn apply(&self, v: Vector) -> Vector {
		[0, 1, 2].map(|i| self.signs[i] * v[self.axes[i]])
	}

	/// The 24 proper rotations: every axis permutation and sign combination
	/// whose determinant is +1.
	fn all() -> impl Iterator<Item = Rotation> {
		use itertools::{iproduct, Itertools as _};
		(0..3).permutations(3)
			.flat_map(|p| iproduct!([1, -1], [1, -1], [1, -1])
				.map(move |(a, b, c)| Rotation { axes: [p[0], p[1], p[2]], signs: [a, b, c] }))
			.filter(|r| {
				let inversions = (0..3).tuple_combinations()
					.filter(|&(i, j)| r.axes[i] > r.axes[j])
					.count();
				let parity = if inversions % 2 == 0 { 1 } else { -1 };
				parity * r.signs.iter().product::<i32>() == 1
			})
	}
}

fn sub(a: Vector, b: Vector) -> Vector {
	[a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn add(a: Vector, b: Vector) -> Vector {
	[a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}


/// Finds the rotation and offset that map at least `MIN_OVERLAP` of
/// `report`'s beacons onto `known` ones.
fn align(known: &[Vector], report: &[Vector]) -> Option<(Rotation, Vector)> {
	Rotation::all().find_map(|rot| {
		let mut offsets = HashMap::<Vector, usize>::new();
		for &b in report {
			let b = rot.apply(b);
			for &a in known {
				let n = offsets.entry(sub(a, b)).or_default();
				*n += 1;
				if *n >= MIN_OVERLAP { return Some((rot, sub(a, b))) }
			}
		}
		None
	})
}

struct Map {
	beacons: HashSet<Vector>,
	scanners: Vec<Vector>,
}

/// Places every scanner relative to the first one. Returns `None` if some
/// scanner does not overlap with the others enough to be placed.
fn locate(reports: &[Vec<Vector>]) -> Option<Map> {
	let Some(first) = reports.first() else { return Some(Map { beacons: HashSet::new(), scanners: vec![] }) };

	let mut placed: Vec<Option<(Vec<Vector>, Vector)>> = vec![None; reports.len()];
	placed[0] = Some((first.clone(), [0; 3]));
	let mut queue = vec![0];

	while let Some(i) = queue.pop() {
		for j in 0..reports.len() {
			if placed[j].is_some() { continue }
			let Some((known, _)) = &placed[i] else { continue };
			let Some((rot, offset)) = align(known, &reports[j]) else { continue };
			let beacons = reports[j].iter().map(|&b| add(rot.apply(b), offset)).collect();
			placed[j] = Some((beacons, offset));
			queue.push(j);
		}
	}

	let placed = placed.into_iter().collect::<Option<Vec<_>>>()?;
	Some(Map {
		beacons: placed.iter().flat_map(|(beacons, _)| beacons.iter().copied()).collect(),
		scanners: placed.into_iter().map(|(_, pos)| pos).collect(),
	})
}


fn input_map(input: &str) -> Map {
	locate(&parsing::try_reports_from_str(input).unwrap()).unwrap()
}


pub(crate) fn part1(input: &str) -> usize {
	input_map(input).beacons.len()
}


pub(crate) fn part2(input: &str) -> i32 {
	use itertools::Itertools as _;
	input_map(input).scanners.iter()
		.tuple_combinations()
		.map(|(&a, &b)| sub(a, b).iter().map(|d| d.abs()).sum::<i32>())
		.max()
		.unwrap_or(0)
}


mod parsing {
	use super::Vector;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ReportsError {
		Header { line: usize },
		Position { line: usize },
	}

	fn try_vector_from_str(s: &str) -> Option<Vector> {
		let mut coords = s.split(',').map(|c| c.trim().parse().ok());
		let v = [coords.next()??, coords.next()??, coords.next()??];
		coords.next().is_none().then_some(v)
	}

	pub(super) fn try_reports_from_str(s: &str) -> Result<Vec<Vec<Vector>>, ReportsError> {
		let mut reports = Vec::new();
		let mut current: Option<Vec<Vector>> = None;
		for (l, line) in s.lines().map(str::trim).enumerate() {
			if line.is_empty() {
				reports.extend(current.take());
			} else if line.starts_with("---") {
				if !line.ends_with("---") || !line.contains("scanner") {
					return Err(ReportsError::Header { line: l + 1 })
				}
				reports.extend(current.replace(Vec::new()));
			} else {
				let report = current.as_mut().ok_or(ReportsError::Header { line: l + 1 })?;
				report.push(try_vector_from_str(line).ok_or(ReportsError::Position { line: l + 1 })?);
			}
		}
		reports.extend(current);
		Ok(reports)
	}
}


#[test]
fn tests() {
	assert_eq!(Rotation::all().count(), 24);
	let images = Rotation::all().map(|r| r.apply([1, 2, 3])).collect::<HashSet<_>>();
	assert_eq!(images.len(), 24);

	const INPUT: &str = indoc::indoc! { "
		--- scanner 0 ---
		404,-588,-901
		528,-643,409
		-838,591,734
		390,-675,-793
		-537,-823,-458
		-485,-357,347
		-345,-311,381
		-661,-816,-575
		-876,649,763
		-618,-824,-621
		553,345,-567
		474,580,667
		-447,-329,318
		-584,868,-557
		544,-627,-890
		564,392,-477
		455,729,728
		-892,524,684
		-689,845,-530
		423,-701,434
		7,-33,-71
		630,319,-379
		443,580,662
		-789,900,-551
		459,-707,401

		--- scanner 1 ---
		686,422,578
		605,423,415
		515,917,-361
		-336,658,858
		95,138,22
		-476,619,847
		-340,-569,-846
		567,-361,727
		-460,603,-452
		669,-402,600
		729,430,532
		-500,-761,534
		-322,571,750
		-466,-666,-811
		-429,-592,574
		-355,545,-477
		703,-491,-529
		-328,-685,520
		413,935,-424
		-391,539,-444
		586,-435,557
		-364,-763,-893
		807,-499,-711
		755,-354,-619
		553,889,-390

		--- scanner 2 ---
		649,640,665
		682,-795,504
		-784,533,-524
		-644,584,-595
		-588,-843,648
		-30,6,44
		-674,560,763
		500,723,-460
		609,671,-379
		-555,-800,653
		-675,-892,-343
		697,-426,-610
		578,704,681
		493,664,-388
		-671,-858,530
		-667,343,800
		571,-461,-707
		-138,-166,112
		-889,563,-600
		646,-828,498
		640,759,510
		-630,509,768
		-681,-892,-333
		673,-379,-804
		-742,-814,-386
		577,-820,562

		--- scanner 3 ---
		-589,542,597
		605,-692,669
		-500,565,-823
		-660,373,557
		-458,-679,-417
		-488,449,543
		-626,468,-788
		338,-750,-386
		528,-832,-391
		562,-778,733
		-938,-730,414
		543,643,-506
		-524,371,-870
		407,773,750
		-104,29,83
		378,-903,-323
		-778,-728,485
		426,699,580
		-438,-605,-362
		-469,-447,-387
		509,732,623
		647,635,-688
		-868,-804,481
		614,-800,639
		595,780,-596

		--- scanner 4 ---
		727,592,562
		-293,-554,779
		441,611,-461
		-714,465,-776
		-743,427,-804
		-660,-479,-426
		832,-632,460
		927,-485,-438
		408,393,-506
		466,436,-512
		110,16,151
		-258,-428,682
		-393,719,612
		-211,-452,876
		808,-476,-593
		-575,615,604
		-485,667,467
		-680,325,-822
		-627,-443,-432
		872,-547,-609
		833,512,582
		807,604,487
		839,-516,451
		891,-625,532
		-652,-548,-490
		30,-46,-14
	" };
	let map = input_map(INPUT);
	assert_eq!(map.scanners, [[0, 0, 0], [68, -1246, -43], [1105, -1205, 1229], [-92, -2380, -20], [-20, -1133, 1061]]);
	for beacon in [[-892, 524, 684], [-618, -824, -621], [459, -707, 401], [-739, -1745, 668], [1889, -1729, 1762]] {
		assert!(map.beacons.contains(&beacon));
	}
	assert_eq!(part1(INPUT), 79);
	assert_eq!(part2(INPUT), 3621);

	let reports = parsing::try_reports_from_str(INPUT).unwrap();
	assert_eq!(reports.len(), 5);
	assert_eq!(reports[2].len(), 26);
	assert_eq!(locate(&reports[..2]).unwrap().scanners, [[0, 0, 0], [68, -1246, -43]]);
	assert!(locate(&reports[..1]).is_some());
	assert!(locate(&[reports[0].clone(), reports[2].clone()]).is_none());
}
