// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
enum Operator { Sum, Product, Minimum, Maximum, GreaterThan, LessThan, EqualTo }

#[cfg_attr(test, derive(Debug, PartialEq))]
enum Payload {
	Literal(u64),
	Operator(Operator, Vec<Packet>),
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Packet {
	version: u8,
	payload: Payload,
}

impl Packet {
	fn version_sum(&self) -> u64 {
		self.version as u64 + match &self.payload {
			Payload::Literal(_) => 0,
			Payload::Operator(_, sub_packets) => sub_packets.iter().map(Packet::version_sum).sum(),
		}
	}

	fn value(&self) -> u64 {
		use Operator::*;
		let (op, sub_packets) = match &self.payload {
			Payload::Literal(value) => return *value,
			Payload::Operator(op, sub_packets) => (op, sub_packets),
		};
		let mut values = sub_packets.iter().map(Packet::value);
		match op {
			Sum => values.sum(),
			Product => values.product(),
			Minimum => values.min().unwrap_or(0),
			Maximum => values.max().unwrap_or(0),
			GreaterThan | LessThan | EqualTo => {
				let (l, r) = (values.next().unwrap_or(0), values.next().unwrap_or(0));
				u64::from(match op { GreaterThan => l > r, LessThan => l < r, _ => l == r })
			}
		}
	}
}


fn input_packet(input: &str) -> Packet {
	parsing::try_packet_from_str(input).unwrap()
}


pub(crate) fn part1(input: &str) -> u64 {
	input_packet(input).version_sum()
}


pub(crate) fn part2(input: &str) -> u64 {
	input_packet(input).value()
}


mod parsing {
	use super::{Operator, Packet, Payload};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PacketError {
		Hex { column: usize },
		Truncated { bit: usize },
		LiteralOverflow { bit: usize },
		Type(u8),
	}

	struct Bits<'a> {
		bytes: &'a [u8],
		pos: usize,
	}

	impl Bits<'_> {
		fn read(&mut self, count: usize) -> Result<u64, PacketError> {
			if self.pos + count > self.bytes.len() * 8 {
				return Err(PacketError::Truncated { bit: self.pos })
			}
			let mut value = 0;
			for _ in 0..count {
				let bit = self.bytes[self.pos / 8] >> (7 - self.pos % 8) & 1;
				value = value << 1 | bit as u64;
				self.pos += 1;
			}
			Ok(value)
		}

		fn packet(&mut self) -> Result<Packet, PacketError> {
			use Operator::*;
			let version = self.read(3)? as u8;
			let type_id = self.read(3)? as u8;
			let op = match type_id {
				4 => {
					let mut value = 0_u64;
					loop {
						let group = self.read(5)?;
						if value.leading_zeros() < 4 {
							return Err(PacketError::LiteralOverflow { bit: self.pos })
						}
						value = value << 4 | group & 0xf;
						if group & 0x10 == 0 { break }
					}
					return Ok(Packet { version, payload: Payload::Literal(value) })
				}
				0 => Sum,
				1 => Product,
				2 => Minimum,
				3 => Maximum,
				5 => GreaterThan,
				6 => LessThan,
				7 => EqualTo,
				_ => return Err(PacketError::Type(type_id)),
			};

			let mut sub_packets = Vec::new();
			if self.read(1)? == 0 {
				let len = self.read(15)? as usize;
				let end = self.pos + len;
				while self.pos < end { sub_packets.push(self.packet()?) }
			} else {
				let count = self.read(11)?;
				for _ in 0..count { sub_packets.push(self.packet()?) }
			}
			Ok(Packet { version, payload: Payload::Operator(op, sub_packets) })
		}
	}

	pub(super) fn try_packet_from_str(s: &str) -> Result<Packet, PacketError> {
		let s = s.trim();
		let bytes = (0..s.len())
			.step_by(2)
			.map(|i| s.get(i..(i + 2).min(s.len()))
				.and_then(|pair| u8::from_str_radix(pair, 16).ok())
				.map(|b| if s.len() - i == 1 { b << 4 } else { b })
				.ok_or(PacketError::Hex { column: i + 1 }))
			.collect::<Result<Vec<_>, _>>()?;
		Bits { bytes: &bytes, pos: 0 }.packet()
	}
}


#[test]
fn tests() {
	assert_eq!(input_packet("D2FE28"), Packet { version: 6, payload: Payload::Literal(2021) });
	let Payload::Operator(Operator::LessThan, sub_packets) = input_packet("38006F45291200").payload
		else { panic!("expected a less-than operator") };
	assert_eq!(sub_packets.iter().map(Packet::value).collect::<Vec<_>>(), [10, 20]);
	let Payload::Operator(Operator::Maximum, sub_packets) = input_packet("EE00D40C823060").payload
		else { panic!("expected a maximum operator") };
	assert_eq!(sub_packets.iter().map(Packet::value).collect::<Vec<_>>(), [1, 2, 3]);

	for (input, version_sum) in [
		("8A004A801A8002F478", 16),
		("620080001611562C8802118E34", 12),
		("C0015000016115A2E0802F182340", 23),
		("A0016C880162017C3686B18A3D4780", 31),
	] {
		assert_eq!(part1(input), version_sum);
	}
	for (input, value) in [
		("C200B40A82", 3),
		("04005AC33890", 54),
		("880086C3E88112", 7),
		("CE00C43D881120", 9),
		("D8005AC2A8F0", 1),
		("F600BC2D8F", 0),
		("9C005AC2F8F0", 0),
		("9C0141080250320F1802104A08", 1),
	] {
		assert_eq!(part2(input), value);
	}
}
