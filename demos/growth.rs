//! Walks a `GrowVec` through its growth schedule and prints a fixed array.
//!
//! Run with `RUST_LOG=trace cargo run --example growth` to see every reallocation.
use grow_vec::{FixedArray, GrowVec};
use log::info;

fn main() {
	pretty_env_logger::init();

	let mut v = GrowVec::new();
	for i in 0..10 {
		v.push(i);
		info!("len = {}, capacity = {}", v.len(), v.capacity());
	}

	v.shrink_to_fit();
	info!("after shrink_to_fit: capacity = {}", v.capacity());

	v.reserve(128);
	info!("after reserve(128): capacity = {}", v.capacity());

	match v.try_at(10) {
		Ok(value) => println!("v[10] = {}", value),
		Err(e) => println!("{}", e)
	}

	let mut arr = FixedArray::new([0, 1, 2, 3, 4]);
	for i in &arr {
		println!("{}", i);
	}
	arr[3] = 10;
	println!("{}", arr[3]);
}
