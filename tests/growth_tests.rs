use grow_vec::GrowVec;

#[test]
fn test_new_is_unallocated() {
	let v: GrowVec<i32> = GrowVec::new();
	assert_eq!(v.len(), 0);
	assert_eq!(v.capacity(), 0);
	assert!(v.is_empty());
}

#[test]
fn test_with_capacity_is_exact() {
	let v: GrowVec<u64> = GrowVec::with_capacity(7);
	assert_eq!(v.len(), 0);
	assert_eq!(v.capacity(), 7);
}

#[test]
fn test_push_scenario() {
	let mut v = GrowVec::new();
	v.push(0);
	v.push(1);
	v.push(2);
	assert_eq!(v.len(), 3);
	assert_eq!(v.capacity(), 4);

	v.push(3);
	assert_eq!(v.len(), 4);
	assert_eq!(v.capacity(), 4);

	v.push(4);
	assert_eq!(v.len(), 5);
	assert_eq!(v.capacity(), 8);
	assert_eq!(v, [0, 1, 2, 3, 4]);
}

#[test]
fn test_push_then_read_back() {
	let mut v = GrowVec::new();
	for i in 0..100u32 {
		v.push(i * 3);
		assert_eq!(*v.at(i as usize), i * 3);
	}

	let mut strings = GrowVec::new();
	for i in 0..20 {
		strings.push(format!("item {}", i));
		assert_eq!(strings.at(i), &format!("item {}", i));
	}
}

#[test]
fn test_reserve() {
	let mut v: GrowVec<i32> = GrowVec::new();
	v.reserve(128);
	assert_eq!(v.len(), 0, "size non-zero");
	assert_eq!(v.capacity(), 128, "capacity");
}

#[test]
fn test_reserve_smaller_is_noop() {
	let mut v: GrowVec<i32> = (0..10).collect();
	let capacity = v.capacity();
	v.reserve(3);
	assert_eq!(v.capacity(), capacity);
	v.reserve(capacity);
	assert_eq!(v.capacity(), capacity);
	assert_eq!(v, (0..10).collect::<Vec<_>>());
}

#[test]
fn test_reserve_keeps_order() {
	let mut v: GrowVec<String> = ["x", "y", "z"].iter().map(|s| s.to_string()).collect();
	v.reserve(1000);
	assert_eq!(v.capacity(), 1000);
	assert_eq!(v, ["x", "y", "z"].map(String::from));
}

#[test]
fn test_shrink_to_fit_each_push() {
	let mut v = GrowVec::new();
	for i in 0..32usize {
		v.push(i);
		v.shrink_to_fit();
		assert_eq!(v.len(), v.capacity());
	}
	assert_eq!(v, (0..32).collect::<Vec<_>>());
}

#[test]
fn test_shrink_to_fit_twice() {
	let mut v: GrowVec<u8> = GrowVec::with_capacity(64);
	v.extend_from_copy_slice(b"hello");
	v.shrink_to_fit();
	assert_eq!(v.capacity(), 5);
	v.shrink_to_fit();
	assert_eq!(v.capacity(), 5);
	assert_eq!(v, *b"hello");
}

#[test]
fn test_shrink_to_is_clamped_to_len() {
	let mut v: GrowVec<i32> = GrowVec::with_capacity(16);
	v.extend([1, 2, 3, 4, 5]);
	v.shrink_to(2);
	assert_eq!(v.capacity(), 5);
	assert_eq!(v, [1, 2, 3, 4, 5]);
}

#[test]
fn test_shrink_to_larger_is_noop() {
	let mut v: GrowVec<i32> = GrowVec::with_capacity(16);
	v.push(1);
	v.shrink_to(32);
	assert_eq!(v.capacity(), 16);
	v.shrink_to(8);
	assert_eq!(v.capacity(), 8);
}

#[test]
fn test_shrink_empty_releases_allocation() {
	let mut v: GrowVec<i32> = GrowVec::with_capacity(16);
	v.shrink_to_fit();
	assert_eq!(v.capacity(), 0);
	assert_eq!(v.len(), 0);

	// growing again starts from the beginning of the schedule
	v.push(1);
	assert_eq!(v.capacity(), 2);
}

#[test]
fn test_resize_default_grows_with_zeroes() {
	let mut v: GrowVec<u32> = GrowVec::from([9, 9]);
	v.resize_default(5);
	assert_eq!(v, [9, 9, 0, 0, 0]);
	assert_eq!(v.capacity(), 5);
}

#[test]
fn test_resize_never_shrinks() {
	let mut v: GrowVec<i32> = GrowVec::from([1, 2, 3, 4]);
	v.resize(2, 0);
	assert_eq!(v, [1, 2, 3, 4]);
	v.resize_default(4);
	assert_eq!(v, [1, 2, 3, 4]);
	v.resize(6, 7);
	assert_eq!(v, [1, 2, 3, 4, 7, 7]);
}

#[test]
fn test_resize_with() {
	let mut next = 0;
	let mut v = GrowVec::new();
	v.resize_with(4, || {
		next += 10;
		next
	});
	assert_eq!(v, [10, 20, 30, 40]);
}

#[test]
fn test_resize_within_capacity_does_not_reallocate() {
	let mut v: GrowVec<u8> = GrowVec::with_capacity(10);
	let ptr = v.as_ptr();
	v.resize(10, 1);
	assert_eq!(v.as_ptr(), ptr);
	assert_eq!(v.capacity(), 10);
}

#[test]
fn test_clear_keeps_capacity() {
	let mut v: GrowVec<String> = (0..5).map(|i| i.to_string()).collect();
	let capacity = v.capacity();
	v.clear();
	assert_eq!(v.len(), 0);
	assert_eq!(v.capacity(), capacity);
}

#[test]
fn test_truncate() {
	let mut v: GrowVec<i32> = (0..6).collect();
	v.truncate(10);
	assert_eq!(v.len(), 6);
	v.truncate(2);
	assert_eq!(v, [0, 1]);
	assert_eq!(v.capacity(), 8);
}

#[test]
fn test_zero_sized_schedule() {
	let mut v = GrowVec::new();
	v.push(());
	v.push(());
	v.push(());
	assert_eq!(v.len(), 3);
	assert_eq!(v.capacity(), 4);
}
