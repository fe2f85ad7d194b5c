use bytemuck::Pod;

/// Key width used for quad z ordering.
pub const Z_SORT_BITS: u32 = 21;

/// Exclusive magnitude bound of z values that sort correctly at [`Z_SORT_BITS`].
pub const MAX_Z: i32 = 1 << (Z_SORT_BITS - 1);

const RADIX: usize = 256;
const BITS_PER_PASS: u32 = 8;

/// Stable LSD radix sort keyed on the signed `i32` returned by `key`.
///
/// Only the low `bits` bits of each key take part: the key is biased by
/// `2^(bits-1)` so the signed range `[-2^(bits-1), 2^(bits-1))` maps onto an
/// unsigned one. Keys outside that range wrap and sort out of order; use
/// [`key_bits_for_range`] to pick a width that covers the data.
///
/// # Panics
/// If `scratch.len() != items.len()` or `bits` is outside `1..=32`.
pub fn radix_sort_by_key<T, F>(items: &mut [T], scratch: &mut [T], bits: u32, key: F)
where
    T: Copy,
    F: Fn(&T) -> i32,
{
    assert_eq!(scratch.len(), items.len(), "radix_sort: scratch must match input length");
    assert!((1..=32).contains(&bits), "radix_sort: bits must be in 1..=32, got {bits}");

    let passes = bits.div_ceil(BITS_PER_PASS);
    let bias = 1u32 << (bits - 1);
    let mask = if bits == 32 { u32::MAX } else { (1u32 << bits) - 1 };
    let biased = |item: &T| (key(item) as u32).wrapping_add(bias) & mask;

    let mut count = [0usize; RADIX];

    for pass in 0..passes {
        let shift = pass * BITS_PER_PASS;
        let digit = |item: &T| ((biased(item) >> shift) as usize) & (RADIX - 1);

        count.fill(0);
        for item in items.iter() {
            count[digit(item)] += 1;
        }

        // Exclusive prefix sum: count[d] becomes the first output slot for digit d.
        let mut next = 0;
        for c in count.iter_mut() {
            let n = *c;
            *c = next;
            next += n;
        }

        for item in items.iter() {
            let d = digit(item);
            scratch[count[d]] = *item;
            count[d] += 1;
        }

        items.copy_from_slice(scratch);
    }
}

/// Radix sort over plain-old-data records whose key is a native-endian `i32`
/// stored `key_offset` bytes into each record.
///
/// # Panics
/// As [`radix_sort_by_key`], and if the key does not fit inside `T` at `key_offset`.
pub fn radix_sort<T: Pod>(items: &mut [T], scratch: &mut [T], key_offset: usize, bits: u32) {
    assert!(
        key_offset + size_of::<i32>() <= size_of::<T>(),
        "radix_sort: key at offset {key_offset} does not fit in a {}-byte record",
        size_of::<T>()
    );

    radix_sort_by_key(items, scratch, bits, |item| {
        let bytes = bytemuck::bytes_of(item);
        let mut key = [0u8; 4];
        key.copy_from_slice(&bytes[key_offset..key_offset + 4]);
        i32::from_ne_bytes(key)
    });
}

/// Smallest key width whose signed range holds both `min` and `max`.
///
/// `key_bits_for_range(-MAX_Z, MAX_Z - 1) == Z_SORT_BITS`.
pub fn key_bits_for_range(min: i32, max: i32) -> u32 {
    let bits_for = |v: i32| {
        // Magnitude in the two's-complement sense: -2^(n-1) needs n bits, as does 2^(n-1) - 1.
        let m = if v < 0 { !(v as u32) } else { v as u32 };
        33 - m.leading_zeros()
    };
    bits_for(min).max(bits_for(max)).min(32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::Zeroable;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[repr(C)]
    #[derive(Debug, Copy, Clone, Pod, Zeroable)]
    struct Record {
        payload: [f32; 3],
        key: i32,
        original_index: u32,
        _pad: u32,
    }

    fn random_records(n: usize, seed: u64) -> Vec<Record> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|i| Record {
                payload: [i as f32, 0.0, 0.0],
                key: rng.gen_range(-MAX_Z..MAX_Z),
                original_index: i as u32,
                _pad: 0,
            })
            .collect()
    }

    fn assert_sorted_and_stable(records: &[Record]) {
        for pair in records.windows(2) {
            assert!(pair[0].key <= pair[1].key, "keys out of order: {pair:?}");
            if pair[0].key == pair[1].key {
                assert!(pair[0].original_index < pair[1].original_index, "unstable: {pair:?}");
            }
        }
    }

    #[test]
    fn sorts_100k_random_21_bit_keys_stably() {
        let mut records = random_records(100_000, 1);
        let mut scratch = records.clone();
        radix_sort(&mut records, &mut scratch, core::mem::offset_of!(Record, key), Z_SORT_BITS);
        assert_sorted_and_stable(&records);
    }

    #[test]
    fn stable_with_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut records: Vec<Record> = (0..5_000)
            .map(|i| Record { payload: [0.0; 3], key: rng.gen_range(-3..3), original_index: i, _pad: 0 })
            .collect();
        let mut scratch = records.clone();
        radix_sort_by_key(&mut records, &mut scratch, Z_SORT_BITS, |r| r.key);
        assert_sorted_and_stable(&records);
    }

    #[test]
    fn extreme_in_range_keys() {
        let mut keys = vec![MAX_Z - 1, -MAX_Z, 0, -1, 1, MAX_Z - 2, -MAX_Z + 1];
        let mut scratch = keys.clone();
        radix_sort_by_key(&mut keys, &mut scratch, Z_SORT_BITS, |k| *k);
        assert_eq!(keys, vec![-MAX_Z, -MAX_Z + 1, -1, 0, 1, MAX_Z - 2, MAX_Z - 1]);
    }

    #[test]
    fn out_of_range_key_wraps() {
        // MAX_Z needs 22 bits; at 21 it aliases to -MAX_Z and sorts first.
        let mut keys = vec![0, MAX_Z];
        let mut scratch = keys.clone();
        radix_sort_by_key(&mut keys, &mut scratch, Z_SORT_BITS, |k| *k);
        assert_eq!(keys, vec![MAX_Z, 0]);
    }

    #[test]
    fn full_width_keys() {
        let mut keys = vec![i32::MAX, i32::MIN, 0, -5, 5];
        let mut scratch = keys.clone();
        radix_sort_by_key(&mut keys, &mut scratch, 32, |k| *k);
        assert_eq!(keys, vec![i32::MIN, -5, 0, 5, i32::MAX]);
    }

    #[test]
    fn empty_input_is_fine() {
        let mut keys: Vec<i32> = Vec::new();
        let mut scratch = Vec::new();
        radix_sort_by_key(&mut keys, &mut scratch, Z_SORT_BITS, |k| *k);
        assert!(keys.is_empty());
    }

    #[test]
    #[should_panic(expected = "scratch must match")]
    fn mismatched_scratch_panics() {
        let mut keys = vec![1, 2, 3];
        let mut scratch = vec![0; 2];
        radix_sort_by_key(&mut keys, &mut scratch, 8, |k| *k);
    }

    #[test]
    fn key_bits_cover_range() {
        assert_eq!(key_bits_for_range(-MAX_Z, MAX_Z - 1), Z_SORT_BITS);
        assert_eq!(key_bits_for_range(0, 0), 1);
        assert_eq!(key_bits_for_range(-1, 0), 1);
        assert_eq!(key_bits_for_range(0, 1), 2);
        assert_eq!(key_bits_for_range(-128, 127), 8);
        assert_eq!(key_bits_for_range(0, MAX_Z), Z_SORT_BITS + 1);
        assert_eq!(key_bits_for_range(i32::MIN, i32::MAX), 32);
    }
}
