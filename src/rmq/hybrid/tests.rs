use super::*;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

fn naive_rmq(data: &[u64], low: usize, high: usize) -> usize {
    let min = data[low..high].iter().min().unwrap();
    low + data[low..high].iter().position(|x| x == min).unwrap()
}

#[test]
fn test_example_arrays() {
    let rmq = HybridRmq::new(vec![5, 2, 8, 1, 9, 3]);
    assert_eq!(rmq.block_size(), 2);
    assert_eq!(rmq.block_count(), 3);

    assert_eq!(rmq.rmq(0, 3), Ok(1));
    assert_eq!(rmq.rmq(3, 6), Ok(3));
    assert_eq!(rmq.rmq(0, 6), Ok(3));
    assert_eq!(rmq.rmq(2, 4), Ok(3));

    let rmq = HybridRmq::new(vec![4, 2, 2, 7]);
    assert_eq!(rmq.rmq(1, 3), Ok(1));
}

#[test]
fn test_hybrid_rmq() {
    const L: usize = 300;

    let numbers_vec = (0..L as u64).collect::<Vec<_>>();
    let rmq = HybridRmq::new(numbers_vec.clone());
    assert_eq!(rmq.block_size(), 8);

    for i in 0..L {
        for j in i + 1..=L {
            assert_eq!(rmq.rmq(i, j), Ok(i), "i = {}, j = {}", i, j);
        }
    }
}

#[test]
fn test_hybrid_rmq_unsorted() {
    let mut rng = rand::thread_rng();
    const L: usize = 517;

    let mut numbers_vec = Vec::with_capacity(L);
    for _ in 0..L {
        numbers_vec.push(rng.next_u64());
    }

    let rmq = HybridRmq::new(numbers_vec.clone());

    for i in 0..L {
        for j in i + 1..=L {
            assert_eq!(
                rmq.rmq(i, j),
                Ok(naive_rmq(&numbers_vec, i, j)),
                "i = {}, j = {}",
                i,
                j
            );
        }
    }
}

#[test]
fn test_block_boundaries() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let data = (0..1000).map(|_| rng.gen_range(0..8u64)).collect::<Vec<_>>();
    let rmq = HybridRmq::new(data.clone());
    let b = rmq.block_size();

    for low in 0..data.len() {
        for len in [1, b - 1, b, b + 1, 2 * b, 2 * b + 1] {
            if len == 0 || low + len > data.len() {
                continue;
            }
            assert_eq!(
                rmq.rmq(low, low + len),
                Ok(naive_rmq(&data, low, low + len)),
                "low = {}, len = {}",
                low,
                len
            );
        }
    }
}

#[test]
fn test_trailing_partial_block() {
    // 11 elements with block size 3 leave a partial block of two elements at the end
    let rmq = HybridRmq::new(vec![7, 7, 7, 7, 7, 7, 7, 7, 7, 1, 0]);
    assert_eq!(rmq.block_size(), 3);
    assert_eq!(rmq.block_count(), 4);
    assert_eq!(rmq.rmq(0, 11), Ok(10));
    assert_eq!(rmq.rmq(4, 10), Ok(9));
    assert_eq!(rmq.rmq(0, 9), Ok(0));
}

#[test]
fn test_invalid_ranges() {
    let rmq = HybridRmq::new(vec![5, 2, 8, 1, 9, 3]);
    assert!(rmq.rmq(5, 5).is_err());
    assert!(rmq.rmq(5, 3).is_err());
    assert!(rmq.rmq(0, 7).is_err());
}

#[test]
fn test_iter() {
    let rmq = HybridRmq::from_iter([1, 2, 3, 4, 5]);
    let mut iter = rmq.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next(), Some(&3));
    assert_eq!(iter.next(), Some(&4));
    assert_eq!(iter.next(), Some(&5));
    assert_eq!(iter.next(), None);
}
