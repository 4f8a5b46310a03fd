use std::env;
use std::ops::Range;

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Seed used for every random pattern in this process.
///
/// Set `OVERRIDE_SEED` to reproduce a failure, the seed of the current run is printed by the
/// failing test.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .and_then(|seed| seed.parse().ok())
            .unwrap_or_else(|| thread_rng().gen())
    })
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    // :.:.:.::
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Values in `0..distinct`, so there are many duplicates for small `distinct`.
pub fn random_d(len: usize, distinct: i32) -> Vec<i32> {
    random_uniform(len, 0..distinct.max(1))
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    let mut rng = new_rng();

    // Zipf needs at least one element to draw from.
    let dist = match ZipfDistribution::new(len.max(1), exponent) {
        Ok(dist) => dist,
        Err(()) => panic!("invalid zipf parameters, len: {len} exponent: {exponent}"),
    };

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.
    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::
    vec![66; len]
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let mut vals = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);

    for chunk in vals.chunks_mut(chunk_len) {
        if rng.gen::<bool>() {
            chunk.sort();
        } else {
            chunk.sort_by(|a, b| b.cmp(a));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.
    let mut vals = random(len);

    let first_half = &mut vals[0..(len / 2)];
    first_half.sort();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_by(|a, b| b.cmp(a));

    vals
}
