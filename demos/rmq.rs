use rand::distributions::{Distribution, Uniform};
use rand::{thread_rng, Rng};
use rmq_engine::{FischerHeunRmq, RangeMinimum};

const LEN: usize = 1 << 20;

fn main() -> rmq_engine::Result<()> {
    let sample = Uniform::new(0, u64::MAX);
    let mut rng = thread_rng();

    let mut data = Vec::with_capacity(LEN);
    for _ in 0..LEN {
        data.push(sample.sample(&mut rng));
    }

    let rmq = FischerHeunRmq::new(data);
    println!(
        "{} elements, {} blocks of {} elements, {} distinct block shapes, {} bytes",
        rmq.len(),
        rmq.block_count(),
        rmq.block_size(),
        rmq.distinct_shapes(),
        rmq.heap_size()
    );

    let sample = Uniform::new(0, rmq.len());
    for _ in 0..8 {
        let low = sample.sample(&mut rng);
        let high = rng.gen_range(low + 1..=rmq.len());
        let index = rmq.rmq(low, high)?;
        println!("rmq({low}, {high}) = {index} (value {})", rmq[index]);
    }

    println!("whole array minimum: {}", rmq.min_value(0, rmq.len())?);
    Ok(())
}
