use std::time::Instant;

use num_bigint::{BigInt, UniformBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::distributions::uniform::UniformSampler;

use sharemind::protocols::comparison::gte;
use sharemind::protocols::multiplication::mul;
use sharemind::sharing::secret::Secret;

const CHECKS_PER_SIZE: usize = 1000;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();
    let mut rng = rand::thread_rng();

    for n in [8usize, 16, 32, 64] {
        let q = BigInt::one() << n;
        let half = BigInt::one() << (n - 1);

        let start = Instant::now();
        let mut count = 0;
        let mut failed = false;
        for _ in 0..CHECKS_PER_SIZE {
            let i = UniformBigInt::new_inclusive(&BigInt::zero(), &half).sample(&mut rng);
            let j = UniformBigInt::new_inclusive(&BigInt::zero(), &half).sample(&mut rng);

            let a = Secret::from_value(&i, n, &mut rng).unwrap();
            let b = Secret::from_value(&j, n, &mut rng).unwrap();

            let product = mul(&a, &b, &mut rng).unwrap();
            let comparison = gte(&a, &b, &mut rng).unwrap();

            if product.reconstruct() != (&i * &j).mod_floor(&q)
                || comparison.reconstruct_to_bool() != (i >= j)
            {
                println!("Failed for {i} and {j}, with n={n}");
                failed = true;
                break;
            }
            count += 1;
        }

        if !failed {
            println!(
                "Finished {count} random checks with n={n}: {} microseconds",
                start.elapsed().as_micros()
            );
        }
    }
}
