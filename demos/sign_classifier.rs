use rand::SeedableRng;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rust_backprop::{Dataset, FitConfig, NetworkBuilder, Shuffle};
use tracing_subscriber::EnvFilter;

fn main() -> rust_backprop::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Task: y = sign(x0 - x1), encoded as +-1.
    let mut rng = StdRng::seed_from_u64(1);
    let dist = Uniform::new(-1.0_f64, 1.0_f64);

    let mut sample = |n: usize| -> rust_backprop::Result<Dataset> {
        let mut xs = Vec::with_capacity(2 * n);
        let mut ys = Vec::with_capacity(n);
        for _ in 0..n {
            let x0 = dist.sample(&mut rng);
            let x1 = dist.sample(&mut rng);
            xs.extend_from_slice(&[x0, x1]);
            ys.push(if x0 > x1 { 1.0 } else { -1.0 });
        }
        Dataset::from_flat(xs, ys, 2, 1)
    };
    let train = sample(256)?;
    let test = sample(64)?;

    let mut net = NetworkBuilder::new(&[2, 4, 1])?
        .learning_rate(0.05)
        .build_with_seed(0)?;

    let report = net.fit(
        &train,
        FitConfig {
            epochs: 200,
            shuffle: Shuffle::Seeded(0),
            log_every: 20,
        },
    )?;

    let test_mse = net.evaluate_mse(&test)?;
    println!(
        "train_mse={:.6} test_mse={:.6}",
        report.final_mse, test_mse
    );
    Ok(())
}
