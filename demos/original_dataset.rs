use rust_backprop::Network;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> rust_backprop::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Two per-feature input neurons feeding one output neuron.
    let mut net = Network::new_with_seed(&[2, 1], 0.03, 0)?;

    let inputs = [[1.0, 1.0], [0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
    let desired = [[-1.0], [-1.0], [1.0], [1.0]];

    for epoch in 0..100 {
        for (x, d) in inputs.iter().zip(&desired) {
            let actual = net.train_step(x, d)?;
            info!(epoch, actual = actual[0], desired = d[0], "sample");
        }
    }

    Ok(())
}
