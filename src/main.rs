use pso_engine::PsoConfig;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("PSO Rastrigin v{}", pso_rastrigin::version());
    println!("==========================================");

    let config = PsoConfig::default();
    let report = pso_rastrigin::run(&config)?;

    println!("{}", report);
    Ok(())
}
