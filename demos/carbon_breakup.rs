use deexcitation::{CascadeRng, ExcitationHandler, Fragment, HandlerConfig, NuclearData};
use std::collections::BTreeMap;
use std::error::Error;
use std::time::Instant;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("deexcitation=info")
        .init();

    // 12C at 50 MeV excitation, at rest in the lab
    let config = HandlerConfig::from_json(r#"{"cache": "lfu"}"#)?;
    let mut handler = ExcitationHandler::from_config(&config)?;
    let ground = handler.data().nuclear_mass(6, 12);
    let carbon = Fragment::at_rest(12, 6, ground, 50.0);

    let events = 10_000u64;
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut kinetic: BTreeMap<String, f64> = BTreeMap::new();
    let start = Instant::now();
    for event in 0..events {
        let mut rng = CascadeRng::for_event(42, event);
        for product in handler.break_it_up(&carbon, &mut rng)? {
            let name = product.definition().name();
            *counts.entry(name.clone()).or_insert(0) += 1;
            *kinetic.entry(name).or_insert(0.0) += product.kinetic_energy();
        }
    }
    tracing::info!(events, elapsed = ?start.elapsed(), "finished");

    println!("{:<10} {:>12} {:>16}", "product", "per event", "mean T (MeV)");
    for (name, count) in &counts {
        println!(
            "{:<10} {:>12.4} {:>16.3}",
            name,
            *count as f64 / events as f64,
            kinetic[name] / *count as f64
        );
    }
    Ok(())
}
