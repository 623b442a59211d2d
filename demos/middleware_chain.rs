//! Walk a value through an ordered middleware chain
//!
//! Run with RUST_LOG=debug to see the logger stage output.

use millrace::middleware::{logger, tap};
use millrace::Store;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Middleware Chain ===\n");

    println!("1. Stages run left to right; each output feeds the next input");
    let store = Store::builder(String::new())
        .middleware(logger())
        .middleware(|s: String| s + " ->")
        .middleware(tap(|s: &String| println!("   [tap] {s:?}")))
        .middleware(|s: String| s + " done")
        .renderer(|| {})
        .build();

    store.update("start".to_string()).unwrap();

    println!("\n2. Stored state: {:?}", store.get());
}
