//! Counter application driven through a store with clamping middleware

use millrace::Store;

#[derive(Clone, Debug)]
struct CounterState {
    count: i32,
    step: i32,
}

impl CounterState {
    fn new() -> Self {
        Self { count: 0, step: 1 }
    }

    fn incremented(&self) -> Self {
        Self {
            count: self.count + self.step,
            ..self.clone()
        }
    }
}

fn main() {
    println!("=== Counter Application ===\n");

    println!("1. Building the store (clamp middleware keeps count in 0..=10)");
    let store = Store::builder(CounterState::new())
        .middleware(|state: CounterState| CounterState {
            count: state.count.clamp(0, 10),
            ..state
        })
        .build();

    println!("\n2. Registering the renderer (fires immediately)");
    let handle = store.clone();
    store.set_renderer(move || {
        handle.read(|state| {
            println!("   [render] count = {}, step = {}", state.count, state.step);
        });
    });

    println!("\n3. Incrementing");
    for _ in 0..3 {
        let next = store.read(CounterState::incremented);
        store.update(next).unwrap();
    }

    println!("\n4. Changing step to 5 and incrementing past the clamp");
    let next = store.read(|state| CounterState {
        step: 5,
        ..state.clone()
    });
    store.update(next).unwrap();
    for _ in 0..3 {
        let next = store.read(CounterState::incremented);
        store.update(next).unwrap();
    }

    println!("\n5. Final state: {:?}", store.get());
}
