//! Single-store application wiring through a static StoreCell

use millrace::{Store, StoreCell};

#[derive(Clone, Debug)]
struct AppState {
    todos: Vec<String>,
}

static STORE: StoreCell<AppState> = StoreCell::new();

fn add_todo(text: &str) {
    let mut next = STORE.read(AppState::clone).expect("store initialized in main");
    next.todos.push(text.to_string());
    STORE.update(next).expect("store initialized in main");
}

fn main() {
    println!("=== StoreCell ===\n");

    println!("1. Before init every operation reports an error");
    if let Err(err) = STORE.render() {
        println!("   {err}");
    }

    println!("\n2. Installing the store (renderer fires once at registration)");
    STORE
        .init(
            Store::builder(AppState { todos: Vec::new() })
                .renderer(|| {
                    let count = STORE.read(|state| state.todos.len()).unwrap_or(0);
                    println!("   [render] {count} todo(s)");
                })
                .build(),
        )
        .unwrap();

    println!("\n3. Updating from helper functions");
    add_todo("learn the middleware fold");
    add_todo("wire the renderer");

    println!("\n4. Final state: {:?}", STORE.get().unwrap());
}
