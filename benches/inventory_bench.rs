use criterion::{criterion_group, criterion_main, Criterion};
use rand::distributions::{Alphanumeric, Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;
use tempfile::TempDir;

use inventory::{InventoryEngine, Item, ItemUpdate, JsonStore};

const NUM_ITEMS: usize = 100;

fn inventory_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("inventory");
    let group = group.sample_size(10);

    // Create a temporary directory for the bench
    let dir = TempDir::new().unwrap();
    let mut store = JsonStore::open(dir.path()).unwrap();

    // Generate 100 items with names of random length in [4, 64] characters.
    let mut rng = rand::thread_rng();
    let between = Uniform::from(4..64);
    let mut names = Vec::with_capacity(NUM_ITEMS);

    for i in 0..NUM_ITEMS {
        let length = between.sample(&mut rng);
        let name: String = (0..length)
            .map(|_| char::from(rng.sample(Alphanumeric)))
            .collect();
        let item = Item::new(format!("ID{:04}", i), name.clone(), rng.gen_range(0, 500), 1.25);
        store.add(item).unwrap();
        names.push(name);
    }

    group.bench_function("inventory_update 100", |b| {
        b.iter(|| {
            for i in 0..NUM_ITEMS {
                let update = ItemUpdate {
                    quantity: Some(i as u64),
                    ..Default::default()
                };
                store.update(&format!("ID{:04}", i), update).unwrap();
            }
        });
    });

    // Search for a short slice of a random existing name
    let queries = (0..1000)
        .map(|_| {
            let name = names.choose(&mut rng).unwrap();
            name[..3].to_lowercase()
        })
        .collect::<Vec<_>>();

    group.bench_function("inventory_search 1000", |b| {
        b.iter(|| {
            for query in queries.iter() {
                store.search(query);
            }
        });
    });
}

criterion_group!(benches, inventory_bench);
criterion_main!(benches);
