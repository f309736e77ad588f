use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use stockroom_inventory::Inventory;

fn stocked(items: usize) -> Inventory {
    let mut inv = Inventory::new();
    for i in 0..items {
        inv.add(&format!("item-{i:05}"), (i % 10) as i64 + 1);
    }
    inv
}

fn bench_add_remove_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_remove_cycle");
    group.throughput(Throughput::Elements(2));

    group.bench_function("existing_item", |b| {
        let mut inv = stocked(1_000);
        b.iter(|| {
            inv.add(black_box("item-00500"), black_box(3));
            inv.remove(black_box("item-00500"), black_box(3));
        });
    });

    group.bench_function("deplete_and_restock", |b| {
        let mut inv = stocked(1_000);
        b.iter(|| {
            inv.remove(black_box("item-00001"), black_box(i64::MAX));
            inv.add(black_box("item-00001"), black_box(2));
        });
    });

    group.finish();
}

fn bench_list_below(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_below");

    for size in [100usize, 1_000, 10_000] {
        let inv = stocked(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &inv, |b, inv| {
            b.iter(|| black_box(inv.list_below(black_box(5))).len());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add_remove_cycle, bench_list_below);
criterion_main!(benches);
