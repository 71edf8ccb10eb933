//! # Transaction Executor Benchmarks
//!
//! | Scenario | Measures |
//! |----------|----------|
//! | Move batch | validate + escrow + commit for N chest→inventory moves |
//! | Retry churn | admitting and requeueing N failing edits per cycle |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use inventory_tests::world::{stone, WorldActor, CHEST, INVENTORY};
use inventory_transactions::{
    ExecutionContext, RecordingNotifier, SlotLocation, Transaction, TransactionGroup,
};
use shared_types::{Item, SlotIndex};

fn edit(location: SlotLocation, from: Item, to: Item) -> Transaction {
    Transaction::from_slot_edit(location, &from, to).expect("edit changes the slot")
}

fn bench_move_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute-move-batch");

    for size in [1u16, 9, 27] {
        group.throughput(Throughput::Elements(u64::from(size) * 2));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let mut actor = WorldActor::new();
                    for slot in 0..size {
                        actor = actor.with_chest_item(slot, stone(16));
                    }
                    let mut tx_group = TransactionGroup::new(Some(actor));
                    for slot in 0..size {
                        tx_group.add_transaction(edit(
                            SlotLocation::new(CHEST, slot),
                            stone(16),
                            Item::air(),
                        ));
                        tx_group.add_transaction(edit(
                            SlotLocation::new(INVENTORY, slot),
                            Item::air(),
                            stone(16),
                        ));
                    }
                    tx_group
                },
                |mut tx_group| {
                    let mut sink = RecordingNotifier::new();
                    black_box(tx_group.execute(&ExecutionContext::default(), &mut sink));
                    sink.len()
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_retry_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute-retry-churn");

    for size in [16usize, 256] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let mut tx_group = TransactionGroup::new(Some(WorldActor::new()));
                    for i in 0..size {
                        let slot = (i % 27) as SlotIndex;
                        tx_group.add_transaction(edit(
                            SlotLocation::new(CHEST, slot),
                            stone(1),
                            Item::air(),
                        ));
                    }
                    tx_group
                },
                |mut tx_group| {
                    let mut sink = RecordingNotifier::new();
                    for _ in 0..4 {
                        tx_group.execute(&ExecutionContext::default(), &mut sink);
                    }
                    black_box(tx_group.retry_queue().len())
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_move_batch, bench_retry_churn);
criterion_main!(benches);
