// Compares the two backing families on the operations where their cost
// models differ: appends (both O(1)), full traversal, and random indexed
// access (O(len/2) hops for the ring, O(1) for contiguous storage).

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::Rng;

use ringbox::{Container, LinkedList, List, VecList};

const N: u64 = 1000;

pub fn list_add(c: &mut Criterion) {
    c.bench_function("linked_list_add_1k", |b| {
        b.iter_batched(
            LinkedList::<u64>::new,
            |list| {
                for i in 0..N {
                    list.add(i);
                }
                list
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("vec_list_add_1k", |b| {
        b.iter_batched(
            VecList::<u64>::new,
            |list| {
                for i in 0..N {
                    list.add(i);
                }
                list
            },
            BatchSize::SmallInput,
        )
    });
}

pub fn list_iterate(c: &mut Criterion) {
    let linked: LinkedList<u64> = (0..N).collect();
    let contig: VecList<u64> = (0..N).collect();
    c.bench_function("linked_list_iterate_1k", |b| {
        b.iter(|| black_box(linked.iter().sum::<u64>()))
    });
    c.bench_function("vec_list_iterate_1k", |b| {
        b.iter(|| black_box(contig.iter().sum::<u64>()))
    });
}

pub fn list_random_get(c: &mut Criterion) {
    let linked: LinkedList<u64> = (0..N).collect();
    let contig: VecList<u64> = (0..N).collect();
    let mut rng = rand::rng();
    let indexes: Vec<isize> = (0..256).map(|_| rng.random_range(0..N as isize)).collect();
    c.bench_function("linked_list_random_get", |b| {
        b.iter(|| {
            for &i in &indexes {
                black_box(linked.get(i).unwrap());
            }
        })
    });
    c.bench_function("vec_list_random_get", |b| {
        b.iter(|| {
            for &i in &indexes {
                black_box(contig.get(i).unwrap());
            }
        })
    });
}

criterion_group!(benches, list_add, list_iterate, list_random_get);
criterion_main!(benches);
