use criterion::{criterion_group, criterion_main, Criterion};
use enumkit_core::{scalar_enum, EnumOptions, EnumType, EnumValue, Scalar};
use std::hint::black_box;

scalar_enum! {
    struct Region {
        NORTH = "north",
        SOUTH = "south",
        EAST = "east",
        WEST = "west",
        CENTRAL = 0,
    }
}

scalar_enum! {
    struct LooseRegion [EnumOptions::loose()] {
        NORTH = 1,
        SOUTH = 2,
        EAST = 3,
        WEST = 4,
    }
}

fn bench_construct(c: &mut Criterion) {
    // Warm the definition cache so the loop measures the lookup path only.
    let _ = Region::definition();
    let _ = LooseRegion::definition();

    c.bench_function("value/new_strict", |b| {
        b.iter(|| {
            let value = EnumValue::<Region>::new(black_box("west")).expect("declared value");
            black_box(value.key());
        });
    });

    c.bench_function("value/new_loose", |b| {
        b.iter(|| {
            let value = EnumValue::<LooseRegion>::new(black_box("4")).expect("declared value");
            black_box(value.key());
        });
    });

    c.bench_function("value/from_name", |b| {
        b.iter(|| {
            let value = Region::from_name(black_box("CENTRAL")).expect("declared name");
            black_box(value.key());
        });
    });
}

fn bench_introspection(c: &mut Criterion) {
    let probe = Scalar::from("nowhere");

    c.bench_function("definition/is_valid_miss", |b| {
        b.iter(|| black_box(Region::is_valid(black_box(&probe))));
    });

    c.bench_function("definition/keys", |b| {
        b.iter(|| black_box(Region::keys()));
    });
}

criterion_group!(benches, bench_construct, bench_introspection);
criterion_main!(benches);
