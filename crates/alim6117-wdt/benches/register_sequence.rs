//! Register-sequence benchmarks for the watchdog controller.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use alim6117_protocol::{TimeoutSignal, decode_counter, encode_counter, select_signal};
use alim6117_wdt::prelude::*;

fn bench_counter_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter_codec");

    group.bench_function("encode_default", |b| {
        b.iter(|| black_box(encode_counter(black_box(60))));
    });

    group.bench_function("encode_full_scale", |b| {
        b.iter(|| black_box(encode_counter(black_box(512))));
    });

    group.bench_function("decode_default", |b| {
        b.iter(|| black_box(decode_counter(black_box([0x1e, 0x00, 0x00]))));
    });

    group.finish();
}

fn bench_signal_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("signal_routing");

    group.bench_function("select_reset", |b| {
        b.iter(|| black_box(select_signal(black_box(0xa5), TimeoutSignal::SystemReset)));
    });

    group.finish();
}

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    group.bench_function("start", |b| {
        b.iter_batched(
            || M6117Watchdog::new(SimBus::new(), WatchdogConfig::new(60)),
            |watchdog| watchdog.start(),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("ping", |b| {
        b.iter_batched(
            || {
                let watchdog = M6117Watchdog::new(SimBus::new(), WatchdogConfig::new(60));
                watchdog.start();
                watchdog
            },
            |watchdog| watchdog.ping(),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("set_timeout", |b| {
        b.iter_batched(
            || M6117Watchdog::new(SimBus::new(), WatchdogConfig::new(60)),
            |watchdog| watchdog.set_timeout(30),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("stop", |b| {
        b.iter_batched(
            || {
                let watchdog = M6117Watchdog::new(SimBus::new(), WatchdogConfig::new(60));
                watchdog.start();
                watchdog
            },
            |watchdog| watchdog.stop(),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    group.bench_function("arm_feed_disarm", |b| {
        b.iter(|| {
            let watchdog = M6117Watchdog::new(SimBus::new(), WatchdogConfig::new(60));
            watchdog.start();
            for _ in 0..10 {
                watchdog.ping();
            }
            watchdog.stop();
            black_box(watchdog.into_bus())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_counter_codec,
    bench_signal_routing,
    bench_primitives,
    bench_session,
);

criterion_main!(benches);
