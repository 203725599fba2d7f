use criterion::Criterion;
use crmaths::math;

mod bench_util;
use bench_util::{bench_inputs_f32, configure_criterion, gen_range_f32, libm_erff};

fn bench_erff(c: &mut Criterion) {
    let inputs = [-4.0f32, -2.0, -0.5, -1e-6, 0.0, 1e-6, 0.5, 2.0, 4.0];
    let common = gen_range_f32(1024, -2.0, 2.0, 0xeff1);
    let saturated = gen_range_f32(1024, 3.92, 20.0, 0xeff2);

    let mut group = c.benchmark_group("erff/smoke");
    bench_inputs_f32(&mut group, &inputs, math::erff, libm_erff);
    group.finish();

    let mut group = c.benchmark_group("erff/common");
    bench_inputs_f32(&mut group, &common, math::erff, libm_erff);
    group.finish();

    let mut group = c.benchmark_group("erff/saturated");
    bench_inputs_f32(&mut group, &saturated, math::erff, libm_erff);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_erff(&mut c);
    c.final_summary();
}
