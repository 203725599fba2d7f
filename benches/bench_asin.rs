use criterion::Criterion;
use crmaths::math;

mod bench_util;
use bench_util::{bench_inputs, configure_criterion, gen_range, libm_asin};

fn bench_asin(c: &mut Criterion) {
    let inputs = [-1.0, -0.99, -0.5, -1e-7, 0.0, 1e-7, 0.5, 0.99, 1.0];
    let common = gen_range(1024, -1.0, 1.0, 0xa51a);
    // the table path dominates past 2^-6
    let steep = gen_range(1024, 0.9, 1.0, 0xa51b);

    let mut group = c.benchmark_group("asin/smoke");
    bench_inputs(&mut group, &inputs, math::asin, libm_asin);
    group.finish();

    let mut group = c.benchmark_group("asin/common");
    bench_inputs(&mut group, &common, math::asin, libm_asin);
    group.finish();

    let mut group = c.benchmark_group("asin/steep");
    bench_inputs(&mut group, &steep, math::asin, libm_asin);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_asin(&mut c);
    c.final_summary();
}
