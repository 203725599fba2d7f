use criterion::Criterion;
use crmaths::math;

mod bench_util;
use bench_util::{bench_inputs, configure_criterion, gen_range, libm_exp10};

fn bench_exp10(c: &mut Criterion) {
    let inputs = [-300.0, -30.0, -1.0, -1e-9, 0.0, 1e-9, 1.0, 30.0, 300.0];
    let common = gen_range(1024, -10.0, 10.0, 0xe101);
    let wide = gen_range(1024, -307.0, 308.0, 0xe102);

    let mut group = c.benchmark_group("exp10/smoke");
    bench_inputs(&mut group, &inputs, math::exp10, libm_exp10);
    group.finish();

    let mut group = c.benchmark_group("exp10/common");
    bench_inputs(&mut group, &common, math::exp10, libm_exp10);
    group.finish();

    let mut group = c.benchmark_group("exp10/wide");
    bench_inputs(&mut group, &wide, math::exp10, libm_exp10);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_exp10(&mut c);
    c.final_summary();
}
