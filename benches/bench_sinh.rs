use criterion::Criterion;
use crmaths::math;

mod bench_util;
use bench_util::{bench_inputs, configure_criterion, gen_range, libm_sinh};

fn bench_sinh(c: &mut Criterion) {
    let inputs = [-700.0, -20.0, -1.0, -1e-6, 0.0, 1e-6, 1.0, 20.0, 700.0];
    let common = gen_range(1024, -5.0, 5.0, 0x517a);
    let wide = gen_range(1024, -700.0, 700.0, 0x517b);

    let mut group = c.benchmark_group("sinh/smoke");
    bench_inputs(&mut group, &inputs, math::sinh, libm_sinh);
    group.finish();

    let mut group = c.benchmark_group("sinh/common");
    bench_inputs(&mut group, &common, math::sinh, libm_sinh);
    group.finish();

    let mut group = c.benchmark_group("sinh/wide");
    bench_inputs(&mut group, &wide, math::sinh, libm_sinh);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_sinh(&mut c);
    c.final_summary();
}
