use criterion::Criterion;
use crmaths::math;

mod bench_util;
use bench_util::{bench_inputs2, configure_criterion, gen_pairs, libm_hypot};

fn bench_hypot(c: &mut Criterion) {
    let common = gen_pairs(1024, -1e3, 1e3, 0x4901);
    let wide = gen_pairs(1024, -1e150, 1e150, 0x4902);
    // near-equal legs land in the slow certification window more often
    let near: Vec<(f64, f64)> = gen_pairs(1024, 1.0, 2.0, 0x4903)
        .into_iter()
        .map(|(x, _)| (x, x + f64::EPSILON * 3.0))
        .collect();

    let mut group = c.benchmark_group("hypot/common");
    bench_inputs2(&mut group, &common, math::hypot, libm_hypot);
    group.finish();

    let mut group = c.benchmark_group("hypot/wide");
    bench_inputs2(&mut group, &wide, math::hypot, libm_hypot);
    group.finish();

    let mut group = c.benchmark_group("hypot/near-equal");
    bench_inputs2(&mut group, &near, math::hypot, libm_hypot);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_hypot(&mut c);
    c.final_summary();
}
