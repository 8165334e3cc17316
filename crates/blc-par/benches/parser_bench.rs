//! Parser throughput benchmark.

use blc_par::parse;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SAMPLE: &str = r#"
func fib(int n) {
    if n < 2 {
        return n
    }
    return fib(n - 1) + fib(n - 2)
}

func main() {
    int i = 0
    loop i < 20 {
        print(fib(i))
        print(" ")
        i++
    }
    print("\n")
    return 0
}
"#;

fn bench_parser(c: &mut Criterion) {
    c.bench_function("parse_sample_program", |b| {
        b.iter(|| {
            let program = parse(black_box(SAMPLE)).unwrap();
            black_box(program)
        })
    });
}

criterion_group!(benches, bench_parser);
criterion_main!(benches);
