//! Lexer throughput benchmark.

use blc_lex::{Lexer, Token};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SAMPLE: &str = r#"
// Sum the first n squares.
func square(int x) {
    return x * x
}

func main() {
    int n = 100
    int total = 0
    int i = 0
    loop i < n {
        total = total + square(i)
        i++
    }
    if total > 0 && n != 0 {
        print("total: ")
        print(total)
        print("\n")
    }
    return 0
}
"#;

fn bench_lexer(c: &mut Criterion) {
    c.bench_function("lex_sample_program", |b| {
        b.iter(|| {
            let tokens: Vec<Token> = Lexer::new(black_box(SAMPLE)).collect();
            black_box(tokens)
        })
    });
}

criterion_group!(benches, bench_lexer);
criterion_main!(benches);
