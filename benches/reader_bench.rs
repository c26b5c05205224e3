use std::fmt::Write;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use typedomain::syntax::{lexer::Lexer, parse_source, read_nodes};

struct Corpus {
    name: &'static str,
    source: String,
}

fn build_wide_domain_corpus() -> String {
    let mut src = String::with_capacity(256_000);
    let _ = writeln!(src, "(define wide (domain");
    for i in 0..3_000usize {
        let _ = writeln!(
            src,
            "    (product record_{i} id::int64 name::string? parent::record_{}? tags::string*)",
            i.saturating_sub(1)
        );
    }
    let _ = writeln!(src, "))");
    src
}

fn build_sum_heavy_corpus() -> String {
    let mut src = String::with_capacity(256_000);
    let _ = writeln!(src, "(define sums (domain");
    for i in 0..600usize {
        let _ = writeln!(src, "    deprecated::(sum event_{i}");
        for v in 0..5usize {
            let _ = writeln!(src, "        (event_{i}_v{v} at::int64 payload::bytes?)");
        }
        let _ = writeln!(src, "    )");
    }
    let _ = writeln!(src, "))");
    src
}

fn build_comment_heavy_corpus() -> String {
    let mut src = String::with_capacity(256_000);
    let _ = writeln!(src, "(define commented (domain");
    for i in 0..2_000usize {
        let _ = writeln!(src, "    // line comment {i}");
        let _ = writeln!(src, "    /* block comment {} {} */", i, i + 1);
        let _ = writeln!(src, "    (enum 'choice {i}' a b c) // trailing");
    }
    let _ = writeln!(src, "))");
    src
}

fn build_corpora() -> Vec<Corpus> {
    vec![
        Corpus {
            name: "wide_domain",
            source: build_wide_domain_corpus(),
        },
        Corpus {
            name: "sum_heavy",
            source: build_sum_heavy_corpus(),
        },
        Corpus {
            name: "comment_heavy",
            source: build_comment_heavy_corpus(),
        },
    ]
}

fn bench_stage(c: &mut Criterion, group_name: &str, run: fn(&str) -> usize) {
    let corpora = build_corpora();
    let mut group = c.benchmark_group(group_name);

    for corpus in &corpora {
        let input = corpus.source.as_str();
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(corpus.name),
            input,
            |b, input| {
                b.iter(|| black_box(run(black_box(input))));
            },
        );
    }

    group.finish();
}

fn tokenize(input: &str) -> usize {
    Lexer::new(input, "bench.ion").tokenize().len()
}

fn read(input: &str) -> usize {
    read_nodes(input, "bench.ion").map_or(0, |nodes| nodes.len())
}

fn parse(input: &str) -> usize {
    parse_source(input, "bench.ion").map_or(0, |statements| statements.len())
}

fn bench_tokenize(c: &mut Criterion) {
    bench_stage(c, "reader/tokenize", tokenize);
}

fn bench_read_nodes(c: &mut Criterion) {
    bench_stage(c, "reader/read_nodes", read);
}

fn bench_parse_statements(c: &mut Criterion) {
    bench_stage(c, "reader/parse_statements", parse);
}

criterion_group!(benches, bench_tokenize, bench_read_nodes, bench_parse_statements);
criterion_main!(benches);
