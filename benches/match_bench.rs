//! Benchmarks comparing matching cost across text views.
//!
//! The matcher is generic over the decomposition of text, and the whole point
//! of the view abstraction is that the decompositions have very different
//! costs: bytes are nearly free, scalars decode UTF-8, clusters run full
//! grapheme segmentation.
//!
//! Run with: cargo bench

use criterion::measurement::WallTime;
use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use murex::testing::sample_corpus;
use murex::{is_match, Clusters, Pattern, Scalars, TextView, Utf16Units, Utf8Units};

// ============================================================================
// CORPUS SHAPES
// ============================================================================

/// Corpus sizes loosely modeled on line-oriented text files.
struct CorpusSize {
    name: &'static str,
    lines: usize,
    words_per_line: usize,
}

const CORPUS_SIZES: &[CorpusSize] = &[
    CorpusSize {
        name: "small",
        lines: 50,
        words_per_line: 8,
    },
    CorpusSize {
        name: "medium",
        lines: 400,
        words_per_line: 12,
    },
];

/// Pattern shapes that stress different parts of the algorithm.
const PATTERNS: &[(&str, &str)] = &[
    ("literal", "matcher"),
    ("anchored", "^hello"),
    ("wildcard", "p.ttern"),
    ("star", "b.*k"),
    ("full", "^h..lo* .*$"),
];

// ============================================================================
// HELPERS
// ============================================================================

fn count_matches<R>(pattern: &Pattern, lines: &[&str]) -> usize
where
    R: for<'a> TextView<'a>,
{
    lines
        .iter()
        .filter(|line| is_match::<R>(pattern, line))
        .count()
}

fn bench_patterns<R>(group: &mut BenchmarkGroup<'_, WallTime>, view: &str, lines: &[&str])
where
    R: for<'a> TextView<'a>,
{
    for (pattern_name, raw) in PATTERNS {
        let pattern = Pattern::new(*raw);
        group.bench_with_input(
            BenchmarkId::new(view, pattern_name),
            &pattern,
            |b, pattern| b.iter(|| black_box(count_matches::<R>(pattern, lines))),
        );
    }
}

// ============================================================================
// BENCHMARKS
// ============================================================================

fn bench_views(c: &mut Criterion) {
    for size in CORPUS_SIZES {
        let corpus = sample_corpus(size.lines, size.words_per_line);
        let lines: Vec<&str> = corpus.lines().collect();

        let mut group = c.benchmark_group(format!("match/{}", size.name));
        group.throughput(Throughput::Elements(lines.len() as u64));

        bench_patterns::<Utf8Units>(&mut group, "utf8", &lines);
        bench_patterns::<Utf16Units>(&mut group, "utf16", &lines);
        bench_patterns::<Scalars>(&mut group, "scalar", &lines);
        bench_patterns::<Clusters>(&mut group, "cluster", &lines);

        group.finish();
    }
}

criterion_group!(benches, bench_views);
criterion_main!(benches);
