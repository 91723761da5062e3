use criterion::{Criterion, criterion_group, criterion_main};
use spooky_lrec::{FieldText, Record, make_index_key, render};
use std::hint::black_box;

// ─── Test Data ──────────────────────────────────────────────────────────────

/// A typical DKVP line: twelve short fields.
const BENCH_LINE: &str =
    "id=abc123,name=Alice,age=28,score=99.5,active=true,deleted=false,\
     tags=dev,count=1000,theme=dark,level=3,city=Berlin,zip=10115";

/// Byte ranges of every `key=value` pair in `line`.
fn pair_ranges(line: &str) -> Vec<(std::ops::Range<usize>, std::ops::Range<usize>)> {
    let mut out = Vec::new();
    let mut start = 0;
    for pair in line.split(',') {
        let eq = pair.find('=').unwrap_or(pair.len());
        let value_start = (start + eq + 1).min(start + pair.len());
        out.push((start..start + eq, value_start..start + pair.len()));
        start += pair.len() + 1;
    }
    out
}

fn make_record() -> Record<'static> {
    let mut rec = Record::dkvp_backed(BENCH_LINE.to_string());
    for (k, v) in pair_ranges(BENCH_LINE) {
        rec.put_view(0, k, v).unwrap();
    }
    rec
}

// ═══════════════════════════════════════════════════════════════════════════
// Group 1: Building records
// ═══════════════════════════════════════════════════════════════════════════

fn bench_building_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("building_records");
    let ranges = pair_ranges(BENCH_LINE);

    group.bench_function("dkvp_backed views", |b| {
        b.iter(|| {
            let mut rec = Record::dkvp_backed(black_box(BENCH_LINE).to_string());
            for (k, v) in ranges.iter().cloned() {
                rec.put_view(0, k, v).unwrap();
            }
            rec.release()
        })
    });

    group.bench_function("unbacked put_copy", |b| {
        b.iter(|| {
            let mut rec = Record::unbacked();
            for (k, v) in ranges.iter().cloned() {
                rec.put_copy(&BENCH_LINE[k], &BENCH_LINE[v]);
            }
            rec.release()
        })
    });

    group.bench_function("nidx index keys", |b| {
        b.iter(|| {
            let mut rec = Record::unbacked();
            for i in 1..=12 {
                rec.put(make_index_key(black_box(i)), "x");
            }
            rec
        })
    });

    group.finish();
}

// ═══════════════════════════════════════════════════════════════════════════
// Group 2: Lookup and mutation
// ═══════════════════════════════════════════════════════════════════════════

fn bench_lookup_and_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_and_mutation");
    let record = make_record();

    group.bench_function("get first", |b| {
        b.iter(|| black_box(record.get(black_box("id"))))
    });

    group.bench_function("get last", |b| {
        b.iter(|| black_box(record.get(black_box("zip"))))
    });

    group.bench_function("get missing", |b| {
        b.iter(|| black_box(record.get(black_box("nope"))))
    });

    group.bench_function("move_to_head + move_to_tail", |b| {
        let mut rec = make_record();
        b.iter(|| {
            rec.move_to_head(black_box("zip"));
            rec.move_to_tail(black_box("zip"));
        })
    });

    group.bench_function("rename onto existing", |b| {
        b.iter(|| {
            let mut rec = make_record();
            rec.rename(black_box("age"), FieldText::Borrowed("name"));
            rec
        })
    });

    group.finish();
}

// ═══════════════════════════════════════════════════════════════════════════
// Group 3: Rendering
// ═══════════════════════════════════════════════════════════════════════════

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    let record = make_record();

    group.bench_function("render", |b| {
        b.iter(|| render(Some(black_box(&record)), "\n", ",", "="))
    });

    group.bench_function("to_json", |b| b.iter(|| black_box(&record).to_json().unwrap()));

    group.finish();
}

// ─── Criterion Main ─────────────────────────────────────────────────────────

criterion_group!(
    benches,
    bench_building_records,
    bench_lookup_and_mutation,
    bench_rendering,
);
criterion_main!(benches);
