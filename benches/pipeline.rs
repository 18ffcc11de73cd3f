//! Pipeline throughput over synthetic compute shaders.
//!
//! Measures comment stripping alone and the full strict pipeline at two
//! source sizes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use glsl_xapi::preprocess::strip_comments;
use glsl_xapi::{process, NoReport, PreprocessOptions};

/// Build a compute shader with `n` helper functions and a few shared arrays.
fn synthetic_shader(n: usize) -> String {
    let mut src = String::from("#pragma once\n#include \"gpu_shader_math_lib.glsl\"\n\n");
    for i in 0..4 {
        src.push_str(&format!("shared vec4 tile{}[64]; /* scratch {} */\n", i, i));
    }
    for i in 0..n {
        src.push_str(&format!(
            "// helper {i}\n\
             void helper{i}(in vec4 a, inout vec4 acc, out float w[2])\n\
             {{\n  \
               w = float[2](0.5, 0.5);   \n  \
               mat4 m = mat4(model);\n  \
               acc += a * w[{i} % 2];\n\
             }}\n"
        ));
    }
    src
}

fn bench_strip_comments(c: &mut Criterion) {
    let small = synthetic_shader(20);
    let large = synthetic_shader(500);

    let mut group = c.benchmark_group("strip_comments");
    group.bench_function("20_fns", |b| {
        b.iter(|| strip_comments(black_box(&small), &mut NoReport))
    });
    group.bench_function("500_fns", |b| {
        b.iter(|| strip_comments(black_box(&large), &mut NoReport))
    });
    group.finish();
}

fn bench_process(c: &mut Criterion) {
    let small = synthetic_shader(20);
    let large = synthetic_shader(500);
    let options = PreprocessOptions::strict();

    let mut group = c.benchmark_group("process");
    group.bench_function("20_fns", |b| {
        b.iter(|| process(black_box(&small), &options, &mut NoReport))
    });
    group.bench_function("500_fns", |b| {
        b.iter(|| process(black_box(&large), &options, &mut NoReport))
    });
    group.finish();
}

criterion_group!(benches, bench_strip_comments, bench_process);
criterion_main!(benches);
