use criterion::{criterion_group, criterion_main, Criterion};
use gantry_params::{
    DefaultDiagnosticFormatter, DiagnosticFormatter, InMemoryConfigSource, ParameterDescriptor,
    StepDescriptor, StepValidator,
};

fn wide_step(parameter_count: usize) -> StepDescriptor {
    let mut step = StepDescriptor::new("bench", "run", "gantry-bench-plugin");
    for i in 0..parameter_count {
        let mut parameter = ParameterDescriptor::new(format!("param{}", i)).required(true);
        if i % 2 == 0 {
            parameter = parameter.with_alias(format!("alias{}", i));
        }
        if i % 3 == 0 {
            parameter = parameter.with_expression(format!("${{bench.param{}}}", i));
        }
        step = step.with_parameter(parameter);
    }
    step
}

fn bench_validate(c: &mut Criterion) {
    let step = wide_step(64);
    let source = InMemoryConfigSource::new();
    let validator = StepValidator::new();

    c.bench_function("validate 64 unresolved parameters", |b| {
        b.iter(|| validator.validate(&step, &source).is_err())
    });
}

fn bench_format(c: &mut Criterion) {
    let step = wide_step(64);
    let error = StepValidator::new()
        .validate(&step, &InMemoryConfigSource::new())
        .expect_err("unresolved");
    let failure = error.failure().expect("validation failure").clone();

    c.bench_function("format 64 failed parameters", |b| {
        b.iter(|| DefaultDiagnosticFormatter.format(&failure))
    });
}

// ベンチマークグループの定義
criterion_group!(benches, bench_validate, bench_format);
criterion_main!(benches);
