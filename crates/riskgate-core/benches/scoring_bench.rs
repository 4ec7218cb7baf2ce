// ─────────────────────────────────────────────────────────────────────
// RiskGate: Scoring Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for the tiering and checklist hot paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use riskgate_core::{aggregate_by_pillar, ChecklistEngine, GovernanceEngine, TieringEngine};
use riskgate_types::{
    Answer, AnswerSet, AutonomyLevel, DecisionImpact, ModelProfile, RegulatoryExposure,
};

fn credit_model() -> ModelProfile {
    ModelProfile {
        name: "Credit Default XGBoost".into(),
        decision_impact: DecisionImpact::AutomatedDecision,
        autonomy_level: AutonomyLevel::HumanApproves,
        regulatory_exposure: RegulatoryExposure::HighRiskRegulated,
        client_facing: true,
        financial_impact_usd: 50_000_000.0,
    }
}

fn mixed_answers() -> AnswerSet {
    (1..=10)
        .map(|id| {
            let answer = match id % 3 {
                0 => Answer::No,
                1 => Answer::Yes,
                _ => Answer::Partial,
            };
            (id, answer)
        })
        .collect()
}

// ── TieringEngine.tier_model() ──────────────────────────────────────

fn bench_tier_model(c: &mut Criterion) {
    let engine = TieringEngine::default();
    let profile = credit_model();
    c.bench_function("tier_model", |b| {
        b.iter(|| engine.tier_model(black_box(&profile)))
    });
}

fn bench_tier_batch_100(c: &mut Criterion) {
    let engine = TieringEngine::default();
    let profiles: Vec<ModelProfile> = (0..100)
        .map(|i| ModelProfile {
            name: format!("model-{i}"),
            financial_impact_usd: f64::from(i) * 250_000.0,
            ..credit_model()
        })
        .collect();
    c.bench_function("tier_batch_100", |b| {
        b.iter(|| engine.tier_batch(black_box(&profiles)))
    });
}

// ── ChecklistEngine.apply() ─────────────────────────────────────────

fn bench_checklist_apply(c: &mut Criterion) {
    let engine = ChecklistEngine::default();
    let answers = mixed_answers();
    c.bench_function("checklist_apply", |b| {
        b.iter(|| engine.apply(black_box("Credit Default XGBoost"), black_box(&answers)))
    });
}

fn bench_pillar_aggregate(c: &mut Criterion) {
    let result = ChecklistEngine::default()
        .apply("Credit Default XGBoost", &mixed_answers())
        .unwrap();
    c.bench_function("pillar_aggregate", |b| {
        b.iter(|| aggregate_by_pillar(black_box(&result.full_results)))
    });
}

// ── Full pipeline: tier + score + guardrail ─────────────────────────

fn bench_full_evaluation(c: &mut Criterion) {
    let engine = GovernanceEngine::default();
    let profile = credit_model();
    let answers = mixed_answers();
    c.bench_function("full_evaluation", |b| {
        b.iter(|| {
            let tier = engine.tier_model(black_box(&profile)).unwrap();
            engine.evaluate(&profile.name, Some(&tier), black_box(&answers))
        })
    });
}

criterion_group!(
    benches,
    bench_tier_model,
    bench_tier_batch_100,
    bench_checklist_apply,
    bench_pillar_aggregate,
    bench_full_evaluation,
);
criterion_main!(benches);
