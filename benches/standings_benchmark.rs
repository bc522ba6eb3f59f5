use criterion::{black_box, criterion_group, criterion_main, Criterion};
use chrono::NaiveDate;
use fitness_league::models::{ActivityType, Entry, EntryKind, EntryStatus};
use fitness_league::scoring::rank::{rank, RankEntry};
use fitness_league::scoring::{aggregate, ScoringRules};
use std::collections::HashSet;

/// A season's worth of entries for a ten-person roster.
fn synthetic_entries() -> Vec<Entry> {
    let start = NaiveDate::from_ymd_opt(2025, 10, 25).unwrap();
    let mut entries = Vec::new();
    for user in 0..10u32 {
        for day in 0..80u64 {
            let date = start + chrono::Days::new(day);
            let rest = (day + u64::from(user)) % 7 == 0;
            entries.push(Entry {
                user_id: format!("user-{user}"),
                team_id: Some("team-1".to_string()),
                date,
                kind: if rest { EntryKind::Rest } else { EntryKind::Workout },
                activity: if rest { None } else { Some(ActivityType::Steps) },
                duration_min: None,
                distance_km: None,
                steps: if rest { None } else { Some(10_000 + user * 500) },
                holes: None,
                rr_value: 1.0 + (user as f64) * 0.05,
                status: EntryStatus::Approved,
                proof_url: None,
            });
        }
    }
    entries
}

fn benchmark_aggregate(c: &mut Criterion) {
    let entries = synthetic_entries();
    let seniors: HashSet<String> = ["user-7".to_string()].into_iter().collect();
    let rules = ScoringRules::default();

    c.bench_function("aggregate_season_team", |b| {
        b.iter(|| aggregate(black_box(&entries), &seniors, &rules))
    });
}

fn benchmark_rank(c: &mut Criterion) {
    let cohort: Vec<RankEntry> = (0..500)
        .map(|i| RankEntry {
            entity_id: format!("user-{i}"),
            entity_name: format!("Member {i}"),
            points: i64::from(i % 60),
            avg_rr: 1.0 + f64::from(i % 15) / 10.0,
        })
        .collect();
    let previous = cohort.clone();

    c.bench_function("rank_500_with_deltas", |b| {
        b.iter(|| rank(black_box(cohort.clone()), Some(previous.clone())))
    });
}

criterion_group!(benches, benchmark_aggregate, benchmark_rank);
criterion_main!(benches);
