//! Unit tests for performance filtering

use super::*;
use crate::stats::test_support::*;

fn sample_matches() -> Vec<Match> {
    vec![
        in_tournament(
            fixture(
                3,
                "2024-05-10",
                "T20",
                vec![batting(ASHA, 3, 30, 20, true), batting(KIRAN, 3, 5, 4, true)],
            ),
            100,
        ),
        fixture(1, "2023-04-01", "ODI", vec![batting(ASHA, 1, 10, 12, false)]),
        fixture(2, "2024-01-15", "T20", vec![batting(KIRAN, 2, 60, 40, true)]),
        fixture(4, "2024-01-15", "T20", vec![batting(ASHA, 4, 7, 9, true)]),
    ]
}

fn tournaments() -> Vec<Tournament> {
    vec![tournament(100, "Summer Cup"), tournament(200, "Winter Shield")]
}

fn match_ids(performances: &[MatchPerformance]) -> Vec<u64> {
    performances.iter().map(|p| p.match_id().as_u64()).collect()
}

#[test]
fn test_career_filter_sorts_by_date() {
    let selected =
        filter_performances(ASHA, &sample_matches(), &tournaments(), &StatsFilter::career());
    assert_eq!(match_ids(&selected), vec![1, 4, 3]);
}

#[test]
fn test_player_performances_keep_match_order() {
    let all = player_performances(ASHA, &sample_matches());
    assert_eq!(match_ids(&all), vec![3, 1, 4]);
    assert_eq!(all[0].tournament_id, Some(TournamentId::new(100)));
    assert_eq!(all[0].format, "T20");
    assert_eq!(all[0].date, "2024-05-10");
}

#[test]
fn test_format_filter_is_exact() {
    let matches = sample_matches();
    let t20 = filter_performances(ASHA, &matches, &tournaments(), &StatsFilter::career().with_format("T20"));
    assert_eq!(match_ids(&t20), vec![4, 3]);

    let lower = filter_performances(ASHA, &matches, &tournaments(), &StatsFilter::career().with_format("t20"));
    assert!(lower.is_empty());
}

#[test]
fn test_year_filter() {
    let selected = filter_performances(
        ASHA,
        &sample_matches(),
        &tournaments(),
        &StatsFilter::career().with_year(Year::new(2023)),
    );
    assert_eq!(match_ids(&selected), vec![1]);
}

#[test]
fn test_tournament_filter_resolves_by_name() {
    let selected = filter_performances(
        ASHA,
        &sample_matches(),
        &tournaments(),
        &StatsFilter::career().with_tournament("Summer Cup"),
    );
    assert_eq!(match_ids(&selected), vec![3]);
}

#[test]
fn test_unknown_tournament_selects_nothing() {
    let selected = filter_performances(
        ASHA,
        &sample_matches(),
        &tournaments(),
        &StatsFilter::career().with_tournament("Autumn Trophy"),
    );
    assert!(selected.is_empty());
}

#[test]
fn test_known_tournament_without_matches_selects_nothing() {
    let selected = filter_performances(
        ASHA,
        &sample_matches(),
        &tournaments(),
        &StatsFilter::career().with_tournament("Winter Shield"),
    );
    assert!(selected.is_empty());
}

#[test]
fn test_filters_compose_conjunctively() {
    let filter = StatsFilter::career()
        .with_format("T20")
        .with_year(Year::new(2024))
        .with_tournament("Summer Cup");
    let selected = filter_performances(ASHA, &sample_matches(), &tournaments(), &filter);
    assert_eq!(match_ids(&selected), vec![3]);

    let filter = StatsFilter::career().with_format("ODI").with_year(Year::new(2024));
    assert!(filter_performances(ASHA, &sample_matches(), &tournaments(), &filter).is_empty());
}

#[test]
fn test_same_date_keeps_list_order() {
    let matches = vec![
        fixture(8, "2024-01-01", "T20", vec![batting(ASHA, 8, 1, 1, true)]),
        fixture(5, "2024-01-01", "T20", vec![batting(ASHA, 5, 2, 2, true)]),
        fixture(9, "2024-01-01", "T20", vec![batting(ASHA, 9, 3, 3, true)]),
    ];
    let selected = filter_performances(ASHA, &matches, &[], &StatsFilter::career());
    assert_eq!(match_ids(&selected), vec![8, 5, 9]);
}

#[test]
fn test_undated_matches_sort_first_and_skip_year_filter() {
    let matches = vec![
        fixture(1, "2024-01-01", "T20", vec![batting(ASHA, 1, 1, 1, true)]),
        fixture(2, "", "T20", vec![batting(ASHA, 2, 2, 2, true)]),
    ];
    let career = filter_performances(ASHA, &matches, &[], &StatsFilter::career());
    assert_eq!(match_ids(&career), vec![2, 1]);

    let year = filter_performances(ASHA, &matches, &[], &StatsFilter::career().with_year(Year::new(2024)));
    assert_eq!(match_ids(&year), vec![1]);
}

#[test]
fn test_empty_strings_are_no_constraint() {
    let filter = StatsFilter::new(Some(String::new()), None, Some(String::new()));
    assert!(filter.is_career());
    assert_eq!(filter, StatsFilter::career());
}

#[test]
fn test_match_performance_serializes_flat() {
    let selected = player_performances(ASHA, &sample_matches());
    let json = serde_json::to_value(&selected[0]).unwrap();
    assert_eq!(json["playerId"], 1);
    assert_eq!(json["matchId"], 3);
    assert_eq!(json["runs"], 30);
    assert_eq!(json["format"], "T20");
    assert_eq!(json["tournamentId"], 100);
}
