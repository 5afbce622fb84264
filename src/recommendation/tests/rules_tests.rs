//! Unit tests pinning the analysis rules' keyword tiers and precedence.

use crate::board::domain::{BoardId, Card, List};
use crate::recommendation::domain::RecommendationPriority;
use crate::recommendation::rules::{analyze_due_date, analyze_list_move, find_related_cards};
use rstest::rstest;

// ============================================================================
// Due-date tiers
// ============================================================================

#[rstest]
#[case("urgent")]
#[case("asap")]
#[case("immediately")]
#[case("critical")]
#[case("emergency")]
#[case("deadline")]
fn urgent_tier_suggests_one_day_high(#[case] keyword: &str) {
    let title = format!("Fix login bug {keyword}");
    let signal = analyze_due_date(&title, None).expect("tier should match");
    assert_eq!(signal.offset_days, 1);
    assert_eq!(signal.priority, RecommendationPriority::High);
}

#[rstest]
#[case("soon")]
#[case("quickly")]
#[case("fast")]
#[case("high priority")]
#[case("important")]
fn high_tier_suggests_three_days_medium(#[case] keyword: &str) {
    let title = format!("Review design {keyword}");
    let signal = analyze_due_date(&title, None).expect("tier should match");
    assert_eq!(signal.offset_days, 3);
    assert_eq!(signal.priority, RecommendationPriority::Medium);
}

#[rstest]
#[case("finish tomorrow", 1, RecommendationPriority::High)]
#[case("ship today", 0, RecommendationPriority::High)]
#[case("plan for next week", 7, RecommendationPriority::Low)]
#[case("roadmap for next month", 30, RecommendationPriority::Low)]
fn literal_tiers_match_relative_wording(
    #[case] title: &str,
    #[case] offset_days: i64,
    #[case] priority: RecommendationPriority,
) {
    let signal = analyze_due_date(title, None).expect("tier should match");
    assert_eq!(signal.offset_days, offset_days);
    assert_eq!(signal.priority, priority);
}

#[rstest]
fn urgent_tier_outranks_later_tiers() {
    // "urgent" and "next week" both present: first tier wins.
    let signal =
        analyze_due_date("urgent prep for next week", None).expect("tier should match");
    assert_eq!(signal.offset_days, 1);
    assert_eq!(signal.priority, RecommendationPriority::High);
}

#[rstest]
fn high_tier_outranks_literal_tiers() {
    let signal = analyze_due_date("important: plan next month", None).expect("tier should match");
    assert_eq!(signal.offset_days, 3);
    assert_eq!(signal.priority, RecommendationPriority::Medium);
}

#[rstest]
fn description_contributes_to_the_scan() {
    let signal = analyze_due_date("Fix login bug", Some("customer says this is urgent"))
        .expect("tier should match");
    assert_eq!(signal.offset_days, 1);
}

#[rstest]
fn matching_is_case_insensitive() {
    let signal = analyze_due_date("Fix login bug ASAP", None).expect("tier should match");
    assert_eq!(signal.offset_days, 1);
    assert_eq!(signal.priority, RecommendationPriority::High);
}

#[rstest]
fn neutral_text_yields_no_due_date_signal() {
    assert!(analyze_due_date("Refactor the parser", None).is_none());
}

// ============================================================================
// List-move
// ============================================================================

fn workflow_lists(board_id: BoardId) -> Vec<List> {
    vec![
        List::new(board_id, "To Do", 0),
        List::new(board_id, "In Progress", 1),
        List::new(board_id, "Done", 2),
    ]
}

fn list_at(lists: &[List], index: usize) -> &List {
    lists.get(index).expect("list index in range")
}

#[rstest]
#[case("done")]
#[case("completed")]
#[case("finished")]
#[case("ready")]
#[case("deployed")]
fn completion_wording_targets_done_list(#[case] keyword: &str) {
    let lists = workflow_lists(BoardId::new());
    let title = format!("report is {keyword}");

    let signal = analyze_list_move(&title, None, list_at(&lists, 0), &lists)
        .expect("completion signal should fire");

    assert_eq!(signal.target_list_id, list_at(&lists, 2).id);
    assert_eq!(signal.priority, RecommendationPriority::High);
    assert!(signal.suggestion.contains("Done"));
}

#[rstest]
#[case("started")]
#[case("in progress")]
#[case("working on")]
#[case("begun")]
#[case("underway")]
fn in_progress_wording_targets_progress_list(#[case] keyword: &str) {
    let lists = workflow_lists(BoardId::new());
    let title = format!("{keyword} the migration");

    let signal = analyze_list_move(&title, None, list_at(&lists, 0), &lists)
        .expect("in-progress signal should fire");

    assert_eq!(signal.target_list_id, list_at(&lists, 1).id);
    assert_eq!(signal.priority, RecommendationPriority::Medium);
}

#[rstest]
fn in_progress_check_runs_before_completion_check() {
    let lists = workflow_lists(BoardId::new());

    let signal = analyze_list_move("started and finished", None, list_at(&lists, 0), &lists)
        .expect("one signal should fire");

    assert_eq!(signal.target_list_id, list_at(&lists, 1).id);
    assert_eq!(signal.priority, RecommendationPriority::Medium);
}

#[rstest]
fn card_already_in_progress_list_is_not_moved_there() {
    let lists = workflow_lists(BoardId::new());

    let signal = analyze_list_move("started the migration", None, list_at(&lists, 1), &lists);

    assert!(signal.is_none());
}

#[rstest]
fn card_already_in_done_list_is_not_moved_there() {
    let lists = workflow_lists(BoardId::new());

    let signal = analyze_list_move("finished the report", None, list_at(&lists, 2), &lists);

    assert!(signal.is_none());
}

#[rstest]
fn no_signal_without_a_matching_sibling() {
    let board_id = BoardId::new();
    let lists = vec![
        List::new(board_id, "Backlog", 0),
        List::new(board_id, "Someday", 1),
    ];

    let signal = analyze_list_move("finished the report", None, list_at(&lists, 0), &lists);

    assert!(signal.is_none());
}

#[rstest]
fn first_matching_sibling_wins_even_when_it_is_the_current_list() {
    // The scan takes the first title containing "progress"/"doing"; when
    // that is the card's own list, no move is suggested even though a
    // later sibling would qualify.
    let board_id = BoardId::new();
    let lists = vec![
        List::new(board_id, "Team Progress", 0),
        List::new(board_id, "Doing", 1),
    ];

    let signal = analyze_list_move("started the migration", None, list_at(&lists, 0), &lists);

    assert!(signal.is_none());
}

// ============================================================================
// Related cards
// ============================================================================

fn card(list: &List, title: &str, position: u32) -> Card {
    Card::new(list.id, title, position)
}

#[rstest]
fn cards_sharing_keywords_relate_to_each_other() {
    let list = List::new(BoardId::new(), "To Do", 0);
    let first = card(&list, "database migration schema plan", 0);
    let second = card(&list, "review database migration schema", 1);
    let all = vec![first.clone(), second.clone()];

    let related_to_first = find_related_cards(&first, &all);
    let related_to_second = find_related_cards(&second, &all);

    assert_eq!(related_to_first.len(), 1);
    assert_eq!(
        related_to_first.first().map(|c| c.id),
        Some(second.id)
    );
    assert_eq!(
        related_to_second.first().map(|c| c.id),
        Some(first.id)
    );
}

#[rstest]
fn unrelated_cards_yield_nothing() {
    let list = List::new(BoardId::new(), "To Do", 0);
    let first = card(&list, "database migration schema", 0);
    let second = card(&list, "yearly offsite planning", 1);
    let all = vec![first.clone(), second];

    assert!(find_related_cards(&first, &all).is_empty());
}

#[rstest]
fn results_are_sorted_by_overlap_and_capped_at_three() {
    let list = List::new(BoardId::new(), "To Do", 0);
    let subject = card(&list, "database migration schema rollback", 0);
    let one_match = card(&list, "database cleanup", 1);
    let three_matches = card(&list, "database migration schema review", 2);
    let two_matches = card(&list, "migration schema notes", 3);
    let also_one_match = card(&list, "rollback drill", 4);
    let all = vec![
        subject.clone(),
        one_match.clone(),
        three_matches.clone(),
        two_matches.clone(),
        also_one_match,
    ];

    let related = find_related_cards(&subject, &all);

    let related_ids: Vec<_> = related.iter().map(|c| c.id).collect();
    assert_eq!(
        related_ids,
        vec![three_matches.id, two_matches.id, one_match.id]
    );
}

#[rstest]
fn ties_preserve_scan_order() {
    let list = List::new(BoardId::new(), "To Do", 0);
    let subject = card(&list, "database migration", 0);
    let first_tie = card(&list, "database notes", 1);
    let second_tie = card(&list, "database drill", 2);
    let all = vec![subject.clone(), first_tie.clone(), second_tie.clone()];

    let related = find_related_cards(&subject, &all);

    let related_ids: Vec<_> = related.iter().map(|c| c.id).collect();
    assert_eq!(related_ids, vec![first_tie.id, second_tie.id]);
}
