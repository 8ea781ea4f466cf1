use boggle::config::{Config, ScoringRules};
use boggle::scoring::{max_score, max_score_parallel, points_for_length, score_report};
use boggle::{BoggleBoard, Grid, PathSearch};
use rstest::rstest;

// C A T S
// D O G E
// F O X Y
// B I R D
fn four_by_four() -> Grid {
    Grid::from_lines(["CATS", "DOGE", "FOXY", "BIRD"]).unwrap()
}

fn five_by_four() -> Grid {
    Grid::from_lines(["CATS", "DOGE", "FOXY", "BIRD", "QQQQ"]).unwrap()
}

fn score(grid: &mut Grid, words: &[&str]) -> u32 {
    max_score(&PathSearch::default(), grid, words, &ScoringRules::default())
}

#[rstest]
#[case(12, 4, 11)]
#[case(8, 4, 11)]
#[case(8, 5, 11)]
#[case(7, 4, 5)]
#[case(6, 4, 3)]
#[case(5, 4, 2)]
#[case(4, 4, 1)]
#[case(4, 5, 1)] // unconditional
#[case(4, 3, 1)]
#[case(3, 4, 1)]
#[case(3, 5, 0)] // only on 4-row boards
#[case(3, 3, 0)]
#[case(2, 4, 0)]
#[case(1, 4, 0)]
fn test_points_table(#[case] len: usize, #[case] rows: usize, #[case] expected: u32) {
    let rules = ScoringRules::default();
    assert_eq!(
        points_for_length(len, rows, &rules),
        expected,
        "len {} on {} rows",
        len,
        rows
    );
}

#[test]
fn test_three_letter_word_depends_on_row_count() {
    assert_eq!(score(&mut four_by_four(), &["CAT"]), 1);
    assert_eq!(score(&mut five_by_four(), &["CAT"]), 0);
}

#[test]
fn test_four_letter_word_scores_on_any_board() {
    assert_eq!(score(&mut four_by_four(), &["CATS"]), 1);
    assert_eq!(score(&mut five_by_four(), &["CATS"]), 1);
}

#[rstest]
#[case("CATSE", 2)]
#[case("CATSEG", 3)]
#[case("CATSEGO", 5)]
#[case("CATSEGOD", 11)] // snake through the top two rows
#[case("CATSEGODFOXYDRIB", 11)] // every cell
fn test_long_words(#[case] word: &str, #[case] expected: u32) {
    assert_eq!(score(&mut four_by_four(), &[word]), expected);
    assert_eq!(score(&mut five_by_four(), &[word]), expected);
}

#[test]
fn test_absent_words_contribute_nothing() {
    let mut grid = four_by_four();
    assert_eq!(score(&mut grid, &["ZEBRA", "CAB", "", "QQ"]), 0);
    assert_eq!(score(&mut grid, &[]), 0);
}

#[test]
fn test_total_sums_found_words() {
    let mut grid = four_by_four();
    // CAT 1 + DOG 1 + CATS 1 + BIRD 1 + CATSEGOD 11, ZEBRA absent
    let words = ["CAT", "DOG", "CATS", "BIRD", "CATSEGOD", "ZEBRA"];
    assert_eq!(score(&mut grid, &words), 15);
}

#[test]
fn test_total_is_order_independent() {
    let words = vec!["CAT", "DOG", "CATS", "BIRD", "CATSEGOD", "ZEBRA", "FOX", "SEGO"];
    let mut grid = four_by_four();
    let forward = score(&mut grid, &words);

    let mut reversed = words.clone();
    reversed.reverse();
    assert_eq!(score(&mut grid, &reversed), forward);

    let mut rotated = words.clone();
    rotated.rotate_left(3);
    assert_eq!(score(&mut grid, &rotated), forward);
}

#[test]
fn test_parallel_matches_sequential() {
    let words: Vec<String> = ["CAT", "DOG", "CATS", "BIRD", "CATSEGOD", "ZEBRA", "FOX", "XI"]
        .iter()
        .cycle()
        .take(400)
        .map(|s| s.to_string())
        .collect();

    let searcher = PathSearch::default();
    let rules = ScoringRules::default();
    let mut grid = four_by_four();

    let sequential = max_score(&searcher, &mut grid, &words, &rules);
    let parallel = max_score_parallel(&searcher, &grid, &words, &rules);
    assert_eq!(parallel, sequential);
}

#[test]
fn test_report_matches_total() {
    let mut grid = four_by_four();
    let words = ["CAT", "ZEBRA", "CATSEGO"];
    let report = score_report(&PathSearch::default(), &mut grid, &words, &ScoringRules::default());

    assert_eq!(report.total, 6);
    assert_eq!(report.found_count(), 2);
    assert_eq!(report.words.len(), 3);
    assert_eq!(report.words[1].word, "ZEBRA");
    assert!(!report.words[1].found);
    assert_eq!(report.words[1].points, 0);
    assert_eq!(report.words[2].points, 5);
}

#[test]
fn test_scoring_leaves_board_unchanged() {
    let mut grid = four_by_four();
    let before = grid.render();
    score(&mut grid, &["CAT", "ZEBRA", "CATSEGODFOXYDRIB", "TACT"]);
    assert_eq!(grid.render(), before);
}

#[test]
fn test_custom_rules() {
    let rules = ScoringRules {
        points_four: 10,
        three_letter_rows: 5,
        ..Default::default()
    };
    let searcher = PathSearch::default();
    assert_eq!(max_score(&searcher, &mut five_by_four(), &["CAT", "CATS"], &rules), 11);
    assert_eq!(max_score(&searcher, &mut four_by_four(), &["CAT", "CATS"], &rules), 10);
}

#[test]
fn test_board_facade() {
    let mut board = BoggleBoard::new(four_by_four(), Config::default());
    assert!(board.search("FOXY"));
    assert!(!board.search("ZEBRA"));
    assert_eq!(board.max_score(&["CAT", "FOXY"]), 2);
    assert_eq!(board.max_score_parallel(&["CAT", "FOXY"]), 2);
    assert_eq!(board.render(), "C A T S \nD O G E \nF O X Y \nB I R D \n");
}
