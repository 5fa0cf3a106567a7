//! Snapshot tests for scoreboard rendering and serialized output.

use insta::{assert_json_snapshot, assert_snapshot};
use lanekeep_score::{PlayerStats, Scorecard, scoreboard_lines};

#[test]
fn scoreboard_of_mixed_game() {
    let card = Scorecard::from_throws(&[10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1])
        .expect("throws fit");

    let (marks, totals) = scoreboard_lines(&card);

    assert_snapshot!(marks, @"|X |7 /|9 0|X |0 8|8 /|0 6| X | X |X 8 1|");
    assert_snapshot!(totals, @"|20|39 |48 |66|74 |84 |90 |120|148| 167 |");
}

#[test]
fn scoreboard_of_fresh_game() {
    let (marks, totals) = scoreboard_lines(&Scorecard::new());

    assert_snapshot!(marks, @"|- -|- -|- -|- -|- -|- -|- -|- -|- -|- - -|");
    assert_snapshot!(totals, @"| - | - | - | - | - | - | - | - | - |  -  |");
}

#[test]
fn scored_last_frame_of_perfect_game() {
    let card = Scorecard::from_throws(&[10; 12]).expect("twelve strikes");

    assert_json_snapshot!(card.frames()[9], @r#"
    {
      "frameNumber": 10,
      "firstThrow": 10,
      "secondThrow": 10,
      "thirdThrow": 10,
      "isStrike": true,
      "isSpare": false,
      "frameScore": 30,
      "cumulativeScore": 300
    }
    "#);
}

#[test]
fn player_stats_document() {
    let stats = PlayerStats::from_totals(&[150, 201, 99]);

    assert_json_snapshot!(stats, @r#"
    {
      "totalGames": 3,
      "averageScore": 150,
      "highScore": 201,
      "lowScore": 99
    }
    "#);
}
