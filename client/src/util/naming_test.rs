use super::*;

// =============================================================
// pad_two
// =============================================================

#[test]
fn pad_two_pads_single_digits() {
    assert_eq!(pad_two("1"), "01");
    assert_eq!(pad_two("9"), "09");
}

#[test]
fn pad_two_normalizes_existing_padding() {
    assert_eq!(pad_two("01"), "01");
    assert_eq!(pad_two("007"), "07");
}

#[test]
fn pad_two_keeps_wide_numbers() {
    assert_eq!(pad_two("12"), "12");
    assert_eq!(pad_two("123"), "123");
}

#[test]
fn pad_two_stops_at_first_non_digit() {
    assert_eq!(pad_two(" 3 "), "03");
    assert_eq!(pad_two("4b"), "04");
}

#[test]
fn pad_two_returns_non_numeric_input_unchanged() {
    assert_eq!(pad_two("special"), "special");
    assert_eq!(pad_two(""), "");
}

// =============================================================
// Templates
// =============================================================

#[test]
fn movie_filename_includes_year_in_parens() {
    assert_eq!(movie_filename("Heat", "1995", "mkv"), "Heat (1995).mkv");
}

#[test]
fn tv_filename_with_episode_title() {
    assert_eq!(
        tv_filename("Lost", "1", "2", "Pilot (Part 2)", "mkv"),
        "Lost - S01E02 - Pilot (Part 2).mkv"
    );
}

#[test]
fn tv_filename_drops_empty_episode_title() {
    assert_eq!(tv_filename("Lost", "01", "02", "", "mp4"), "Lost - S01E02.mp4");
}

#[test]
fn music_filename_joins_artist_and_title() {
    assert_eq!(music_filename("Daft Punk", "One More Time", "flac"), "Daft Punk - One More Time.flac");
}

#[test]
fn empty_extension_omits_trailing_dot() {
    assert_eq!(movie_filename("Heat", "1995", ""), "Heat (1995)");
}

#[test]
fn proposed_name_dispatches_on_target() {
    let target = RenameTarget::Tv {
        show_name: "Fargo".to_owned(),
        season: "3".to_owned(),
        episode: "10".to_owned(),
        episode_title: String::new(),
    };
    assert_eq!(proposed_name(&target, "mkv"), "Fargo - S03E10.mkv");

    let target = RenameTarget::Music { artist: "A".to_owned(), title: "B".to_owned() };
    assert_eq!(proposed_name(&target, "mp3"), "A - B.mp3");
}
