use labyrinth::{Error, Map, Position};

fn corridor() -> Map {
    Map::from_lines(&["#####", "#   #", "### A", "#####"]).unwrap()
}

fn sealed_room() -> Map {
    Map::from_lines(&["####", "#  #", "#  #", "####"]).unwrap()
}

fn diamond() -> Map {
    Map::from_lines(&["#####", "#   #", "# # #", "#   #", "##A##"]).unwrap()
}

#[test]
fn adjacent_exit_is_reachable() {
    let mut map = Map::from_lines(&["####", "# A#", "####"]).unwrap();

    assert!(map.path_exists(&Position::new(1, 1)));
}

#[test]
fn walled_off_exit_is_unreachable() {
    let mut map = Map::from_lines(&["#####", "# #A#", "#####"]).unwrap();

    assert!(!map.path_exists(&Position::new(1, 1)));
}

#[test]
fn corridor_has_single_path() {
    let mut map = corridor();
    let start = Position::new(1, 1);

    assert!(map.path_exists(&start));
    assert_eq!(map.count_paths(&start), 1);
}

#[test]
fn sealed_room_has_no_path() {
    let mut map = sealed_room();
    let start = Position::new(1, 1);

    assert!(!map.path_exists(&start));
    assert_eq!(map.count_paths(&start), 0);
}

#[test]
fn diamond_has_two_paths() {
    let mut map = diamond();

    assert_eq!(map.count_paths(&Position::new(1, 2)), 2);
}

#[test]
fn traversal_restores_map() {
    let mut map = diamond();
    let start = Position::new(1, 2);
    let before = map.to_string();

    map.path_exists(&start);
    assert_eq!(map.to_string(), before);

    map.count_paths(&start);
    assert_eq!(map.to_string(), before);
}

#[test]
fn count_is_zero_exactly_when_no_path_exists() {
    for mut map in [corridor(), sealed_room(), diamond()] {
        let start = Position::new(1, 1);

        assert_eq!(map.path_exists(&start), map.count_paths(&start) > 0);
    }
}

#[test]
fn wall_start_is_a_dead_end() {
    let mut map = corridor();
    let start = Position::new(0, 0);

    assert!(!map.path_exists(&start));
    assert_eq!(map.count_paths(&start), 0);
}

#[test]
fn rendering_matches_input() {
    let map = corridor();

    assert_eq!(map.to_string(), "#####\n#   #\n### A\n#####\n");
}

#[test]
fn invalid_char_is_rejected() {
    assert!(matches!(
        Map::from_lines(&["###", "#x#", "###"]),
        Err(Error::InvalidCharForMap('x'))
    ));
}

#[test]
fn ragged_rows_are_rejected() {
    assert!(matches!(
        Map::from_lines(&["####", "###"]),
        Err(Error::InconsistentRow(4, 3))
    ));
}
