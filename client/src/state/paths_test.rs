use super::*;

#[test]
fn default_path_is_one_of_the_learning_paths() {
    assert!(learning_paths().contains(&DEFAULT_PATH));
}
