//! Fixed ASCII canvas of the continental US.
//!
//! The art is a plain outline with no embedded state labels; game markers are
//! spliced over it by the layout engine. Toronto hangs off the upper-right
//! edge, which is close enough for a character grid.

/// Canvas width in character cells.
pub const MAP_WIDTH: usize = 76;

/// Canvas height in rows.
pub const MAP_HEIGHT: usize = 22;

const US_OUTLINE: &str = r#"
  ._..__
 ,'     `--..___________________________________________          ___
 |                                                      `--..__ ,'   `._
 |                                                             `|       `.
 |                                                               \    _,-'
 |                                                               ,`--'(
 (                                                              /      \
  \                                                             \      ,'
  |                                                              |    /
  |                                                              `.   \
   \                                                        ,-----'    \
   |                                                        \           \
   `.                                                        |           |
     \                                    __                 `.          |
      |                     ______,.----''  `----.            |         ,'
      `------.____,.---'''''                      \           /      _,'
              \                                    |      ,--'  ,--./
               \                                   `.    /     /    `._
                `.                                  \    |    |        \
                  \      ,-._                        |   `.    \     ,-'
                   `----'    \__                     `._   \    `._,-'
                                `--._                   `---'
"#;

/// The map as a vector of rows, each padded or clipped to [`MAP_WIDTH`].
pub fn map_lines() -> Vec<String> {
    US_OUTLINE
        .lines()
        .skip(1)
        .take(MAP_HEIGHT)
        .map(|line| {
            let mut chars: Vec<char> = line.chars().take(MAP_WIDTH).collect();
            chars.resize(MAP_WIDTH, ' ');
            chars.into_iter().collect()
        })
        .collect()
}
