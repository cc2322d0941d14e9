use crate::domain::model::{DepthCategory, CATEGORY_TABLE};

/// Maps a depth in kilometres to an index into [`CATEGORY_TABLE`].
///
/// Every band is exclusive at its lower bound, so a depth of exactly 10
/// stays in band 0 and exactly 90 stays in band 4. NaN fails every
/// comparison and lands in band 0.
pub fn classify(depth: f64) -> usize {
    if depth > 90.0 {
        5
    } else if depth > 70.0 {
        4
    } else if depth > 50.0 {
        3
    } else if depth > 30.0 {
        2
    } else if depth > 10.0 {
        1
    } else {
        0
    }
}

pub fn category_for(depth: f64) -> &'static DepthCategory {
    &CATEGORY_TABLE[classify(depth)]
}

pub fn depth_color(depth: f64) -> &'static str {
    category_for(depth).color
}
