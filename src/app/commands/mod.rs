pub mod compose;
pub mod credential;
pub mod labels;
pub mod roster;
