pub mod leaderboard;
pub mod menu;
pub mod name_dialog;
pub mod progress_bar;
pub mod results;
pub mod stats_bar;
pub mod word_stream;
