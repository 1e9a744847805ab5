// src/gui/components/mod.rs
pub mod banner;
pub mod chart_view;
pub mod data_table;
pub mod filter_sidebar;
pub mod results_bar;
