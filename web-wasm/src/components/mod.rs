pub mod challenges;
pub mod header;
pub mod inspection_demo;
pub mod progress_bar;
pub mod proposal;
pub mod tab_bar;
pub mod toast;
