pub mod core;
pub mod countdown;
pub mod frame;
pub mod frame_color;
pub mod interpret_effect;
pub mod main;
pub mod render;
pub mod run;
