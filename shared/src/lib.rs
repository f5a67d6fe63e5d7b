pub mod drawer;
pub mod matching;
pub mod model;
pub mod nav_link;
pub mod navigator;
pub mod route;
