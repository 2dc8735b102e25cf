pub mod actions;
pub mod build;
pub mod config;
pub mod harness;
pub mod placement;
pub mod state;
pub mod validation;
pub mod viewport {
    pub mod mesh;
    pub mod picking;
}
