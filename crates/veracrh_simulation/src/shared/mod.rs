//! Shared domain: cross-cutting helpers
//!
//! - planar: плоская геометрия (flatten, look rotation, slerp-поворот)
//! - collaborators: внешние сервисы (spawner, сцены, счётчик волны)

pub mod collaborators;
pub mod planar;

#[cfg(test)]
mod planar_tests;

pub use collaborators::*;
pub use planar::*;
