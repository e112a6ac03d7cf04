//! UI components: the particle field backdrop and the page sections.

pub mod particle_field;
pub mod sections;
