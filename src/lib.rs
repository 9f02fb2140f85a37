pub mod constants;
pub mod kepler;
pub mod orbital_elements;
pub mod orrery_errors;
pub mod planets;
pub mod ref_frame;
pub mod time;
