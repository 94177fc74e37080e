pub mod loc_guard;
pub mod preflight;
