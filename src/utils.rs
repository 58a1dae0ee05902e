pub mod io;
pub mod paths;
