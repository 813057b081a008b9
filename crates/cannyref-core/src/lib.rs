pub mod error;
pub mod consts;
pub mod grid;
pub mod pad;
pub mod stages;
pub mod pipeline;
pub mod compare;
pub mod io;
