pub mod interactive;
pub mod report;
pub mod util;
