mod driver;
mod loader;

pub use driver::DriverError;
pub use loader::LoaderError;
