mod diagnostics;
mod handler;
mod mode;
mod props;
mod reducer;
mod scope;
mod toggle;

pub use diagnostics::*;
pub use handler::*;
pub use mode::*;
pub use props::*;
pub use reducer::*;
pub use scope::*;
pub use toggle::*;

#[cfg(test)]
mod tests_readme;
