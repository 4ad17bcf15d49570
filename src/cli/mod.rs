mod context;
mod flags;
pub mod prompts;
pub mod quiet;

pub use context::Context;
pub use flags::CliFlags;

use crate::error::Result;

/// Run one non-interactive invocation.
pub fn run(flags: CliFlags) -> Result<()> {
    Context::new(flags).run()
}
