//! Command implementations, one per subcommand.

mod convert;
mod formats;
mod get_key;

pub use convert::ConvertCommand;
pub use formats::FormatsCommand;
pub use get_key::GetKeyCommand;
