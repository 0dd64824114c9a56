//! Macro groups
//!
//! One resource per Audacity menu. Each is a thin borrow of the [`Client`]
//! obtained from an accessor such as [`Client::effect`], with one method per
//! macro.

use crate::client::Client;

/// Methods that send a macro without arguments.
macro_rules! bare_macros {
    ($( $(#[$meta:meta])* $method:ident => $name:literal; )+) => {
        $(
            $(#[$meta])*
            #[doc = concat!("\n\nSends `", $name, "`.")]
            pub async fn $method(&self) -> $crate::error::Result<String> {
                self.client
                    .execute(&::turboaudacity_protocol::Command::new($name))
                    .await
            }
        )+
    };
}

/// Methods for macros that cannot be driven reliably yet.
///
/// They fail with [`Error::Unimplemented`](crate::Error::Unimplemented)
/// without touching the pipes.
macro_rules! unimplemented_macros {
    ($( $(#[$meta:meta])* $method:ident => $name:literal; )+) => {
        $(
            $(#[$meta])*
            #[doc = concat!("\n\n`", $name, "` is not supported and always fails with `Error::Unimplemented`.")]
            pub async fn $method(&self) -> $crate::error::Result<String> {
                self.client.unimplemented($name)
            }
        )+
    };
}

/// Resource struct plus its constructor and [`Resource`] impl.
macro_rules! resource {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name<'a> {
            client: &'a $crate::client::Client,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(client: &'a $crate::client::Client) -> Self {
                Self { client }
            }
        }

        impl $crate::resources::Resource for $name<'_> {
            fn client(&self) -> &$crate::client::Client {
                self.client
            }
        }
    };
}

pub mod analyze;
pub mod edit;
pub mod effect;
pub mod extra;
pub mod file;
pub mod generate;
pub mod help;
pub mod playback;
pub mod scripting;
pub mod select;
pub mod tools;
pub mod tracks;
pub mod view;

pub use analyze::Analyze;
pub use edit::Edit;
pub use effect::Effect;
pub use extra::Extra;
pub use file::File;
pub use generate::Generate;
pub use help::Help;
pub use playback::Playback;
pub use scripting::Scripting;
pub use select::Select;
pub use tools::Tools;
pub use tracks::Tracks;
pub use view::View;

/// Base trait for macro groups.
pub trait Resource {
    /// Get a reference to the client.
    fn client(&self) -> &Client;
}
