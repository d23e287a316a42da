//! Version command implementation.

use plantel_authz::{Action, Role};

/// Version information for the CLI.
const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

pub fn run() {
    println!("{NAME} {VERSION}");
    println!();
    println!("Access rules for the personnel dashboard.");
    println!();
    println!("Build info:");
    println!("  Roles:   {}", Role::ALL.len());
    println!("  Actions: {}", Action::ALL.len());
    println!("  Target:  {}", std::env::consts::ARCH);
    println!("  OS:      {}", std::env::consts::OS);
}
