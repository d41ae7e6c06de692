use arteriole::flags::Flags;
use arteriole::shell::Shell;
use std::env;

fn main() -> Result<(), arteriole::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("Arteriole {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if !flags.is_set("quiet") {
        println!(
            "Arteriole {} -- arrow keys browse history, `set $name=value` defines variables",
            env!("CARGO_PKG_VERSION")
        );
    }

    let mut shell = Shell::new()?;
    shell.run()
}
